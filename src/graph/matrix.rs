//! Flattened adjacency matrix storage.
//!
//! [`AdjacencyMatrix`] keeps the `n × n` edge relation of a graph in a single row-major
//! buffer, so cell `(i, j)` lives at `cells[i * n + j]`. The matrix never resizes in place:
//! growing or shrinking it produces a complete new matrix through [`AdjacencyMatrix::grown`] or
//! [`AdjacencyMatrix::without`], leaving the original untouched if allocation fails. The
//! graph commits the replacement only once it has been built successfully.

use tracing::debug;

use crate::{Error, Result};

/// Square boolean matrix stored row-major in one buffer.
///
/// An order-0 matrix owns no storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AdjacencyMatrix {
    /// Row-major cells, `order * order` entries
    cells: Vec<bool>,
    /// Number of rows (and columns)
    order: usize,
}

impl AdjacencyMatrix {
    /// Creates an empty order-0 matrix.
    #[must_use]
    pub(crate) const fn new() -> Self {
        AdjacencyMatrix {
            cells: Vec::new(),
            order: 0,
        }
    }

    /// Creates an `order × order` matrix with every cell cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] if `order * order` does not fit in `usize`, or
    /// [`Error::Allocation`] if the buffer cannot be reserved.
    pub(crate) fn with_order(order: usize) -> Result<Self> {
        let len = Self::cell_count(order)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).inspect_err(|_| {
            debug!(order, cells = len, "adjacency matrix allocation failed");
        })?;
        cells.resize(len, false);

        Ok(AdjacencyMatrix { cells, order })
    }

    /// Returns a copy of this matrix with one extra, edge-free row and column.
    ///
    /// Every existing cell keeps its value. The new node occupies the last index.
    ///
    /// # Errors
    ///
    /// Same as [`with_order`](Self::with_order).
    pub(crate) fn grown(&self) -> Result<Self> {
        let order = self
            .order
            .checked_add(1)
            .ok_or(Error::CapacityOverflow { nodes: self.order })?;

        let mut grown = Self::with_order(order)?;
        for (row, cells) in self.rows().enumerate() {
            grown.row_mut(row)[..self.order].copy_from_slice(cells);
        }

        Ok(grown)
    }

    /// Returns a copy of this matrix with row and column `index` removed.
    ///
    /// Rows and columns above `index` shift down by one, matching the node sequence after
    /// the corresponding node has been removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the smaller buffer cannot be reserved.
    pub(crate) fn without(&self, index: usize) -> Result<Self> {
        debug_assert!(index < self.order, "row index out of bounds");

        let mut shrunk = Self::with_order(self.order - 1)?;
        let surviving = self
            .rows()
            .enumerate()
            .filter(|&(row, _)| row != index)
            .map(|(_, cells)| cells);

        for (target, cells) in surviving.enumerate() {
            let row = shrunk.row_mut(target);
            row[..index].copy_from_slice(&cells[..index]);
            row[index..].copy_from_slice(&cells[index + 1..]);
        }

        Ok(shrunk)
    }

    /// Returns an identical copy, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the buffer cannot be reserved.
    pub(crate) fn try_clone(&self) -> Result<Self> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(self.cells.len())?;
        cells.extend_from_slice(&self.cells);

        Ok(AdjacencyMatrix {
            cells,
            order: self.order,
        })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub(crate) const fn order(&self) -> usize {
        self.order
    }

    /// Returns the value of cell `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub(crate) fn get(&self, row: usize, column: usize) -> bool {
        self.cells[self.offset(row, column)]
    }

    /// Sets cell `(row, column)` and returns its previous value.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub(crate) fn set(&mut self, row: usize, column: usize, value: bool) -> bool {
        let offset = self.offset(row, column);
        std::mem::replace(&mut self.cells[offset], value)
    }

    /// Returns the number of set cells.
    ///
    /// Only used to recount edges after a row and column have been dropped, and as a
    /// consistency check.
    #[must_use]
    pub(crate) fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns the cells of one row.
    #[must_use]
    pub(crate) fn row(&self, row: usize) -> &[bool] {
        let start = row * self.order;
        &self.cells[start..start + self.order]
    }

    /// Returns the cells of one column, top to bottom.
    pub(crate) fn column(&self, column: usize) -> impl Iterator<Item = bool> + '_ {
        assert!(column < self.order, "column index out of bounds");
        self.cells
            .iter()
            .skip(column)
            .step_by(self.order)
            .copied()
    }

    /// Returns an iterator over all rows.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.order.max(1))
    }

    /// Returns the `(row, column)` coordinates of every set cell in row-major order.
    pub(crate) fn set_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let order = self.order;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(move |(offset, _)| (offset / order, offset % order))
    }

    fn row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = row * self.order;
        &mut self.cells[start..start + self.order]
    }

    fn offset(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.order && column < self.order,
            "cell index out of bounds"
        );
        row * self.order + column
    }

    fn cell_count(order: usize) -> Result<usize> {
        order
            .checked_mul(order)
            .ok_or(Error::CapacityOverflow { nodes: order })
    }
}
