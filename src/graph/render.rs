//! Textual adjacency matrix dumps for diagnostics.
//!
//! A dump has one header line listing the node labels, followed by one line per node. Each
//! line starts with the source node's label and then holds one cell per target node, in node
//! index order:
//!
//! ```text
//! 	1	2	3
//! 1	0	1	1
//! 2	0	0	0
//! 3	0	0	1
//! ```
//!
//! The layout is meant for humans reading test failures and logs. It is not a stable
//! serialization format and there is no parser for it. [`MatrixFormat`] controls the
//! separator, the cell glyphs and whether the header is printed.

use std::{fmt, io};

use crate::{graph::DirectedGraph, Result};

/// Layout configuration for adjacency matrix dumps.
///
/// # Examples
///
/// ```rust
/// use digraph::{DirectedGraph, graph::MatrixFormat};
///
/// let mut graph: DirectedGraph<char> = DirectedGraph::new();
/// graph.add_node('a')?;
/// graph.add_node('b')?;
/// graph.add_edge(&'a', &'b')?;
///
/// let format = MatrixFormat::default()
///     .with_separator(" ")
///     .with_glyphs("x", ".")
///     .with_header(false);
///
/// let dump = graph.adjacency().with_format(format).to_string();
/// assert_eq!(dump, "a . x\nb . .");
/// # Ok::<(), digraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFormat {
    /// Text placed before every cell and header label
    separator: String,
    /// Glyph for a present edge
    present: String,
    /// Glyph for an absent edge
    absent: String,
    /// Whether the label header line is printed
    header: bool,
}

impl Default for MatrixFormat {
    /// Tab separated `1`/`0` cells with a header line.
    fn default() -> Self {
        MatrixFormat {
            separator: "\t".to_string(),
            present: "1".to_string(),
            absent: "0".to_string(),
            header: true,
        }
    }
}

impl MatrixFormat {
    /// Sets the text placed before every cell and header label.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the glyphs used for present and absent edges.
    #[must_use]
    pub fn with_glyphs(mut self, present: impl Into<String>, absent: impl Into<String>) -> Self {
        self.present = present.into();
        self.absent = absent.into();
        self
    }

    /// Enables or disables the header line.
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Returns the cell separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns `true` if the header line is printed.
    #[must_use]
    pub fn header(&self) -> bool {
        self.header
    }

    fn glyph(&self, cell: bool) -> &str {
        if cell {
            &self.present
        } else {
            &self.absent
        }
    }
}

/// A [`Display`](fmt::Display) adapter rendering a graph's adjacency matrix.
///
/// Created by [`DirectedGraph::adjacency`]. Rows are source nodes, columns are target nodes.
pub struct MatrixView<'a, T, E> {
    graph: &'a DirectedGraph<T, E>,
    format: MatrixFormat,
}

impl<T, E> MatrixView<'_, T, E> {
    /// Replaces the layout used by this view.
    #[must_use]
    pub fn with_format(mut self, format: MatrixFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the layout used by this view.
    #[must_use]
    pub fn format(&self) -> &MatrixFormat {
        &self.format
    }
}

impl<T: fmt::Display, E> fmt::Display for MatrixView<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.nodes();
        let matrix = self.graph.matrix();
        let separator = self.format.separator();

        let mut first_line = true;
        if self.format.header() {
            for node in nodes {
                write!(f, "{separator}{node}")?;
            }
            first_line = false;
        }

        for (row, node) in nodes.iter().enumerate() {
            if !first_line {
                writeln!(f)?;
            }
            first_line = false;

            write!(f, "{node}")?;
            for &cell in matrix.row(row) {
                write!(f, "{separator}{}", self.format.glyph(cell))?;
            }
        }

        Ok(())
    }
}

impl<T, E> DirectedGraph<T, E> {
    /// Returns a displayable view of the adjacency matrix using the default layout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<u8> = DirectedGraph::new();
    /// graph.add_node(1)?;
    /// graph.add_node(2)?;
    /// graph.add_edge(&2, &1)?;
    ///
    /// assert_eq!(graph.adjacency().to_string(), "\t1\t2\n1\t0\t0\n2\t1\t0");
    /// # Ok::<(), digraph::Error>(())
    /// ```
    pub fn adjacency(&self) -> MatrixView<'_, T, E> {
        MatrixView {
            graph: self,
            format: MatrixFormat::default(),
        }
    }
}

impl<T: fmt::Display, E> DirectedGraph<T, E> {
    /// Writes the adjacency matrix dump to an I/O sink.
    ///
    /// # Arguments
    ///
    /// * `writer` - Destination of the dump
    /// * `format` - Layout to use
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if writing fails.
    pub fn write_matrix<W: io::Write>(&self, mut writer: W, format: &MatrixFormat) -> Result<()> {
        let view = self.adjacency().with_format(format.clone());
        writeln!(writer, "{view}")?;
        writer.flush()?;
        Ok(())
    }
}

impl<T: fmt::Display, E> fmt::Display for DirectedGraph<T, E> {
    /// Renders the adjacency matrix with the default [`MatrixFormat`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.adjacency(), f)
    }
}
