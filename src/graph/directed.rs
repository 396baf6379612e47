//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], a dense directed graph whose nodes are arbitrary
//! values identified through a [`NodeEq`] predicate. Edges live in a flattened adjacency
//! matrix, so edge queries and toggles are constant time once the endpoints are located.
//!
//! # Structural Updates
//!
//! Changing the node count never edits storage in place. [`DirectedGraph::add_node`] and
//! [`DirectedGraph::remove_node`] first build a correctly sized replacement matrix off to the
//! side and only then commit it together with the node sequence change. A failure while
//! building leaves the graph exactly as it was. Copy assignment follows the same pattern:
//! [`DirectedGraph::assign`] builds a full copy and swaps it in.

use std::fmt;

use tracing::{debug, trace};

use crate::{
    graph::{
        equality::{DefaultEq, NodeEq},
        iter::Nodes,
        matrix::AdjacencyMatrix,
        node::NodeId,
        traits::{GraphBase, Predecessors, Successors},
    },
    Error, Result,
};

/// A dense directed graph over node values of type `T`.
///
/// The graph owns:
///
/// - an ordered sequence of node values, in insertion order, with no two values equal under
///   the predicate `E`
/// - an `n × n` adjacency matrix, where cell `(i, j)` records an edge from node `i` to node `j`
///   (self-loops included)
/// - a maintained edge count equal to the number of set cells
///
/// Nodes are addressed by value in every operation. The index a value currently occupies is
/// available through [`index_of`](Self::index_of); it is stable across edge updates and copies
/// but shifts when an earlier node is removed.
///
/// # Type Parameters
///
/// * `T` - The node value type
/// * `E` - The node identity predicate, [`DefaultEq`] (plain `PartialEq`) unless specified
///
/// # Error Model
///
/// Violated preconditions (inserting a present node, touching an absent node or edge) are
/// rejected with a distinguished [`Error`] before any state changes. Allocation failures while
/// rebuilding storage are reported as [`Error::Allocation`] and also leave the graph
/// unchanged. A panic from `T::clone` during a copy unwinds through scratch storage only, so
/// neither the source nor the destination of the copy is affected.
///
/// # Thread Safety
///
/// `DirectedGraph<T, E>` is [`Send`] and [`Sync`] when `T` and `E` are. It performs no
/// internal synchronization.
///
/// # Examples
///
/// ```rust
/// use digraph::DirectedGraph;
///
/// let mut graph: DirectedGraph<u32> = DirectedGraph::new();
/// for node in 1..=6 {
///     graph.add_node(node)?;
/// }
/// for (from, to) in [(1, 2), (1, 3), (2, 4), (3, 4), (3, 5), (4, 6), (5, 5), (5, 6)] {
///     graph.add_edge(&from, &to)?;
/// }
///
/// assert_eq!(graph.node_count(), 6);
/// assert_eq!(graph.edge_count(), 8);
/// assert!(graph.has_edge(&5, &5)?);
/// assert!(!graph.has_edge(&6, &5)?);
///
/// graph.remove_node(&4)?;
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edge_count(), 5);
/// # Ok::<(), digraph::Error>(())
/// ```
pub struct DirectedGraph<T, E = DefaultEq> {
    /// Node values in index order
    nodes: Vec<T>,
    /// Edge relation, order always equal to `nodes.len()`
    matrix: AdjacencyMatrix,
    /// Number of set cells in `matrix`
    edge_count: usize,
    /// Node identity predicate
    equality: E,
}

impl<T, E: Default> Default for DirectedGraph<T, E> {
    fn default() -> Self {
        Self::with_equality(E::default())
    }
}

impl<T, E: Default> DirectedGraph<T, E> {
    /// Creates a new empty graph using the predicate's default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::DirectedGraph;
    ///
    /// let graph: DirectedGraph<String> = DirectedGraph::new();
    /// assert!(graph.is_empty());
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, E> DirectedGraph<T, E> {
    /// Creates a new empty graph that identifies nodes with `equality`.
    ///
    /// # Arguments
    ///
    /// * `equality` - Any [`NodeEq`] implementation, including `Fn(&T, &T) -> bool` closures
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::with_equality(|a: &String, b: &String| {
    ///     a.eq_ignore_ascii_case(b)
    /// });
    /// graph.add_node("Entry".to_string())?;
    /// assert!(graph.exists(&"ENTRY".to_string()));
    /// # Ok::<(), digraph::Error>(())
    /// ```
    #[must_use]
    pub const fn with_equality(equality: E) -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            matrix: AdjacencyMatrix::new(),
            edge_count: 0,
            equality,
        }
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    ///
    /// The count is maintained by every update, so this is constant time.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node value stored at the given index, if any.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&T> {
        self.nodes.get(node.index())
    }

    /// Returns the predicate used to identify nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::{DirectedGraph, graph::NodeEq};
    ///
    /// let graph: DirectedGraph<i32, _> = DirectedGraph::with_equality(|a: &i32, b: &i32| {
    ///     a.abs() == b.abs()
    /// });
    /// assert!(graph.equality().same_node(&-3, &3));
    /// ```
    #[must_use]
    pub fn equality(&self) -> &E {
        &self.equality
    }

    /// Returns an iterator over the node values in index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<char> = DirectedGraph::new();
    /// graph.add_node('a')?;
    /// graph.add_node('b')?;
    /// graph.add_node('c')?;
    /// graph.remove_node(&'a')?;
    ///
    /// let nodes: String = graph.iter().collect();
    /// assert_eq!(nodes, "bc");
    /// # Ok::<(), digraph::Error>(())
    /// ```
    pub fn iter(&self) -> Nodes<'_, T> {
        Nodes::new(&self.nodes)
    }

    /// Returns an iterator positioned past the last node.
    ///
    /// It yields nothing and compares equal to any iterator from [`iter`](Self::iter) that
    /// has been advanced over every node, so it can serve as an explicit end position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<u8> = DirectedGraph::new();
    /// graph.add_node(1)?;
    /// graph.add_node(2)?;
    ///
    /// let mut cursor = graph.iter();
    /// let mut visited = 0;
    /// while cursor != graph.end() {
    ///     cursor.next();
    ///     visited += 1;
    /// }
    /// assert_eq!(visited, 2);
    /// # Ok::<(), digraph::Error>(())
    /// ```
    pub fn end(&self) -> Nodes<'_, T> {
        Nodes::new(&self.nodes[self.nodes.len()..])
    }

    /// Returns an iterator over all edges as `(source, target)` value pairs.
    ///
    /// Edges are yielded in row-major order: grouped by source index, then by target index.
    pub fn edges(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.matrix
            .set_cells()
            .map(|(from, to)| (&self.nodes[from], &self.nodes[to]))
    }

    /// Exchanges the entire contents of two graphs.
    ///
    /// Only ownership of the storage moves, so this is constant time and cannot fail.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Removes every node and edge and releases the storage.
    pub fn clear(&mut self) {
        self.nodes = Vec::new();
        self.matrix = AdjacencyMatrix::new();
        self.edge_count = 0;
    }

    pub(crate) fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub(crate) fn nodes(&self) -> &[T] {
        &self.nodes
    }
}

impl<T, E: NodeEq<T>> DirectedGraph<T, E> {
    /// Returns the current index of the node equal to `node`.
    ///
    /// # Returns
    ///
    /// `Some(NodeId)` if the node is present, `None` otherwise.
    #[must_use]
    pub fn index_of(&self, node: &T) -> Option<NodeId> {
        self.position(node).map(NodeId::new)
    }

    /// Returns `true` if some stored node is equal to `node` under the graph's predicate.
    ///
    /// This is a linear scan over the node sequence.
    #[must_use]
    pub fn exists(&self, node: &T) -> bool {
        self.position(node).is_some()
    }

    /// Returns `true` if the edge `from -> to` exists.
    ///
    /// # Arguments
    ///
    /// * `from` - The source node
    /// * `to` - The target node
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either endpoint is not present. An absent node is
    /// treated as a contract violation rather than as "no edge".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::{DirectedGraph, Error};
    ///
    /// let mut graph: DirectedGraph<u8> = DirectedGraph::new();
    /// graph.add_node(1)?;
    /// graph.add_node(2)?;
    /// graph.add_edge(&1, &2)?;
    ///
    /// assert!(graph.has_edge(&1, &2)?);
    /// assert!(!graph.has_edge(&2, &1)?);
    /// assert!(matches!(graph.has_edge(&1, &9), Err(Error::NodeNotFound)));
    /// # Ok::<(), digraph::Error>(())
    /// ```
    pub fn has_edge(&self, from: &T, to: &T) -> Result<bool> {
        let (from, to) = self.endpoints(from, to)?;
        Ok(self.matrix.get(from, to))
    }

    /// Returns the number of edges leaving `node`, counting a self-loop once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the node is not present.
    pub fn out_degree(&self, node: &T) -> Result<usize> {
        let index = self.require(node)?;
        Ok(self.matrix.row(index).iter().filter(|&&cell| cell).count())
    }

    /// Returns the number of edges entering `node`, counting a self-loop once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the node is not present.
    pub fn in_degree(&self, node: &T) -> Result<usize> {
        let index = self.require(node)?;
        Ok(self.matrix.column(index).filter(|&cell| cell).count())
    }

    /// Inserts a new isolated node.
    ///
    /// The node is appended at index `node_count()` with no incoming or outgoing edges. The
    /// adjacency matrix is rebuilt one row and column larger before anything is committed,
    /// so on failure the graph is unchanged.
    ///
    /// # Arguments
    ///
    /// * `node` - The node value to insert
    ///
    /// # Returns
    ///
    /// The index assigned to the new node.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeExists`] if a node equal to `node` is already present
    /// - [`Error::Allocation`] or [`Error::CapacityOverflow`] if the larger storage cannot be
    ///   obtained
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::{DirectedGraph, Error, graph::NodeId};
    ///
    /// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    /// assert_eq!(graph.add_node("first")?, NodeId::new(0));
    /// assert_eq!(graph.add_node("second")?, NodeId::new(1));
    /// assert!(matches!(graph.add_node("first"), Err(Error::NodeExists)));
    /// assert_eq!(graph.node_count(), 2);
    /// # Ok::<(), digraph::Error>(())
    /// ```
    pub fn add_node(&mut self, node: T) -> Result<NodeId> {
        if self.exists(&node) {
            debug!(nodes = self.nodes.len(), "add_node: rejected duplicate node");
            return Err(Error::NodeExists);
        }

        let matrix = self.matrix.grown()?;
        self.nodes.try_reserve(1)?;

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        self.matrix = matrix;

        trace!(
            nodes = self.nodes.len(),
            edges = self.edge_count,
            "add_node: committed rebuilt graph"
        );
        Ok(id)
    }

    /// Removes a node together with every edge touching it.
    ///
    /// Nodes after the removed one shift down by one index. The edge count is recomputed
    /// from the surviving cells of the rebuilt matrix.
    ///
    /// # Arguments
    ///
    /// * `node` - A value equal to the node to remove
    ///
    /// # Returns
    ///
    /// The stored node value that was removed.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if no node equal to `node` is present
    /// - [`Error::Allocation`] if the smaller matrix cannot be allocated
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    /// graph.add_node(1)?;
    /// graph.add_node(2)?;
    /// graph.add_edge(&1, &2)?;
    /// graph.add_edge(&2, &2)?;
    ///
    /// assert_eq!(graph.remove_node(&1)?, 1);
    /// assert_eq!(graph.edge_count(), 1);
    ///
    /// // Re-adding the node does not resurrect its edges
    /// graph.add_node(1)?;
    /// assert!(!graph.has_edge(&1, &2)?);
    /// # Ok::<(), digraph::Error>(())
    /// ```
    pub fn remove_node(&mut self, node: &T) -> Result<T> {
        let index = self.require(node)?;

        let matrix = self.matrix.without(index)?;
        let edge_count = matrix.count();

        let removed = self.nodes.remove(index);
        self.matrix = matrix;
        self.edge_count = edge_count;

        trace!(
            index,
            nodes = self.nodes.len(),
            edges = self.edge_count,
            "remove_node: committed rebuilt graph"
        );
        Ok(removed)
    }

    /// Inserts the edge `from -> to`.
    ///
    /// Self-loops are allowed. No storage is allocated.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either endpoint is not present
    /// - [`Error::EdgeExists`] if the edge is already present
    pub fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let (from, to) = self.endpoints(from, to)?;
        if self.matrix.get(from, to) {
            debug!(from, to, "add_edge: edge already present");
            return Err(Error::EdgeExists {
                from: NodeId::new(from),
                to: NodeId::new(to),
            });
        }

        self.matrix.set(from, to, true);
        self.edge_count += 1;
        Ok(())
    }

    /// Removes the edge `from -> to`.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either endpoint is not present
    /// - [`Error::EdgeNotFound`] if the edge is not present
    pub fn remove_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let (from, to) = self.endpoints(from, to)?;
        if !self.matrix.get(from, to) {
            debug!(from, to, "remove_edge: edge not present");
            return Err(Error::EdgeNotFound {
                from: NodeId::new(from),
                to: NodeId::new(to),
            });
        }

        self.matrix.set(from, to, false);
        self.edge_count -= 1;
        Ok(())
    }

    fn position(&self, node: &T) -> Option<usize> {
        self.nodes
            .iter()
            .position(|stored| self.equality.same_node(stored, node))
    }

    fn require(&self, node: &T) -> Result<usize> {
        self.position(node).ok_or(Error::NodeNotFound)
    }

    fn endpoints(&self, from: &T, to: &T) -> Result<(usize, usize)> {
        Ok((self.require(from)?, self.require(to)?))
    }
}

impl<T: Clone, E: Clone> DirectedGraph<T, E> {
    /// Returns a deep copy of the graph, reporting allocation failure as an error.
    ///
    /// The copy has the same node sequence, the same index assignment, the same edges and a
    /// clone of the predicate. It is built entirely in new storage: if allocation fails the
    /// error is returned, and if `T::clone` panics the partial copy is dropped during
    /// unwinding. The source is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if storage for the copy cannot be reserved.
    pub fn try_clone(&self) -> Result<Self> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(self.nodes.len())?;
        nodes.extend(self.nodes.iter().cloned());

        let matrix = self.matrix.try_clone()?;

        Ok(DirectedGraph {
            nodes,
            matrix,
            edge_count: self.edge_count,
            equality: self.equality.clone(),
        })
    }

    /// Replaces the contents of this graph with a copy of `other`.
    ///
    /// The copy is built completely before it is swapped in, so the graph ends up either
    /// fully equal to `other` or exactly as it was. The previous contents are dropped after
    /// the swap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if storage for the copy cannot be reserved, in which case
    /// `self` is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use digraph::DirectedGraph;
    ///
    /// let mut source: DirectedGraph<u32> = DirectedGraph::new();
    /// source.add_node(1)?;
    /// source.add_edge(&1, &1)?;
    ///
    /// let mut target: DirectedGraph<u32> = DirectedGraph::new();
    /// target.add_node(7)?;
    ///
    /// target.assign(&source)?;
    /// assert!(!target.exists(&7));
    /// assert!(target.has_edge(&1, &1)?);
    /// # Ok::<(), digraph::Error>(())
    /// ```
    pub fn assign(&mut self, other: &Self) -> Result<()> {
        let mut replacement = other.try_clone()?;
        self.swap(&mut replacement);

        trace!(
            nodes = self.nodes.len(),
            edges = self.edge_count,
            "assign: committed copied graph"
        );
        Ok(())
    }
}

impl<T: Clone, E: Clone> Clone for DirectedGraph<T, E> {
    fn clone(&self) -> Self {
        DirectedGraph {
            nodes: self.nodes.clone(),
            matrix: self.matrix.clone(),
            edge_count: self.edge_count,
            equality: self.equality.clone(),
        }
    }

    /// Build-then-swap assignment; `self` keeps its old contents if cloning panics.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }
}

impl<T: fmt::Debug, E> fmt::Debug for DirectedGraph<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges_by_index())
            .finish_non_exhaustive()
    }
}

impl<T, E> DirectedGraph<T, E> {
    fn edges_by_index(&self) -> Vec<(NodeId, NodeId)> {
        self.matrix
            .set_cells()
            .map(|(from, to)| (NodeId::new(from), NodeId::new(to)))
            .collect()
    }
}

impl<'a, T, E> IntoIterator for &'a DirectedGraph<T, E> {
    type Item = &'a T;
    type IntoIter = Nodes<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> GraphBase for DirectedGraph<T, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<T, E> Successors for DirectedGraph<T, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.matrix
            .row(node.index())
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell)
            .map(|(to, _)| NodeId::new(to))
    }
}

impl<T, E> Predecessors for DirectedGraph<T, E> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.matrix
            .column(node.index())
            .enumerate()
            .filter(|&(_, cell)| cell)
            .map(|(from, _)| NodeId::new(from))
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::{
        graph::{
            directed::DirectedGraph,
            equality::NodeEq,
            node::NodeId,
            traits::{GraphBase, Predecessors, Successors},
        },
        Error,
    };

    /// Checks the maintained edge count and matrix order against the stored nodes.
    fn assert_consistent<T, E>(graph: &DirectedGraph<T, E>) {
        assert_eq!(graph.matrix().order(), graph.node_count());
        assert_eq!(graph.matrix().count(), graph.edge_count());
        if graph.is_empty() {
            assert_eq!(graph.matrix().rows().count(), 0);
        }
    }

    /// Creates the six node sample graph with a self-loop on 5.
    fn create_sample_graph() -> DirectedGraph<i32> {
        let mut graph = DirectedGraph::new();
        for i in 1..=6 {
            graph.add_node(i).unwrap();
        }
        for (from, to) in [(1, 2), (1, 3), (2, 4), (3, 4), (3, 5), (4, 6), (5, 5), (5, 6)] {
            graph.add_edge(&from, &to).unwrap();
        }
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: DirectedGraph<i32> = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.iter().count(), 0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_default() {
        let graph: DirectedGraph<String> = DirectedGraph::default();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_node_appends() {
        let mut graph: DirectedGraph<&str> = DirectedGraph::new();
        assert_eq!(graph.add_node("A").unwrap(), NodeId::new(0));
        assert_eq!(graph.add_node("B").unwrap(), NodeId::new(1));
        assert_eq!(graph.node(NodeId::new(1)), Some(&"B"));
        assert_eq!(graph.node(NodeId::new(2)), None);
        assert_consistent(&graph);
    }

    #[test]
    fn test_add_duplicate_node() {
        let mut graph = create_sample_graph();
        let result = graph.add_node(3);
        assert!(matches!(result, Err(Error::NodeExists)));
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 8);
        assert_consistent(&graph);
    }

    #[test]
    fn test_add_node_keeps_edges() {
        let mut graph = create_sample_graph();
        graph.add_node(7).unwrap();

        assert_eq!(graph.edge_count(), 8);
        assert!(graph.has_edge(&3, &5).unwrap());
        assert!(graph.has_edge(&5, &5).unwrap());
        for i in 1..=7 {
            assert!(!graph.has_edge(&7, &i).unwrap());
            assert!(!graph.has_edge(&i, &7).unwrap());
        }
        assert_consistent(&graph);
    }

    #[test]
    fn test_sample_graph() {
        let graph = create_sample_graph();
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 8);
        assert!(graph.has_edge(&5, &5).unwrap());
        assert!(!graph.has_edge(&6, &5).unwrap());
        assert!(graph.has_edge(&1, &2).unwrap());
        assert!(!graph.has_edge(&2, &1).unwrap());
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_node_drops_edges() {
        let mut graph = create_sample_graph();
        assert_eq!(graph.remove_node(&4).unwrap(), 4);

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 5);
        assert!(!graph.exists(&4));
        assert_eq!(graph.index_of(&5), Some(NodeId::new(3)));
        assert_eq!(graph.index_of(&6), Some(NodeId::new(4)));
        assert!(graph.has_edge(&5, &6).unwrap());
        assert!(graph.has_edge(&5, &5).unwrap());
        assert!(graph.has_edge(&3, &5).unwrap());
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_missing_node() {
        let mut graph = create_sample_graph();
        assert!(matches!(graph.remove_node(&42), Err(Error::NodeNotFound)));
        assert_eq!(graph.node_count(), 6);
        assert_consistent(&graph);
    }

    #[test]
    fn test_remove_last_node() {
        let mut graph: DirectedGraph<i32> = DirectedGraph::new();
        graph.add_node(1).unwrap();
        graph.add_edge(&1, &1).unwrap();

        graph.remove_node(&1).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_readded_node_has_no_edges() {
        let mut graph = create_sample_graph();
        graph.remove_node(&3).unwrap();
        graph.add_node(3).unwrap();

        assert_eq!(graph.index_of(&3), Some(NodeId::new(5)));
        assert_eq!(graph.out_degree(&3).unwrap(), 0);
        assert_eq!(graph.in_degree(&3).unwrap(), 0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_add_existing_edge() {
        let mut graph = create_sample_graph();
        let result = graph.add_edge(&1, &2);
        assert!(matches!(
            result,
            Err(Error::EdgeExists { from, to }) if from == NodeId::new(0) && to == NodeId::new(1)
        ));
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = create_sample_graph();
        graph.remove_edge(&5, &5).unwrap();
        assert!(!graph.has_edge(&5, &5).unwrap());
        assert_eq!(graph.edge_count(), 7);

        let result = graph.remove_edge(&5, &5);
        assert!(matches!(result, Err(Error::EdgeNotFound { .. })));
        assert_eq!(graph.edge_count(), 7);
        assert_consistent(&graph);
    }

    #[test]
    fn test_edge_on_missing_node() {
        let mut graph = create_sample_graph();
        assert!(matches!(graph.add_edge(&1, &9), Err(Error::NodeNotFound)));
        assert!(matches!(graph.remove_edge(&9, &1), Err(Error::NodeNotFound)));
        assert!(matches!(graph.has_edge(&9, &9), Err(Error::NodeNotFound)));
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn test_degrees() {
        let graph = create_sample_graph();
        assert_eq!(graph.out_degree(&1).unwrap(), 2);
        assert_eq!(graph.in_degree(&4).unwrap(), 2);
        assert_eq!(graph.out_degree(&5).unwrap(), 2);
        assert_eq!(graph.in_degree(&5).unwrap(), 2);
        assert_eq!(graph.out_degree(&6).unwrap(), 0);
        assert!(matches!(graph.in_degree(&0), Err(Error::NodeNotFound)));
    }

    #[test]
    fn test_edges_row_major() {
        let graph = create_sample_graph();
        let edges: Vec<(i32, i32)> = graph.edges().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(
            edges,
            vec![(1, 2), (1, 3), (2, 4), (3, 4), (3, 5), (4, 6), (5, 5), (5, 6)]
        );
    }

    #[test]
    fn test_custom_equality() {
        let mut graph = DirectedGraph::with_equality(|a: &(u32, char), b: &(u32, char)| a.0 == b.0);
        graph.add_node((1, 'a')).unwrap();
        graph.add_node((2, 'b')).unwrap();

        assert!(graph.exists(&(1, 'x')));
        assert!(matches!(graph.add_node((2, 'y')), Err(Error::NodeExists)));

        graph.add_edge(&(1, ' '), &(2, ' ')).unwrap();
        assert_eq!(graph.edges().next(), Some((&(1, 'a'), &(2, 'b'))));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = create_sample_graph();
        let mut copy = original.clone();

        copy.remove_node(&1).unwrap();
        copy.add_edge(&6, &6).unwrap();

        assert_eq!(original.node_count(), 6);
        assert_eq!(original.edge_count(), 8);
        assert!(!original.has_edge(&6, &6).unwrap());
        assert_consistent(&copy);
    }

    #[test]
    fn test_try_clone_matches() {
        let original = create_sample_graph();
        let copy = original.try_clone().unwrap();

        assert_eq!(copy.node_count(), original.node_count());
        assert_eq!(copy.edge_count(), original.edge_count());
        for node in &original {
            assert_eq!(copy.index_of(node), original.index_of(node));
        }
        assert!(copy.edges().eq(original.edges()));
    }

    #[test]
    fn test_assign_replaces_content() {
        let source = create_sample_graph();
        let mut target: DirectedGraph<i32> = DirectedGraph::new();
        target.add_node(100).unwrap();
        target.add_edge(&100, &100).unwrap();

        target.assign(&source).unwrap();
        assert!(!target.exists(&100));
        assert_eq!(target.node_count(), 6);
        assert_eq!(target.edge_count(), 8);
        assert!(target.edges().eq(source.edges()));
    }

    #[test]
    fn test_clone_from() {
        let source = create_sample_graph();
        let mut target: DirectedGraph<i32> = DirectedGraph::new();
        target.clone_from(&source);
        assert!(target.iter().eq(source.iter()));
        assert_eq!(target.edge_count(), 8);
    }

    #[test]
    fn test_swap() {
        let mut a = create_sample_graph();
        let mut b: DirectedGraph<i32> = DirectedGraph::new();
        b.add_node(9).unwrap();

        a.swap(&mut b);
        assert_eq!(a.node_count(), 1);
        assert!(a.exists(&9));
        assert_eq!(b.node_count(), 6);
        assert_eq!(b.edge_count(), 8);
    }

    #[test]
    fn test_clear() {
        let mut graph = create_sample_graph();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_consistent(&graph);
    }

    #[test]
    fn test_panicking_predicate_leaves_graph_intact() {
        let mut graph = DirectedGraph::with_equality(|a: &i32, b: &i32| {
            assert!(*b >= 0, "negative probe");
            a == b
        });
        graph.add_node(1).unwrap();
        graph.add_node(2).unwrap();
        graph.add_edge(&1, &2).unwrap();

        let result = catch_unwind(AssertUnwindSafe(|| graph.add_node(-1)));
        assert!(result.is_err());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_consistent(&graph);
    }

    #[test]
    fn test_debug_format() {
        let mut graph: DirectedGraph<char> = DirectedGraph::new();
        graph.add_node('a').unwrap();
        graph.add_node('b').unwrap();
        graph.add_edge(&'a', &'b').unwrap();

        let debug = format!("{graph:?}");
        assert_eq!(
            debug,
            "DirectedGraph { nodes: ['a', 'b'], edges: [(NodeId(0), NodeId(1))], .. }"
        );
    }

    #[test]
    fn test_adjacency_traits() {
        let graph = create_sample_graph();
        let three = graph.index_of(&3).unwrap();
        let four = graph.index_of(&4).unwrap();

        let succ: Vec<NodeId> = graph.successors(three).collect();
        assert_eq!(succ, vec![NodeId::new(3), NodeId::new(4)]);

        let pred: Vec<NodeId> = graph.predecessors(four).collect();
        assert_eq!(pred, vec![NodeId::new(1), NodeId::new(2)]);

        let ids: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(ids.len(), GraphBase::node_count(&graph));
    }

    #[test]
    fn test_equality_is_shared_with_copies() {
        let graph = DirectedGraph::<(u32, char), _>::with_equality(|a: &(u32, char), b: &(u32, char)| a.0 == b.0);
        assert!(graph.equality().same_node(&(1, 'a'), &(1, 'b')));
        assert!(!graph.equality().same_node(&(1, 'a'), &(2, 'a')));

        let copy = graph.clone();
        assert!(copy.equality().same_node(&(7, 'x'), &(7, 'y')));
    }

    #[test]
    fn test_end_position() {
        let graph = create_sample_graph();
        assert_eq!(graph.end().next(), None);
        assert_eq!(graph.end().len(), 0);

        let mut cursor = graph.iter();
        let mut visited = Vec::new();
        while cursor != graph.end() {
            visited.extend(cursor.next().copied());
        }
        assert_eq!(visited, vec![1, 2, 3, 4, 5, 6]);

        let empty: DirectedGraph<i32> = DirectedGraph::new();
        assert_eq!(empty.iter(), empty.end());
    }

    #[test]
    fn test_large_graph() {
        let mut graph: DirectedGraph<usize> = DirectedGraph::new();
        for i in 0..300 {
            graph.add_node(i).unwrap();
        }
        for i in 0..299 {
            graph.add_edge(&i, &(i + 1)).unwrap();
        }

        assert_eq!(graph.node_count(), 300);
        assert_eq!(graph.edge_count(), 299);

        graph.remove_node(&150).unwrap();
        assert_eq!(graph.edge_count(), 297);
        assert_eq!(graph.index_of(&299), Some(NodeId::new(298)));
        assert_consistent(&graph);
    }
}
