//! Trait definitions for index-based adjacency access.
//!
//! [`DirectedGraph`](crate::DirectedGraph) addresses nodes by value, which costs a linear scan
//! per lookup. Consumers that walk many adjacencies can instead program against these traits,
//! which work on the [`NodeId`] indices the graph currently assigns.
//!
//! - [`GraphBase`] - Node count and node index iteration
//! - [`Successors`] - Outgoing adjacency
//! - [`Predecessors`] - Incoming adjacency
//!
//! All adjacency queries return iterators rather than collections. Indices are only
//! meaningful until the next node removal.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use digraph::{DirectedGraph, graph::GraphBase};
///
/// fn count_nodes<G: GraphBase>(graph: &G) -> usize {
///     graph.node_ids().count()
/// }
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// graph.add_node("A")?;
/// graph.add_node("B")?;
/// assert_eq!(count_nodes(&graph), 2);
/// # Ok::<(), digraph::Error>(())
/// ```
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the targets of edges leaving `node`.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`. A self-loop makes a
    /// node its own successor.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the sources of edges entering `node`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
