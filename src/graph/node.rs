//! Node index type for directed graphs.
//!
//! This module provides the [`NodeId`] type, the position of a node within a graph's node
//! sequence. Nodes are addressed by value throughout the public API; `NodeId` exposes the
//! index the graph currently assigns to a value, for error reporting and for the
//! index-based adjacency traits.

use std::fmt;

/// The current index of a node within a [`DirectedGraph`](crate::DirectedGraph).
///
/// `NodeId` wraps a `usize` position in the node sequence. Indices are assigned in insertion
/// order starting from 0.
///
/// # Stability
///
/// A node's index is stable across edge insertion and removal, and a copied graph assigns the
/// same indices as its source. Removing a node shifts every later node down by one, so a
/// `NodeId` obtained before a [`remove_node`](crate::DirectedGraph::remove_node) call must not
/// be reused afterwards.
///
/// # Examples
///
/// ```rust
/// use digraph::{DirectedGraph, graph::NodeId};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_node("A")?;
/// let b = graph.add_node("B")?;
///
/// assert_eq!(a, NodeId::new(0));
/// assert_eq!(graph.index_of(&"B"), Some(b));
///
/// graph.remove_node(&"A")?;
/// assert_eq!(graph.index_of(&"B"), Some(NodeId::new(0)));
/// # Ok::<(), digraph::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage should obtain `NodeId` values from
    /// [`DirectedGraph::add_node`](crate::DirectedGraph::add_node) or
    /// [`DirectedGraph::index_of`](crate::DirectedGraph::index_of).
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    ///
    /// The index can be used to address per-node data kept alongside the graph, as long as
    /// no node has been removed in the meantime.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
