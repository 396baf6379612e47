use std::collections::TryReserveError;

use thiserror::Error;

use crate::graph::NodeId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Errors fall into two groups with very different meanings for the caller.
///
/// # Error Categories
///
/// ## Contract Violations
/// - [`Error::NodeExists`] - A node equal to the inserted one is already present
/// - [`Error::NodeNotFound`] - An operation referenced a node that is not present
/// - [`Error::EdgeExists`] - The edge to insert is already present
/// - [`Error::EdgeNotFound`] - The edge to remove is not present
///
/// These are programmer errors. The graph rejects the call before touching any state, so the
/// graph is still valid afterwards, but retrying the same call will fail the same way.
///
/// ## Resource Exhaustion
/// - [`Error::Allocation`] - Storage for a rebuilt graph could not be reserved
/// - [`Error::CapacityOverflow`] - The adjacency matrix size does not fit in `usize`
///
/// Structural updates build their replacement storage before committing it, so a graph that
/// returns one of these errors is exactly as it was before the call.
///
/// ## Output Errors
/// - [`Error::Io`] - Writing the adjacency matrix dump to a sink failed
///
/// # Examples
///
/// ```rust
/// use digraph::{DirectedGraph, Error};
///
/// let mut graph: DirectedGraph<u32> = DirectedGraph::new();
/// graph.add_node(1)?;
///
/// match graph.add_node(1) {
///     Err(Error::NodeExists) => println!("node 1 is already present"),
///     Err(e) => eprintln!("unexpected failure: {}", e),
///     Ok(id) => println!("inserted as {}", id),
/// }
/// # Ok::<(), digraph::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Contract violations
    /// A node equal to the inserted one is already part of the graph.
    ///
    /// Node identity is decided by the graph's equality predicate, so this can trigger
    /// for values that differ in fields the predicate ignores.
    #[error("Node already exists in the graph")]
    NodeExists,

    /// No stored node is equal to the requested one.
    ///
    /// Returned by every operation that requires its node arguments to be present,
    /// including [`has_edge`](crate::DirectedGraph::has_edge).
    #[error("Node does not exist in the graph")]
    NodeNotFound,

    /// The edge to insert is already present.
    ///
    /// # Fields
    ///
    /// * `from` - Index of the source node
    /// * `to` - Index of the target node
    #[error("Edge {from} -> {to} already exists")]
    EdgeExists {
        /// Index of the source node
        from: NodeId,
        /// Index of the target node
        to: NodeId,
    },

    /// The edge to remove is not present.
    #[error("Edge {from} -> {to} does not exist")]
    EdgeNotFound {
        /// Index of the source node
        from: NodeId,
        /// Index of the target node
        to: NodeId,
    },

    // Resource exhaustion
    /// Storage for the rebuilt node sequence or adjacency matrix could not be reserved.
    ///
    /// Wraps the [`TryReserveError`] reported by the allocator. The graph is left unchanged.
    #[error("Failed to reserve graph storage - {0}")]
    Allocation(#[from] TryReserveError),

    /// The adjacency matrix for the requested node count would not be addressable.
    ///
    /// The associated value is the node count whose square overflowed.
    #[error("Adjacency matrix for {nodes} nodes exceeds the addressable size")]
    CapacityOverflow {
        /// The node count that could not be represented
        nodes: usize,
    },

    // Output
    /// Writing a diagnostic dump failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
