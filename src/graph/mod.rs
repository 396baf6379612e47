//! Dense directed graph container.
//!
//! This module provides [`DirectedGraph`], a value-semantics directed graph whose nodes are
//! arbitrary values, and the small set of types it is built from.
//!
//! # Architecture
//!
//! - **Container**: [`DirectedGraph`] owns the node sequence, the adjacency matrix and the
//!   maintained edge count
//! - **Identity**: [`NodeEq`] decides which values denote the same node; [`DefaultEq`] uses
//!   `PartialEq`, and any `Fn(&T, &T) -> bool` closure works as well
//! - **Indices**: [`NodeId`] exposes the position a node currently occupies
//! - **Iteration**: [`Nodes`] walks node values in index order
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] give index-based
//!   adjacency access to generic consumers
//! - **Rendering**: [`MatrixView`] and [`MatrixFormat`] produce a textual adjacency dump
//!
//! # Design Principles
//!
//! ## Dense Storage
//!
//! The edge relation is a single row-major `n × n` buffer, so edge queries and toggles are
//! constant time once the endpoints are located. Locating a node is a linear scan through the
//! predicate, which keeps the container usable with node types that are neither hashable nor
//! ordered.
//!
//! ## All-or-Nothing Updates
//!
//! Operations that change the node count build the resized matrix in fresh storage and commit
//! it only after construction succeeded. Copies and assignments are built completely before
//! they are installed. A graph therefore never exposes a node count that disagrees with its
//! matrix or edge count, even when allocation fails or a node's `Clone` panics.
//!
//! # Usage Examples
//!
//! ```rust
//! use digraph::graph::{DirectedGraph, NodeId, Successors};
//!
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! let a = graph.add_node("A")?;
//! graph.add_node("B")?;
//! graph.add_node("C")?;
//!
//! graph.add_edge(&"A", &"B")?;
//! graph.add_edge(&"A", &"C")?;
//!
//! let targets: Vec<&str> = graph
//!     .successors(a)
//!     .filter_map(|id| graph.node(id).copied())
//!     .collect();
//! assert_eq!(targets, vec!["B", "C"]);
//! # Ok::<(), digraph::Error>(())
//! ```

mod directed;
mod equality;
mod iter;
mod matrix;
mod node;
mod render;
mod traits;

// Re-export core types at module level
pub use directed::DirectedGraph;
pub use equality::{DefaultEq, NodeEq};
pub use iter::Nodes;
pub use node::NodeId;
pub use render::{MatrixFormat, MatrixView};
pub use traits::{GraphBase, Predecessors, Successors};
