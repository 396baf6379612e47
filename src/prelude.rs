//! # digraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the digraph library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all digraph operations
pub use crate::Error;

/// The result type used throughout digraph
pub use crate::Result;

// ================================================================================================
// Graph Container
// ================================================================================================

/// The dense directed graph container
pub use crate::graph::DirectedGraph;

/// Node identity predicate and its `PartialEq` based default
pub use crate::graph::{DefaultEq, NodeEq};

/// Current index of a node within a graph
pub use crate::graph::NodeId;

/// Read-only iterator over node values
pub use crate::graph::Nodes;

// ================================================================================================
// Adjacency Traits and Rendering
// ================================================================================================

/// Traits for generic adjacency consumers
pub use crate::graph::{GraphBase, Predecessors, Successors};

/// Layout configuration for the adjacency matrix dump
pub use crate::graph::{MatrixFormat, MatrixView};
