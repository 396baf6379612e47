// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # digraph
//!
//! A dense directed graph container over arbitrary node values.
//!
//! [`DirectedGraph`] stores a set of node values together with an adjacency matrix describing
//! which directed edges exist between them. Nodes are identified by value through a pluggable
//! equality predicate rather than by handles, which makes the container convenient for small
//! graphs whose nodes are naturally keyed by their content.
//!
//! ## Features
//!
//! - **Value semantics** - Deep copies, build-then-swap assignment and constant time swap
//! - **All-or-nothing updates** - Growing or shrinking the graph either fully succeeds or leaves
//!   it untouched, even when allocation fails or a node's `Clone` panics
//! - **Pluggable identity** - Nodes are compared with any [`graph::NodeEq`] implementation, including
//!   plain closures
//! - **Dense adjacency** - Constant time edge queries backed by a flattened row-major matrix
//!
//! ## Quick Start
//!
//! ```rust
//! use digraph::DirectedGraph;
//!
//! let mut graph: DirectedGraph<u32> = DirectedGraph::new();
//! for node in 1..=3 {
//!     graph.add_node(node)?;
//! }
//!
//! graph.add_edge(&1, &2)?;
//! graph.add_edge(&2, &3)?;
//! graph.add_edge(&3, &3)?;
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! assert!(graph.has_edge(&3, &3)?);
//!
//! graph.remove_node(&2)?;
//! assert_eq!(graph.edge_count(), 1);
//! # Ok::<(), digraph::Error>(())
//! ```
//!
//! ### Custom Node Identity
//!
//! ```rust
//! use digraph::DirectedGraph;
//!
//! #[derive(Clone)]
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//!     eye_color: char,
//! }
//!
//! let same_person = |a: &Person, b: &Person| {
//!     a.first_name == b.first_name && a.last_name == b.last_name
//! };
//! let mut graph = DirectedGraph::with_equality(same_person);
//!
//! graph.add_node(Person { first_name: "Alice".into(), last_name: "Shrdlu".into(), eye_color: 'G' })?;
//!
//! // Eye color is ignored by the predicate, so this is the same node
//! let probe = Person { first_name: "Alice".into(), last_name: "Shrdlu".into(), eye_color: 'B' };
//! assert!(graph.exists(&probe));
//! # Ok::<(), digraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The container, its storage, iterators and diagnostic rendering
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Thread Safety
//!
//! The graph carries no internal synchronization. It is [`Send`] and [`Sync`] whenever the node
//! type and equality predicate are, but sharing one instance between threads is left to the
//! caller.

pub(crate) mod error;

/// Dense directed graph container and supporting types.
///
/// # Key Types
///
/// - [`graph::DirectedGraph`] - The graph container
/// - [`graph::NodeEq`] - Node identity predicate
/// - [`graph::NodeId`] - Current index of a node
/// - [`graph::Nodes`] - Read-only iterator over node values
/// - [`graph::MatrixFormat`] - Layout of the adjacency matrix dump
pub mod graph;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use digraph::prelude::*;
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// graph.add_node("entry")?;
/// # Ok::<(), digraph::Error>(())
/// ```
pub mod prelude;

/// `digraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `digraph` Error type
///
/// The main error type for all operations in this crate. Distinguishes caller contract
/// violations from recoverable resource exhaustion.
///
/// # Examples
///
/// ```rust
/// use digraph::{DirectedGraph, Error};
///
/// let mut graph: DirectedGraph<char> = DirectedGraph::new();
/// match graph.remove_node(&'x') {
///     Err(Error::NodeNotFound) => println!("nothing to remove"),
///     Err(e) => println!("Error: {}", e),
///     Ok(node) => println!("removed {}", node),
/// }
/// ```
pub use error::Error;

/// The graph container.
///
/// See [`graph::DirectedGraph`] for the full API.
pub use graph::DirectedGraph;
