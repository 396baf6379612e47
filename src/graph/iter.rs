//! Read-only iteration over node values.

use std::{fmt, iter::FusedIterator, ptr, slice};

/// Forward iterator over the node values of a [`DirectedGraph`](crate::DirectedGraph).
///
/// Yields `&T` in the graph's current node order: insertion order, with later nodes shifted
/// down whenever an earlier node was removed. The iterator borrows the graph, so the graph
/// cannot be mutated while a traversal is in progress. A fresh traversal can always be started
/// with [`DirectedGraph::iter`](crate::DirectedGraph::iter).
///
/// Two `Nodes` compare equal when they point at the same remaining range of the same graph.
/// [`DirectedGraph::end`](crate::DirectedGraph::end) supplies the position past the last node.
///
/// # Examples
///
/// ```rust
/// use digraph::DirectedGraph;
///
/// let mut graph: DirectedGraph<u32> = DirectedGraph::new();
/// for node in [4, 8, 15] {
///     graph.add_node(node)?;
/// }
///
/// let nodes: Vec<u32> = graph.iter().copied().collect();
/// assert_eq!(nodes, vec![4, 8, 15]);
/// # Ok::<(), digraph::Error>(())
/// ```
pub struct Nodes<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(nodes: &'a [T]) -> Self {
        Nodes {
            inner: nodes.iter(),
        }
    }

    /// Returns the node values not yet yielded.
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len()
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

impl<T> FusedIterator for Nodes<'_, T> {}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Nodes {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for Nodes<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = (self.as_slice(), other.as_slice());
        ptr::eq(lhs.as_ptr(), rhs.as_ptr()) && lhs.len() == rhs.len()
    }
}

impl<T> Eq for Nodes<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Nodes<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nodes").field(&self.as_slice()).finish()
    }
}
