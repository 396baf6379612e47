//! Node identity predicates.
//!
//! A [`DirectedGraph`](crate::DirectedGraph) never compares nodes on its own. Every lookup
//! delegates to a [`NodeEq`] implementation chosen by the caller, so two values are the same
//! node exactly when the predicate says so, regardless of any other fields they carry.
//!
//! Two kinds of predicates are supported out of the box:
//!
//! - [`DefaultEq`] - Delegates to the node type's [`PartialEq`] implementation
//! - Any `Fn(&T, &T) -> bool` - Closures and function pointers via a blanket implementation

/// Decides whether two node values denote the same node.
///
/// Implementations must behave like an equivalence relation over the values stored in one
/// graph; the graph relies on this to keep at most one stored value per equivalence class.
///
/// # Examples
///
/// ```rust
/// use digraph::graph::NodeEq;
///
/// /// Compares strings case-insensitively.
/// #[derive(Clone, Default)]
/// struct CaseInsensitive;
///
/// impl NodeEq<String> for CaseInsensitive {
///     fn same_node(&self, a: &String, b: &String) -> bool {
///         a.eq_ignore_ascii_case(b)
///     }
/// }
///
/// assert!(CaseInsensitive.same_node(&"Entry".to_string(), &"ENTRY".to_string()));
/// ```
pub trait NodeEq<T: ?Sized> {
    /// Returns `true` if `a` and `b` identify the same node.
    fn same_node(&self, a: &T, b: &T) -> bool;
}

/// Node identity through the node type's own [`PartialEq`].
///
/// This is the default predicate of [`DirectedGraph`](crate::DirectedGraph).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEq;

impl<T: PartialEq + ?Sized> NodeEq<T> for DefaultEq {
    #[inline]
    fn same_node(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> NodeEq<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn same_node(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_parity(a: &i32, b: &i32) -> bool {
        a % 2 == b % 2
    }

    #[test]
    fn test_default_eq() {
        assert!(DefaultEq.same_node(&5, &5));
        assert!(!DefaultEq.same_node(&5, &6));
        assert!(DefaultEq.same_node("abc", "abc"));
    }

    #[test]
    fn test_closure_predicate() {
        let by_len = |a: &String, b: &String| a.len() == b.len();
        assert!(by_len.same_node(&"abc".to_string(), &"xyz".to_string()));
        assert!(!by_len.same_node(&"abc".to_string(), &"xy".to_string()));
    }

    #[test]
    fn test_function_pointer_predicate() {
        let predicate: fn(&i32, &i32) -> bool = same_parity;
        assert!(predicate.same_node(&2, &10));
        assert!(!predicate.same_node(&2, &3));
    }
}
