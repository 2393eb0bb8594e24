//! Total-order comparison over vertex keys.
//!
//! The store itself never compares vertices; the order exists solely so
//! consolidation can pick a deterministic survivor out of two keys.

use std::cmp::Ordering;

/// A total order over vertex keys, supplied at graph construction.
///
/// Must be consistent with `Eq`: `compare(a, b)` is `Ordering::Equal`
/// exactly when `a == b`. Only the consolidation engine consults it.
pub trait VertexOrder<V> {
    /// Compares two vertex keys.
    fn compare(&self, a: &V, b: &V) -> Ordering;
}

/// Orders vertices by their `Ord` implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<V: Ord> VertexOrder<V> for NaturalOrder {
    fn compare(&self, a: &V, b: &V) -> Ordering {
        a.cmp(b)
    }
}

/// Adapter turning a comparison closure into a [`VertexOrder`].
///
/// ```rust
/// use veche_core::graph::{Graph, OrderFn};
///
/// // Prefer the *larger* key as consolidation survivor.
/// let mut graph = Graph::with_ordering(OrderFn(|a: &u32, b: &u32| b.cmp(a)));
/// graph.add_edge(1, 2, 1);
/// graph.consolidate(&1, &2);
/// assert!(graph.has_vertex(&2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderFn<F>(pub F);

impl<V, F> VertexOrder<V> for OrderFn<F>
where
    F: Fn(&V, &V) -> Ordering,
{
    fn compare(&self, a: &V, b: &V) -> Ordering {
        (self.0)(a, b)
    }
}
