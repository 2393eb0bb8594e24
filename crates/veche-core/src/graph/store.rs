//! Graph store: vertex and edge CRUD over an adjacency map.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use super::ordering::NaturalOrder;

/// A generic weighted directed graph keyed by caller-chosen vertex values.
///
/// Backed by one adjacency map per vertex (neighbor → weight). Weights are
/// strictly positive; a zero weight is rejected at the API boundary, so no
/// stored edge can carry weight 0. At most one edge exists per ordered
/// `(source, target)` pair and no vertex ever points at itself.
///
/// Domain-invalid operations (absent vertex, absent edge, duplicate
/// insertion) are soft failures: the call is a no-op and reports `false`
/// or `None`, never an error.
///
/// The graph is **not** internally synchronized. Callers must serialize
/// mutation; no atomicity is provided across calls.
#[derive(Debug)]
pub struct Graph<V, O = NaturalOrder> {
    /// vertex → (outgoing neighbor → weight)
    pub(super) adjacency: HashMap<V, HashMap<V, u32>>,
    /// Consulted only by consolidation to pick a survivor.
    pub(super) ordering: O,
}

impl<V, O: Default> Default for Graph<V, O> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            ordering: O::default(),
        }
    }
}

impl<V> Graph<V> {
    /// Creates an empty graph ordered by the vertex type's `Ord`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, O> Graph<V, O> {
    /// Creates an empty graph with an explicit vertex ordering.
    ///
    /// The ordering is consulted only by [`Graph::consolidate`] to pick
    /// the surviving key; every other operation ignores it.
    #[must_use]
    pub fn with_ordering(ordering: O) -> Self {
        Self {
            adjacency: HashMap::new(),
            ordering,
        }
    }
}

impl<V, O> Graph<V, O>
where
    V: Eq + Hash + Clone,
{
    // ── Vertex CRUD ────────────────────────────────────────────────────

    /// Adds a vertex with no edges.
    ///
    /// Returns `true` iff the vertex was newly inserted; adding an
    /// existing vertex changes nothing and returns `false`.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, HashMap::new());
        true
    }

    /// Returns `true` if the vertex is in the graph.
    #[must_use]
    pub fn has_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(vertex)
    }

    /// Returns an unordered snapshot of all vertex keys.
    #[must_use]
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Removes a vertex together with every edge it sources or targets.
    ///
    /// Returns `true` iff the vertex existed. Every remaining vertex's
    /// adjacency is stripped of edges targeting the removed key, so no
    /// dangling edge survives.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        for adjacent in self.adjacency.values_mut() {
            adjacent.remove(vertex);
        }
        true
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Installs the directed edge `src → dst` with the given weight.
    ///
    /// Rejects (no-op, `false`) a zero weight or `src == dst`. Absent
    /// endpoints are created. Returns `true` iff the edge did not
    /// previously exist; an existing edge is left unchanged, including
    /// its weight (first write wins).
    pub fn add_edge(&mut self, src: V, dst: V, weight: u32) -> bool {
        if weight == 0 || src == dst {
            return false;
        }
        if !self.adjacency.contains_key(&dst) {
            self.adjacency.insert(dst.clone(), HashMap::new());
        }
        let adjacent = self.adjacency.entry(src).or_default();
        if adjacent.contains_key(&dst) {
            return false;
        }
        adjacent.insert(dst, weight);
        true
    }

    /// Returns the weight of the edge `src → dst`, or `None` if either
    /// vertex or the edge is absent.
    #[must_use]
    pub fn edge_weight<Q>(&self, src: &Q, dst: &Q) -> Option<u32>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get(src)?.get(dst).copied()
    }

    /// Removes the edge `src → dst`.
    ///
    /// Returns `true` iff both vertices exist and the edge existed;
    /// otherwise nothing changes.
    pub fn remove_edge<Q>(&mut self, src: &Q, dst: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.adjacency.contains_key(dst) {
            return false;
        }
        self.adjacency
            .get_mut(src)
            .map_or(false, |adjacent| adjacent.remove(dst).is_some())
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns the outgoing-edge targets of a vertex.
    ///
    /// Returns an empty vector both when the vertex has no outgoing edges
    /// and when it is not in the graph at all; the two cases cannot be
    /// told apart through this call. Use [`Graph::has_vertex`] first when
    /// the difference matters.
    #[must_use]
    pub fn neighbors<Q>(&self, vertex: &Q) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency
            .get(vertex)
            .map(|adjacent| adjacent.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
