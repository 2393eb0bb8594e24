//! Vertex consolidation: collapse two connected vertices into a survivor.
//!
//! The merged vertex keeps the union of both edge sets. When the two
//! vertices disagree on the weight of an edge to (or from) the same third
//! vertex, the smaller weight wins.

use std::collections::HashMap;
use std::hash::Hash;

use super::ordering::VertexOrder;
use super::store::Graph;

impl<V, O> Graph<V, O>
where
    V: Eq + Hash + Clone,
    O: VertexOrder<V>,
{
    /// Merges `v1` and `v2` into a single survivor vertex.
    ///
    /// Succeeds only when both vertices exist **and** at least one direct
    /// edge connects them (`v1 → v2`, `v2 → v1`, or both); otherwise
    /// returns `false` with no change.
    ///
    /// The survivor is `v1` when the graph's ordering says
    /// `compare(v1, v2) <= 0`, else `v2` (ties favor `v1`). Its outgoing
    /// edges are the union of both vertices' remaining outgoing edges and
    /// its incoming edges the union of both incoming sets, taking the
    /// minimum weight wherever both contributed an edge for the same third
    /// vertex. The direct edges between the pair are consumed first, so a
    /// merge can never introduce a self-loop.
    ///
    /// This is a multi-step mutation with no internal locking; it must not
    /// run concurrently with other calls on the same graph.
    pub fn consolidate(&mut self, v1: &V, v2: &V) -> bool {
        if !self.has_vertex(v1) || !self.has_vertex(v2) {
            return false;
        }

        // Step 1: consume the direct edge(s) between the pair. If neither
        // direction existed the vertices are not adjacent and the merge
        // is rejected.
        let forward = self.remove_edge(v1, v2);
        let backward = self.remove_edge(v2, v1);
        if !forward && !backward {
            return false;
        }

        let survivor = if self.ordering.compare(v1, v2).is_le() {
            v1.clone()
        } else {
            v2.clone()
        };

        let outgoing = self.merged_outgoing(v1, v2);
        let incoming = self.merged_incoming(v1, v2);

        self.remove_vertex(v1);
        self.remove_vertex(v2);
        self.add_vertex(survivor.clone());

        // The merged maps already satisfy every store invariant: weights
        // are positive, the survivor appears in neither map (the mutual
        // edges were consumed in step 1), and every third vertex involved
        // still exists. Install them directly.
        if let Some(adjacent) = self.adjacency.get_mut(&survivor) {
            adjacent.extend(outgoing);
        }
        for (source, weight) in incoming {
            if let Some(adjacent) = self.adjacency.get_mut(&source) {
                adjacent.insert(survivor.clone(), weight);
            }
        }

        true
    }

    /// Union of both vertices' outgoing edges, minimum weight on conflict.
    fn merged_outgoing(&self, v1: &V, v2: &V) -> HashMap<V, u32> {
        let mut merged = self.adjacency.get(v1).cloned().unwrap_or_default();
        if let Some(adjacent) = self.adjacency.get(v2) {
            for (target, &weight) in adjacent {
                merged
                    .entry(target.clone())
                    .and_modify(|w| *w = (*w).min(weight))
                    .or_insert(weight);
            }
        }
        merged
    }

    /// Union of both vertices' incoming edges, minimum weight on conflict.
    fn merged_incoming(&self, v1: &V, v2: &V) -> HashMap<V, u32> {
        let mut merged = HashMap::new();
        for (source, adjacent) in &self.adjacency {
            let weight = match (adjacent.get(v1), adjacent.get(v2)) {
                (Some(&to_v1), Some(&to_v2)) => to_v1.min(to_v2),
                (Some(&to_v1), None) => to_v1,
                (None, Some(&to_v2)) => to_v2,
                (None, None) => continue,
            };
            merged.insert(source.clone(), weight);
        }
        merged
    }
}
