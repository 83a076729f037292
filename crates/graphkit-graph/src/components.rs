//! Weakly connected components via union-find.

use graphkit_core::{AdjacencyGraph, DisjointSet, Vertex};
use indexmap::IndexMap;
use tracing::{debug, instrument};

/// Partition the vertices of `graph` into weakly connected components.
///
/// Edge direction is ignored. Each component lists its vertices in graph
/// order, and components are ordered by their first vertex.
#[must_use]
#[instrument(skip_all, fields(vertices = graph.vertex_count()))]
pub fn connected_components<V: Vertex>(graph: &AdjacencyGraph<V>) -> Vec<Vec<V>> {
    let mut sets = union_edges(graph);

    let mut groups: IndexMap<usize, Vec<V>> = IndexMap::with_capacity(sets.set_count());
    for (i, v) in graph.vertices().enumerate() {
        groups.entry(sets.find(i)).or_default().push(v.clone());
    }

    debug!(components = groups.len(), "components complete");
    groups.into_values().collect()
}

/// Number of weakly connected components.
#[must_use]
pub fn component_count<V: Vertex>(graph: &AdjacencyGraph<V>) -> usize {
    union_edges(graph).set_count()
}

fn union_edges<V: Vertex>(graph: &AdjacencyGraph<V>) -> DisjointSet {
    let n = graph.vertex_count();
    let mut sets = DisjointSet::new(n);
    for from in 0..n {
        for (to, _) in graph.neighbor_indices(from) {
            sets.union(from, to);
        }
    }
    sets
}
