//! Kruskal's minimum spanning forest.
//!
//! Edges are considered in ascending weight order (a stable sort, so equal
//! weights keep their list order) and accepted whenever their endpoints lie in
//! different components of a per-call [`DisjointSet`]. The caller's edge list
//! is never reordered; only a vector of positions is sorted.

use graphkit_core::{AdjacencyGraph, DisjointSet, EdgeListGraph, Error, Result, Vertex};
use indexmap::IndexSet;
use tracing::{debug, instrument, trace};

use super::SpanningForest;

/// Minimum spanning forest of an explicit vertex set and edge list.
///
/// Returns `|V| - 1` edges when the graph is connected, fewer otherwise (one
/// tree per component). Self-loops and duplicate edges are legal; they are
/// discarded by the cycle check like any other redundant edge. Negative
/// weights are permitted.
///
/// # Errors
///
/// - [`Error::KeyNotFound`] if an edge endpoint is not in `graph.vertices`.
/// - [`Error::InvalidInput`] if an edge weight is NaN.
#[instrument(skip_all, fields(vertices = graph.vertices.len(), edges = graph.edges.len()))]
pub fn kruskal<V: Vertex>(graph: &EdgeListGraph<V>) -> Result<SpanningForest<V>> {
    let index: IndexSet<&V> = graph.vertices.iter().collect();

    let mut endpoints = Vec::with_capacity(graph.edges.len());
    for edge in &graph.edges {
        if edge.weight.is_nan() {
            return Err(Error::invalid_input(format!(
                "edge {:?} -> {:?} has NaN weight",
                edge.from, edge.to
            )));
        }
        let a = index
            .get_index_of(&edge.from)
            .ok_or_else(|| Error::key_not_found(&edge.from))?;
        let b = index
            .get_index_of(&edge.to)
            .ok_or_else(|| Error::key_not_found(&edge.to))?;
        endpoints.push((a, b));
    }

    let mut order: Vec<usize> = (0..graph.edges.len()).collect();
    order.sort_by(|&x, &y| graph.edges[x].weight.total_cmp(&graph.edges[y].weight));

    let tree_size = index.len().saturating_sub(1);
    let mut sets = DisjointSet::new(index.len());
    let mut accepted = Vec::with_capacity(tree_size);

    for pos in order {
        if accepted.len() == tree_size {
            break;
        }
        let (a, b) = endpoints[pos];
        if sets.union(a, b) {
            accepted.push(graph.edges[pos].clone());
        } else {
            trace!(edge = pos, "discarding edge that would close a cycle");
        }
    }

    debug!(
        accepted = accepted.len(),
        components = sets.set_count(),
        "kruskal complete"
    );

    Ok(SpanningForest {
        edges: accepted,
        components: sets.set_count(),
    })
}

/// Kruskal over an adjacency graph, treating it as undirected.
///
/// Each unordered vertex pair contributes its first stored edge.
///
/// # Errors
///
/// [`Error::InvalidInput`] if an edge weight is NaN.
pub fn kruskal_adjacency<V: Vertex>(graph: &AdjacencyGraph<V>) -> Result<SpanningForest<V>> {
    kruskal(&graph.to_undirected_edge_list())
}
