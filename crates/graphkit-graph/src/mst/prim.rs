//! Prim's minimum spanning tree, grown from a start vertex.
//!
//! The frontier is a [`MinQueue`] of candidate edges `(from, to)` keyed by
//! weight. Equal weights are taken in the order they were pushed. Entries
//! whose destination has been visited since they were pushed are stale and
//! are dropped on pop.
//!
//! Only the component containing `start` is covered. Vertices outside it are
//! returned in [`SpanningTree::unreached`] rather than silently omitted.

use fixedbitset::FixedBitSet;
use graphkit_core::{AdjacencyGraph, Error, MinQueue, Result, Vertex, WeightedEdge};
use tracing::{debug, instrument, trace};

use super::SpanningTree;

/// Minimum spanning tree of the component of `graph` that contains `start`.
///
/// Follows outgoing edges, so the graph should be stored undirected (both
/// directions present) for a true MST.
///
/// # Errors
///
/// - [`Error::KeyNotFound`] if `start` is not a vertex.
/// - [`Error::InvalidInput`] if any weight is negative or non-finite.
#[instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count()))]
pub fn prim<V: Vertex>(graph: &AdjacencyGraph<V>, start: &V) -> Result<SpanningTree<V>> {
    let source = graph
        .index_of(start)
        .ok_or_else(|| Error::key_not_found(start))?;
    graph.ensure_non_negative_weights()?;

    let names: Vec<&V> = graph.vertices().collect();
    let n = names.len();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut visited_count = 1;
    visited.insert(source);

    let mut frontier = MinQueue::new();
    for (to, weight) in graph.neighbor_indices(source) {
        frontier.push(weight, (source, to));
    }

    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    while visited_count < n {
        let Some((weight, (from, to))) = frontier.pop() else {
            break;
        };
        if visited.put(to) {
            trace!(from, to, "dropping stale frontier edge");
            continue;
        }
        visited_count += 1;
        edges.push(WeightedEdge::new(names[from].clone(), names[to].clone(), weight));

        for (next, next_weight) in graph.neighbor_indices(to) {
            if !visited.contains(next) {
                frontier.push(next_weight, (to, next));
            }
        }
    }

    let unreached: Vec<V> = (0..n)
        .filter(|&i| !visited.contains(i))
        .map(|i| names[i].clone())
        .collect();

    debug!(
        accepted = edges.len(),
        unreached = unreached.len(),
        "prim complete"
    );

    Ok(SpanningTree { edges, unreached })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::from_undirected_edges([
            ("A", "B", 1.0),
            ("A", "C", 4.0),
            ("B", "C", 2.0),
            ("B", "D", 5.0),
            ("C", "D", 1.0),
        ])
    }

    #[test]
    fn grows_cheapest_edge_first() {
        let tree = prim(&diamond(), &"A").unwrap();
        assert_eq!(
            tree.edges,
            vec![
                WeightedEdge::new("A", "B", 1.0),
                WeightedEdge::new("B", "C", 2.0),
                WeightedEdge::new("C", "D", 1.0),
            ]
        );
        assert!(tree.is_spanning());
        assert!((tree.total_weight() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weight_is_independent_of_start() {
        let g = diamond();
        for start in ["A", "B", "C", "D"] {
            let tree = prim(&g, &start).unwrap();
            assert!((tree.total_weight() - 4.0).abs() < f64::EPSILON, "start {start}");
            assert_eq!(tree.len(), 3);
        }
    }

    #[test]
    fn disconnected_vertices_are_reported() {
        let mut g = diamond();
        g.add_undirected_edge("X", "Y", 1.0);
        let tree = prim(&g, &"A").unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.unreached, vec!["X", "Y"]);
        assert!(!tree.is_spanning());
    }

    #[test]
    fn single_vertex_tree_is_empty_but_spanning() {
        let mut g: AdjacencyGraph<u8> = AdjacencyGraph::new();
        g.add_vertex(1);
        let tree = prim(&g, &1).unwrap();
        assert!(tree.is_empty());
        assert!(tree.is_spanning());
    }

    #[test]
    fn missing_start_is_key_not_found() {
        assert_eq!(
            prim(&diamond(), &"Z"),
            Err(Error::KeyNotFound("\"Z\"".into()))
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut g = diamond();
        g.add_undirected_edge("A", "D", -1.0);
        assert!(matches!(prim(&g, &"A"), Err(Error::InvalidInput(_))));
    }
}
