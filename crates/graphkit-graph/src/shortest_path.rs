//! Single-source shortest paths (Dijkstra).
//!
//! # Algorithm
//!
//! Lazy-deletion Dijkstra over a [`MinQueue`]: the queue is seeded with
//! `(0, source)`; every successful relaxation pushes a fresh
//! `(distance, vertex)` entry instead of decreasing a key in place. A popped
//! entry is stale, and skipped, when its vertex is already settled or its key
//! exceeds the vertex's current table distance.
//!
//! # Preconditions
//!
//! All edge weights must be finite and non-negative. This is checked over the
//! whole graph up front and reported as [`Error::InvalidInput`]; with a
//! negative weight the greedy settle order would not be correct.
//!
//! Vertices not reachable from the source keep a distance of
//! [`f64::INFINITY`].

use fixedbitset::FixedBitSet;
use graphkit_core::{AdjacencyGraph, Error, MinQueue, Result, Vertex};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, instrument, trace};

/// Distances and shortest-path tree from a single source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<V: Vertex> {
    source: usize,
    vertices: IndexSet<V>,
    distance: Vec<f64>,
    predecessor: Vec<Option<usize>>,
}

impl<V: Vertex> ShortestPaths<V> {
    #[must_use]
    pub fn source(&self) -> &V {
        &self.vertices[self.source]
    }

    /// Shortest distance to `v`; `None` when `v` is not in the graph,
    /// `Some(f64::INFINITY)` when it is unreachable.
    #[must_use]
    pub fn distance(&self, v: &V) -> Option<f64> {
        self.vertices.get_index_of(v).map(|i| self.distance[i])
    }

    #[must_use]
    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance(v).is_some_and(f64::is_finite)
    }

    /// Vertices along one shortest path from the source to `target`,
    /// inclusive of both ends. `None` if `target` is absent or unreachable.
    #[must_use]
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let mut current = self.vertices.get_index_of(target)?;
        if !self.distance[current].is_finite() {
            return None;
        }

        let mut path = vec![self.vertices[current].clone()];
        while let Some(prev) = self.predecessor[current] {
            path.push(self.vertices[prev].clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Distance table in graph vertex order.
    #[must_use]
    pub fn distances(&self) -> IndexMap<V, f64> {
        self.vertices
            .iter()
            .cloned()
            .zip(self.distance.iter().copied())
            .collect()
    }

    /// Number of vertices with a finite distance, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_finite()).count()
    }
}

/// Shortest distance from `start` to every vertex of `graph`.
///
/// The table has one entry per vertex in graph order; unreachable vertices
/// map to [`f64::INFINITY`] and `start` maps to `0.0`.
///
/// # Errors
///
/// - [`Error::KeyNotFound`] if `start` is not a vertex.
/// - [`Error::InvalidInput`] if any weight is negative or non-finite.
pub fn dijkstra<V: Vertex>(graph: &AdjacencyGraph<V>, start: &V) -> Result<IndexMap<V, f64>> {
    shortest_paths(graph, start).map(|sp| sp.distances())
}

/// Run Dijkstra from `start`, keeping predecessors for path reconstruction.
///
/// # Errors
///
/// Same as [`dijkstra`].
#[instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn shortest_paths<V: Vertex>(graph: &AdjacencyGraph<V>, start: &V) -> Result<ShortestPaths<V>> {
    let source = graph
        .index_of(start)
        .ok_or_else(|| Error::key_not_found(start))?;
    graph.ensure_non_negative_weights()?;

    let n = graph.vertex_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut settled = FixedBitSet::with_capacity(n);
    let mut queue = MinQueue::with_capacity(n);
    let mut stale = 0usize;

    distance[source] = 0.0;
    queue.push(0.0, source);

    while let Some((dist, current)) = queue.pop() {
        if settled.contains(current) || dist > distance[current] {
            stale += 1;
            trace!(vertex = current, dist, "skipping stale queue entry");
            continue;
        }
        settled.insert(current);

        for (next, weight) in graph.neighbor_indices(current) {
            let candidate = dist + weight;
            if candidate < distance[next] {
                trace!(from = current, to = next, candidate, "relaxed edge");
                distance[next] = candidate;
                predecessor[next] = Some(current);
                queue.push(candidate, next);
            }
        }
    }

    debug!(settled = settled.count_ones(..), stale, "dijkstra complete");

    Ok(ShortestPaths {
        source,
        vertices: graph.vertices().cloned().collect(),
        distance,
        predecessor,
    })
}
