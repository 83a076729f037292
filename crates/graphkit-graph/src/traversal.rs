//! Breadth-first and depth-first traversal.
//!
//! Both return vertices in first-visit order. Neighbor order is the graph's
//! insertion order, so results are fully deterministic. Each call allocates
//! its own visited set and frontier; nothing is shared between calls.
//!
//! DFS uses an explicit stack of neighbor iterators rather than recursion, so
//! a long path cannot overflow the call stack. The output is the same
//! preorder the recursive formulation produces.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use graphkit_core::{AdjacencyGraph, Error, Result, Vertex};
use tracing::{debug, instrument};

/// Vertices reachable from `start` in breadth-first (FIFO) order.
///
/// Every reachable vertex appears exactly once; unreachable vertices never
/// appear.
///
/// # Errors
///
/// [`Error::KeyNotFound`] if `start` is not a vertex of `graph`.
#[instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count()))]
pub fn bfs<V: Vertex>(graph: &AdjacencyGraph<V>, start: &V) -> Result<Vec<V>> {
    let source = graph
        .index_of(start)
        .ok_or_else(|| Error::key_not_found(start))?;

    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut frontier = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(source);
    frontier.push_back(source);

    while let Some(current) = frontier.pop_front() {
        order.push(current);
        for (next, _) in graph.neighbor_indices(current) {
            if !visited.put(next) {
                frontier.push_back(next);
            }
        }
    }

    debug!(visited = order.len(), "bfs complete");
    Ok(resolve(graph, &order))
}

/// Vertices reachable from `start` in depth-first preorder.
///
/// At each vertex the first unvisited neighbor (in iteration order) is
/// explored completely before the next one is considered.
///
/// # Errors
///
/// [`Error::KeyNotFound`] if `start` is not a vertex of `graph`.
#[instrument(skip_all, fields(start = ?start, vertices = graph.vertex_count()))]
pub fn dfs<V: Vertex>(graph: &AdjacencyGraph<V>, start: &V) -> Result<Vec<V>> {
    let source = graph
        .index_of(start)
        .ok_or_else(|| Error::key_not_found(start))?;

    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut order = vec![source];
    visited.insert(source);

    let mut stack = vec![graph.neighbor_indices(source)];
    let mut max_depth = 1;

    while let Some(neighbors) = stack.last_mut() {
        match neighbors.find(|&(next, _)| !visited.contains(next)) {
            Some((next, _)) => {
                visited.insert(next);
                order.push(next);
                stack.push(graph.neighbor_indices(next));
                max_depth = max_depth.max(stack.len());
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(visited = order.len(), max_depth, "dfs complete");
    Ok(resolve(graph, &order))
}

/// Map dense indices back to owned vertex identifiers.
fn resolve<V: Vertex>(graph: &AdjacencyGraph<V>, order: &[usize]) -> Vec<V> {
    let names: Vec<&V> = graph.vertices().collect();
    order.iter().map(|&i| names[i].clone()).collect()
}
