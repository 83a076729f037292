//! Random graph strategies shared by the property tests.
//!
//! Graphs are generated as deduplicated undirected edge maps over vertices
//! `0..n` with small integer weights, so every distance and tree weight is
//! an exact `f64` and can be compared with `==`. Parallel edges are
//! collapsed (last write wins) because `AdjacencyGraph` keeps one weight per
//! ordered pair while `petgraph` keeps every parallel edge.

#![allow(dead_code)]

use std::collections::BTreeMap;

use graphkit_core::AdjacencyGraph;
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;

#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub n: usize,
    /// `(a, b) -> weight` with `a < b`. No self-loops.
    pub edges: BTreeMap<(usize, usize), f64>,
}

impl RandomGraph {
    fn from_raw(n: usize, raw: Vec<(usize, usize, u8)>) -> Self {
        let mut edges = BTreeMap::new();
        for (a, b, w) in raw {
            if a != b {
                edges.insert((a.min(b), a.max(b)), f64::from(w));
            }
        }
        Self { n, edges }
    }

    pub fn adjacency(&self) -> AdjacencyGraph<usize> {
        let mut g = AdjacencyGraph::with_capacity(self.n);
        for v in 0..self.n {
            g.add_vertex(v);
        }
        for (&(a, b), &w) in &self.edges {
            g.add_undirected_edge(a, b, w);
        }
        g
    }

    pub fn petgraph(&self) -> UnGraph<(), f64> {
        let mut g = UnGraph::with_capacity(self.n, self.edges.len());
        for _ in 0..self.n {
            g.add_node(());
        }
        for (&(a, b), &w) in &self.edges {
            g.add_edge(NodeIndex::new(a), NodeIndex::new(b), w);
        }
        g
    }
}

/// Arbitrary undirected graph with 1..=`max_n` vertices, possibly
/// disconnected.
pub fn arb_graph(max_n: usize) -> impl Strategy<Value = RandomGraph> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u8..20), 0..n * 3)
            .prop_map(move |raw| RandomGraph::from_raw(n, raw))
    })
}

/// Connected undirected graph: a weighted path `0-1-...-(n-1)` plus random
/// extra edges.
pub fn arb_connected_graph(max_n: usize) -> impl Strategy<Value = RandomGraph> {
    (1..=max_n).prop_flat_map(|n| {
        let chain = prop::collection::vec(0u8..20, n - 1);
        let extra = prop::collection::vec((0..n, 0..n, 0u8..20), 0..n * 2);
        (chain, extra).prop_map(move |(chain, extra)| {
            let mut raw: Vec<(usize, usize, u8)> =
                chain.into_iter().enumerate().map(|(i, w)| (i, i + 1, w)).collect();
            raw.extend(extra);
            RandomGraph::from_raw(n, raw)
        })
    })
}

/// A graph together with a valid start vertex.
pub fn arb_graph_and_start(max_n: usize) -> impl Strategy<Value = (RandomGraph, usize)> {
    arb_graph(max_n).prop_flat_map(|g| {
        let n = g.n;
        (Just(g), 0..n)
    })
}
