//! Minimum spanning trees and forests.
//!
//! # Overview
//!
//! - [`kruskal`]: global edge ordering plus union-find. Works on an
//!   [`EdgeListGraph`](graphkit_core::EdgeListGraph) and produces a
//!   [`SpanningForest`] covering every component.
//! - [`prim`]: grows one tree outward from a start vertex over an
//!   [`AdjacencyGraph`](graphkit_core::AdjacencyGraph) and reports the
//!   vertices it could not reach.
//!
//! On a connected undirected graph both produce a tree of the same total
//! weight regardless of Prim's start vertex.

pub mod kruskal;
pub mod prim;

pub use kruskal::{kruskal, kruskal_adjacency};
pub use prim::prim;

use graphkit_core::{WeightedEdge, total_weight};

/// Kruskal result: accepted edges in acceptance (ascending weight) order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<V> {
    pub edges: Vec<WeightedEdge<V>>,
    /// Number of trees in the forest. `1` for a connected graph, `0` for an
    /// empty vertex set.
    pub components: usize,
}

impl<V> SpanningForest<V> {
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.edges)
    }

    /// `true` when the forest is a single tree spanning every vertex.
    #[must_use]
    pub const fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Prim result: accepted edges in the order they joined the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<V> {
    pub edges: Vec<WeightedEdge<V>>,
    /// Vertices not connected to the start vertex, in graph order.
    pub unreached: Vec<V>,
}

impl<V> SpanningTree<V> {
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.edges)
    }

    /// `true` when every vertex of the graph is in the tree.
    #[must_use]
    pub const fn is_spanning(&self) -> bool {
        self.unreached.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
