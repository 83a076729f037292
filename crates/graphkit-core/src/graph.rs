//! In-memory graph representations shared by every algorithm crate.
//!
//! # Overview
//!
//! Two forms are provided:
//!
//! - [`AdjacencyGraph`]: vertex → (neighbor → weight). Used by traversal,
//!   Dijkstra and Prim. Backed by [`IndexMap`] so both vertex and neighbor
//!   iteration follow insertion order, which makes every traversal
//!   deterministic.
//! - [`EdgeListGraph`]: an explicit vertex list plus an ordered edge list.
//!   Used by Kruskal. Duplicate edges are kept and treated independently.
//!
//! ## Closure invariant
//!
//! Every neighbor named in an [`AdjacencyGraph`] is itself a vertex key.
//! The mutating API maintains this by inserting missing endpoints, and the
//! validating constructors ([`AdjacencyGraph::from_adjacency`],
//! [`AdjacencyGraph::unweighted`], deserialization) reject dangling
//! neighbors with [`Error::KeyNotFound`]. Algorithms can therefore address
//! vertices by dense index without re-checking membership.

use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Bound satisfied by every vertex or symbol identifier.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Vertex for T {}

// ---------------------------------------------------------------------------
// WeightedEdge
// ---------------------------------------------------------------------------

/// A single weighted edge `(from, to, weight)`.
///
/// Used as Kruskal input and as the output edge type of both MST algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> WeightedEdge<V> {
    #[must_use]
    pub const fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl<V> From<(V, V, f64)> for WeightedEdge<V> {
    fn from((from, to, weight): (V, V, f64)) -> Self {
        Self { from, to, weight }
    }
}

/// Sum of edge weights.
#[must_use]
pub fn total_weight<V>(edges: &[WeightedEdge<V>]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}

// ---------------------------------------------------------------------------
// AdjacencyGraph
// ---------------------------------------------------------------------------

/// Weighted graph stored as vertex → (neighbor → weight).
///
/// Directed by default; use [`AdjacencyGraph::add_undirected_edge`] to store
/// both directions. Re-adding an existing edge replaces its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph<V: Vertex> {
    adjacency: IndexMap<V, IndexMap<V, f64>>,
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> AdjacencyGraph<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(vertices),
        }
    }

    /// Build from a raw nested mapping, validating the closure invariant.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] naming the first neighbor that is not a key.
    pub fn from_adjacency(adjacency: IndexMap<V, IndexMap<V, f64>>) -> Result<Self> {
        for neighbors in adjacency.values() {
            if let Some(missing) = neighbors.keys().find(|n| !adjacency.contains_key(*n)) {
                return Err(Error::key_not_found(missing));
            }
        }
        Ok(Self { adjacency })
    }

    /// Build from plain adjacency lists, giving every edge weight `1.0`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if a listed neighbor never appears as a vertex.
    pub fn unweighted<I, N>(lists: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let adjacency = lists
            .into_iter()
            .map(|(v, ns)| (v, ns.into_iter().map(|n| (n, 1.0)).collect()))
            .collect();
        Self::from_adjacency(adjacency)
    }

    /// Build an undirected graph from `(a, b, weight)` triples.
    #[must_use]
    pub fn from_undirected_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut graph = Self::new();
        for (a, b, w) in edges {
            graph.add_undirected_edge(a, b, w);
        }
        graph
    }

    /// Insert `v` if absent and return its dense index.
    pub fn add_vertex(&mut self, v: V) -> usize {
        match self.adjacency.get_index_of(&v) {
            Some(i) => i,
            None => self.adjacency.insert_full(v, IndexMap::new()).0,
        }
    }

    /// Insert the directed edge `from → to`, adding either endpoint if absent.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) {
        self.adjacency
            .entry(from)
            .or_default()
            .insert(to.clone(), weight);
        self.add_vertex(to);
    }

    /// Insert `a → b` and `b → a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: f64) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed edges (an undirected edge counts twice).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    #[must_use]
    pub fn contains(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Dense index of `v` (its insertion position).
    #[must_use]
    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.adjacency.get_index_of(v)
    }

    /// Vertex stored at dense index `i`.
    #[must_use]
    pub fn vertex_at(&self, i: usize) -> Option<&V> {
        self.adjacency.get_index(i).map(|(v, _)| v)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Outgoing `(neighbor, weight)` pairs of `v`, or `None` if `v` is absent.
    pub fn neighbors(&self, v: &V) -> Option<impl Iterator<Item = (&V, f64)> + '_> {
        self.adjacency
            .get(v)
            .map(|ns| ns.iter().map(|(n, &w)| (n, w)))
    }

    /// Outgoing `(neighbor index, weight)` pairs of the vertex at index `i`.
    ///
    /// Empty when `i` is out of range.
    pub fn neighbor_indices(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency
            .get_index(i)
            .into_iter()
            .flat_map(move |(_, ns)| {
                ns.iter()
                    .filter_map(move |(n, &w)| self.adjacency.get_index_of(n).map(|j| (j, w)))
            })
    }

    /// Weight of `from → to`, if that edge exists.
    #[must_use]
    pub fn weight(&self, from: &V, to: &V) -> Option<f64> {
        self.adjacency.get(from).and_then(|ns| ns.get(to)).copied()
    }

    /// Fail unless every weight is finite and `>= 0`.
    ///
    /// Dijkstra and Prim assume non-negative weights; they call this before
    /// doing any work so no partial result is ever produced.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] naming the first offending edge.
    pub fn ensure_non_negative_weights(&self) -> Result<()> {
        for (from, ns) in &self.adjacency {
            for (to, &w) in ns {
                if !w.is_finite() || w < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "edge {from:?} -> {to:?} has weight {w}; weights must be finite and non-negative"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Every stored directed edge, in vertex then neighbor order.
    #[must_use]
    pub fn to_edge_list(&self) -> EdgeListGraph<V> {
        let edges = self
            .adjacency
            .iter()
            .flat_map(|(from, ns)| {
                ns.iter()
                    .map(move |(to, &w)| WeightedEdge::new(from.clone(), to.clone(), w))
            })
            .collect();
        EdgeListGraph {
            vertices: self.adjacency.keys().cloned().collect(),
            edges,
        }
    }

    /// Like [`to_edge_list`](Self::to_edge_list) but keeps only the first
    /// occurrence of each unordered vertex pair, so a symmetric graph yields
    /// every undirected edge once.
    #[must_use]
    pub fn to_undirected_edge_list(&self) -> EdgeListGraph<V> {
        let mut seen: IndexSet<(usize, usize)> = IndexSet::new();
        let mut edges = Vec::new();
        for (i, (from, ns)) in self.adjacency.iter().enumerate() {
            for (to, &w) in ns {
                let Some(j) = self.adjacency.get_index_of(to) else {
                    continue;
                };
                if seen.insert((i.min(j), i.max(j))) {
                    edges.push(WeightedEdge::new(from.clone(), to.clone(), w));
                }
            }
        }
        EdgeListGraph {
            vertices: self.adjacency.keys().cloned().collect(),
            edges,
        }
    }

    /// Borrow the underlying nested mapping.
    #[must_use]
    pub const fn as_map(&self) -> &IndexMap<V, IndexMap<V, f64>> {
        &self.adjacency
    }
}

impl<V: Vertex + Serialize> Serialize for AdjacencyGraph<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

impl<'de, V> Deserialize<'de> for AdjacencyGraph<V>
where
    V: Vertex + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = IndexMap::<V, IndexMap<V, f64>>::deserialize(deserializer)?;
        Self::from_adjacency(raw).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// EdgeListGraph
// ---------------------------------------------------------------------------

/// Explicit vertex set plus ordered edge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeListGraph<V> {
    pub vertices: Vec<V>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<WeightedEdge<V>>,
}

impl<V> EdgeListGraph<V> {
    #[must_use]
    pub fn new<E>(vertices: Vec<V>, edges: impl IntoIterator<Item = E>) -> Self
    where
        E: Into<WeightedEdge<V>>,
    {
        Self {
            vertices,
            edges: edges.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push_edge(&mut self, from: V, to: V, weight: f64) {
        self.edges.push(WeightedEdge::new(from, to, weight));
    }
}
