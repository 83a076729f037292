#![forbid(unsafe_code)]
//! graphkit-graph library.
//!
//! Traversal, shortest-path and spanning-tree algorithms over the graph
//! types of `graphkit-core`.
//!
//! | Module | Entry points |
//! |--------|--------------|
//! | [`traversal`] | [`bfs`], [`dfs`] |
//! | [`shortest_path`] | [`dijkstra`], [`shortest_paths`] |
//! | [`mst`] | [`kruskal`], [`kruskal_adjacency`], [`prim`] |
//! | [`components`] | [`connected_components`], [`component_count`] |
//!
//! # Conventions
//!
//! - **Errors**: `graphkit_core::Result`; `KeyNotFound` for a missing start
//!   vertex or edge endpoint, `InvalidInput` for weights an algorithm cannot
//!   accept. No partial result is returned on error.
//! - **Logging**: `tracing` spans per call, `debug!` summaries, `trace!`
//!   per step.
//! - **Determinism**: neighbor order is graph insertion order and every
//!   priority queue breaks ties by insertion sequence.

pub mod components;
pub mod mst;
pub mod shortest_path;
pub mod traversal;

pub use components::{component_count, connected_components};
pub use mst::{SpanningForest, SpanningTree, kruskal, kruskal_adjacency, prim};
pub use shortest_path::{ShortestPaths, dijkstra, shortest_paths};
pub use traversal::{bfs, dfs};
