#![forbid(unsafe_code)]
//! graphkit-core library.
//!
//! Shared building blocks for the graphkit algorithm crates: the graph data
//! model, a disjoint-set, a deterministic min-priority queue, the error
//! taxonomy and policy configuration.
//!
//! # Conventions
//!
//! - **Errors**: algorithms return [`Result`] with the [`Error`] taxonomy;
//!   configuration loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`). No algorithm
//!   prints; see [`logging::init_tracing`].
//! - **Purity**: every algorithm borrows its inputs immutably and builds fresh
//!   scratch state per call.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod queue;
pub mod union_find;

pub use config::{HuffmanConfig, KnapsackConfig, SingleSymbolCode, ToolkitConfig, ZeroWeightPolicy};
pub use error::{Error, ErrorKind, Result};
pub use graph::{AdjacencyGraph, EdgeListGraph, Vertex, WeightedEdge, total_weight};
pub use queue::MinQueue;
pub use union_find::DisjointSet;
