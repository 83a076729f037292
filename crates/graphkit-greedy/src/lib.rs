#![forbid(unsafe_code)]
//! graphkit-greedy library.
//!
//! Greedy algorithms whose locally optimal choice is provably globally
//! optimal:
//!
//! - [`huffman`]: minimum-redundancy prefix-free codes.
//! - [`knapsack`]: the fractional (divisible item) knapsack.
//!
//! # Conventions
//!
//! - **Errors**: `graphkit_core::Result`. Malformed parallel sequences are
//!   `InvalidInput`; nothing is returned partially.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`).
//! - **Policies**: ambiguous edge cases are decided by
//!   `graphkit_core::config`; the plain entry points use the defaults.

pub mod huffman;
pub mod knapsack;

pub use huffman::{CodeEntry, HuffmanCode, huffman_coding, huffman_coding_with};
pub use knapsack::{KnapsackSolution, Selection, fractional_knapsack, fractional_knapsack_with};
