//! Policy configuration for the edge cases that have more than one
//! reasonable answer.
//!
//! Every algorithm has a default entry point that uses
//! [`ToolkitConfig::default`]; the `_with` variants take an explicit config.
//! An embedding application may keep the policies in a TOML file:
//!
//! ```toml
//! [huffman]
//! single_symbol_code = "zero"   # or "empty"
//!
//! [knapsack]
//! zero_weight = "take_first"    # or "reject"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    #[serde(default)]
    pub huffman: HuffmanConfig,
    #[serde(default)]
    pub knapsack: KnapsackConfig,
}

/// Code assigned when Huffman coding is given exactly one symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleSymbolCode {
    /// The lone symbol is coded as `"0"`, so encoded messages stay non-empty
    /// and decodable.
    #[default]
    Zero,
    /// The lone symbol gets the empty code (the degenerate one-leaf tree).
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanConfig {
    #[serde(default)]
    pub single_symbol_code: SingleSymbolCode,
}

/// Treatment of zero-weight items in the fractional knapsack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroWeightPolicy {
    /// Ratio is treated as infinite: taken whole before any other item.
    #[default]
    TakeFirst,
    /// Fail with `InvalidInput`.
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnapsackConfig {
    #[serde(default)]
    pub zero_weight: ZeroWeightPolicy,
}

/// Parse a TOML policy document. Missing tables and keys take defaults.
pub fn parse_config(content: &str) -> Result<ToolkitConfig> {
    toml::from_str::<ToolkitConfig>(content).context("Failed to parse graphkit config")
}

/// Load policies from `path`, or the defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<ToolkitConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ToolkitConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ToolkitConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
