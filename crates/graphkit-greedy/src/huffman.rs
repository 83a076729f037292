//! Huffman coding.
//!
//! # Algorithm
//!
//! Every symbol starts as a singleton node weighted by its frequency. The two
//! lightest nodes are repeatedly removed from a [`MinQueue`]; every code in
//! the first gains a leading `0`, every code in the second a leading `1`, and
//! the merged node (weight = sum) is pushed back. The loop is iterative and
//! ends when one node remains.
//!
//! # Tie-breaking
//!
//! Leaves are pushed in input order and merged nodes after them, and the queue
//! pops equal weights first-in first-out. Among equally light nodes the one
//! created earliest is therefore taken first (input order for leaves, creation
//! order for merged nodes), which makes the code fully deterministic.
//!
//! # Single symbol
//!
//! A lone symbol has no sibling to distinguish it from. By default it is
//! coded `"0"`; [`SingleSymbolCode::Empty`] selects the empty code instead.
//!
//! The result lists entries sorted by (code length, code value).

use std::collections::{HashMap, HashSet};

use graphkit_core::{Error, HuffmanConfig, MinQueue, Result, SingleSymbolCode, Vertex};
use tracing::{debug, instrument};

/// One symbol and its assigned codeword.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeEntry<S> {
    pub symbol: S,
    /// Codeword over the alphabet `{'0', '1'}`.
    pub code: String,
    pub frequency: f64,
}

/// A complete prefix-free code for a symbol alphabet.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanCode<S: Vertex> {
    entries: Vec<CodeEntry<S>>,
    by_symbol: HashMap<S, usize>,
}

impl<S: Vertex> HuffmanCode<S> {
    fn from_entries(mut entries: Vec<CodeEntry<S>>) -> Self {
        entries.sort_by(|a, b| {
            a.code
                .len()
                .cmp(&b.code.len())
                .then_with(|| a.code.cmp(&b.code))
        });
        let by_symbol = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.symbol.clone(), i))
            .collect();
        Self { entries, by_symbol }
    }

    /// Entries sorted by (code length, code value).
    #[must_use]
    pub fn entries(&self) -> &[CodeEntry<S>] {
        &self.entries
    }

    /// `(symbol, code)` pairs in entry order.
    pub fn pairs(&self) -> impl Iterator<Item = (&S, &str)> + '_ {
        self.entries.iter().map(|e| (&e.symbol, e.code.as_str()))
    }

    #[must_use]
    pub fn code_for(&self, symbol: &S) -> Option<&str> {
        self.by_symbol
            .get(symbol)
            .map(|&i| self.entries[i].code.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of `frequency * code length` over all symbols.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn weighted_length(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.frequency * e.code.len() as f64)
            .sum()
    }

    /// Frequency-weighted mean code length; `0.0` when all frequencies are
    /// zero.
    #[must_use]
    pub fn average_length(&self) -> f64 {
        let total: f64 = self.entries.iter().map(|e| e.frequency).sum();
        if total > 0.0 {
            self.weighted_length() / total
        } else {
            0.0
        }
    }

    /// `true` if no codeword is a prefix of another.
    #[must_use]
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.entries.iter().map(|e| e.code.as_str()).collect();
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// Concatenate the codewords of `message`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] for a symbol outside the alphabet.
    pub fn encode(&self, message: &[S]) -> Result<String> {
        let mut out = String::new();
        for symbol in message {
            let code = self
                .code_for(symbol)
                .ok_or_else(|| Error::key_not_found(symbol))?;
            out.push_str(code);
        }
        Ok(out)
    }

    /// Split `bits` back into symbols.
    ///
    /// With [`SingleSymbolCode::Empty`] the lone codeword is empty, so only
    /// the empty bit string decodes (to an empty message).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `bits` contains a character other than `0`
    /// or `1`, or ends in the middle of a codeword.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        let lookup: HashMap<&str, usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.code.is_empty())
            .map(|(i, e)| (e.code.as_str(), i))
            .collect();
        let longest = self.entries.iter().map(|e| e.code.len()).max().unwrap_or(0);

        let mut message = Vec::new();
        let mut start = 0;
        for (pos, ch) in bits.char_indices() {
            if ch != '0' && ch != '1' {
                return Err(Error::invalid_input(format!(
                    "invalid bit {ch:?} at position {pos}"
                )));
            }
            let word = &bits[start..=pos];
            if let Some(&i) = lookup.get(word) {
                message.push(self.entries[i].symbol.clone());
                start = pos + 1;
            } else if word.len() >= longest {
                return Err(Error::invalid_input(format!(
                    "bits {word:?} at position {start} match no codeword"
                )));
            }
        }

        if start != bits.len() {
            return Err(Error::invalid_input(format!(
                "{} trailing bits do not form a codeword",
                bits.len() - start
            )));
        }
        Ok(message)
    }
}

/// Build a Huffman code with the default [`HuffmanConfig`].
///
/// `symbols` and `frequencies` are parallel sequences.
///
/// # Errors
///
/// [`Error::InvalidInput`] when the sequences differ in length or are empty,
/// a symbol repeats, or a frequency is negative or non-finite.
pub fn huffman_coding<S: Vertex>(symbols: &[S], frequencies: &[f64]) -> Result<HuffmanCode<S>> {
    huffman_coding_with(symbols, frequencies, &HuffmanConfig::default())
}

/// Build a Huffman code with explicit policies.
///
/// # Errors
///
/// Same as [`huffman_coding`].
#[instrument(skip_all, fields(symbols = symbols.len()))]
pub fn huffman_coding_with<S: Vertex>(
    symbols: &[S],
    frequencies: &[f64],
    config: &HuffmanConfig,
) -> Result<HuffmanCode<S>> {
    validate(symbols, frequencies)?;

    let n = symbols.len();
    // Bits are appended deepest-first and reversed once at the end.
    let mut bits: Vec<Vec<u8>> = vec![Vec::new(); n];

    if n == 1 && config.single_symbol_code == SingleSymbolCode::Zero {
        bits[0].push(b'0');
    }

    let mut queue: MinQueue<Vec<usize>> = MinQueue::with_capacity(n);
    for (i, &freq) in frequencies.iter().enumerate() {
        queue.push(freq, vec![i]);
    }

    let mut merges = 0usize;
    while queue.len() > 1 {
        let (Some((lo_weight, lo)), Some((hi_weight, hi))) = (queue.pop(), queue.pop()) else {
            break;
        };
        for &m in &lo {
            bits[m].push(b'0');
        }
        for &m in &hi {
            bits[m].push(b'1');
        }
        let mut members = lo;
        members.extend(hi);
        queue.push(lo_weight + hi_weight, members);
        merges += 1;
    }

    let entries = symbols
        .iter()
        .zip(frequencies)
        .zip(bits)
        .map(|((symbol, &frequency), mut code)| {
            code.reverse();
            CodeEntry {
                symbol: symbol.clone(),
                code: code.into_iter().map(char::from).collect(),
                frequency,
            }
        })
        .collect();

    let code = HuffmanCode::from_entries(entries);
    debug!(
        merges,
        weighted_length = code.weighted_length(),
        "huffman coding complete"
    );
    Ok(code)
}

fn validate<S: Vertex>(symbols: &[S], frequencies: &[f64]) -> Result<()> {
    if symbols.len() != frequencies.len() {
        return Err(Error::invalid_input(format!(
            "{} symbols but {} frequencies",
            symbols.len(),
            frequencies.len()
        )));
    }
    if symbols.is_empty() {
        return Err(Error::invalid_input("at least one symbol is required"));
    }
    if let Some(f) = frequencies.iter().find(|f| !f.is_finite() || **f < 0.0) {
        return Err(Error::invalid_input(format!(
            "frequency {f} must be finite and non-negative"
        )));
    }

    let mut seen = HashSet::with_capacity(symbols.len());
    for s in symbols {
        if !seen.insert(s) {
            return Err(Error::invalid_input(format!("duplicate symbol {s:?}")));
        }
    }
    Ok(())
}
