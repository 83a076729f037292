//! Fractional knapsack.
//!
//! Items are ranked by value/weight ratio, highest first. Whole items are
//! taken while they fit; the first item that does not fit is taken
//! fractionally to fill the remaining capacity and the scan stops. For
//! divisible items this greedy choice is optimal.
//!
//! The ranking uses a stable sort, so items with equal ratios are taken in
//! input order. Zero-weight items follow [`ZeroWeightPolicy`]: by default
//! their ratio is infinite and they are taken whole before anything else.

use graphkit_core::{Error, KnapsackConfig, Result, ZeroWeightPolicy};
use tracing::{debug, instrument};

/// A (possibly partial) item taken into the knapsack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Position of the item in the input sequences.
    pub index: usize,
    /// Portion taken, in `(0, 1]`.
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution {
    pub total_value: f64,
    /// Items in the order they were taken.
    pub selections: Vec<Selection>,
    pub remaining_capacity: f64,
}

/// Maximum value achievable with divisible items.
///
/// `weights` and `values` are parallel sequences. Uses the default
/// [`KnapsackConfig`].
///
/// # Errors
///
/// [`Error::InvalidInput`] when the sequences differ in length, `capacity` is
/// negative or non-finite, or a weight or value is negative or non-finite.
pub fn fractional_knapsack(weights: &[f64], values: &[f64], capacity: f64) -> Result<f64> {
    fractional_knapsack_with(weights, values, capacity, &KnapsackConfig::default())
        .map(|solution| solution.total_value)
}

/// Fractional knapsack with explicit policies and the full selection.
///
/// # Errors
///
/// As [`fractional_knapsack`], plus [`Error::InvalidInput`] for a zero-weight
/// item under [`ZeroWeightPolicy::Reject`].
#[instrument(skip_all, fields(items = weights.len(), capacity = capacity))]
pub fn fractional_knapsack_with(
    weights: &[f64],
    values: &[f64],
    capacity: f64,
    config: &KnapsackConfig,
) -> Result<KnapsackSolution> {
    validate(weights, values, capacity)?;

    let mut ratios = Vec::with_capacity(weights.len());
    for (i, (&w, &v)) in weights.iter().zip(values).enumerate() {
        if w == 0.0 {
            match config.zero_weight {
                ZeroWeightPolicy::TakeFirst => ratios.push(f64::INFINITY),
                ZeroWeightPolicy::Reject => {
                    return Err(Error::invalid_input(format!(
                        "item {i} has zero weight"
                    )));
                }
            }
        } else {
            ratios.push(v / w);
        }
    }

    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| ratios[b].total_cmp(&ratios[a]));

    let mut remaining = capacity;
    let mut total_value = 0.0;
    let mut selections = Vec::new();

    for i in order {
        if weights[i] <= remaining {
            remaining -= weights[i];
            total_value += values[i];
            selections.push(Selection {
                index: i,
                fraction: 1.0,
            });
        } else {
            let fraction = remaining / weights[i];
            if fraction > 0.0 {
                total_value += values[i] * fraction;
                selections.push(Selection { index: i, fraction });
                remaining = 0.0;
            }
            break;
        }
    }

    debug!(
        taken = selections.len(),
        total_value, remaining, "knapsack complete"
    );

    Ok(KnapsackSolution {
        total_value,
        selections,
        remaining_capacity: remaining,
    })
}

fn validate(weights: &[f64], values: &[f64], capacity: f64) -> Result<()> {
    if weights.len() != values.len() {
        return Err(Error::invalid_input(format!(
            "{} weights but {} values",
            weights.len(),
            values.len()
        )));
    }
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(Error::invalid_input(format!(
            "capacity {capacity} must be finite and non-negative"
        )));
    }
    for (name, seq) in [("weight", weights), ("value", values)] {
        if let Some((i, x)) = seq
            .iter()
            .enumerate()
            .find(|(_, x)| !x.is_finite() || **x < 0.0)
        {
            return Err(Error::invalid_input(format!(
                "item {i} has {name} {x}; must be finite and non-negative"
            )));
        }
    }
    Ok(())
}
