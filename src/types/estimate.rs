//! Fee estimation inputs and outputs.

use crate::{
    constants::{MAX_ROW_COUNT, MIN_GAS_LIMIT, MIN_ROW_COUNT},
    fees::round5,
    types::MarketSnapshot,
};
use serde::{Deserialize, Serialize};

/// How the gas price sequence of a fee table is generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SequenceMode {
    /// The fixed tier prefix followed by 25 gwei increments.
    Default,
    /// An arithmetic sequence from user-chosen start and step values.
    Custom {
        /// First gas price (gwei).
        start: f64,
        /// Increment (gwei) between consecutive rows.
        step: f64,
    },
}

impl SequenceMode {
    /// Returns a custom mode with start and step clamped to be non-negative
    /// and rounded to 5 decimal places.
    pub fn custom(start: f64, step: f64) -> Self {
        Self::Custom { start: round5(sanitize(start)), step: round5(sanitize(step)) }
    }
}

/// Parameters of a single fee table computation.
///
/// Constructed fresh from current user input on every calculation. The
/// constructor clamps all values into their valid domain, so a constructed
/// input is always safe to estimate from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeEstimationInput {
    /// Mint price (ETH) added on top of the transaction cost.
    pub mint_price_eth: f64,
    /// Gas limit of the estimated transaction.
    pub gas_limit: u64,
    /// Number of rows to produce.
    pub row_count: u32,
    /// Gas price sequence mode.
    pub mode: SequenceMode,
}

impl FeeEstimationInput {
    /// Returns a new input with all parameters clamped into their valid
    /// domain: mint price is floored at zero, gas limit at
    /// [`MIN_GAS_LIMIT`], and the row count into
    /// [`MIN_ROW_COUNT`]`..=`[`MAX_ROW_COUNT`].
    pub fn new(mint_price_eth: f64, gas_limit: u64, row_count: u32, mode: SequenceMode) -> Self {
        Self {
            mint_price_eth: sanitize(mint_price_eth),
            gas_limit: gas_limit.max(MIN_GAS_LIMIT),
            row_count: row_count.clamp(MIN_ROW_COUNT, MAX_ROW_COUNT),
            mode,
        }
    }
}

/// One row of a fee table, derived deterministically from a single gas price
/// and the estimation input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeRow {
    /// Gas price (gwei) this row was computed for.
    pub gas_price_gwei: f64,
    /// Cost of the transaction alone (ETH).
    pub transaction_cost_eth: f64,
    /// Mint price plus transaction cost (ETH).
    pub total_cost_eth: f64,
    /// Recommended wallet balance (ETH), total cost plus the 25% buffer.
    pub balance_needed_eth: f64,
    /// Total cost in USD. `None` when no ETH/USD price was known at
    /// calculation time.
    pub usd_value: Option<f64>,
}

/// An ordered fee table, one row per gas price of the generated sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeTable {
    /// Rows in ascending gas price order.
    pub rows: Vec<FeeRow>,
    /// The market snapshot the table was computed from.
    pub snapshot: MarketSnapshot,
}

/// Clamps a user-supplied value to a finite non-negative number.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
