//! Estimator constants.

use std::time::Duration;

/// The protocol-level minimum gas cost of a plain transfer.
///
/// User-supplied gas limits below this are floored to it.
pub const MIN_GAS_LIMIT: u64 = 21_000;

/// Minimum number of rows in a fee table.
pub const MIN_ROW_COUNT: u32 = 5;

/// Maximum number of rows in a fee table.
pub const MAX_ROW_COUNT: u32 = 30;

/// Default number of rows when none is given.
pub const DEFAULT_ROW_COUNT: u32 = 15;

/// Default starting gas price (gwei) for custom sequences.
pub const DEFAULT_CUSTOM_START: f64 = 10.0;

/// Default gas price step (gwei) for custom sequences.
pub const DEFAULT_CUSTOM_STEP: f64 = 15.0;

/// Multiplier applied to the total cost to compute the recommended wallet
/// balance, a fixed 25% safety buffer.
pub const BALANCE_BUFFER: f64 = 1.25;

/// The fixed gas price tiers (gwei) that open a default-mode sequence.
///
/// These reflect common safe-low / standard / fast boundaries, not live data.
pub const DEFAULT_GAS_TIERS: [f64; 4] = [5.0, 10.0, 15.0, 25.0];

/// Older three-tier variant of [`DEFAULT_GAS_TIERS`], kept as a policy option.
pub const LEGACY_GAS_TIERS: [f64; 3] = [5.0, 15.0, 25.0];

/// Gas price increment (gwei) between rows past the fixed tiers.
pub const TIER_STEP: f64 = 25.0;

/// Wei per gwei.
pub const WEI_PER_GWEI: f64 = 1e9;

/// Wei per ETH.
pub const WEI_PER_ETH: f64 = 1e18;

/// Default decimal places for gwei values in `1.0..10.0`.
pub const DEFAULT_MID_GWEI_DECIMALS: u8 = 2;

/// Default interval between gas price refreshes.
pub const DEFAULT_GAS_REFRESH: Duration = Duration::from_secs(5);

/// Default interval between ETH/USD price refreshes.
pub const DEFAULT_ETH_REFRESH: Duration = Duration::from_secs(15);

/// Default duration after which a market reading is considered expired.
pub const DEFAULT_PRICE_TTL: Duration = Duration::from_secs(300);
