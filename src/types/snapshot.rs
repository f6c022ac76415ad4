//! Market data snapshots.

use std::time::Instant;

/// An immutable snapshot of the market readings known at a point in time.
///
/// Feeds refresh on their own schedules and may fail silently, so any field
/// can be absent; `as_of` is the moment the snapshot was taken, not the age of
/// the readings. Consumers receive a snapshot by value and never observe later
/// feed updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    /// Latest ETH/USD price, if any non-expired reading exists.
    pub eth_usd: Option<f64>,
    /// 24h ETH/USD price change in percent, if known.
    pub eth_usd_change_24h: Option<f64>,
    /// Latest safe gas price (gwei), if any non-expired reading exists.
    pub gas_gwei: Option<f64>,
    /// When the snapshot was taken.
    pub as_of: Instant,
}

impl MarketSnapshot {
    /// Returns a snapshot with no readings.
    pub fn empty() -> Self {
        Self { eth_usd: None, eth_usd_change_24h: None, gas_gwei: None, as_of: Instant::now() }
    }
}

impl Default for MarketSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
