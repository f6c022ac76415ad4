//! Market data metrics.

use metrics::{Counter, Gauge};
use metrics_derive::Metrics;

/// Metrics for one tracked market reading.
#[derive(Metrics)]
#[metrics(scope = "oracle")]
pub(crate) struct MarketReadingMetrics {
    /// Latest value of this reading.
    pub rate: Gauge,
    /// Snapshot lookups that found this reading expired.
    pub expired_hits: Counter,
}

/// Metrics for one scheduled feed task.
#[derive(Metrics)]
#[metrics(scope = "feeds")]
pub(crate) struct FeedTaskMetrics {
    /// Successful polls.
    pub updates: Counter,
    /// Failed polls.
    pub errors: Counter,
}
