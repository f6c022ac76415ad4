//! The feed scheduler.

use crate::price::{
    MarketOracle, MarketOracleMessage, PriceFeed, metrics::FeedTaskMetrics,
};
use std::time::{Duration, Instant};
use tokio::{
    sync::mpsc,
    time::{MissedTickBehavior, interval},
};
use tracing::{debug, error};

/// Owns the periodic polling of market feeds.
///
/// Every feed becomes one named task ticking on its own interval and pushing
/// updates into the oracle; nothing else in the system schedules anything.
#[derive(Debug, Clone)]
pub struct FeedScheduler {
    /// Oracle sender that feed tasks push updates into.
    update_tx: mpsc::UnboundedSender<MarketOracleMessage>,
}

impl FeedScheduler {
    /// Returns a scheduler feeding the given oracle.
    pub fn new(oracle: &MarketOracle) -> Self {
        Self { update_tx: oracle.update_sender() }
    }

    /// Spawns a named periodic task polling `feed` every `period`.
    ///
    /// A failed poll is counted and logged, and the tick skipped; the task
    /// ends when the oracle goes away.
    pub fn spawn<F: PriceFeed>(&self, feed: F, period: Duration) {
        let update_tx = self.update_tx.clone();
        tokio::spawn(async move {
            let metrics = FeedTaskMetrics::new_with_labels(&[("feed", feed.name())]);
            debug!(feed = feed.name(), ?period, "Starting feed task.");

            let mut clock = interval(period);
            clock.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                clock.tick().await;
                match feed.poll().await {
                    Ok(update) => {
                        metrics.updates.increment(1);
                        let message =
                            MarketOracleMessage::Update { update, timestamp: Instant::now() };
                        if update_tx.send(message).is_err() {
                            debug!(feed = feed.name(), "Oracle gone, stopping feed task.");
                            break;
                        }
                    }
                    Err(err) => {
                        metrics.errors.increment(1);
                        error!(feed = feed.name(), ?err, "Failed to poll feed.");
                    }
                }
            }
        });
    }
}
