//! The market oracle task.

use crate::{
    constants::DEFAULT_PRICE_TTL,
    price::{FeedUpdate, metrics::MarketReadingMetrics},
    types::MarketSnapshot,
};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};
use tracing::trace;

/// A market reading taken at a certain timestamp.
#[derive(Debug, Clone, Copy)]
struct ReadingTick {
    /// The value.
    value: f64,
    /// Timestamp when we received the update.
    timestamp: Instant,
}

/// Messages used by the market oracle task.
#[derive(Debug)]
pub enum MarketOracleMessage {
    /// A reading produced by a feed poll.
    Update {
        /// The reading.
        update: FeedUpdate,
        /// When the feed produced it.
        timestamp: Instant,
    },
    /// Request for a snapshot of the current readings.
    Snapshot {
        /// Reply channel.
        tx: oneshot::Sender<MarketSnapshot>,
    },
}

/// Configuration for the market oracle.
#[derive(Debug, Clone)]
pub struct MarketOracleConfig {
    /// Duration after which a reading is considered expired.
    pub price_ttl: Duration,
}

impl Default for MarketOracleConfig {
    fn default() -> Self {
        Self { price_ttl: DEFAULT_PRICE_TTL }
    }
}

/// An oracle owning the latest market readings.
///
/// The readings live inside a spawned task and are only reached over
/// messages, so callers always observe a consistent immutable
/// [`MarketSnapshot`] and there is no shared mutable price state anywhere.
#[derive(Debug, Clone)]
pub struct MarketOracle {
    /// Channel sender to update readings and request snapshots.
    tx: mpsc::UnboundedSender<MarketOracleMessage>,
    /// Constant ETH/USD price used as fallback when no reading is available.
    /// For testing only.
    constant_eth_usd: Option<f64>,
}

impl Default for MarketOracle {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl MarketOracle {
    /// Returns a new [`MarketOracle`].
    pub fn new(config: MarketOracleConfig) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut registry = MarketRegistry::default();
            while let Some(message) = rx.recv().await {
                match message {
                    MarketOracleMessage::Update { update, timestamp } => {
                        trace!(?update, ?timestamp, "Received market update.");
                        registry.insert(update, timestamp);
                    }
                    MarketOracleMessage::Snapshot { tx } => {
                        trace!("Received snapshot request.");
                        let _ = tx.send(registry.snapshot(config.price_ttl));
                    }
                }
            }
        });

        Self { tx, constant_eth_usd: None }
    }

    /// Returns [`Self`] with a constant ETH/USD price to fall back to.
    pub fn with_constant_eth_usd(mut self, price: f64) -> Self {
        self.constant_eth_usd = Some(price);
        self
    }

    /// Returns a sender that feeds can push updates into.
    pub fn update_sender(&self) -> mpsc::UnboundedSender<MarketOracleMessage> {
        self.tx.clone()
    }

    /// Returns a snapshot of the current non-expired readings.
    pub async fn snapshot(&self) -> MarketSnapshot {
        let (req_tx, req_rx) = oneshot::channel();
        let _ = self.tx.send(MarketOracleMessage::Snapshot { tx: req_tx });

        let mut snapshot = req_rx.await.unwrap_or_default();
        if snapshot.eth_usd.is_none() {
            snapshot.eth_usd = self.constant_eth_usd;
        }
        snapshot
    }
}

/// Tracks one reading and its metrics.
struct TrackedReading {
    /// Metrics for this reading.
    metrics: MarketReadingMetrics,
    /// The tracked tick.
    tick: ReadingTick,
}

impl TrackedReading {
    /// Returns the value if the tick is younger than `ttl`, bumping the
    /// expired counter otherwise.
    fn fresh_value(&self, ttl: Duration) -> Option<f64> {
        if self.tick.timestamp.elapsed() > ttl {
            self.metrics.expired_hits.increment(1);
            None
        } else {
            Some(self.tick.value)
        }
    }
}

/// Keeps track of the latest readings per source.
#[derive(Default)]
struct MarketRegistry {
    eth_usd: Option<TrackedReading>,
    eth_usd_change_24h: Option<f64>,
    gas_gwei: Option<TrackedReading>,
}

impl MarketRegistry {
    /// Inserts or updates a reading.
    fn insert(&mut self, update: FeedUpdate, timestamp: Instant) {
        let (slot, value, label) = match update {
            FeedUpdate::EthUsd { price, change_24h } => {
                self.eth_usd_change_24h = change_24h.or(self.eth_usd_change_24h);
                (&mut self.eth_usd, price, "eth-usd")
            }
            FeedUpdate::GasGwei(gwei) => (&mut self.gas_gwei, gwei, "gas-gwei"),
        };

        let tick = ReadingTick { value, timestamp };
        match slot {
            Some(reading) => reading.tick = tick,
            None => {
                *slot = Some(TrackedReading {
                    metrics: MarketReadingMetrics::new_with_labels(&[("reading", label)]),
                    tick,
                });
            }
        }
        if let Some(reading) = slot {
            reading.metrics.rate.set(value);
        }
    }

    /// Takes a snapshot of the non-expired readings.
    fn snapshot(&self, ttl: Duration) -> MarketSnapshot {
        let eth_usd = self.eth_usd.as_ref().and_then(|r| r.fresh_value(ttl));
        MarketSnapshot {
            eth_usd,
            eth_usd_change_24h: eth_usd.and(self.eth_usd_change_24h),
            gas_gwei: self.gas_gwei.as_ref().and_then(|r| r.fresh_value(ttl)),
            as_of: Instant::now(),
        }
    }
}
