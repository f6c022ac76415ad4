//! The market feed abstraction.

/// A single reading produced by a feed poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedUpdate {
    /// ETH/USD price and, when the source reports it, the 24h change in
    /// percent.
    EthUsd {
        /// Price in USD.
        price: f64,
        /// 24h change in percent.
        change_24h: Option<f64>,
    },
    /// Safe gas price in gwei.
    GasGwei(f64),
}

/// A market data source polled on a fixed schedule.
///
/// Implementations fetch one reading per poll and never retry; a failed poll
/// is logged and counted by the scheduler and the previous reading stays
/// current until it expires.
pub trait PriceFeed: Send + Sync + 'static {
    /// Short name used for task naming, logging and metric labels.
    fn name(&self) -> &'static str;

    /// Polls the source once.
    fn poll(&self) -> impl Future<Output = eyre::Result<FeedUpdate>> + Send;
}
