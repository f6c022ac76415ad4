//! Market data: oracle, feeds and the feed scheduler.

mod feed;
pub use feed::{FeedUpdate, PriceFeed};

mod fetchers;
pub use fetchers::*;

mod oracle;
pub use oracle::{MarketOracle, MarketOracleConfig, MarketOracleMessage};

mod scheduler;
pub use scheduler::FeedScheduler;

mod metrics;
