#![allow(missing_docs)]

use mintfee::price::{
    FeedScheduler, FeedUpdate, MarketOracle, MarketOracleConfig, MarketOracleMessage, PriceFeed,
};
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// A feed that always reports the same reading.
#[derive(Debug, Clone, Copy)]
struct StaticFeed(FeedUpdate);

impl PriceFeed for StaticFeed {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn poll(&self) -> eyre::Result<FeedUpdate> {
        Ok(self.0)
    }
}

/// A feed that always fails.
#[derive(Debug, Clone, Copy)]
struct BrokenFeed;

impl PriceFeed for BrokenFeed {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn poll(&self) -> eyre::Result<FeedUpdate> {
        eyre::bail!("source unreachable")
    }
}

#[tokio::test]
async fn scheduled_feeds_populate_the_snapshot() {
    let oracle = MarketOracle::default();
    let scheduler = FeedScheduler::new(&oracle);

    scheduler.spawn(
        StaticFeed(FeedUpdate::EthUsd { price: 1862.41, change_24h: Some(-2.35) }),
        Duration::from_millis(10),
    );
    scheduler.spawn(StaticFeed(FeedUpdate::GasGwei(0.387)), Duration::from_millis(10));

    // Allow both tasks to tick at least once.
    sleep(Duration::from_millis(100)).await;

    let snapshot = oracle.snapshot().await;
    assert_eq!(snapshot.eth_usd, Some(1862.41));
    assert_eq!(snapshot.eth_usd_change_24h, Some(-2.35));
    assert_eq!(snapshot.gas_gwei, Some(0.387));
}

#[tokio::test]
async fn failing_feeds_leave_readings_absent() {
    let oracle = MarketOracle::default();
    let scheduler = FeedScheduler::new(&oracle);
    scheduler.spawn(BrokenFeed, Duration::from_millis(10));

    sleep(Duration::from_millis(50)).await;

    let snapshot = oracle.snapshot().await;
    assert_eq!(snapshot.eth_usd, None);
    assert_eq!(snapshot.gas_gwei, None);
}

#[tokio::test]
async fn expired_readings_drop_out_of_the_snapshot() {
    let oracle = MarketOracle::new(MarketOracleConfig { price_ttl: Duration::ZERO });
    let tx = oracle.update_sender();
    tx.send(MarketOracleMessage::Update {
        update: FeedUpdate::EthUsd { price: 2000.0, change_24h: None },
        timestamp: Instant::now(),
    })
    .unwrap();

    sleep(Duration::from_millis(10)).await;

    let snapshot = oracle.snapshot().await;
    assert_eq!(snapshot.eth_usd, None);
    assert_eq!(snapshot.eth_usd_change_24h, None);
}

#[tokio::test]
async fn fresh_readings_survive_their_ttl() {
    let oracle = MarketOracle::new(MarketOracleConfig { price_ttl: Duration::from_secs(60) });
    let tx = oracle.update_sender();
    tx.send(MarketOracleMessage::Update {
        update: FeedUpdate::GasGwei(14.2),
        timestamp: Instant::now(),
    })
    .unwrap();

    sleep(Duration::from_millis(10)).await;

    assert_eq!(oracle.snapshot().await.gas_gwei, Some(14.2));
}

#[tokio::test]
async fn constant_price_backstops_an_empty_oracle() {
    let oracle = MarketOracle::default().with_constant_eth_usd(2000.0);
    let snapshot = oracle.snapshot().await;
    assert_eq!(snapshot.eth_usd, Some(2000.0));
    assert_eq!(snapshot.gas_gwei, None);
}
