//! # Mintfee CLI

use crate::{
    config::EstimatorConfig,
    constants::{DEFAULT_ROW_COUNT, MIN_GAS_LIMIT},
    error::FeeError,
    fees::format_gwei_with,
    metrics::build_exporter,
    price::{CoinGeckoEthFeed, FeedScheduler, GasOracleFeed, MarketOracle, MarketOracleConfig},
    types::{FeeEstimationInput, FeeTable, SequenceMode},
    version::{MINTFEE_LONG_VERSION, MINTFEE_SHORT_VERSION},
};
use clap::Parser;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::{info, warn};

/// Estimates Ethereum minting transaction costs across a range of gas prices.
#[derive(Debug, Parser)]
#[command(
    author,
    about = "Mintfee",
    long_about = None,
    version = MINTFEE_SHORT_VERSION,
    long_version = MINTFEE_LONG_VERSION
)]
pub struct Args {
    /// The configuration file.
    ///
    /// If missing, a default one will be used and stored in the working
    /// directory under `mintfee.yaml`.
    #[arg(long, value_name = "CONFIG", env = "MINTFEE_CONFIG", default_value = "mintfee.yaml")]
    pub config: PathBuf,
    /// Mint price (ETH) added on top of the transaction cost.
    #[arg(long, value_name = "ETH", default_value_t = 0.0)]
    pub mint_price: f64,
    /// Gas limit of the estimated transaction.
    #[arg(long, value_name = "GAS", default_value_t = MIN_GAS_LIMIT)]
    pub gas_limit: u64,
    /// Number of rows in the fee table.
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_ROW_COUNT)]
    pub rows: u32,
    /// Starting gas price (gwei). Together with `--gas-step` this switches to
    /// a custom arithmetic sequence instead of the default tiers.
    #[arg(long, value_name = "GWEI", requires = "gas_step")]
    pub gas_start: Option<f64>,
    /// Gas price step (gwei) between rows of a custom sequence.
    #[arg(long, value_name = "GWEI", requires = "gas_start")]
    pub gas_step: Option<f64>,
    /// How long to wait for the first market readings before estimating with
    /// whatever is available.
    #[arg(long, value_name = "SECONDS", value_parser = parse_duration_secs, default_value = "10")]
    pub warmup: Duration,
    /// Re-render the table on this interval instead of exiting after one
    /// estimate.
    #[arg(long, value_name = "SECONDS", value_parser = parse_duration_secs)]
    pub watch: Option<Duration>,
    /// The address to serve the metrics on.
    #[arg(long = "http.metrics-addr", value_name = "ADDR", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub metrics_address: IpAddr,
    /// The port to serve the metrics on.
    #[arg(long = "http.metrics-port", value_name = "PORT", default_value_t = 9000)]
    pub metrics_port: u16,
    /// A constant ETH/USD price used instead of waiting for the price feed.
    /// For testing.
    #[arg(long, value_name = "USD")]
    pub constant_eth_price: Option<f64>,
}

impl Args {
    /// Run the estimator.
    pub async fn run(self) -> eyre::Result<()> {
        let config = if self.config.exists() {
            EstimatorConfig::load_from_file(&self.config)?
        } else {
            let config = EstimatorConfig::default();
            config.save_to_file(&self.config)?;
            info!(path = %self.config.display(), "Stored default configuration.");
            config
        };

        build_exporter(SocketAddr::new(self.metrics_address, self.metrics_port))?;

        let mut oracle =
            MarketOracle::new(MarketOracleConfig { price_ttl: config.feeds.price_ttl });
        if let Some(price) = self.constant_eth_price {
            oracle = oracle.with_constant_eth_usd(price);
        }

        let scheduler = FeedScheduler::new(&oracle);
        scheduler.spawn(GasOracleFeed::new(config.feeds.gas_url.clone()), config.feeds.gas_refresh);
        scheduler
            .spawn(CoinGeckoEthFeed::new(config.feeds.eth_url.clone()), config.feeds.eth_refresh);

        let input = FeeEstimationInput::new(
            self.mint_price,
            self.gas_limit,
            self.rows,
            match (self.gas_start, self.gas_step) {
                (Some(start), Some(step)) => SequenceMode::custom(start, step),
                _ => SequenceMode::Default,
            },
        );

        self.wait_for_market_data(&oracle).await;

        loop {
            let snapshot = oracle.snapshot().await;
            match FeeTable::generate(&input, &snapshot, &config.policy) {
                Ok(table) => render(&table, config.policy.mid_gwei_decimals),
                // Only surfaced under the refuse policy; keep waiting for the
                // feed like the upstream page did.
                Err(FeeError::EthPriceUnavailable) => {
                    warn!("Waiting for current ETH price data.")
                }
                Err(err) => return Err(err.into()),
            }

            match self.watch {
                Some(period) => tokio::time::sleep(period).await,
                None => break,
            }
        }

        Ok(())
    }

    /// Waits until both feeds produced a reading, up to the warmup deadline.
    async fn wait_for_market_data(&self, oracle: &MarketOracle) {
        let deadline = Instant::now() + self.warmup;
        loop {
            let snapshot = oracle.snapshot().await;
            if snapshot.eth_usd.is_some() && snapshot.gas_gwei.is_some() {
                break;
            }
            if Instant::now() >= deadline {
                warn!("No complete market data after warmup, estimating anyway.");
                break;
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    }
}

/// Renders a fee table to stdout.
fn render(table: &FeeTable, mid_gwei_decimals: u8) {
    let snapshot = &table.snapshot;
    match (snapshot.eth_usd, snapshot.gas_gwei) {
        (Some(eth), Some(gas)) => {
            let change = snapshot
                .eth_usd_change_24h
                .map(|c| format!(" ({}{c:.2}%)", if c >= 0.0 { "+" } else { "" }))
                .unwrap_or_default();
            println!("ETH ${}{change} | gas {gas:.2} gwei", eth.round());
        }
        (Some(eth), None) => println!("ETH ${} | gas price unavailable", eth.round()),
        (None, Some(gas)) => println!("ETH price unavailable | gas {gas:.2} gwei"),
        (None, None) => println!("market data unavailable"),
    }

    println!("{:>12} {:>14} {:>16} {:>10}", "GWEI", "TOTAL (ETH)", "BALANCE (ETH)", "USD");
    for row in &table.rows {
        let usd = row.usd_value.map(|usd| format!("${usd:.2}")).unwrap_or_else(|| "-".into());
        println!(
            "{:>12} {:>14.5} {:>16.5} {:>10}",
            format_gwei_with(row.gas_price_gwei, mid_gwei_decimals),
            row.total_cost_eth,
            row.balance_needed_eth,
            usd,
        );
    }
}

/// Parses a duration in seconds.
fn parse_duration_secs(arg: &str) -> Result<Duration, std::num::ParseIntError> {
    Ok(Duration::from_secs(arg.parse()?))
}
