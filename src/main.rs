//! # Mintfee
//!
//! Estimates Ethereum minting transaction costs across a range of gas prices,
//! fed by periodically polled market data.

use clap::Parser;
use mintfee::cli::Args;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy(),
        )
        .init();

    Args::parse().run().await
}
