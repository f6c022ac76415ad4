//! Concrete market feeds.

mod coingecko;
pub use coingecko::{CoinGeckoEthFeed, EthDataResponse};

mod gas_oracle;
pub use gas_oracle::{GasOracleFeed, GasOracleResponse, GasOracleResult};
