//! Estimator configuration.

use crate::constants::{
    DEFAULT_ETH_REFRESH, DEFAULT_GAS_REFRESH, DEFAULT_GAS_TIERS, DEFAULT_MID_GWEI_DECIMALS,
    DEFAULT_PRICE_TTL,
};
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use url::Url;

/// What to do when no ETH/USD price is known at calculation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingUsdPolicy {
    /// Produce the table without USD values.
    #[default]
    Omit,
    /// Refuse to produce a table at all.
    Refuse,
}

/// Behavioral policy of the fee core.
///
/// These knobs cover the variation observed between deployments of the
/// estimator; the defaults are the canonical choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeePolicy {
    /// Decimal places for gwei values in `1.0..10.0`.
    #[serde(default = "default_mid_gwei_decimals")]
    pub mid_gwei_decimals: u8,
    /// Fixed gas price tiers (gwei, ascending) opening a default-mode
    /// sequence.
    #[serde(default = "default_gas_tiers")]
    pub default_tiers: Vec<f64>,
    /// Policy for tables computed without a known ETH/USD price.
    #[serde(default)]
    pub missing_usd: MissingUsdPolicy,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            mid_gwei_decimals: DEFAULT_MID_GWEI_DECIMALS,
            default_tiers: DEFAULT_GAS_TIERS.to_vec(),
            missing_usd: MissingUsdPolicy::default(),
        }
    }
}

/// Price feed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Endpoint serving the gas oracle JSON.
    pub gas_url: Url,
    /// Endpoint serving the ETH/USD price JSON.
    pub eth_url: Url,
    /// Interval between gas price refreshes.
    #[serde(default = "default_gas_refresh")]
    pub gas_refresh: Duration,
    /// Interval between ETH/USD price refreshes.
    #[serde(default = "default_eth_refresh")]
    pub eth_refresh: Duration,
    /// Duration after which a market reading is considered expired.
    #[serde(default = "default_price_ttl")]
    pub price_ttl: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            gas_url: default_api_url("api/gas-price"),
            eth_url: default_api_url("api/eth-data"),
            gas_refresh: DEFAULT_GAS_REFRESH,
            eth_refresh: DEFAULT_ETH_REFRESH,
            price_ttl: DEFAULT_PRICE_TTL,
        }
    }
}

/// Estimator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Price feed configuration.
    #[serde(default)]
    pub feeds: FeedConfig,
    /// Fee core policy.
    #[serde(default)]
    pub policy: FeePolicy,
}

impl EstimatorConfig {
    /// Sets the decimal places used for mid-range gwei values.
    pub fn with_mid_gwei_decimals(mut self, decimals: u8) -> Self {
        self.policy.mid_gwei_decimals = decimals;
        self
    }

    /// Sets the default-mode gas price tiers.
    pub fn with_default_tiers(mut self, tiers: Vec<f64>) -> Self {
        self.policy.default_tiers = tiers;
        self
    }

    /// Sets the policy for tables computed without a known ETH/USD price.
    pub fn with_missing_usd(mut self, policy: MissingUsdPolicy) -> Self {
        self.policy.missing_usd = policy;
        self
    }

    /// Sets the lifetime of a market reading.
    pub fn with_price_ttl(mut self, ttl: Duration) -> Self {
        self.feeds.price_ttl = ttl;
        self
    }

    /// Load from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;
        let config = serde_yaml::from_reader(&file)
            .wrap_err_with(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save to a YAML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> eyre::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn default_mid_gwei_decimals() -> u8 {
    DEFAULT_MID_GWEI_DECIMALS
}

fn default_gas_tiers() -> Vec<f64> {
    DEFAULT_GAS_TIERS.to_vec()
}

fn default_gas_refresh() -> Duration {
    DEFAULT_GAS_REFRESH
}

fn default_eth_refresh() -> Duration {
    DEFAULT_ETH_REFRESH
}

fn default_price_ttl() -> Duration {
    DEFAULT_PRICE_TTL
}

fn default_api_url(path: &str) -> Url {
    // The worker proxy in front of Etherscan and CoinGecko.
    Url::parse(&format!("https://ethereum-gas-api-proxy.workers.dev/{path}"))
        .expect("default url is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_yaml_roundtrip() {
        let config = EstimatorConfig::default()
            .with_mid_gwei_decimals(3)
            .with_missing_usd(MissingUsdPolicy::Refuse);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let from_yaml = serde_yaml::from_str::<EstimatorConfig>(&yaml).unwrap();
        assert_eq!(from_yaml, config);
    }

    #[test]
    fn defaults_are_canonical() {
        let config = EstimatorConfig::default();
        assert_eq!(config.policy.mid_gwei_decimals, 2);
        assert_eq!(config.policy.default_tiers, vec![5.0, 10.0, 15.0, 25.0]);
        assert_eq!(config.policy.missing_usd, MissingUsdPolicy::Omit);
    }
}
