//! Etherscan-style gas oracle feed.

use crate::price::{FeedUpdate, PriceFeed};
use eyre::{OptionExt, bail, ensure};
use serde::Deserialize;
use url::Url;

/// Feed polling an Etherscan-style gas oracle endpoint.
///
/// Only the safe (low) gas price is used; the propose/fast tiers the oracle
/// also reports are not part of any estimate.
#[derive(Debug, Clone)]
pub struct GasOracleFeed {
    /// Endpoint serving the gas oracle JSON.
    url: Url,
}

impl GasOracleFeed {
    /// Returns a feed polling the given endpoint.
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

impl PriceFeed for GasOracleFeed {
    fn name(&self) -> &'static str {
        "gas-price"
    }

    async fn poll(&self) -> eyre::Result<FeedUpdate> {
        let response = reqwest::get(self.url.clone())
            .await?
            .error_for_status()?
            .json::<GasOracleResponse>()
            .await?;

        if response.status != "1" {
            bail!("gas oracle returned status {:?}", response.status);
        }

        let gwei = response
            .result
            .ok_or_eyre("gas oracle response has no result")?
            .safe_gas_price
            .parse::<f64>()?;
        ensure!(gwei.is_finite() && gwei >= 0.0, "gas oracle returned invalid gwei: {gwei}");

        Ok(FeedUpdate::GasGwei(gwei))
    }
}

/// Gas oracle JSON envelope. All numbers arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct GasOracleResponse {
    /// `"1"` on success.
    pub status: String,
    /// The gas price tiers.
    pub result: Option<GasOracleResult>,
}

/// The gas price tiers of a gas oracle response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GasOracleResult {
    /// Safe (low) gas price in gwei.
    pub safe_gas_price: String,
    /// Standard gas price in gwei.
    #[serde(default)]
    pub propose_gas_price: Option<String>,
    /// Fast gas price in gwei.
    #[serde(default)]
    pub fast_gas_price: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_oracle_envelope() {
        let raw = r#"{
            "status": "1",
            "result": {
                "SafeGasPrice": "0.387",
                "ProposeGasPrice": "0.425",
                "FastGasPrice": "0.467"
            }
        }"#;
        let response: GasOracleResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.status, "1");
        let result = response.result.unwrap();
        assert_eq!(result.safe_gas_price.parse::<f64>().unwrap(), 0.387);
        assert_eq!(result.fast_gas_price.as_deref(), Some("0.467"));
    }

    #[test]
    fn tolerates_missing_result() {
        let raw = r#"{"status": "0", "result": null}"#;
        let response: GasOracleResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.status, "0");
        assert!(response.result.is_none());
    }
}
