//! CoinGecko-derived ETH/USD feed.

use crate::price::{FeedUpdate, PriceFeed};
use eyre::ensure;
use serde::Deserialize;
use url::Url;

/// Feed polling an ETH/USD endpoint with CoinGecko market data.
#[derive(Debug, Clone)]
pub struct CoinGeckoEthFeed {
    /// Endpoint serving the ETH/USD JSON.
    url: Url,
}

impl CoinGeckoEthFeed {
    /// Returns a feed polling the given endpoint.
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

impl PriceFeed for CoinGeckoEthFeed {
    fn name(&self) -> &'static str {
        "eth-usd"
    }

    async fn poll(&self) -> eyre::Result<FeedUpdate> {
        let response = reqwest::get(self.url.clone())
            .await?
            .error_for_status()?
            .json::<EthDataResponse>()
            .await?;

        let price = response.price;
        ensure!(price.is_finite() && price > 0.0, "eth feed returned invalid price: {price}");

        Ok(FeedUpdate::EthUsd { price, change_24h: response.price_change_percentage_24h })
    }
}

/// ETH market data JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct EthDataResponse {
    /// ETH/USD price.
    pub price: f64,
    /// 24h price change in percent.
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_eth_market_data() {
        let raw = r#"{"price": 1862.41, "price_change_percentage_24h": -2.35}"#;
        let response: EthDataResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.price, 1862.41);
        assert_eq!(response.price_change_percentage_24h, Some(-2.35));
    }

    #[test]
    fn change_is_optional() {
        let raw = r#"{"price": 1862.41}"#;
        let response: EthDataResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.price_change_percentage_24h, None);
    }
}
