use crate::core::types::{Config, PriceInfo};
use crate::ports::price_feed::PriceFeed;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// WoW Token index endpoint of the Game Data API.
pub struct TokenPriceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TokenPriceClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.price_endpoint.clone(),
        })
    }
}

#[async_trait]
impl PriceFeed for TokenPriceClient {
    async fn current_price(&self, access_token: &str) -> Result<PriceInfo> {
        let resp = self
            .client
            .get(&self.endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .context("Error sending wow token api request")?;

        let body = resp
            .text()
            .await
            .context("Error reading wow token api response body")?;

        serde_json::from_str(&body)
            .context("Error unmarshaling json from wow token api response body")
    }
}
