use crate::core::types::PriceInfo;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn current_price(&self, access_token: &str) -> Result<PriceInfo>;
}
