use anyhow::Result;
use async_trait::async_trait;

/// Exchanges client credentials for a bearer token. Tokens are never cached.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}
