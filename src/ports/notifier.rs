use anyhow::Result;
use async_trait::async_trait;

/// Posts a one-line alert. Callers log and drop the error; a failed alert
/// never fails the run.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn alert(&self, message: &str) -> Result<()>;
}
