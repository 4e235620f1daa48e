use crate::core::types::{Config, WebhookPayload};
use crate::ports::notifier::Notifier;
use anyhow::{Context, Result};
use async_trait::async_trait;

pub struct DiscordClient {
    client: reqwest::Client,
    webhook: String,
}

impl DiscordClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            webhook: config.discord_webhook.clone(),
        })
    }
}

#[async_trait]
impl Notifier for DiscordClient {
    // Response status and body are not inspected.
    async fn alert(&self, message: &str) -> Result<()> {
        let payload = WebhookPayload {
            content: message.to_string(),
        };

        self.client
            .post(&self.webhook)
            .json(&payload)
            .send()
            .await
            .context("Error sending discord webhook request")?;
        Ok(())
    }
}
