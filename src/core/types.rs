use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_AUTH_ENDPOINT: &str = "https://oauth.battle.net/token";
pub const DEFAULT_PRICE_ENDPOINT: &str =
    "https://us.api.blizzard.com/data/wow/token/?namespace=dynamic-us";

#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub discord_webhook: String,
    /// Raw units, same scale as `PriceInfo::price`.
    pub notification_threshold: i64,
    pub auth_endpoint: String,
    pub price_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            match lookup(key) {
                Some(v) if !v.is_empty() => Ok(v),
                _ => bail!("Environment variable {} is not set.", key),
            }
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let client_id = required("CLIENT_ID")?;
        let client_secret = required("CLIENT_SECRET")?;
        let discord_webhook = required("DISCORD_WEBHOOK")?;

        // Bad or missing threshold means "notify on anything".
        let notification_threshold = lookup("NOTIFICATION_THRESHOLD")
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0);

        Ok(Self {
            client_id,
            client_secret,
            discord_webhook,
            notification_threshold,
            auth_endpoint: optional("AUTH_ENDPOINT", DEFAULT_AUTH_ENDPOINT),
            price_endpoint: optional("PRICE_ENDPOINT", DEFAULT_PRICE_ENDPOINT),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("discord_webhook", &self.discord_webhook)
            .field("notification_threshold", &self.notification_threshold)
            .field("auth_endpoint", &self.auth_endpoint)
            .field("price_endpoint", &self.price_endpoint)
            .finish()
    }
}

/// OAuth token response. Success and error bodies share this shape, so every
/// field defaults when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub sub: String,
    pub error: String,
    pub error_description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceInfo {
    /// Epoch milliseconds.
    pub last_updated_timestamp: i64,
    /// Raw units; divide by 10000 for gold.
    pub price: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub content: String,
}
