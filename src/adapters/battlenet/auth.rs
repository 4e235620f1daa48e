use crate::core::types::{AuthToken, Config};
use crate::ports::token_provider::TokenProvider;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::multipart::Form;

/// Battle.net OAuth client-credentials flow.
pub struct BattleNetAuth {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    endpoint: String,
}

impl BattleNetAuth {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            endpoint: config.auth_endpoint.clone(),
        })
    }

    pub async fn authenticate(&self) -> Result<AuthToken> {
        let form = Form::new().text("grant_type", "client_credentials");

        let resp = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .multipart(form)
            .send()
            .await
            .context("Error sending auth token request")?;

        let body = resp
            .text()
            .await
            .context("Error reading body of response from auth token request")?;

        let token: AuthToken =
            serde_json::from_str(&body).context("Error unmarshaling auth request response")?;

        if !token.error.is_empty() {
            bail!(
                "Authentication API returned an error: {} [{}]",
                token.error,
                token.error_description
            );
        }

        tracing::debug!(
            token_type = %token.token_type,
            expires_in = token.expires_in,
            sub = %token.sub,
            "Auth token issued"
        );
        Ok(token)
    }
}

#[async_trait]
impl TokenProvider for BattleNetAuth {
    async fn access_token(&self) -> Result<String> {
        Ok(self.authenticate().await?.access_token)
    }
}
