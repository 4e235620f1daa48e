mod adapters;
mod core;
mod ports;

use crate::adapters::battlenet::auth::BattleNetAuth;
use crate::adapters::battlenet::token_api::TokenPriceClient;
use crate::adapters::discord::DiscordClient;
use crate::core::types::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let auth = BattleNetAuth::new(&config)?;
    let price_feed = TokenPriceClient::new(&config)?;
    let notifier = DiscordClient::new(&config)?;

    crate::core::engine::run_once(&auth, &price_feed, &notifier, &config).await
}
