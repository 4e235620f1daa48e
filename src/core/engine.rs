use crate::core::pricing;
use crate::core::types::Config;
use crate::ports::notifier::Notifier;
use crate::ports::price_feed::PriceFeed;
use crate::ports::token_provider::TokenProvider;
use anyhow::Result;

/// One full check: authenticate, fetch, report, maybe notify.
///
/// Auth and fetch failures propagate. A notifier failure is logged and the
/// run still succeeds.
pub async fn run_once(
    auth: &dyn TokenProvider,
    price_feed: &dyn PriceFeed,
    notifier: &dyn Notifier,
    config: &Config,
) -> Result<()> {
    let token = auth.access_token().await?;
    tracing::debug!("Obtained access token");

    let info = price_feed.current_price(&token).await?;
    tracing::info!(
        price = info.price,
        threshold = config.notification_threshold,
        "Fetched token price"
    );

    for line in pricing::report_lines(&info) {
        println!("{}", line);
    }

    if !pricing::should_notify(info.price, config.notification_threshold) {
        tracing::info!("Price below threshold, no notification sent");
        return Ok(());
    }

    let message = pricing::alert_message(config.notification_threshold, info.price);
    match notifier.alert(&message).await {
        Ok(()) => tracing::info!("Notification sent"),
        Err(e) => tracing::warn!("Notification failed, continuing: {:#}", e),
    }

    Ok(())
}
