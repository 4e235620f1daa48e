pub mod notifier;
pub mod price_feed;
pub mod token_provider;
