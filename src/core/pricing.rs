use crate::core::types::PriceInfo;
use chrono::{DateTime, Local, TimeZone};

/// Raw API units per gold.
pub const UNITS_PER_GOLD: i64 = 10_000;

/// Floor division, so negative values round toward negative infinity.
pub fn display_units(raw: i64) -> i64 {
    raw.div_euclid(UNITS_PER_GOLD)
}

pub fn should_notify(price: i64, threshold: i64) -> bool {
    price >= threshold
}

/// The threshold is scaled down the same way as the price.
pub fn alert_message(threshold: i64, price: i64) -> String {
    format!(
        "WoW Tokens are above the notification threshold set at {}. Current value is {}",
        display_units(threshold),
        display_units(price)
    )
}

pub fn last_updated(timestamp_ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(timestamp_ms).single()
}

pub fn format_last_updated(timestamp_ms: i64) -> String {
    match last_updated(timestamp_ms) {
        Some(ts) => ts.to_string(),
        None => format!("{}ms since epoch", timestamp_ms),
    }
}

/// The two lines printed for every run.
pub fn report_lines(info: &PriceInfo) -> [String; 2] {
    [
        format!("Current token price: {}", display_units(info.price)),
        format!(
            "Last updated: {}",
            format_last_updated(info.last_updated_timestamp)
        ),
    ]
}
