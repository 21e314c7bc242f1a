//! Formatting helpers for listing values.

use crate::t;

pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

/// Price for display; listings the backend sent without a usable price get
/// a localized placeholder.
pub fn display_price(price: Option<f64>) -> String {
    price
        .map(format_price)
        .unwrap_or_else(|| t!("listing-price-unset"))
}
