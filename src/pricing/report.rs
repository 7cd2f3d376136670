use crate::pricing::config::{DisplayConfig, MAX_DECIMALS};
use crate::pricing::types::PricingResult;

/// Renders `value` as currency, e.g. `$10.45`. Precision is clamped to [`MAX_DECIMALS`].
pub fn format_price(value: f64, display: &DisplayConfig) -> String {
    let decimals = display.decimals.min(MAX_DECIMALS);
    format!("{}{:.*}", display.currency_symbol, decimals, value)
}

/// Two-line call/put report printed by the demo binary.
pub fn format_report(result: &PricingResult, display: &DisplayConfig) -> String {
    format!(
        "Call Option Price: {}\nPut Option Price: {}",
        format_price(result.call_price, display),
        format_price(result.put_price, display)
    )
}
