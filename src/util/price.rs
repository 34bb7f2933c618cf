//! Price display formatting.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

/// Format a product price with fixed two-decimal currency formatting.
#[must_use]
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "$0.00".to_owned();
    }
    format!("${price:.2}")
}
