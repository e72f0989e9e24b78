//! Fixed-digit rendering of USD prices and values.

use alloy_primitives::U256;

use super::grouping::fixed;
use crate::domain::{UsdPrice, UsdValue};

/// `$1` and `$0.01` at the 8-decimal price scale.
const ONE: u64 = 100_000_000;
const ONE_CENT: u64 = 1_000_000;

fn price_digits(price: UsdPrice) -> u8 {
    let raw = price.raw();
    if raw >= U256::from(ONE) {
        2
    } else if raw >= U256::from(ONE_CENT) {
        4
    } else {
        8
    }
}

fn render_price(price: UsdPrice, group: bool) -> String {
    let from = u32::from(UsdPrice::DECIMALS.get());
    fixed(price.raw(), from, price_digits(price), group).unwrap_or_else(|| price.to_string())
}

/// Renders a price with 2 fractional digits from $1 up, 4 from one cent
/// up and 8 below, rounding half-up.
///
/// ```
/// use token_swap::domain::UsdPrice;
/// use token_swap::format::format_price;
///
/// let p = UsdPrice::from_usd(0.05).expect("valid");
/// assert_eq!(format_price(p), "0.0500");
/// ```
#[must_use]
pub fn format_price(price: UsdPrice) -> String {
    render_price(price, false)
}

/// [`format_price`] with thousands separators.
#[must_use]
pub fn format_price_with_commas(price: UsdPrice) -> String {
    render_price(price, true)
}

/// Renders a USD value with thousands separators and exactly two
/// fractional digits.
#[must_use]
pub fn format_usd(value: UsdValue) -> String {
    let from = u32::from(UsdValue::DECIMALS.get());
    fixed(value.cents(), from, UsdValue::DECIMALS.get(), true).unwrap_or_else(|| value.to_string())
}
