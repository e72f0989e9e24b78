//! The fixed-point conversion engine.
//!
//! Every function here is a pure transformation over immutable values.
//! All cross-token arithmetic runs in raw-integer space at the shared
//! 18-decimal precision, and every division truncates toward zero so that
//! conversions can lose value but never fabricate it.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`create_token_amount`] | Parse a human decimal string into raw units |
//! | [`create_price`] | Convert a float USD price to the 8-decimal scale |
//! | [`calculate_exchange_rate`] | `source / target` at 18 decimals |
//! | [`calculate_swap_output`] | Forward conversion (source → target) |
//! | [`calculate_swap_input`] | Reverse conversion (target → source) |
//! | [`calculate_usd_value`] | USD value of an amount, 2 decimals |
//! | [`calculate_fee`] / [`subtract_fee`] | Basis-point fees |
//! | [`is_zero`] / [`compare_amounts`] | Zero test and ordering |
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use token_swap::conversion::{
//!     calculate_exchange_rate, calculate_swap_output, create_price, create_token_amount,
//! };
//! use token_swap::domain::Decimals;
//!
//! let eth = create_price(2500.0).expect("valid price");
//! let btc = create_price(50_000.0).expect("valid price");
//! let rate = calculate_exchange_rate(eth, btc).expect("non-zero target");
//! assert_eq!(rate.raw(), U256::from(50_000_000_000_000_000u64));
//!
//! let two_eth = create_token_amount("2", Decimals::NORMALIZED).expect("valid amount");
//! let wbtc = Decimals::new(8).expect("valid decimals");
//! let out = calculate_swap_output(two_eth, rate, wbtc).expect("fits");
//! assert_eq!(out.formatted(), "0.1");
//! ```

mod compare;
mod fee;
mod rate;
mod swap;
mod usd;

#[cfg(test)]
mod proptest_properties;

pub use compare::{compare_amounts, is_zero};
pub use fee::{calculate_fee, subtract_fee};
pub use rate::calculate_exchange_rate;
pub use swap::{calculate_swap_input, calculate_swap_output};
pub use usd::{calculate_usd_value, usd_value};

use crate::domain::{Decimals, TokenAmount, UsdPrice};
use crate::error::SwapError;

/// Parses a human decimal string into a [`TokenAmount`] at `decimals`.
///
/// Fractional digits beyond `decimals` are truncated toward zero.
///
/// # Errors
///
/// Returns [`SwapError::Parse`] if the string is not a non-negative decimal
/// numeral and [`SwapError::Overflow`] if it exceeds 256 bits.
pub fn create_token_amount(input: &str, decimals: Decimals) -> Result<TokenAmount, SwapError> {
    TokenAmount::parse(input, decimals)
}

/// Converts a floating-point USD price into the fixed 8-decimal scale,
/// truncating digits beyond the eighth.
///
/// # Errors
///
/// Returns [`SwapError::Parse`] for NaN, infinite or negative prices.
pub fn create_price(usd: f64) -> Result<UsdPrice, SwapError> {
    UsdPrice::from_usd(usd)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use alloy_primitives::U256;

    use super::*;

    #[test]
    fn create_token_amount_scenario() {
        let Ok(a) = create_token_amount("1.5", Decimals::NORMALIZED) else {
            panic!("expected Ok");
        };
        assert_eq!(a.raw(), U256::from(1_500_000_000_000_000_000u128));
    }

    #[test]
    fn create_token_amount_truncates() {
        let Ok(d) = Decimals::new(6) else {
            panic!("valid decimals");
        };
        let Ok(a) = create_token_amount("0.1234569", d) else {
            panic!("expected Ok");
        };
        assert_eq!(a.formatted(), "0.123456");
    }

    #[test]
    fn create_token_amount_rejects_garbage() {
        let Err(SwapError::Parse(_)) = create_token_amount("1.2x", Decimals::NORMALIZED) else {
            panic!("expected Parse");
        };
    }

    #[test]
    fn create_price_scenario() {
        let Ok(p) = create_price(2500.00) else {
            panic!("expected Ok");
        };
        assert_eq!(p.raw(), U256::from(250_000_000_000u64));
    }
}
