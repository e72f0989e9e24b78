//! Exchange rate from two USD prices.

use crate::domain::{ExchangeRate, Rounding, UsdPrice};
use crate::error::SwapError;
use crate::math::{pow10, CheckedArithmetic};

/// Computes `source / target` at 18-decimal precision, truncating.
///
/// The result expresses how many normalized target-token units one
/// normalized source-token unit is worth, and drives both
/// [`calculate_swap_output`](super::calculate_swap_output) and
/// [`calculate_swap_input`](super::calculate_swap_input).
///
/// # Errors
///
/// Returns [`SwapError::DivisionByZero`] if the target price is zero and
/// [`SwapError::Overflow`] if the scaled source price exceeds 256 bits.
pub fn calculate_exchange_rate(
    source: UsdPrice,
    target: UsdPrice,
) -> Result<ExchangeRate, SwapError> {
    if target.is_zero() {
        return Err(SwapError::DivisionByZero("target price is zero"));
    }
    let rate = source
        .raw()
        .safe_mul(&pow10(18)?)?
        .safe_div(&target.raw(), Rounding::Down)?;
    Ok(ExchangeRate::from_raw(rate))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use alloy_primitives::U256;

    use super::*;

    fn price(usd: f64) -> UsdPrice {
        let Ok(p) = UsdPrice::from_usd(usd) else {
            panic!("valid price");
        };
        p
    }

    #[test]
    fn eth_to_btc() {
        let Ok(rate) = calculate_exchange_rate(price(2500.0), price(50_000.0)) else {
            panic!("expected Ok");
        };
        assert_eq!(rate.raw(), U256::from(50_000_000_000_000_000u64));
    }

    #[test]
    fn btc_to_eth() {
        let Ok(rate) = calculate_exchange_rate(price(50_000.0), price(2500.0)) else {
            panic!("expected Ok");
        };
        assert_eq!(rate.raw(), U256::from(20_000_000_000_000_000_000u128));
    }

    #[test]
    fn equal_prices_give_parity() {
        let Ok(rate) = calculate_exchange_rate(price(1.0), price(1.0)) else {
            panic!("expected Ok");
        };
        assert_eq!(rate, ExchangeRate::PARITY);
    }

    #[test]
    fn truncates_repeating_fraction() {
        // 1 / 3 = 0.333... -> eighteen threes
        let Ok(rate) = calculate_exchange_rate(price(1.0), price(3.0)) else {
            panic!("expected Ok");
        };
        assert_eq!(rate.raw(), U256::from(333_333_333_333_333_333u64));
    }

    #[test]
    fn zero_source_gives_zero_rate() {
        let Ok(rate) = calculate_exchange_rate(UsdPrice::ZERO, price(3.0)) else {
            panic!("expected Ok");
        };
        assert!(rate.is_zero());
    }

    #[test]
    fn zero_target_is_division_by_zero() {
        let Err(SwapError::DivisionByZero(_)) = calculate_exchange_rate(price(1.0), UsdPrice::ZERO)
        else {
            panic!("expected DivisionByZero");
        };
    }

    #[test]
    fn higher_target_price_lowers_rate() {
        let (Ok(low), Ok(high)) = (
            calculate_exchange_rate(price(100.0), price(10.0)),
            calculate_exchange_rate(price(100.0), price(10.5)),
        ) else {
            panic!("expected Ok");
        };
        assert!(high < low);
    }
}
