//! Basis-point fee computation.

use tracing::debug;

use crate::domain::{BasisPoints, TokenAmount};
use crate::error::SwapError;
use crate::math::CheckedArithmetic;

/// Computes `amount * fee_bps / 10_000` in the amount's own precision,
/// truncating.
///
/// # Errors
///
/// Returns [`SwapError::InvalidArgument`] if `fee_bps` exceeds 10 000 and
/// [`SwapError::Overflow`] if the intermediate product exceeds 256 bits.
pub fn calculate_fee(amount: TokenAmount, fee_bps: BasisPoints) -> Result<TokenAmount, SwapError> {
    let fee = fee_bps.apply(amount.raw())?;
    Ok(TokenAmount::new(fee, amount.decimals()))
}

/// Deducts `fee` from `amount`.
///
/// A fee held at a different precision is first rescaled (truncating) to
/// the amount's decimals. The result keeps the amount's decimals.
///
/// # Errors
///
/// Returns [`SwapError::InsufficientAmount`] if the fee exceeds the amount
/// and [`SwapError::Overflow`] if rescaling the fee up exceeds 256 bits.
pub fn subtract_fee(amount: TokenAmount, fee: TokenAmount) -> Result<TokenAmount, SwapError> {
    let fee = fee.rescaled(amount.decimals())?;
    let remaining = amount.raw().safe_sub(&fee.raw()).map_err(|_| {
        debug!(amount = %amount, fee = %fee, "fee exceeds amount");
        SwapError::InsufficientAmount {
            amount: amount.raw(),
            fee: fee.raw(),
        }
    })?;
    Ok(TokenAmount::new(remaining, amount.decimals()))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use alloy_primitives::U256;

    use super::*;
    use crate::domain::Decimals;

    fn amount(s: &str, d: u8) -> TokenAmount {
        let Ok(d) = Decimals::new(d) else {
            panic!("valid decimals");
        };
        let Ok(a) = TokenAmount::parse(s, d) else {
            panic!("valid amount");
        };
        a
    }

    #[test]
    fn ten_bps_of_one_thousand() {
        let Ok(fee) = calculate_fee(amount("1000", 6), BasisPoints::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee.formatted(), "1");
        assert_eq!(fee.decimals(), amount("0", 6).decimals());
    }

    #[test]
    fn zero_bps_is_zero_fee() {
        let Ok(fee) = calculate_fee(amount("123.456", 18), BasisPoints::ZERO) else {
            panic!("expected Ok");
        };
        assert!(fee.is_zero());
    }

    #[test]
    fn full_bps_is_whole_amount() {
        let a = amount("123.456", 18);
        let Ok(fee) = calculate_fee(a, BasisPoints::MAX_PERCENT) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, a);
    }

    #[test]
    fn fee_truncates() {
        // 30 bp of 0.000001 USDC (1 raw unit) is 0.003 units -> 0
        let Ok(fee) = calculate_fee(amount("0.000001", 6), BasisPoints::new(30)) else {
            panic!("expected Ok");
        };
        assert!(fee.is_zero());
    }

    #[test]
    fn out_of_range_bps() {
        let Err(SwapError::InvalidArgument(_)) =
            calculate_fee(amount("1", 18), BasisPoints::new(10_001))
        else {
            panic!("expected InvalidArgument");
        };
    }

    #[test]
    fn subtract_leaves_remainder() {
        let Ok(rest) = subtract_fee(amount("1000", 6), amount("1", 6)) else {
            panic!("expected Ok");
        };
        assert_eq!(rest.formatted(), "999");
    }

    #[test]
    fn subtract_whole_amount_is_zero() {
        let a = amount("5", 8);
        let Ok(rest) = subtract_fee(a, a) else {
            panic!("expected Ok");
        };
        assert!(rest.is_zero());
    }

    #[test]
    fn subtract_rescales_fee() {
        // fee at 18 decimals applied to a 6-decimal amount
        let Ok(rest) = subtract_fee(amount("10", 6), amount("0.0000015", 18)) else {
            panic!("expected Ok");
        };
        assert_eq!(rest.raw(), U256::from(9_999_999u64));
        assert_eq!(rest.decimals(), amount("0", 6).decimals());
    }

    #[test]
    fn subtract_insufficient() {
        let Err(e) = subtract_fee(amount("1", 6), amount("2", 6)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            SwapError::InsufficientAmount {
                amount: U256::from(1_000_000u64),
                fee: U256::from(2_000_000u64),
            }
        );
    }
}
