//! Rounding helpers for integer division.
//!
//! This module provides [`div_round`], a free function that performs
//! 256-bit division with an explicit [`Rounding`] direction.  It is the
//! low-level building block used by the rescale primitive and the display
//! formatter.
//!
//! # Convention
//!
//! | Quantity | Direction | Rationale |
//! |----------|-----------|-----------|
//! | Swap output / input | [`Rounding::Down`] | Never fabricates value |
//! | Fee amount | [`Rounding::Down`] | Same engine-wide truncation |
//! | Display digits | [`Rounding::HalfUp`] | Text only, matches en-US formatting |
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use token_swap::domain::Rounding;
//! use token_swap::math::div_round;
//!
//! let ten = U256::from(10u64);
//! let three = U256::from(3u64);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u64)));
//! assert_eq!(div_round(ten, U256::ZERO, Rounding::Down), None);
//! ```

use alloy_primitives::U256;

use crate::domain::Rounding;

/// Integer division of `U256` values with explicit rounding direction.
///
/// - [`Rounding::Down`]: floor division (round towards zero).
/// - [`Rounding::HalfUp`]: nearest integer, a remainder of exactly half
///   rounds up.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::HalfUp => {
            let remainder = numerator % denominator;
            // 2r >= d, written so that it cannot overflow.
            if remainder >= denominator - remainder {
                // Reaching here needs a non-zero remainder, so the
                // denominator is at least 2 and the increment cannot wrap.
                quotient.checked_add(U256::from(1u64))
            } else {
                Some(quotient)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(u(100), U256::ZERO, Rounding::Down), None);
        assert_eq!(div_round(u(100), U256::ZERO, Rounding::HalfUp), None);
        assert_eq!(div_round(U256::ZERO, U256::ZERO, Rounding::Down), None);
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(div_round(U256::ZERO, u(5), Rounding::Down), Some(U256::ZERO));
        assert_eq!(div_round(U256::ZERO, u(5), Rounding::HalfUp), Some(U256::ZERO));
    }

    #[test]
    fn exact_division() {
        assert_eq!(div_round(u(100), u(10), Rounding::Down), Some(u(10)));
        assert_eq!(div_round(u(100), u(10), Rounding::HalfUp), Some(u(10)));
    }

    #[test]
    fn remainder_truncates() {
        assert_eq!(div_round(u(19), u(10), Rounding::Down), Some(u(1)));
    }

    #[test]
    fn half_up_below_half() {
        assert_eq!(div_round(u(14), u(10), Rounding::HalfUp), Some(u(1)));
    }

    #[test]
    fn half_up_exact_half() {
        assert_eq!(div_round(u(15), u(10), Rounding::HalfUp), Some(u(2)));
        assert_eq!(div_round(u(1), u(2), Rounding::HalfUp), Some(u(1)));
    }

    #[test]
    fn half_up_above_half() {
        assert_eq!(div_round(u(16), u(10), Rounding::HalfUp), Some(u(2)));
    }

    #[test]
    fn half_up_odd_denominator() {
        // 5 / 3 = 1.67 -> 2, 4 / 3 = 1.33 -> 1
        assert_eq!(div_round(u(5), u(3), Rounding::HalfUp), Some(u(2)));
        assert_eq!(div_round(u(4), u(3), Rounding::HalfUp), Some(u(1)));
    }

    #[test]
    fn max_by_one() {
        assert_eq!(div_round(U256::MAX, u(1), Rounding::Down), Some(U256::MAX));
        assert_eq!(div_round(U256::MAX, u(1), Rounding::HalfUp), Some(U256::MAX));
    }

    #[test]
    fn max_by_two_half_up() {
        // MAX is odd, so MAX / 2 leaves exactly half.
        let expected = U256::MAX / u(2) + u(1);
        assert_eq!(div_round(U256::MAX, u(2), Rounding::HalfUp), Some(expected));
    }
}
