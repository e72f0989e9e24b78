//! Decimal rescaling between fixed-point precisions.

use alloy_primitives::U256;

use super::CheckedArithmetic;
use crate::domain::{Decimals, Rounding};
use crate::error::SwapError;

/// Returns `10^exp` as a 256-bit integer.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if the power does not fit in 256 bits
/// (`exp > 77`).
pub fn pow10(exp: u32) -> Result<U256, SwapError> {
    U256::from(10u64)
        .checked_pow(U256::from(exp))
        .ok_or(SwapError::Overflow("power of ten exceeds 256 bits"))
}

/// Re-expresses `raw` units at `from` decimals as raw units at `to`
/// decimals.
///
/// Up-scaling multiplies by `10^(to - from)` and is exact. Down-scaling
/// integer-divides by `10^(from - to)` and always truncates; callers that
/// need another rounding mode must pre-adjust.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use token_swap::domain::Decimals;
/// use token_swap::math::rescale;
///
/// let six = Decimals::new(6).expect("valid");
/// let raw = rescale(U256::from(1_500_000u64), six, Decimals::NORMALIZED);
/// assert_eq!(raw, Ok(U256::from(1_500_000_000_000_000_000u128)));
/// ```
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if up-scaling exceeds 256 bits.
pub fn rescale(raw: U256, from: Decimals, to: Decimals) -> Result<U256, SwapError> {
    match to.cmp(&from) {
        core::cmp::Ordering::Equal => Ok(raw),
        core::cmp::Ordering::Greater => {
            raw.safe_mul(&pow10(u32::from(to.get() - from.get()))?)
        }
        core::cmp::Ordering::Less => {
            raw.safe_div(&pow10(u32::from(from.get() - to.get()))?, Rounding::Down)
        }
    }
}

/// Rescales `raw` to the shared 18-decimal precision.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if up-scaling exceeds 256 bits.
pub fn normalize(raw: U256, from: Decimals) -> Result<U256, SwapError> {
    rescale(raw, from, Decimals::NORMALIZED)
}
