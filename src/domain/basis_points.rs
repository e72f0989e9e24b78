//! Basis-point representation for fee percentages.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::Rounding;
use crate::error::SwapError;
use crate::math::{pow10, CheckedArithmetic};

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// `10^18 / 10_000`: one basis point at the 18-decimal multiplier scale.
const BPS_TO_MULTIPLIER: u64 = 100_000_000_000_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be held, but only `0..=10_000` is a usable fee;
/// [`multiplier`](Self::multiplier) and [`apply`](Self::apply) reject the
/// rest.
///
/// # Examples
///
/// ```
/// use token_swap::domain::BasisPoints;
///
/// let bp = BasisPoints::new(10);
/// assert_eq!(bp.get(), 10);
/// assert!(bp.is_valid_percent());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// The fee fraction as an 18-decimal fixed multiplier
    /// (`bps * 10^18 / 10_000`).
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidArgument`] above 10 000 bp.
    pub fn multiplier(&self) -> Result<U256, SwapError> {
        if !self.is_valid_percent() {
            return Err(SwapError::InvalidArgument("fee basis points must be 0..=10000"));
        }
        Ok(U256::from(self.0) * U256::from(BPS_TO_MULTIPLIER))
    }

    /// Computes `raw * (self / 10_000)` through the 18-decimal multiplier,
    /// truncating.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidArgument`] above 10 000 bp and
    /// [`SwapError::Overflow`] if `raw * multiplier` exceeds 256 bits.
    pub fn apply(&self, raw: U256) -> Result<U256, SwapError> {
        raw.safe_mul(&self.multiplier()?)?
            .safe_div(&pow10(18)?, Rounding::Down)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn new_and_get() {
        assert_eq!(BasisPoints::new(30).get(), 30);
    }

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
    }

    #[test]
    fn is_valid_percent_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(10)), "10bp");
    }

    #[test]
    fn multiplier_values() {
        assert_eq!(BasisPoints::ZERO.multiplier(), Ok(U256::ZERO));
        assert_eq!(
            BasisPoints::new(10).multiplier(),
            Ok(U256::from(1_000_000_000_000_000u64))
        );
        assert_eq!(
            BasisPoints::MAX_PERCENT.multiplier(),
            Ok(U256::from(1_000_000_000_000_000_000u64))
        );
    }

    #[test]
    fn multiplier_out_of_range() {
        let Err(SwapError::InvalidArgument(_)) = BasisPoints::new(10_001).multiplier() else {
            panic!("expected InvalidArgument");
        };
    }

    #[test]
    fn apply_truncates() {
        // 30bp of 1_000_000 = 3_000; 30bp of 1 = 0.003 -> 0
        assert_eq!(BasisPoints::new(30).apply(u(1_000_000)), Ok(u(3_000)));
        assert_eq!(BasisPoints::new(30).apply(u(1)), Ok(U256::ZERO));
    }

    #[test]
    fn apply_full_and_half() {
        assert_eq!(BasisPoints::MAX_PERCENT.apply(u(1_000)), Ok(u(1_000)));
        assert_eq!(BasisPoints::new(5_000).apply(u(1_001)), Ok(u(500)));
    }

    #[test]
    fn apply_overflow() {
        let Err(SwapError::Overflow(_)) = BasisPoints::new(10).apply(U256::MAX) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn serde_transparent() {
        let Ok(bp) = serde_json::from_str::<BasisPoints>("25") else {
            panic!("expected Ok");
        };
        assert_eq!(bp, BasisPoints::new(25));
    }
}
