//! USD amount at cent precision.

use core::fmt;

use alloy_primitives::U256;

use super::Decimals;
use crate::math::split_digits;

/// A USD amount held as whole cents.
///
/// Produced by USD valuation, which truncates toward zero. `Display` always
/// renders exactly two fractional digits.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use token_swap::domain::UsdValue;
///
/// let v = UsdValue::from_cents(U256::from(375_000u64));
/// assert_eq!(v.to_string(), "3750.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UsdValue(U256);

impl UsdValue {
    /// Zero dollars.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Fixed scale of every value.
    pub const DECIMALS: Decimals = Decimals::CENTS;

    /// Wraps a raw cent count.
    #[must_use]
    pub const fn from_cents(cents: U256) -> Self {
        Self(cents)
    }

    /// Returns the raw cent count.
    #[must_use]
    pub const fn cents(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for UsdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dollars, cents) = split_digits(self.0, Self::DECIMALS);
        write!(f, "{dollars}.{cents}")
    }
}
