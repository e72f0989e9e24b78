//! Cross-token exchange rate at 18-decimal scale.

use core::fmt;

use alloy_primitives::U256;

use super::Decimals;
use crate::math::format_units;

/// How many normalized target-token units one normalized source-token unit
/// is worth, as an integer at 18 fractional digits.
///
/// Rates are derived from two [`UsdPrice`](super::UsdPrice) values by
/// [`calculate_exchange_rate`](crate::conversion::calculate_exchange_rate)
/// and are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExchangeRate(U256);

impl ExchangeRate {
    /// A 1:1 rate (`10^18`).
    pub const PARITY: Self = Self(U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]));

    /// Fixed scale of every rate.
    pub const DECIMALS: Decimals = Decimals::NORMALIZED;

    /// Wraps a raw 18-decimal integer.
    #[must_use]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Returns the raw 18-decimal integer.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the rate is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_units(self.0, Self::DECIMALS))
    }
}
