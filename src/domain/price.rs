//! USD unit price at a fixed 8-decimal scale.

use core::fmt;

use alloy_primitives::U256;

use super::Decimals;
use crate::error::SwapError;
use crate::math::{format_units, parse_units};

/// A USD-denominated unit price held as an integer at 8 fractional digits,
/// independent of the priced asset's own decimals.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use token_swap::domain::UsdPrice;
///
/// let price = UsdPrice::from_usd(2500.0).expect("valid");
/// assert_eq!(price.raw(), U256::from(250_000_000_000u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UsdPrice(U256);

impl UsdPrice {
    /// Zero dollars.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Exactly one dollar (`10^8` at the price scale).
    pub const ONE_DOLLAR: Self = Self(U256::from_limbs([100_000_000, 0, 0, 0]));

    /// Fixed scale of every price.
    pub const DECIMALS: Decimals = Decimals::USD_PRICE;

    /// Wraps a raw 8-decimal integer.
    #[must_use]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Converts a floating-point USD price, as received from a price API.
    ///
    /// The float is rendered in its shortest round-trip decimal form and
    /// digits beyond the eighth fractional place are truncated.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Parse`] for NaN, infinite or negative input and
    /// [`SwapError::Overflow`] if the scaled price exceeds 256 bits (around
    /// `1e69` dollars).
    pub fn from_usd(usd: f64) -> Result<Self, SwapError> {
        if !usd.is_finite() || usd < 0.0 {
            return Err(SwapError::Parse(format!(
                "price must be finite and non-negative, got {usd}"
            )));
        }
        // `Display` for f64 never uses exponent notation; `abs` folds -0.0.
        Self::parse(&format!("{}", usd.abs()))
    }

    /// Parses a decimal USD string at 8 fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Parse`] for malformed input.
    pub fn parse(input: &str) -> Result<Self, SwapError> {
        Ok(Self(parse_units(input, Self::DECIMALS)?))
    }

    /// Returns the raw 8-decimal integer.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for UsdPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_units(self.0, Self::DECIMALS))
    }
}
