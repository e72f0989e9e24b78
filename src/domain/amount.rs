//! Token quantity in raw units with its decimal precision.

use core::fmt;

use alloy_primitives::U256;

use super::Decimals;
use crate::error::SwapError;
use crate::math::{format_units, normalize, parse_units, rescale};

/// A quantity of a specific token, held as raw units (the token's smallest
/// denomination) together with the token's decimal count.
///
/// The human-readable form is derived on demand by
/// [`formatted`](Self::formatted) and is never stored, so it can always be
/// re-parsed into the same raw value.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use token_swap::domain::{Decimals, TokenAmount};
///
/// let amount = TokenAmount::parse("1.5", Decimals::NORMALIZED).expect("valid");
/// assert_eq!(amount.raw(), U256::from(1_500_000_000_000_000_000u128));
/// assert_eq!(amount.formatted(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use]
pub struct TokenAmount {
    raw: U256,
    decimals: Decimals,
}

impl TokenAmount {
    /// Creates an amount from raw units.
    pub const fn new(raw: U256, decimals: Decimals) -> Self {
        Self { raw, decimals }
    }

    /// Zero units at the given precision.
    pub const fn zero(decimals: Decimals) -> Self {
        Self {
            raw: U256::ZERO,
            decimals,
        }
    }

    /// Parses a human decimal string, truncating digits beyond `decimals`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Parse`] for malformed input and
    /// [`SwapError::Overflow`] if the value exceeds 256 bits.
    pub fn parse(input: &str, decimals: Decimals) -> Result<Self, SwapError> {
        Ok(Self::new(parse_units(input, decimals)?, decimals))
    }

    /// Returns the raw units.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.raw
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Renders the amount as a decimal string with trailing zeros trimmed.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_units(self.raw, self.decimals)
    }

    /// Re-expresses the amount at another precision, truncating when
    /// precision is reduced.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if up-scaling exceeds 256 bits.
    pub fn rescaled(&self, decimals: Decimals) -> Result<Self, SwapError> {
        Ok(Self::new(rescale(self.raw, self.decimals, decimals)?, decimals))
    }

    /// Returns the raw value at the shared 18-decimal precision.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if up-scaling exceeds 256 bits.
    pub fn normalized(&self) -> Result<U256, SwapError> {
        normalize(self.raw, self.decimals)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
