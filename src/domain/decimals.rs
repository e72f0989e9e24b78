//! Token decimal places.

use alloy_primitives::utils::Unit;
use serde::{Deserialize, Serialize};

use crate::error::SwapError;

/// Maximum supported decimal places.
///
/// `10^(36 + 18)` still leaves headroom inside 256 bits for the
/// normalization step of a swap.
const MAX_DECIMALS: u8 = 36;

/// The number of fractional digits a token's human representation uses.
///
/// Valid range is `0..=36`. Common values are 6 (USDC), 8 (WBTC) and
/// 18 (ETH and most ERC-20 tokens).
///
/// # Examples
///
/// ```
/// use token_swap::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// USD value scale (2 fractional digits).
    pub const CENTS: Self = Self(2);

    /// Six fractional digits, as used by USDC and USDT.
    pub const MICRO: Self = Self(6);

    /// Eight fractional digits, as used by WBTC.
    pub const SATOSHI: Self = Self(8);

    /// USD price scale (8 fractional digits).
    pub const USD_PRICE: Self = Self(8);

    /// Normalized scale shared by all cross-token math (18 digits).
    pub const NORMALIZED: Self = Self(18);

    /// Largest supported decimal count.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidPrecision`] if `value` exceeds 36.
    pub const fn new(value: u8) -> Result<Self, SwapError> {
        if value > MAX_DECIMALS {
            return Err(SwapError::InvalidPrecision("decimals must be 0..=36"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// The matching alloy [`Unit`].
    #[must_use]
    pub const fn unit(&self) -> Unit {
        // 36 is below `Unit::MAX` (77), so `new` always succeeds.
        match Unit::new(self.0) {
            Some(unit) => unit,
            None => Unit::MAX,
        }
    }
}

impl TryFrom<u8> for Decimals {
    type Error = SwapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}

impl core::fmt::Display for Decimals {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
