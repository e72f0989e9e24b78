//! USD valuation of token amounts.

use crate::domain::{Rounding, TokenAmount, UsdPrice, UsdValue};
use crate::error::SwapError;
use crate::math::{pow10, CheckedArithmetic};

/// `10^(18 + 8 - 2)`: normalized amount times price, down to cents.
const TO_CENTS_EXP: u32 = 24;

/// Values `amount` at `price`, truncated to whole cents.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if the normalized product exceeds
/// 256 bits.
pub fn usd_value(amount: TokenAmount, price: UsdPrice) -> Result<UsdValue, SwapError> {
    let cents = amount
        .normalized()?
        .safe_mul(&price.raw())?
        .safe_div(&pow10(TO_CENTS_EXP)?, Rounding::Down)?;
    Ok(UsdValue::from_cents(cents))
}

/// Values `amount` at `price` and renders the result with exactly two
/// fractional digits, e.g. `"3750.00"`.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if the normalized product exceeds
/// 256 bits.
pub fn calculate_usd_value(amount: TokenAmount, price: UsdPrice) -> Result<String, SwapError> {
    usd_value(amount, price).map(|v| v.to_string())
}
