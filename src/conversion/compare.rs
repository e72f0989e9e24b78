//! Zero test and ordering across precisions.

use core::cmp::Ordering;

use crate::domain::TokenAmount;
use crate::error::SwapError;

/// Returns `true` if the amount holds zero raw units.
#[must_use]
pub fn is_zero(amount: TokenAmount) -> bool {
    amount.is_zero()
}

/// Orders two amounts by value.
///
/// Amounts at different precisions are both rescaled to the larger decimal
/// count first, which is lossless.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if up-scaling exceeds 256 bits.
pub fn compare_amounts(a: TokenAmount, b: TokenAmount) -> Result<Ordering, SwapError> {
    let decimals = a.decimals().max(b.decimals());
    let a = a.rescaled(decimals)?;
    let b = b.rescaled(decimals)?;
    Ok(a.raw().cmp(&b.raw()))
}
