//! Forward and reverse swap conversion.

use tracing::trace;

use crate::domain::{Decimals, ExchangeRate, Rounding, TokenAmount};
use crate::error::SwapError;
use crate::math::{pow10, rescale, CheckedArithmetic};

/// Converts a source amount into the target amount a swap at `rate`
/// produces.
///
/// The source is normalized to 18 decimals, multiplied by the rate,
/// divided by `10^18`, then rescaled to `target_decimals`. Every step
/// truncates.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if an intermediate product exceeds
/// 256 bits.
pub fn calculate_swap_output(
    source: TokenAmount,
    rate: ExchangeRate,
    target_decimals: Decimals,
) -> Result<TokenAmount, SwapError> {
    let normalized = source.normalized()?;
    let target_normalized = normalized
        .safe_mul(&rate.raw())?
        .safe_div(&pow10(18)?, Rounding::Down)?;
    let raw = rescale(target_normalized, Decimals::NORMALIZED, target_decimals)?;
    trace!(source = %source, rate = %rate, target = %raw, "swap output");
    Ok(TokenAmount::new(raw, target_decimals))
}

/// Converts a desired target amount back into the source amount needed,
/// the inverse of [`calculate_swap_output`].
///
/// The target is normalized to 18 decimals, multiplied by `10^18`,
/// divided by the rate, then rescaled to `source_decimals`. Every step
/// truncates, so `calculate_swap_input(calculate_swap_output(a))` never
/// exceeds `a`.
///
/// # Errors
///
/// Returns [`SwapError::DivisionByZero`] if the rate is zero and
/// [`SwapError::Overflow`] if an intermediate product exceeds 256 bits.
pub fn calculate_swap_input(
    target: TokenAmount,
    rate: ExchangeRate,
    source_decimals: Decimals,
) -> Result<TokenAmount, SwapError> {
    if rate.is_zero() {
        return Err(SwapError::DivisionByZero("exchange rate is zero"));
    }
    let normalized = target.normalized()?;
    let source_normalized = normalized
        .safe_mul(&pow10(18)?)?
        .safe_div(&rate.raw(), Rounding::Down)?;
    let raw = rescale(source_normalized, Decimals::NORMALIZED, source_decimals)?;
    trace!(target = %target, rate = %rate, source = %raw, "swap input");
    Ok(TokenAmount::new(raw, source_decimals))
}
