//! Conversion between decimal strings and raw units.
//!
//! [`parse_units`] and [`format_units`] wrap the `alloy_primitives::utils`
//! helpers of the same name. The wrappers restrict input to plain
//! non-negative numerals and render without trailing zeros. Neither
//! touches floating point.

use alloy_primitives::utils::{self, ParseUnits};
use alloy_primitives::U256;

use super::{pow10, CheckedArithmetic};
use crate::domain::{Decimals, Rounding};
use crate::error::SwapError;

/// Parses a non-negative decimal numeral into raw units at `decimals`.
///
/// Accepted forms are `"1"`, `"1.5"`, `".5"` and `"1."`; surrounding
/// whitespace is ignored. Fractional digits beyond `decimals` are
/// truncated toward zero.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use token_swap::domain::Decimals;
/// use token_swap::math::parse_units;
///
/// let six = Decimals::new(6).expect("valid");
/// assert_eq!(parse_units("1.5", six), Ok(U256::from(1_500_000u64)));
/// assert_eq!(parse_units("0.0000019", six), Ok(U256::from(1u64)));
/// ```
///
/// # Errors
///
/// Returns [`SwapError::Parse`] for empty input, signs, exponents,
/// separators or any other non-digit, and [`SwapError::Overflow`] if the
/// value does not fit in 256 bits.
pub fn parse_units(input: &str, decimals: Decimals) -> Result<U256, SwapError> {
    let trimmed = input.trim();
    let (int_part, frac_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(SwapError::Parse(format!("not a decimal numeral: {input:?}")));
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(SwapError::Parse(format!("not a decimal numeral: {input:?}")));
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let numeral = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };
    let raw: U256 = utils::parse_units(&numeral, decimals.get())
        .map_err(|_| SwapError::Overflow("amount exceeds 256 bits"))?
        .into();

    // alloy scales with wrapping multiplication; a wrapped result no longer
    // carries the integer part.
    let whole = U256::from_str_radix(int_part, 10)
        .map_err(|_| SwapError::Overflow("amount exceeds 256 bits"))?;
    let unit = pow10(u32::from(decimals.get()))?;
    if raw.safe_div(&unit, Rounding::Down)? != whole {
        return Err(SwapError::Overflow("amount exceeds 256 bits"));
    }
    Ok(raw)
}

/// Renders raw units at `decimals` as a decimal string.
///
/// Trailing fractional zeros are trimmed and whole values carry no decimal
/// point, so `parse_units(format_units(raw, d), d) == raw` always holds.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use token_swap::domain::Decimals;
/// use token_swap::math::format_units;
///
/// let raw = U256::from(1_500_000_000_000_000_000u128);
/// assert_eq!(format_units(raw, Decimals::NORMALIZED), "1.5");
/// ```
#[must_use]
pub fn format_units(raw: U256, decimals: Decimals) -> String {
    let (int_part, frac_part) = split_digits(raw, decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{int_part}.{frac_part}")
    }
}

/// Splits raw units into integer digits and exactly `decimals` fractional
/// digits (zero padded), using alloy's fixed-width rendering.
pub(crate) fn split_digits(raw: U256, decimals: Decimals) -> (String, String) {
    if decimals == Decimals::ZERO {
        return (raw.to_string(), String::new());
    }
    let fixed = ParseUnits::U256(raw).format_units(decimals.unit());
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (fixed, String::new()),
    }
}
