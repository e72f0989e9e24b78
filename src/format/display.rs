//! Tiered human display of token amounts.

use alloy_primitives::U256;

use super::grouping::{render, round_to};
use crate::domain::{Decimals, TokenAmount};
use crate::error::SwapError;
use crate::math::pow10;

/// Compact suffixes and the power of ten each one stands for.
const COMPACT: [(&str, u32); 3] = [("M", 6), ("B", 9), ("T", 12)];

/// Mantissa (in hundredths) from which a compact value gets grouped:
/// five integer digits.
const COMPACT_GROUPING_FLOOR: u64 = 1_000_000;

/// A five-digit scaled mantissa that rounding has carried to the next
/// power of ten (1000.00 compact, or 10.0000 exponential).
const MANTISSA_ROLLOVER: u64 = 100_000;

/// Formats an amount for display.
///
/// | Value | Rendering |
/// |-------|-----------|
/// | exactly 0 | `"0"` |
/// | ≥ 1 000 000 | compact `M`/`B`/`T`, at most 2 fractional digits |
/// | ≥ 1 | grouped, at most 6 fractional digits |
/// | ≥ 0.000001 | at most 8 fractional digits |
/// | below | exponential with 4 mantissa digits, e.g. `5.0000e-7` |
///
/// All rounding is half-up on exact integers and trailing zeros are
/// trimmed.
///
/// # Examples
///
/// ```
/// use token_swap::domain::{Decimals, TokenAmount};
/// use token_swap::format::format_display_amount;
///
/// let a = TokenAmount::parse("1234567.891", Decimals::NORMALIZED).expect("valid");
/// assert_eq!(format_display_amount(a), "1.23M");
/// ```
#[must_use]
pub fn format_display_amount(amount: TokenAmount) -> String {
    try_format(amount).unwrap_or_else(|_| amount.formatted())
}

fn try_format(amount: TokenAmount) -> Result<String, SwapError> {
    let raw = amount.raw();
    let d = u32::from(amount.decimals().get());

    if raw.is_zero() {
        return Ok("0".to_string());
    }
    if raw >= pow10(d + 6)? {
        return compact(raw, d);
    }
    if raw >= pow10(d)? {
        return Ok(render(round_to(raw, d, 6)?, Decimals::MICRO, true, true));
    }
    if d <= 6 || raw >= pow10(d - 6)? {
        return Ok(render(round_to(raw, d, 8)?, Decimals::SATOSHI, true, true));
    }
    exponential(raw, d)
}

fn compact(raw: U256, d: u32) -> Result<String, SwapError> {
    let mut tier = 0;
    for (i, (_, exp)) in COMPACT.iter().enumerate() {
        if raw >= pow10(d + exp)? {
            tier = i;
        }
    }
    let mut mantissa = round_to(raw, d + COMPACT[tier].1, 2)?;
    if tier + 1 < COMPACT.len() && mantissa >= U256::from(MANTISSA_ROLLOVER) {
        tier += 1;
        mantissa = round_to(raw, d + COMPACT[tier].1, 2)?;
    }
    let group = mantissa >= U256::from(COMPACT_GROUPING_FLOOR);
    Ok(format!("{}{}", render(mantissa, Decimals::CENTS, true, group), COMPACT[tier].0))
}

/// `d.dddde-N` for values below one millionth; `raw < 10^(d - 6)` here.
fn exponential(raw: U256, d: u32) -> Result<String, SwapError> {
    let digits = raw.to_string();
    let len = digits.len() as u32;
    let mut exponent = i64::from(len) - 1 - i64::from(d);

    // Five significant digits: one before the point, four after.
    let mut mantissa = if len > 5 {
        round_to(raw, len - 5, 0)?
    } else {
        round_to(raw, 0, 5 - len)?
    };
    if mantissa >= U256::from(MANTISSA_ROLLOVER) {
        mantissa = round_to(mantissa, 1, 0)?;
        exponent += 1;
    }
    let m = mantissa.to_string();
    let (lead, rest) = m.split_at(1);
    Ok(format!("{lead}.{rest}e{exponent}"))
}
