//! en-US digit grouping and fixed-digit rendering helpers.

use alloy_primitives::U256;

use crate::domain::{Decimals, Rounding};
use crate::error::SwapError;
use crate::math::{pow10, split_digits, CheckedArithmetic};

/// Inserts a comma every three digits from the right of a digit string.
///
/// ```
/// use token_swap::format::group_thousands;
///
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// assert_eq!(group_thousands("999"), "999");
/// ```
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Re-expresses `raw` (holding `from` fractional digits) with exactly
/// `digits` fractional digits, rounding half-up when precision is dropped.
pub(crate) fn round_to(raw: U256, from: u32, digits: u32) -> Result<U256, SwapError> {
    if digits >= from {
        raw.safe_mul(&pow10(digits - from)?)
    } else {
        raw.safe_div(&pow10(from - digits)?, Rounding::HalfUp)
    }
}

/// Renders fixed-point `scaled` holding `digits` fractional digits.
///
/// With `trim` set, trailing fractional zeros (and a bare point) are
/// dropped. With `group` set, the integer part gets thousands separators.
pub(crate) fn render(scaled: U256, digits: Decimals, trim: bool, group: bool) -> String {
    let (int_part, frac_part) = split_digits(scaled, digits);
    let int_part = if group {
        group_thousands(&int_part)
    } else {
        int_part
    };
    let frac_part = if trim {
        frac_part.trim_end_matches('0')
    } else {
        frac_part.as_str()
    };
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{int_part}.{frac_part}")
    }
}

/// Rounds to `digits` fractional digits half-up and renders without
/// trimming. Returns `None` if `from` is out of the 256-bit range or
/// `digits` is not a valid decimal count.
pub(crate) fn fixed(raw: U256, from: u32, digits: u8, group: bool) -> Option<String> {
    let width = Decimals::new(digits).ok()?;
    let scaled = round_to(raw, from, u32::from(digits)).ok()?;
    Some(render(scaled, width, false, group))
}
