//! Explicit rounding direction for integer division.

/// Specifies how a division remainder is resolved.
///
/// The conversion engine only ever uses [`Rounding::Down`]: truncation may
/// lose value but never fabricates it. [`Rounding::HalfUp`] exists for
/// display formatting, where the result is text rather than a balance.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use token_swap::domain::Rounding;
/// use token_swap::math::div_round;
///
/// let (n, d) = (U256::from(15u64), U256::from(10u64));
/// assert_eq!(div_round(n, d, Rounding::Down), Some(U256::from(1u64)));
/// assert_eq!(div_round(n, d, Rounding::HalfUp), Some(U256::from(2u64)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards zero (truncate).
    #[default]
    Down,
    /// Round to nearest, ties away from zero.
    HalfUp,
}
