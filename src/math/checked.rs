//! Checked arithmetic trait for raw 256-bit quantities.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, SwapError>`](crate::error::SwapError) instead
//! of wrapping or panicking on overflow, underflow, or division by zero.
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use token_swap::domain::Rounding;
//! use token_swap::math::CheckedArithmetic;
//!
//! let a = U256::from(100u64);
//! let b = U256::from(200u64);
//! assert_eq!(b.safe_sub(&a), Ok(U256::from(100u64)));
//! assert!(a.safe_sub(&b).is_err());
//! assert!(a.safe_div(&U256::ZERO, Rounding::Down).is_err());
//! ```

use alloy_primitives::U256;

use super::div_round;
use crate::domain::Rounding;
use crate::error::SwapError;

/// Fallible arithmetic for raw-unit integers.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the result exceeds 256 bits.
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SwapError>;
}

impl CheckedArithmetic for U256 {
    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(*other)
            .ok_or(SwapError::Underflow("raw subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_mul(*other)
            .ok_or(SwapError::Overflow("raw multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SwapError> {
        div_round(*self, *other, rounding).ok_or(SwapError::DivisionByZero("raw division"))
    }
}
