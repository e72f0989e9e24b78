//! Arithmetic and precision utilities for fixed-point conversions.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe 256-bit
//! operations, [`div_round`] for explicit division rounding, the
//! [`rescale`] primitive that moves raw integers between decimal
//! precisions, and the [`parse_units`] / [`format_units`] pair.

mod checked;
mod rounding;
mod scale;
mod units;

pub use checked::CheckedArithmetic;
pub use rounding::div_round;
pub use scale::{normalize, pow10, rescale};
pub use units::{format_units, parse_units};

pub(crate) use units::split_digits;
