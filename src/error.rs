//! Unified error types for the token-swap library.
//!
//! All fallible operations across the crate return [`SwapError`] as their
//! error type, so callers can fall back to an "unavailable" display state
//! with a single match.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors produced by the conversion engine and the layers built on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// Malformed numeric input.
    #[error("parse error: {0}")]
    Parse(String),

    /// A zero price or zero rate was used as a divisor.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    /// A caller contract violation, such as fee basis points above 100%.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The fee to subtract exceeds the amount it is taken from.
    #[error("insufficient amount: fee {fee} exceeds amount {amount}")]
    InsufficientAmount {
        /// Raw amount the fee was subtracted from.
        amount: U256,
        /// Raw fee, expressed at the amount's decimals.
        fee: U256,
    },

    /// The result does not fit in 256 bits.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// The result would be negative.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Decimal count outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// No usable USD price for the given symbol.
    #[error("price unavailable for {0}")]
    PriceUnavailable(String),

    /// The token registry has no entry for the given symbol.
    #[error("unknown token: {0}")]
    UnknownToken(String),

    /// Configuration failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The swap flow cannot perform `action` from its current state.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        /// Name of the state the flow was in.
        from: &'static str,
        /// Name of the rejected action.
        action: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SwapError>;
