//! Convenience re-exports for common types and functions.
//!
//! ```rust
//! use token_swap::prelude::*;
//!
//! let amount = create_token_amount("1.5", Decimals::NORMALIZED).expect("valid");
//! assert_eq!(format_display_amount(amount), "1.5");
//! ```

pub use crate::domain::{
    BasisPoints, Decimals, ExchangeRate, Rounding, TokenAmount, TokenInfo, TokenPrice, UsdPrice,
    UsdValue,
};

pub use crate::conversion::{
    calculate_exchange_rate, calculate_fee, calculate_swap_input, calculate_swap_output,
    calculate_usd_value, compare_amounts, create_price, create_token_amount, is_zero,
    subtract_fee, usd_value,
};

pub use crate::format::{format_display_amount, format_price, format_price_with_commas, format_usd};

pub use crate::config::EngineConfig;
pub use crate::flow::{FlowState, SwapFlow, TransactionHash};
pub use crate::math::CheckedArithmetic;
pub use crate::quote::{Side, SwapCalculator, SwapQuote};
pub use crate::registry::{TokenMeta, TokenRegistry};
pub use crate::traits::FromConfig;

pub use crate::error::{Result, SwapError};
