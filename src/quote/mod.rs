//! Application-facing pricing: effective prices, USD⇄token helpers and the
//! two-sided swap calculator that produces [`SwapQuote`]s.

mod calculator;
mod valuation;

pub use calculator::{Side, SwapCalculator, SwapQuote};
pub use valuation::{effective_price, token_amount_for_usd, usd_value_of};
