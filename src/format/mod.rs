//! Human-facing rendering of amounts, prices and USD values.
//!
//! Formatting never feeds back into arithmetic. Every function works on the
//! exact raw integers and rounds half-up, en-US style (`,` thousands
//! separator, `.` decimal point).

mod display;
mod grouping;
mod price;

pub use display::format_display_amount;
pub use grouping::group_thousands;
pub use price::{format_price, format_price_with_commas, format_usd};
