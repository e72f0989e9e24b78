//! Fundamental domain value types used throughout the conversion engine.
//!
//! This module contains the value types that model token quantities,
//! USD prices and values, exchange rates, fee percentages and the token
//! records returned by the pricing API. All types use newtypes with
//! validated constructors to enforce invariants.

mod amount;
mod basis_points;
mod decimals;
mod exchange_rate;
mod price;
mod rounding;
mod token;
mod usd_value;

pub use amount::TokenAmount;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use exchange_rate::ExchangeRate;
pub use price::UsdPrice;
pub use rounding::Rounding;
pub use token::{TokenInfo, TokenPrice};
pub use usd_value::UsdValue;
