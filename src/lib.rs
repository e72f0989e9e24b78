//! # Token Swap
//!
//! Fixed-point conversion engine for quoting token swaps: exact token ⇄
//! token and token ⇄ USD conversion over raw 256-bit integers, with
//! basis-point fees and human-facing formatting.
//!
//! Every quantity is held as an integer count of a token's smallest unit
//! together with its decimal precision. Cross-token math runs at a shared
//! 18-decimal precision, USD prices carry 8 decimals and USD values 2.
//! Every division truncates toward zero, so a conversion can lose dust but
//! never create value; floating point only appears at the edges (price
//! feeds in, display strings out).
//!
//! # Quick Start
//!
//! ```rust
//! use token_swap::conversion::{
//!     calculate_exchange_rate, calculate_fee, calculate_swap_output, calculate_usd_value,
//!     create_price, create_token_amount, subtract_fee,
//! };
//! use token_swap::domain::{BasisPoints, Decimals};
//!
//! // 1. Prices from a feed, fixed at 8 decimals
//! let eth = create_price(2500.0).expect("valid price");
//! let btc = create_price(50_000.0).expect("valid price");
//!
//! // 2. ETH -> WBTC rate at 18 decimals
//! let rate = calculate_exchange_rate(eth, btc).expect("non-zero target price");
//!
//! // 3. Convert 2 ETH into 8-decimal WBTC
//! let two_eth = create_token_amount("2", Decimals::NORMALIZED).expect("valid amount");
//! let wbtc = Decimals::new(8).expect("valid decimals");
//! let out = calculate_swap_output(two_eth, rate, wbtc).expect("fits in 256 bits");
//! assert_eq!(out.formatted(), "0.1");
//!
//! // 4. Take a 0.10% fee and value the input
//! let fee = calculate_fee(out, BasisPoints::new(10)).expect("valid fee");
//! let net = subtract_fee(out, fee).expect("fee below amount");
//! assert_eq!(net.formatted(), "0.0999");
//! assert_eq!(calculate_usd_value(two_eth, eth).expect("fits"), "5000.00");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     flow     │  SwapFlow: review → submit → result
//! └──────┬───────┘
//!        │ SwapQuote
//!        ▼
//! ┌──────────────┐
//! │    quote     │  SwapCalculator, effective prices, USD⇄token
//! └──────┬───────┘
//!        │ registry + config
//!        ▼
//! ┌──────────────┐
//! │  conversion  │  rate, swap in/out, USD value, fees, compare
//! └──────┬───────┘
//!        │ checked U256 ops, rescale
//!        ▼
//! ┌──────────────┐
//! │ domain/math  │  TokenAmount, UsdPrice, ExchangeRate, parse/format units
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`TokenAmount`](domain::TokenAmount), [`UsdPrice`](domain::UsdPrice), [`ExchangeRate`](domain::ExchangeRate), etc. |
//! | [`math`] | Checked 256-bit arithmetic, rescaling, decimal parse/format |
//! | [`conversion`] | The pure conversion engine |
//! | [`format`] | Display formatting for amounts, prices and USD values |
//! | [`registry`] | Selectable tokens: [`TokenRegistry`](registry::TokenRegistry) |
//! | [`quote`] | [`SwapCalculator`](quote::SwapCalculator) and stablecoin-aware valuation |
//! | [`flow`] | [`SwapFlow`](flow::SwapFlow) state machine |
//! | [`config`] | [`EngineConfig`](config::EngineConfig), loaded from TOML |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) |
//! | [`error`] | [`SwapError`](error::SwapError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events at `debug` and `trace` level and never
//! installs a subscriber; that is left to the application.

pub mod config;
pub mod conversion;
pub mod domain;
pub mod error;
pub mod flow;
pub mod format;
pub mod math;
pub mod prelude;
pub mod quote;
pub mod registry;
pub mod traits;
