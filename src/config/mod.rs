//! Engine configuration.
//!
//! [`EngineConfig`] is the declarative description of the fee, the
//! stablecoin set and the token list. It deserializes from TOML and every
//! field has a default.

mod engine_config;

pub use engine_config::{EngineConfig, DEFAULT_FEE_BPS};
