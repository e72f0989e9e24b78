//! Trait abstractions shared across the crate.

mod from_config;

pub use from_config::FromConfig;
