//! Generic construction trait for building engine components from
//! configuration.
//!
//! [`FromConfig`] gives every configurable component the same entry point:
//! the component reads what it needs from an
//! [`EngineConfig`](crate::config::EngineConfig), validates it, and either
//! comes up in a usable state or reports why it cannot.
//!
//! ```text
//! TokenRegistry::from_config(&config)
//! ```
//!
//! There is no blanket implementation; each component opts in for the
//! configuration type it understands.

use crate::error::SwapError;

/// Construction from a configuration value.
///
/// # Implementors
///
/// - `impl FromConfig<EngineConfig> for TokenRegistry`
///
/// # Errors
///
/// Returns [`SwapError::InvalidConfiguration`] (or a more specific
/// variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is borrowed so that one value can configure
    /// several components.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if any parameter is out
    /// of range or inconsistent.
    fn from_config(config: &C) -> Result<Self, SwapError>
    where
        Self: Sized;
}
