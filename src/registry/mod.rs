//! The set of tokens a user can swap between.
//!
//! [`TokenRegistry::default`] carries the built-in token list; a
//! configuration file can replace it through
//! [`FromConfig`](crate::traits::FromConfig).

mod token_meta;
mod token_registry;

pub use token_meta::TokenMeta;
pub use token_registry::TokenRegistry;
