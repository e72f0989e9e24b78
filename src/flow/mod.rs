//! Swap lifecycle: review, submission and result.
//!
//! [`SwapFlow`] is an owned state machine; it is advanced through
//! `&mut self` and never shared internally.

mod swap_flow;
mod tx_hash;

pub use swap_flow::{FlowState, SwapFlow};
pub use tx_hash::TransactionHash;
