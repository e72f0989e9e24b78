//! Static metadata for a selectable token.

use serde::{Deserialize, Serialize};

use crate::domain::{Decimals, TokenAmount};
use crate::error::SwapError;

/// A token the user can pick as swap source or target.
///
/// `balance` is held as the decimal string the wallet reported; it is
/// parsed on demand at the token's precision by
/// [`balance_amount`](Self::balance_amount). Entries may omit `decimals`,
/// in which case the registry's default precision applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMeta {
    /// Ticker symbol, unique within a registry.
    pub symbol: String,
    /// Human-readable name.
    pub label: String,
    /// EVM chain id the token lives on.
    pub chain_id: u64,
    /// Contract address (the zero address for a native asset).
    pub address: String,
    /// Decimal places of the token, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<Decimals>,
    /// Available balance as a decimal string.
    #[serde(default = "zero_balance")]
    pub balance: String,
}

fn zero_balance() -> String {
    "0".to_string()
}

impl TokenMeta {
    /// Creates a token entry.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        label: impl Into<String>,
        chain_id: u64,
        address: impl Into<String>,
        decimals: Decimals,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            label: label.into(),
            chain_id,
            address: address.into(),
            decimals: Some(decimals),
            balance: balance.into(),
        }
    }

    /// The token's precision, or `fallback` when the entry omits it.
    #[must_use]
    pub fn decimals_or(&self, fallback: Decimals) -> Decimals {
        self.decimals.unwrap_or(fallback)
    }

    /// Parses [`balance`](Self::balance) at the token's precision.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Parse`] if the balance is not a decimal numeral.
    pub fn balance_amount(&self, fallback: Decimals) -> Result<TokenAmount, SwapError> {
        TokenAmount::parse(&self.balance, self.decimals_or(fallback))
    }
}
