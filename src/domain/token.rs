//! Token records as delivered by the pricing API.

use serde::{Deserialize, Serialize};

use super::{Decimals, UsdPrice};
use crate::error::SwapError;

/// ERC-20 metadata for a token on a given chain.
///
/// Deserializes from the API's camelCase JSON:
///
/// ```
/// use token_swap::domain::TokenInfo;
///
/// let json = r#"{"address":"0xA0b8","chain":"1","decimals":6,"symbol":"USDC"}"#;
/// let info: TokenInfo = serde_json::from_str(json).expect("valid");
/// assert_eq!(info.decimals.get(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Contract address.
    pub address: String,
    /// Chain identifier.
    pub chain: String,
    /// Native fractional-digit count.
    pub decimals: Decimals,
    /// Ticker symbol.
    pub symbol: String,
    /// Display name, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A USD unit price quote for a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPrice {
    /// Price of one whole token in USD.
    pub unit_price: f64,
    /// Value of the queried holding, when the API reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    /// Quote currency code, e.g. `"USD"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl TokenPrice {
    /// Creates a quote carrying only a unit price.
    #[must_use]
    pub const fn new(unit_price: f64) -> Self {
        Self {
            unit_price,
            total_value: None,
            currency: None,
        }
    }

    /// Converts the unit price to the fixed 8-decimal scale.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Parse`] for NaN, infinite or negative prices.
    pub fn usd_price(&self) -> Result<UsdPrice, SwapError> {
        UsdPrice::from_usd(self.unit_price)
    }
}
