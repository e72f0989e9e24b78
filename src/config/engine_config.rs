//! Engine-wide configuration loaded from TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, Decimals};
use crate::error::SwapError;
use crate::registry::TokenMeta;

/// Processing fee applied to swap quotes unless configured otherwise.
pub const DEFAULT_FEE_BPS: BasisPoints = BasisPoints::new(10);

fn default_fee_bps() -> BasisPoints {
    DEFAULT_FEE_BPS
}

fn default_stablecoins() -> Vec<String> {
    vec!["USDC".to_string(), "USDT".to_string()]
}

const fn default_decimals() -> Decimals {
    Decimals::NORMALIZED
}

/// Tunable parameters of the conversion engine.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration:
///
/// ```toml
/// fee_bps = 10
/// stablecoins = ["USDC", "USDT"]
/// default_decimals = 18
///
/// [[tokens]]
/// symbol = "DAI"
/// label = "Dai"
/// chainId = 1
/// address = "0x6B175474E89094C44Da98b954EedeAC495271d0F"
/// decimals = 18
/// balance = "250.5"
/// ```
///
/// # Validation
///
/// - `fee_bps` must not exceed 10 000.
/// - Stablecoin symbols must be non-empty.
/// - Token symbols must be unique and non-empty.
///
/// Decimal ranges are enforced while deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Processing fee taken from swap output.
    #[serde(default = "default_fee_bps")]
    pub fee_bps: BasisPoints,
    /// Symbols valued at exactly $1 regardless of the quoted price.
    #[serde(default = "default_stablecoins")]
    pub stablecoins: Vec<String>,
    /// Precision assumed for tokens whose metadata omits decimals.
    #[serde(default = "default_decimals")]
    pub default_decimals: Decimals,
    /// Token list; empty selects the built-in registry.
    #[serde(default)]
    pub tokens: Vec<TokenMeta>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fee_bps: default_fee_bps(),
            stablecoins: default_stablecoins(),
            default_decimals: default_decimals(),
            tokens: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the document does not
    /// parse or fails [`validate`](Self::validate).
    pub fn from_toml_str(input: &str) -> Result<Self, SwapError> {
        let config: Self = toml::from_str(input)
            .map_err(|e| SwapError::InvalidConfiguration(format!("parse engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the file cannot be
    /// read or its contents are invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SwapError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| {
            SwapError::InvalidConfiguration(format!("read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&input)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] describing the first
    /// violated invariant.
    pub fn validate(&self) -> Result<(), SwapError> {
        if !self.fee_bps.is_valid_percent() {
            return Err(SwapError::InvalidConfiguration(format!(
                "fee_bps must be at most 10000, got {}",
                self.fee_bps.get()
            )));
        }
        if self.stablecoins.iter().any(|s| s.trim().is_empty()) {
            return Err(SwapError::InvalidConfiguration(
                "stablecoin symbols must be non-empty".to_string(),
            ));
        }
        for (i, token) in self.tokens.iter().enumerate() {
            if token.symbol.trim().is_empty() {
                return Err(SwapError::InvalidConfiguration(
                    "token symbols must be non-empty".to_string(),
                ));
            }
            if self.tokens[..i].iter().any(|t| t.symbol == token.symbol) {
                return Err(SwapError::InvalidConfiguration(format!(
                    "duplicate token symbol {}",
                    token.symbol
                )));
            }
        }
        Ok(())
    }

    /// Returns `true` if `symbol` is pegged to $1.
    #[must_use]
    pub fn is_stablecoin(&self, symbol: &str) -> bool {
        self.stablecoins.iter().any(|s| s == symbol)
    }
}
