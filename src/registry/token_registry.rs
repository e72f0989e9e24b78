//! Lookup table of selectable tokens.

use tracing::debug;

use super::TokenMeta;
use crate::config::EngineConfig;
use crate::domain::{Decimals, TokenAmount, TokenInfo};
use crate::error::SwapError;
use crate::traits::FromConfig;

/// An ordered set of [`TokenMeta`] entries keyed by symbol.
///
/// Order is preserved so that [`options`](Self::options) lists tokens the
/// way they were declared.
///
/// # Examples
///
/// ```
/// use token_swap::registry::TokenRegistry;
///
/// let registry = TokenRegistry::default();
/// assert_eq!(registry.len(), 7);
/// assert_eq!(registry.decimals_of("WBTC").map(|d| d.get()), Ok(8));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRegistry {
    tokens: Vec<TokenMeta>,
    default_decimals: Decimals,
}

impl TokenRegistry {
    /// Builds a registry, rejecting duplicate symbols.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if two entries share a
    /// symbol.
    pub fn new(tokens: Vec<TokenMeta>) -> Result<Self, SwapError> {
        for (i, token) in tokens.iter().enumerate() {
            if tokens[..i].iter().any(|t| t.symbol == token.symbol) {
                return Err(SwapError::InvalidConfiguration(format!(
                    "duplicate token symbol {}",
                    token.symbol
                )));
            }
        }
        Ok(Self {
            tokens,
            default_decimals: Decimals::NORMALIZED,
        })
    }

    /// Sets the precision used for entries that omit `decimals`.
    #[must_use]
    pub const fn with_default_decimals(mut self, decimals: Decimals) -> Self {
        self.default_decimals = decimals;
        self
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenMeta> {
        self.tokens.iter()
    }

    /// Looks up a token by symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&TokenMeta> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    /// Looks up a token by symbol, failing on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnknownToken`] if the symbol is not registered.
    pub fn require(&self, symbol: &str) -> Result<&TokenMeta, SwapError> {
        self.get(symbol)
            .ok_or_else(|| SwapError::UnknownToken(symbol.to_string()))
    }

    /// `(symbol, label)` pairs for a token picker.
    #[must_use]
    pub fn options(&self) -> Vec<(&str, &str)> {
        self.tokens
            .iter()
            .map(|t| (t.symbol.as_str(), t.label.as_str()))
            .collect()
    }

    /// Picker options without `exclude`, typically the token already chosen
    /// on the other side of the swap.
    #[must_use]
    pub fn available_excluding(&self, exclude: &str) -> Vec<(&str, &str)> {
        self.options()
            .into_iter()
            .filter(|(symbol, _)| *symbol != exclude)
            .collect()
    }

    /// Precision of `symbol`, falling back to the registry default.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnknownToken`] on a registry miss.
    pub fn decimals_of(&self, symbol: &str) -> Result<Decimals, SwapError> {
        Ok(self.require(symbol)?.decimals_or(self.default_decimals))
    }

    /// The wallet balance of `symbol` at the token's precision.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnknownToken`] on a registry miss and
    /// [`SwapError::Parse`] if the stored balance is malformed.
    pub fn balance_of(&self, symbol: &str) -> Result<TokenAmount, SwapError> {
        self.require(symbol)?.balance_amount(self.default_decimals)
    }

    /// Builds the token record a price API would return for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnknownToken`] on a registry miss.
    pub fn token_info(&self, symbol: &str) -> Result<TokenInfo, SwapError> {
        let meta = self.require(symbol)?;
        Ok(TokenInfo {
            address: meta.address.clone(),
            chain: meta.chain_id.to_string(),
            decimals: meta.decimals_or(self.default_decimals),
            symbol: meta.symbol.clone(),
            name: Some(meta.label.clone()),
        })
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        let d6 = Decimals::MICRO;
        let d8 = Decimals::SATOSHI;
        let d18 = Decimals::NORMALIZED;
        Self {
            tokens: vec![
                TokenMeta::new(
                    "USDC",
                    "USD Coin",
                    1,
                    "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
                    d6,
                    "126937.97",
                ),
                TokenMeta::new(
                    "USDT",
                    "Tether",
                    137,
                    "0xc2132D05D31c914a87C6611C10748AEb04B58e8F",
                    d6,
                    "50000.12",
                ),
                TokenMeta::new(
                    "ETH",
                    "Ethereum",
                    8453,
                    "0x0000000000000000000000000000000000000000",
                    d18,
                    "42.1234",
                ),
                TokenMeta::new(
                    "WBTC",
                    "Wrapped Bitcoin",
                    1,
                    "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599",
                    d8,
                    "1.2345",
                ),
                TokenMeta::new(
                    "UNI",
                    "Uniswap",
                    1,
                    "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984",
                    d18,
                    "800.0",
                ),
                TokenMeta::new(
                    "LINK",
                    "Chainlink",
                    1,
                    "0x514910771AF9Ca656af840dff83E8264EcF986CA",
                    d18,
                    "2500.5",
                ),
                TokenMeta::new(
                    "AAVE",
                    "Aave",
                    1,
                    "0x7Fc66500c84A76Ad7e9c93437bFc5Ac33E2DDaE9",
                    d18,
                    "120.0",
                ),
            ],
            default_decimals: Decimals::NORMALIZED,
        }
    }
}

impl FromConfig<EngineConfig> for TokenRegistry {
    /// Uses the configured token list, or the built-in list when the
    /// configuration declares none.
    fn from_config(config: &EngineConfig) -> Result<Self, SwapError> {
        config.validate()?;
        let registry = if config.tokens.is_empty() {
            debug!("no tokens configured, using built-in registry");
            Self::default()
        } else {
            Self::new(config.tokens.clone())?
        };
        Ok(registry.with_default_decimals(config.default_decimals))
    }
}
