//! Two-sided swap calculator and quotes.

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::valuation::usable_price;
use crate::config::EngineConfig;
use crate::conversion::{
    calculate_exchange_rate, calculate_fee, calculate_swap_input, calculate_swap_output,
    subtract_fee, usd_value,
};
use crate::domain::{
    BasisPoints, Decimals, ExchangeRate, TokenAmount, TokenInfo, TokenPrice, UsdPrice, UsdValue,
};
use crate::error::SwapError;
use crate::format::format_display_amount;
use crate::registry::TokenRegistry;

/// Which amount field the user edited last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The amount being sold.
    Source,
    /// The amount being bought.
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Everything a review screen shows for one swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuote {
    /// Symbol of the token sold.
    pub source_symbol: String,
    /// Symbol of the token bought.
    pub target_symbol: String,
    /// Amount sold.
    pub source: TokenAmount,
    /// Gross amount bought, before the processing fee.
    pub target: TokenAmount,
    /// Processing fee, in the target token.
    pub fee: TokenAmount,
    /// Net amount received: `target - fee`.
    pub receive: TokenAmount,
    /// Source → target exchange rate.
    pub rate: ExchangeRate,
    /// USD value of `source`.
    pub source_usd: UsdValue,
    /// USD value of `target`.
    pub target_usd: UsdValue,
}

/// Converts amounts between a fixed source/target token pair.
///
/// The exchange rate is derived once, from the effective prices, when the
/// calculator is built. Every later conversion reuses it.
///
/// # Examples
///
/// ```
/// use token_swap::config::EngineConfig;
/// use token_swap::quote::SwapCalculator;
/// use token_swap::registry::TokenRegistry;
/// use token_swap::domain::TokenPrice;
///
/// let registry = TokenRegistry::default();
/// let calc = SwapCalculator::from_registry(
///     &registry,
///     "ETH",
///     "WBTC",
///     Some(&TokenPrice::new(2500.0)),
///     Some(&TokenPrice::new(50_000.0)),
///     &EngineConfig::default(),
/// )
/// .expect("priced pair");
/// let out = calc.target_for_source("2").expect("valid input");
/// assert_eq!(out.map(|a| a.formatted()), Some("0.1".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapCalculator {
    source: TokenInfo,
    target: TokenInfo,
    source_price: UsdPrice,
    target_price: UsdPrice,
    rate: ExchangeRate,
    fee_bps: BasisPoints,
}

impl SwapCalculator {
    /// Builds a calculator for `source → target`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::PriceUnavailable`] if either token lacks a
    /// non-zero effective price and [`SwapError::InvalidConfiguration`] if
    /// the configuration is invalid.
    pub fn new(
        source: TokenInfo,
        target: TokenInfo,
        source_price: Option<&TokenPrice>,
        target_price: Option<&TokenPrice>,
        config: &EngineConfig,
    ) -> Result<Self, SwapError> {
        config.validate()?;
        let source_usd = usable_price(&source.symbol, source_price, config)?;
        let target_usd = usable_price(&target.symbol, target_price, config)?;
        let rate = calculate_exchange_rate(source_usd, target_usd)?;
        debug!(
            source = %source.symbol,
            target = %target.symbol,
            rate = %rate,
            fee = %config.fee_bps,
            "swap calculator ready"
        );
        Ok(Self {
            source,
            target,
            source_price: source_usd,
            target_price: target_usd,
            rate,
            fee_bps: config.fee_bps,
        })
    }

    /// Builds a calculator from two registry symbols.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnknownToken`] on a registry miss, otherwise as
    /// [`new`](Self::new).
    pub fn from_registry(
        registry: &TokenRegistry,
        source: &str,
        target: &str,
        source_price: Option<&TokenPrice>,
        target_price: Option<&TokenPrice>,
        config: &EngineConfig,
    ) -> Result<Self, SwapError> {
        Self::new(
            registry.token_info(source)?,
            registry.token_info(target)?,
            source_price,
            target_price,
            config,
        )
    }

    /// The token sold.
    #[must_use]
    pub const fn source(&self) -> &TokenInfo {
        &self.source
    }

    /// The token bought.
    #[must_use]
    pub const fn target(&self) -> &TokenInfo {
        &self.target
    }

    /// The source → target exchange rate.
    #[must_use]
    pub const fn rate(&self) -> ExchangeRate {
        self.rate
    }

    /// The rate rendered for display, e.g. `"0.05"` for ETH → WBTC.
    #[must_use]
    pub fn display_rate(&self) -> String {
        format_display_amount(TokenAmount::new(self.rate.raw(), ExchangeRate::DECIMALS))
    }

    /// Target amount for a source input. A blank or zero input yields
    /// `None`, meaning the other field should be cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Parse`] for a malformed input and
    /// [`SwapError::Overflow`] if the conversion exceeds 256 bits.
    pub fn target_for_source(&self, input: &str) -> Result<Option<TokenAmount>, SwapError> {
        let Some(amount) = parse_field(input, self.source.decimals)? else {
            return Ok(None);
        };
        calculate_swap_output(amount, self.rate, self.target.decimals).map(Some)
    }

    /// Source amount needed for a target input. A blank or zero input
    /// yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Parse`] for a malformed input and
    /// [`SwapError::Overflow`] if the conversion exceeds 256 bits.
    pub fn source_for_target(&self, input: &str) -> Result<Option<TokenAmount>, SwapError> {
        let Some(amount) = parse_field(input, self.target.decimals)? else {
            return Ok(None);
        };
        calculate_swap_input(amount, self.rate, self.source.decimals).map(Some)
    }

    /// Recomputes the opposite field after `changed` was edited to `input`.
    ///
    /// # Errors
    ///
    /// As [`target_for_source`](Self::target_for_source) and
    /// [`source_for_target`](Self::source_for_target).
    pub fn recalculate(&self, changed: Side, input: &str) -> Result<Option<TokenAmount>, SwapError> {
        match changed {
            Side::Source => self.target_for_source(input),
            Side::Target => self.source_for_target(input),
        }
    }

    /// Prices a swap of `source_input` of the source token, deducting the
    /// processing fee from the target amount.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Parse`] for a malformed input and
    /// [`SwapError::Overflow`] if any step exceeds 256 bits.
    pub fn quote(&self, source_input: &str) -> Result<SwapQuote, SwapError> {
        let source = TokenAmount::parse(source_input, self.source.decimals)?;
        let target = calculate_swap_output(source, self.rate, self.target.decimals)?;
        let fee = calculate_fee(target, self.fee_bps)?;
        let receive = subtract_fee(target, fee)?;
        Ok(SwapQuote {
            source_symbol: self.source.symbol.clone(),
            target_symbol: self.target.symbol.clone(),
            source,
            target,
            fee,
            receive,
            rate: self.rate,
            source_usd: usd_value(source, self.source_price)?,
            target_usd: usd_value(target, self.target_price)?,
        })
    }
}

fn parse_field(input: &str, decimals: Decimals) -> Result<Option<TokenAmount>, SwapError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let amount = TokenAmount::parse(input, decimals)?;
    Ok((!amount.is_zero()).then_some(amount))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use alloy_primitives::U256;

    use super::*;

    fn calc(source: &str, target: &str, sp: Option<f64>, tp: Option<f64>) -> SwapCalculator {
        let (sp, tp) = (sp.map(TokenPrice::new), tp.map(TokenPrice::new));
        let Ok(c) = SwapCalculator::from_registry(
            &TokenRegistry::default(),
            source,
            target,
            sp.as_ref(),
            tp.as_ref(),
            &EngineConfig::default(),
        ) else {
            panic!("expected calculator");
        };
        c
    }

    fn eth_wbtc() -> SwapCalculator {
        calc("ETH", "WBTC", Some(2500.0), Some(50_000.0))
    }

    #[test]
    fn rate_from_prices() {
        let c = eth_wbtc();
        assert_eq!(c.rate().raw(), U256::from(50_000_000_000_000_000u64));
        assert_eq!(c.display_rate(), "0.05");
        assert_eq!(c.source().symbol, "ETH");
        assert_eq!(c.target().decimals, Decimals::SATOSHI);
    }

    #[test]
    fn forward() {
        let Ok(Some(out)) = eth_wbtc().target_for_source("2") else {
            panic!("expected amount");
        };
        assert_eq!(out.raw(), U256::from(10_000_000u64));
    }

    #[test]
    fn reverse() {
        let Ok(Some(src)) = eth_wbtc().source_for_target("0.1") else {
            panic!("expected amount");
        };
        assert_eq!(src.formatted(), "2");
    }

    #[test]
    fn blank_and_zero_clear_the_field() {
        let c = eth_wbtc();
        assert_eq!(c.target_for_source(""), Ok(None));
        assert_eq!(c.target_for_source("  "), Ok(None));
        assert_eq!(c.target_for_source("0.000"), Ok(None));
        assert_eq!(c.source_for_target("0"), Ok(None));
    }

    #[test]
    fn malformed_input() {
        let Err(SwapError::Parse(_)) = eth_wbtc().target_for_source("two") else {
            panic!("expected Parse");
        };
    }

    #[test]
    fn recalculate_dispatches_on_side() {
        let c = eth_wbtc();
        assert_eq!(c.recalculate(Side::Source, "2"), c.target_for_source("2"));
        assert_eq!(c.recalculate(Side::Target, "0.1"), c.source_for_target("0.1"));
    }

    #[test]
    fn stablecoins_need_no_feed() {
        let c = calc("USDC", "USDT", None, None);
        assert_eq!(c.rate(), ExchangeRate::PARITY);
        let Ok(Some(out)) = c.target_for_source("100.5") else {
            panic!("expected amount");
        };
        assert_eq!(out.formatted(), "100.5");
    }

    #[test]
    fn missing_price_is_unavailable() {
        let Err(e) = SwapCalculator::from_registry(
            &TokenRegistry::default(),
            "ETH",
            "UNI",
            Some(&TokenPrice::new(2500.0)),
            None,
            &EngineConfig::default(),
        ) else {
            panic!("expected Err");
        };
        assert_eq!(e, SwapError::PriceUnavailable("UNI".to_string()));
    }

    #[test]
    fn unknown_symbol() {
        let Err(SwapError::UnknownToken(_)) = SwapCalculator::from_registry(
            &TokenRegistry::default(),
            "DOGE",
            "ETH",
            None,
            None,
            &EngineConfig::default(),
        ) else {
            panic!("expected UnknownToken");
        };
    }

    #[test]
    fn quote_deducts_ten_bps_from_target() {
        // 1000 USDC -> 0.4 ETH, fee 0.0004 ETH
        let c = calc("USDC", "ETH", None, Some(2500.0));
        let Ok(q) = c.quote("1000") else {
            panic!("expected quote");
        };
        assert_eq!(q.source_symbol, "USDC");
        assert_eq!(q.target_symbol, "ETH");
        assert_eq!(q.target.formatted(), "0.4");
        assert_eq!(q.fee.formatted(), "0.0004");
        assert_eq!(q.receive.formatted(), "0.3996");
        assert_eq!(q.source_usd.to_string(), "1000.00");
        assert_eq!(q.target_usd.to_string(), "1000.00");
        assert_eq!(q.rate, c.rate());
    }

    #[test]
    fn quote_fee_follows_config() {
        let config = EngineConfig {
            fee_bps: BasisPoints::new(100),
            ..EngineConfig::default()
        };
        let Ok(c) = SwapCalculator::from_registry(
            &TokenRegistry::default(),
            "USDC",
            "USDT",
            None,
            None,
            &config,
        ) else {
            panic!("expected calculator");
        };
        let Ok(q) = c.quote("200") else {
            panic!("expected quote");
        };
        assert_eq!(q.fee.formatted(), "2");
        assert_eq!(q.receive.formatted(), "198");
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::Source.to_string(), "source");
        assert_eq!(Side::Target.to_string(), "target");
    }
}
