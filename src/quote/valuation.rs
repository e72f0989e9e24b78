//! Effective token prices and USD⇄token conversion.
//!
//! Stablecoins are valued at exactly $1 whatever the price feed says; every
//! other token uses its quoted unit price.

use tracing::debug;

use crate::config::EngineConfig;
use crate::conversion::{calculate_exchange_rate, calculate_swap_output, usd_value};
use crate::domain::{Decimals, TokenAmount, TokenPrice, UsdPrice, UsdValue};
use crate::error::SwapError;

/// The price used for `symbol`: $1 for configured stablecoins, otherwise
/// the quoted unit price.
///
/// Returns `None` when no usable quote exists (missing, NaN, negative or
/// infinite).
#[must_use]
pub fn effective_price(
    symbol: &str,
    api_price: Option<&TokenPrice>,
    config: &EngineConfig,
) -> Option<UsdPrice> {
    if config.is_stablecoin(symbol) {
        return Some(UsdPrice::ONE_DOLLAR);
    }
    let quoted = api_price?;
    match quoted.usd_price() {
        Ok(price) => Some(price),
        Err(e) => {
            debug!(symbol, unit_price = quoted.unit_price, error = %e, "unusable price quote");
            None
        }
    }
}

/// Like [`effective_price`] but also rejects a zero price.
pub(crate) fn usable_price(
    symbol: &str,
    api_price: Option<&TokenPrice>,
    config: &EngineConfig,
) -> Result<UsdPrice, SwapError> {
    effective_price(symbol, api_price, config)
        .filter(|p| !p.is_zero())
        .ok_or_else(|| SwapError::PriceUnavailable(symbol.to_string()))
}

/// USD value of `amount` of `symbol` at its effective price.
///
/// # Errors
///
/// Returns [`SwapError::PriceUnavailable`] if no effective price exists and
/// [`SwapError::Overflow`] if the valuation exceeds 256 bits.
pub fn usd_value_of(
    amount: TokenAmount,
    symbol: &str,
    api_price: Option<&TokenPrice>,
    config: &EngineConfig,
) -> Result<UsdValue, SwapError> {
    let price = effective_price(symbol, api_price, config)
        .ok_or_else(|| SwapError::PriceUnavailable(symbol.to_string()))?;
    usd_value(amount, price)
}

/// How much of `symbol` (at `decimals`) a USD amount buys.
///
/// Stablecoins convert 1:1. Other tokens go through the exchange rate from
/// $1 to the token's price, truncating like any swap.
///
/// # Errors
///
/// Returns [`SwapError::Parse`] for a malformed USD string and
/// [`SwapError::PriceUnavailable`] if the token has no non-zero effective
/// price.
///
/// # Examples
///
/// ```
/// use token_swap::config::EngineConfig;
/// use token_swap::domain::{Decimals, TokenPrice};
/// use token_swap::quote::token_amount_for_usd;
///
/// let config = EngineConfig::default();
/// let eth = TokenPrice::new(2500.0);
/// let amount = token_amount_for_usd("1000", "ETH", Some(&eth), Decimals::NORMALIZED, &config)
///     .expect("priced");
/// assert_eq!(amount.formatted(), "0.4");
/// ```
pub fn token_amount_for_usd(
    usd: &str,
    symbol: &str,
    api_price: Option<&TokenPrice>,
    decimals: Decimals,
    config: &EngineConfig,
) -> Result<TokenAmount, SwapError> {
    let price = usable_price(symbol, api_price, config)?;
    let dollars = TokenAmount::parse(usd, Decimals::NORMALIZED)?;
    if config.is_stablecoin(symbol) {
        return dollars.rescaled(decimals);
    }
    let rate = calculate_exchange_rate(UsdPrice::ONE_DOLLAR, price)?;
    calculate_swap_output(dollars, rate, decimals)
}
