//! Quoting and settling a swap end to end.
//!
//! Loads an engine configuration, builds the token registry, quotes an
//! ETH → WBTC swap with the configured fee and walks it through review,
//! submission and completion with a simulated transaction hash.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=token_swap=debug cargo run --example swap_quote
//! ```

use token_swap::config::EngineConfig;
use token_swap::domain::{Decimals, TokenPrice};
use token_swap::flow::{FlowState, SwapFlow, TransactionHash};
use token_swap::format::{format_display_amount, format_price, format_usd};
use token_swap::quote::{token_amount_for_usd, usd_value_of, Side, SwapCalculator};
use token_swap::registry::TokenRegistry;
use token_swap::traits::FromConfig;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
fee_bps = 30
stablecoins = ["USDC", "USDT", "DAI"]
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Token Swap Quote ===\n");

    // ── 1. Configuration and registry ───────────────────────────────────
    let config = EngineConfig::from_toml_str(CONFIG)?;
    let registry = TokenRegistry::from_config(&config)?;
    println!("Fee: {}", config.fee_bps);
    println!("Tokens:");
    for token in registry.iter() {
        let balance = registry.balance_of(&token.symbol)?;
        println!(
            "  {:<5} {:<20} balance {}",
            token.symbol,
            token.label,
            format_display_amount(balance)
        );
    }

    // ── 2. Prices as a feed would deliver them ──────────────────────────
    let eth = TokenPrice::new(3_150.42);
    let btc = TokenPrice::new(67_250.0);
    println!("\nETH  ${}", eth.unit_price);
    println!("WBTC ${}", btc.unit_price);

    let usdc_balance = registry.balance_of("USDC")?;
    let usdc_value = usd_value_of(usdc_balance, "USDC", None, &config)?;
    println!("USDC balance worth ${}", format_usd(usdc_value));

    let budget = token_amount_for_usd("1000", "ETH", Some(&eth), Decimals::NORMALIZED, &config)?;
    println!("$1,000 buys {} ETH", format_display_amount(budget));

    // ── 3. Calculator for ETH → WBTC ────────────────────────────────────
    let calc =
        SwapCalculator::from_registry(&registry, "ETH", "WBTC", Some(&eth), Some(&btc), &config)?;
    println!("\n1 ETH = {} WBTC", calc.display_rate());

    if let Some(source) = calc.recalculate(Side::Target, "0.5")? {
        println!("0.5 WBTC costs {} ETH", format_display_amount(source));
    }

    // ── 4. Quote ────────────────────────────────────────────────────────
    let quote = calc.quote("1.25")?;
    println!("\n--- Quote ---");
    println!("  Pay:      {} {}", format_display_amount(quote.source), quote.source_symbol);
    println!("  Get:      {} {}", format_display_amount(quote.target), quote.target_symbol);
    println!("  Fee:      {} {}", format_display_amount(quote.fee), quote.target_symbol);
    println!("  Receive:  {} {}", format_display_amount(quote.receive), quote.target_symbol);
    println!("  Value:    ${} → ${}", format_usd(quote.source_usd), format_usd(quote.target_usd));

    let eth_price = token_swap::conversion::create_price(eth.unit_price)?;
    println!("  ETH mark: ${}", format_price(eth_price));

    // ── 5. Review, submit, settle ───────────────────────────────────────
    let mut flow = SwapFlow::new();
    flow.initiate(quote)?;
    flow.confirm()?;
    flow.complete(TransactionHash::simulated(&mut rand::thread_rng()))?;

    if let FlowState::Completed { tx_hash, .. } = flow.state() {
        println!("\nSwap completed: {}", tx_hash.short());
        println!("  Full hash: {tx_hash}");
    }

    flow.reset();
    println!("\nFlow state: {}", flow.state().name());

    Ok(())
}
