//! Property-based tests using `proptest` for conversion invariants.
//!
//! 1. **Format stability**: `parse(format(raw)) == raw`.
//! 2. **Swap round-trip**: source → target → source never exceeds the original,
//!    and loses at most one raw unit per truncating step.
//! 3. **Rate antitonicity**: a higher target price never raises the rate.
//! 4. **Fee bounds**: 0 bp charges nothing, 10 000 bp charges everything.
//! 5. **Fee subtraction**: deducting a computed fee never fails.
//! 6. **Comparison symmetry**: `cmp(a, b) == cmp(b, a).reverse()`.

use alloy_primitives::U256;
use proptest::prelude::*;

use super::*;
use crate::domain::{BasisPoints, ExchangeRate, TokenAmount, UsdPrice};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Decimal counts covering the common token precisions and some beyond 18.
fn decimals_strategy() -> impl Strategy<Value = Decimals> {
    prop_oneof![Just(0u8), Just(2u8), Just(6u8), Just(8u8), Just(18u8), 19u8..=24u8].prop_map(
        |d| {
            let Ok(d) = Decimals::new(d) else {
                panic!("valid decimals");
            };
            d
        },
    )
}

/// Raw amounts up to `u128::MAX`, far below the 256-bit overflow boundary
/// once multiplied by an 18-decimal rate.
fn raw_strategy() -> impl Strategy<Value = U256> {
    any::<u128>().prop_map(U256::from)
}

/// USD prices between $0.00000001 and $10 000 000.
fn price_strategy() -> impl Strategy<Value = UsdPrice> {
    (1u64..=1_000_000_000_000_000u64).prop_map(|v| UsdPrice::from_raw(U256::from(v)))
}

/// Largest source-side loss a swap round trip can show at `rate`.
///
/// In normalized units the loss stays below the worth of one target raw
/// unit plus one. Mapped back to the source, a source above 18 decimals
/// also loses what normalizing it truncated.
fn round_trip_bound(rate: ExchangeRate, source: Decimals, target: Decimals) -> U256 {
    let ten = U256::from(10u64);
    let one = U256::from(1u64);
    let target_unit = ten.pow(U256::from(18 - target.get().min(18)));
    let scale = ten.pow(U256::from(18u64));
    let norm = (target_unit * scale + rate.raw() - one) / rate.raw();
    if source.get() <= 18 {
        let k = ten.pow(U256::from(18 - source.get()));
        (norm + k - one) / k
    } else {
        (norm + one) * ten.pow(U256::from(source.get() - 18)) - one
    }
}

fn bps_strategy() -> impl Strategy<Value = BasisPoints> {
    (0u32..=10_000u32).prop_map(BasisPoints::new)
}

// ---------------------------------------------------------------------------
// Property 1: Format stability
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_formatted_reparses(raw in raw_strategy(), decimals in decimals_strategy()) {
        let amount = TokenAmount::new(raw, decimals);
        let Ok(back) = create_token_amount(&amount.formatted(), decimals) else {
            return Err(TestCaseError::fail("formatted amount must parse"));
        };
        prop_assert_eq!(back, amount);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Swap round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_swap_round_trip_loses_value(
        raw in raw_strategy(),
        source_decimals in decimals_strategy(),
        target_decimals in decimals_strategy(),
        source_price in price_strategy(),
        target_price in price_strategy(),
    ) {
        let original = TokenAmount::new(raw, source_decimals);
        let Ok(rate) = calculate_exchange_rate(source_price, target_price) else {
            return Err(TestCaseError::fail("non-zero target price"));
        };
        if rate.is_zero() {
            return Ok(());
        }
        let Ok(out) = calculate_swap_output(original, rate, target_decimals) else {
            return Ok(());
        };
        let Ok(back) = calculate_swap_input(out, rate, source_decimals) else {
            return Ok(());
        };
        prop_assert!(
            back.raw() <= original.raw(),
            "round-trip should lose value: final={} > original={}",
            back.raw(), original.raw()
        );
        let loss = original.raw() - back.raw();
        let bound = round_trip_bound(rate, source_decimals, target_decimals);
        prop_assert!(
            loss <= bound,
            "round-trip loss {} exceeds truncation bound {}",
            loss, bound
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Rate antitonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_rate_antitonic_in_target(
        source in price_strategy(),
        low in price_strategy(),
        bump in 0u64..=1_000_000_000u64,
    ) {
        let high = UsdPrice::from_raw(low.raw() + U256::from(bump));
        let (Ok(r_low), Ok(r_high)) = (
            calculate_exchange_rate(source, low),
            calculate_exchange_rate(source, high),
        ) else {
            return Err(TestCaseError::fail("non-zero target price"));
        };
        prop_assert!(r_high <= r_low);
    }

    #[test]
    fn prop_zero_target_rejected(source in price_strategy()) {
        let Err(SwapError::DivisionByZero(_)) = calculate_exchange_rate(source, UsdPrice::ZERO)
        else {
            return Err(TestCaseError::fail("expected DivisionByZero"));
        };
    }
}

// ---------------------------------------------------------------------------
// Property 4 & 5: Fees
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_fee_bounds(raw in raw_strategy(), decimals in decimals_strategy()) {
        let amount = TokenAmount::new(raw, decimals);
        let (Ok(none), Ok(all)) = (
            calculate_fee(amount, BasisPoints::ZERO),
            calculate_fee(amount, BasisPoints::MAX_PERCENT),
        ) else {
            return Err(TestCaseError::fail("fee must compute"));
        };
        prop_assert!(none.is_zero());
        prop_assert_eq!(all.raw(), amount.raw());
    }

    #[test]
    fn prop_fee_subtraction_never_negative(
        raw in raw_strategy(),
        decimals in decimals_strategy(),
        bps in bps_strategy(),
    ) {
        let amount = TokenAmount::new(raw, decimals);
        let Ok(fee) = calculate_fee(amount, bps) else {
            return Err(TestCaseError::fail("fee must compute"));
        };
        let Ok(rest) = subtract_fee(amount, fee) else {
            return Err(TestCaseError::fail("fee never exceeds amount"));
        };
        prop_assert!(rest.raw() <= amount.raw());
        prop_assert_eq!(rest.raw() + fee.raw(), amount.raw());
    }

    #[test]
    fn prop_fee_monotonic_in_bps(raw in raw_strategy(), a in bps_strategy(), b in bps_strategy()) {
        let amount = TokenAmount::new(raw, Decimals::NORMALIZED);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (Ok(f_lo), Ok(f_hi)) = (calculate_fee(amount, lo), calculate_fee(amount, hi)) else {
            return Err(TestCaseError::fail("fee must compute"));
        };
        prop_assert!(f_lo.raw() <= f_hi.raw());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Comparison
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_compare_antisymmetric(
        a in raw_strategy(),
        b in raw_strategy(),
        da in decimals_strategy(),
        db in decimals_strategy(),
    ) {
        let (x, y) = (TokenAmount::new(a, da), TokenAmount::new(b, db));
        let (Ok(xy), Ok(yx)) = (compare_amounts(x, y), compare_amounts(y, x)) else {
            return Err(TestCaseError::fail("u128 amounts rescale within 256 bits"));
        };
        prop_assert_eq!(xy, yx.reverse());
    }

    #[test]
    fn prop_parity_output_preserves_value(raw in raw_strategy(), decimals in decimals_strategy()) {
        let amount = TokenAmount::new(raw, decimals);
        let Ok(out) = calculate_swap_output(amount, ExchangeRate::PARITY, decimals) else {
            return Err(TestCaseError::fail("parity swap must fit"));
        };
        // Below 18 decimals the normalization is exact; above it may truncate.
        if decimals <= Decimals::NORMALIZED {
            prop_assert_eq!(out, amount);
        } else {
            prop_assert!(out.raw() <= amount.raw());
        }
    }
}
