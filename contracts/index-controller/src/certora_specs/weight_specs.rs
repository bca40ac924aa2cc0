// ============================================================================
// WEIGHT INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Integer sqrt brackets its input: r^2 <= x < (r+1)^2
// 2. Denorms of any non-empty unit set never sum above WEIGHT_MULTIPLIER
// 3. Target values never exceed the notional they split
// 4. A larger reference balance never lowers a minimum balance
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{vec, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: Sanity - two-token denorms are reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_denorms(env: Env, unit0: u128, unit1: u128) {
    cvlr_assume!(unit0 > 0 && unit1 > 0);
    let _denorms = index_math::denorms(&env, &vec![&env, unit0, unit1]);
    cvlr_satisfy!(true);
}

/// RULE: sqrt(x)^2 <= x < (sqrt(x)+1)^2
#[cfg(feature = "certora")]
#[rule]
pub fn sqrt_brackets_input(x: u128) {
    let r = index_math::sqrt(x);
    cvlr_assert!(r.checked_mul(r).is_some_and(|sq| sq <= x));
    let next = r + 1;
    cvlr_assert!(next.checked_mul(next).map_or(true, |sq| sq > x));
}

/// RULE: denorms never sum above the multiplier
#[cfg(feature = "certora")]
#[rule]
pub fn denorms_never_exceed_multiplier(env: Env, unit0: u128, unit1: u128, unit2: u128) {
    cvlr_assume!(unit0 <= u64::MAX as u128 && unit1 <= u64::MAX as u128 && unit2 <= u64::MAX as u128);
    cvlr_assume!(unit0 > 0);
    let denorms = index_math::denorms(&env, &vec![&env, unit0, unit1, unit2]);
    cvlr_assert!(crate::invariants::denorms_bounded(&denorms));
}

/// RULE: target values never sum above the notional
#[cfg(feature = "certora")]
#[rule]
pub fn target_values_within_notional(env: Env, unit0: u128, unit1: u128, eth_value: u128) {
    cvlr_assume!(unit0 > 0 && unit1 > 0);
    cvlr_assume!(unit0 <= u64::MAX as u128 && unit1 <= u64::MAX as u128);
    cvlr_assume!(eth_value <= u64::MAX as u128);
    let values = index_math::target_values(&env, &vec![&env, unit0, unit1], eth_value);
    cvlr_assert!(values.get_unchecked(0) + values.get_unchecked(1) <= eth_value);
}

/// RULE: minimum balance is monotonic in the reference balance
#[cfg(feature = "certora")]
#[rule]
pub fn minimum_balance_monotonic(env: Env, price: u128, balance_low: u128, balance_high: u128, token_price: u128) {
    cvlr_assume!(price > 0 && price <= u64::MAX as u128);
    cvlr_assume!(token_price > 0 && token_price <= u64::MAX as u128);
    cvlr_assume!(balance_low <= balance_high && balance_high <= u64::MAX as u128);
    let low = index_math::minimum_balance(&env, price, balance_low, token_price);
    let high = index_math::minimum_balance(&env, price, balance_high, token_price);
    cvlr_assert!(low <= high);
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
