use index_types::{WeightingFormula, ONE, WEIGHT_MULTIPLIER};
use soroban_sdk::{Env, Vec};

use crate::{add_or_panic, mul_div, sqrt};

/// Weight unit for every score: the score itself, or its integer square root
pub fn weight_units(env: &Env, scores: &Vec<u128>, formula: WeightingFormula) -> Vec<u128> {
    let mut units = Vec::new(env);
    for score in scores.iter() {
        let unit = match formula {
            WeightingFormula::Linear => score,
            WeightingFormula::Sqrt => sqrt(score),
        };
        units.push_back(unit);
    }
    units
}

pub fn sum(values: &Vec<u128>) -> u128 {
    values.iter().fold(0u128, add_or_panic)
}

/// Split `eth_value` across tokens in proportion to their weight units.
/// Each share is floored.
pub fn target_values(env: &Env, units: &Vec<u128>, eth_value: u128) -> Vec<u128> {
    let unit_sum = sum(units);
    let mut values = Vec::new(env);
    for unit in units.iter() {
        values.push_back(mul_div(env, eth_value, unit, unit_sum));
    }
    values
}

/// Token balances worth each token's share of `eth_value` at `prices`
pub fn target_balances(
    env: &Env,
    units: &Vec<u128>,
    prices: &Vec<u128>,
    eth_value: u128,
) -> Vec<u128> {
    if units.len() != prices.len() {
        panic!("Array length mismatch");
    }
    let values = target_values(env, units, eth_value);
    let mut balances = Vec::new(env);
    for (value, price) in values.iter().zip(prices.iter()) {
        balances.push_back(mul_div(env, value, ONE, price));
    }
    balances
}

/// Denormalized weights summing to at most WEIGHT_MULTIPLIER
pub fn denorms(env: &Env, units: &Vec<u128>) -> Vec<u128> {
    let unit_sum = sum(units);
    let mut result = Vec::new(env);
    for unit in units.iter() {
        result.push_back(mul_div(env, unit, WEIGHT_MULTIPLIER, unit_sum));
    }
    result
}
