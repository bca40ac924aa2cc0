use index_math::{add_or_panic, sqrt};
use index_types::ONE;
use soroban_sdk::{Env, Vec};

/// Percentages assigned to the last five positions of the ordering
pub const BARBELL_5: [u128; 5] = [25, 20, 10, 20, 25];

/// Percentages assigned to the last six positions of the ordering
pub const BARBELL_6: [u128; 6] = [25, 15, 10, 10, 15, 25];

/// Number of tokens an equal-weight split requires
pub const FIVE_WAY_SPLIT_TOKENS: u32 = 5;

/// Minimum number of tokens for the pegged variant
pub const PEGGED_MIN_TOKENS: u32 = 5;

/// Share (percent) each of the two pegged tokens ends up with
const PEG_PERCENT: u128 = 20;
/// Share (percent) left for everything else
const REST_PERCENT: u128 = 60;

pub fn sqrt_all(env: &Env, scores: &Vec<u128>) -> Vec<u128> {
    let mut out = Vec::new(env);
    for score in scores.iter() {
        out.push_back(sqrt(score));
    }
    out
}

/// One unit per token. None unless exactly five tokens are given.
pub fn five_way_split(env: &Env, len: u32) -> Option<Vec<u128>> {
    if len != FIVE_WAY_SPLIT_TOKENS {
        return None;
    }
    let mut scores = Vec::new(env);
    for _ in 0..len {
        scores.push_back(ONE);
    }
    Some(scores)
}

/// Whole-percent table over the tail of the ordering; every earlier entry scores 0.
/// None when there are fewer tokens than table entries.
pub fn barbell(env: &Env, len: u32, table: &[u128]) -> Option<Vec<u128>> {
    let width = table.len() as u32;
    if len < width {
        return None;
    }
    let head = len - width;
    let mut scores = Vec::new(env);
    for i in 0..len {
        if i < head {
            scores.push_back(0);
        } else {
            scores.push_back(table[(i - head) as usize]);
        }
    }
    Some(scores)
}

/// Caps the two largest circulating caps so each would hold 20% of the capped
/// total, then rescales everything to 60%. Works in whole units.
pub fn pegged(env: &Env, caps: &Vec<u128>) -> Option<Vec<u128>> {
    let len = caps.len();
    if len < PEGGED_MIN_TOKENS {
        return None;
    }

    let mut units = Vec::new(env);
    for cap in caps.iter() {
        units.push_back(cap / ONE);
    }

    let (first, second) = two_largest(&units);
    let mut rest_sum = 0u128;
    for i in 0..len {
        if i != first && i != second {
            rest_sum = add_or_panic(rest_sum, units.get_unchecked(i));
        }
    }
    let peg = rest_sum * PEG_PERCENT / REST_PERCENT;

    let mut scores = Vec::new(env);
    for i in 0..len {
        let mut unit = units.get_unchecked(i);
        if (i == first || i == second) && unit > peg {
            unit = peg;
        }
        scores.push_back(unit * REST_PERCENT / 100);
    }
    Some(scores)
}

/// Indices of the largest and second largest entries, earliest index on ties
fn two_largest(values: &Vec<u128>) -> (u32, u32) {
    let mut first = 0u32;
    for i in 1..values.len() {
        if values.get_unchecked(i) > values.get_unchecked(first) {
            first = i;
        }
    }
    let mut second = if first == 0 { 1 } else { 0 };
    for i in 0..values.len() {
        if i != first && values.get_unchecked(i) > values.get_unchecked(second) {
            second = i;
        }
    }
    (first, second)
}
