// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over controller state and weight outputs. The contract checks
// its inputs with them; the certora_specs rules and the tests assert them
// over arbitrary values.
//
// 1. CONFIGURATION
//    - Pool size within [MIN_INDEX_SIZE, MAX_INDEX_SIZE]
//    - Seller premium strictly inside (0, MAX_SELLER_PREMIUM)
//
// 2. CADENCE
//    - Reindexes land on multiples of the cycle, reweighs never do
//    - A forced reindex leaves the index on a multiple of the cycle
//
// 3. WEIGHTS
//    - Denorms never sum above WEIGHT_MULTIPLIER
//    - Every target balance meets MIN_BALANCE
//
// ============================================================================

use index_types::{
    MAX_INDEX_SIZE, MAX_SELLER_PREMIUM, MIN_BALANCE, MIN_INDEX_SIZE, REWEIGH_CYCLE,
    WEIGHT_MULTIPLIER,
};
use soroban_sdk::Vec;

// ============================================================================
// CONFIGURATION INVARIANTS
// ============================================================================

/// Property:
///   MIN_INDEX_SIZE <= size <= MAX_INDEX_SIZE
pub fn index_size_in_bounds(size: u32) -> bool {
    (MIN_INDEX_SIZE..=MAX_INDEX_SIZE).contains(&size)
}

/// Property:
///   0 < premium < MAX_SELLER_PREMIUM
pub fn premium_in_range(premium: u32) -> bool {
    premium > 0 && premium < MAX_SELLER_PREMIUM
}

// ============================================================================
// CADENCE INVARIANTS
// ============================================================================

/// Invariant: the index a step moves to agrees with the kind of step
///
/// Property:
///   reindex  => new_index % REWEIGH_CYCLE == 0
///   reweigh  => new_index % REWEIGH_CYCLE != 0
pub fn cadence_step_valid(new_index: u32, reindexed: bool) -> bool {
    (new_index % REWEIGH_CYCLE == 0) == reindexed
}

/// Invariant: a forced reindex moves strictly forward onto a cycle boundary
pub fn forced_index_valid(old_index: u32, new_index: u32) -> bool {
    new_index > old_index
        && new_index % REWEIGH_CYCLE == 0
        && new_index - old_index <= REWEIGH_CYCLE
}

// ============================================================================
// WEIGHT INVARIANTS
// ============================================================================

/// Property:
///   sum(denorms) <= WEIGHT_MULTIPLIER
pub fn denorms_bounded(denorms: &Vec<u128>) -> bool {
    let mut total = 0u128;
    for denorm in denorms.iter() {
        total = match total.checked_add(denorm) {
            Some(total) => total,
            None => return false,
        };
    }
    total <= WEIGHT_MULTIPLIER
}

/// Property:
///   for all i: balances[i] >= MIN_BALANCE
pub fn balances_above_minimum(balances: &Vec<u128>) -> bool {
    balances.iter().all(|balance| balance >= MIN_BALANCE)
}

// ============================================================================
// TESTS
// ============================================================================
