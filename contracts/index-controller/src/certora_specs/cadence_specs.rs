// ============================================================================
// CADENCE INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Three reweighs separate two reindexes
// 2. A forced reindex lands on the next multiple of the cycle
// 3. Nothing happens before the reweigh delay has elapsed
//
// ============================================================================

#[cfg(feature = "certora")]
use index_types::{IndexPoolMeta, WeightingFormula};

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
fn meta_at(env: &Env, reweigh_index: u32, last_reweigh: u64) -> IndexPoolMeta {
    let mut meta = IndexPoolMeta::new(1, 2, WeightingFormula::Linear, env.current_contract_address());
    meta.initialized = true;
    meta.reweigh_index = reweigh_index;
    meta.last_reweigh = last_reweigh;
    meta
}

/// RULE: Sanity - a reindex is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_reindex_due(env: Env, reweigh_index: u32) {
    cvlr_assume!(reweigh_index < u32::MAX - 4);
    let meta = meta_at(&env, reweigh_index, 0);
    cvlr_assume!(meta.reindex_due());
    cvlr_satisfy!(true);
}

/// RULE: every step moves to an index agreeing with its kind
#[cfg(feature = "certora")]
#[rule]
pub fn step_matches_phase(env: Env, reweigh_index: u32) {
    cvlr_assume!(reweigh_index < u32::MAX - 4);
    let meta = meta_at(&env, reweigh_index, 0);
    let next = meta.next_reweigh_index();
    cvlr_assert!(crate::invariants::cadence_step_valid(next, meta.reindex_due()));
}

/// RULE: forced reindex lands on the next cycle boundary
#[cfg(feature = "certora")]
#[rule]
pub fn forced_reindex_aligned(env: Env, reweigh_index: u32) {
    cvlr_assume!(reweigh_index < u32::MAX - 4);
    let meta = meta_at(&env, reweigh_index, 0);
    cvlr_assert!(crate::invariants::forced_index_valid(
        reweigh_index,
        meta.forced_reindex_index()
    ));
}

/// RULE: the delay gate opens exactly at POOL_REWEIGH_DELAY
#[cfg(feature = "certora")]
#[rule]
pub fn delay_gate(env: Env, last_reweigh: u64, now: u64) {
    use index_types::POOL_REWEIGH_DELAY;

    cvlr_assume!(now >= last_reweigh);
    let meta = meta_at(&env, 0, last_reweigh);
    cvlr_assert!(meta.reweigh_delay_elapsed(now) == (now - last_reweigh >= POOL_REWEIGH_DELAY));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
