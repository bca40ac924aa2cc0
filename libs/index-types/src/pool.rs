use soroban_sdk::{contracttype, Address};

use crate::{POOL_REWEIGH_DELAY, REWEIGH_CYCLE};

/// How scores are turned into weight units
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum WeightingFormula {
    /// Weight proportional to score
    Linear = 0,
    /// Weight proportional to the integer square root of score
    Sqrt = 1,
}

/// Controller-side bookkeeping for a prepared or live index pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexPoolMeta {
    /// Set once the initializer has finished
    pub initialized: bool,
    /// Token list the pool draws its constituents from
    pub list_id: u32,
    /// Target number of constituents
    pub index_size: u32,
    pub formula: WeightingFormula,
    /// Counts reweighs and reindexes; every 4th is a reindex
    pub reweigh_index: u32,
    /// Ledger timestamp of the last reweigh, reindex or initialization
    pub last_reweigh: u64,
    /// Initializer contract allowed to finish this pool
    pub initializer: Address,
}

impl IndexPoolMeta {
    pub fn new(
        list_id: u32,
        index_size: u32,
        formula: WeightingFormula,
        initializer: Address,
    ) -> Self {
        Self {
            initialized: false,
            list_id,
            index_size,
            formula,
            reweigh_index: 0,
            last_reweigh: 0,
            initializer,
        }
    }

    pub fn reweigh_delay_elapsed(&self, now: u64) -> bool {
        now.saturating_sub(self.last_reweigh) >= POOL_REWEIGH_DELAY
    }

    /// Index the pool moves to on its next reweigh or reindex
    pub fn next_reweigh_index(&self) -> u32 {
        self.reweigh_index + 1
    }

    /// Whether the next cadence step is a reindex rather than a reweigh
    pub fn reindex_due(&self) -> bool {
        self.next_reweigh_index() % REWEIGH_CYCLE == 0
    }

    /// Next multiple of the cycle strictly above the current index
    pub fn forced_reindex_index(&self) -> u32 {
        (self.reweigh_index / REWEIGH_CYCLE + 1) * REWEIGH_CYCLE
    }
}

/// Pool-side record of a constituent, as reported by the index pool
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenRecord {
    pub bound: bool,
    /// False while the token is still accumulating its minimum balance
    pub ready: bool,
    pub denorm: u128,
    pub desired_denorm: u128,
    pub balance: u128,
    pub minimum_balance: u128,
}
