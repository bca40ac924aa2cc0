#![no_std]

pub mod collaborators;
mod error;
mod list;
mod pool;

pub use error::*;
pub use list::*;
pub use pool::*;

use soroban_sdk::{symbol_short, BytesN, Env, Symbol};

/// One whole unit in 18-decimal fixed point
pub const ONE: u128 = 1_000_000_000_000_000_000;

/// Maximum number of tokens a single scored list may hold
pub const MAX_LIST_TOKENS: u32 = 25;

/// Index pool size bounds (inclusive)
pub const MIN_INDEX_SIZE: u32 = 2;
pub const MAX_INDEX_SIZE: u32 = 10;

/// Upper bound (exclusive, as a power of two) on the notional used to prepare a pool.
/// Notional values are u128, which already sits below this bound.
pub const MAX_INITIAL_VALUE_BITS: u32 = 144;

/// Sum of all denorms in a pool at full weight (25 * 10^18)
pub const WEIGHT_MULTIPLIER: u128 = 25 * ONE;

/// Smallest token balance a pool will accept for any constituent
pub const MIN_BALANCE: u128 = ONE / 1_000_000_000_000;

/// Minimum delay between two reweighs of the same pool (2 weeks)
pub const POOL_REWEIGH_DELAY: u64 = 14 * 86_400;

/// Number of plain reweighs between two reindexes
pub const REWEIGHS_BEFORE_REINDEX: u32 = 3;

/// Length of a full reweigh/reindex cycle
pub const REWEIGH_CYCLE: u32 = REWEIGHS_BEFORE_REINDEX + 1;

/// TWAP window used for balances and minimum balances
pub const SHORT_TWAP_MIN_TIME_ELAPSED: u64 = 20 * 60;
pub const SHORT_TWAP_MAX_TIME_ELAPSED: u64 = 2 * 86_400;

/// TWAP window used for market cap scores
pub const LONG_TWAP_MIN_TIME_ELAPSED: u64 = 86_400;
pub const LONG_TWAP_MAX_TIME_ELAPSED: u64 = 907_200; // 10.5 days

/// Price observations are bucketed by hour
pub const PRICE_OBSERVATION_PERIOD: u64 = 3_600;

/// Unbound token seller premium, percent
pub const DEFAULT_SELLER_PREMIUM: u32 = 2;
pub const MAX_SELLER_PREMIUM: u32 = 20;

/// Implementation ids understood by the pool factory
pub fn pool_implementation_id() -> Symbol {
    symbol_short!("pool")
}

pub fn initializer_implementation_id() -> Symbol {
    symbol_short!("init")
}

pub fn seller_implementation_id() -> Symbol {
    symbol_short!("seller")
}

/// Deterministic salt for the pool prepared from `list_id` with `index_size` tokens.
/// The initializer and seller of that pool reuse the salt under their own
/// implementation ids.
pub fn pool_salt(env: &Env, list_id: u32, index_size: u32) -> BytesN<32> {
    let mut salt_bytes = [0u8; 32];
    salt_bytes[0..4].copy_from_slice(&list_id.to_be_bytes());
    salt_bytes[4..8].copy_from_slice(&index_size.to_be_bytes());
    BytesN::from_array(env, &salt_bytes)
}

/// Hour bucket used to key price observations
pub fn price_key(timestamp: u64) -> u64 {
    timestamp / PRICE_OBSERVATION_PERIOD
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_protocol_constants() {
        assert_eq!(WEIGHT_MULTIPLIER, 25_000_000_000_000_000_000);
        assert_eq!(MIN_BALANCE, 1_000_000);
        assert_eq!(POOL_REWEIGH_DELAY, 1_209_600);
        assert_eq!(REWEIGH_CYCLE, 4);
        assert_eq!(LONG_TWAP_MAX_TIME_ELAPSED, 86_400 * 21 / 2);
    }

    #[test]
    fn test_pool_salt_is_deterministic() {
        let env = Env::default();
        assert_eq!(pool_salt(&env, 1, 5), pool_salt(&env, 1, 5));
        assert_ne!(pool_salt(&env, 1, 5), pool_salt(&env, 1, 6));
        assert_ne!(pool_salt(&env, 1, 5), pool_salt(&env, 2, 5));
    }

    #[test]
    fn test_price_key_buckets_by_hour() {
        assert_eq!(price_key(0), 0);
        assert_eq!(price_key(3_599), 0);
        assert_eq!(price_key(3_600), 1);
        assert_eq!(price_key(7_201), 2);
    }

    #[test]
    fn test_u128_notional_below_bound() {
        // Every u128 notional is below 2^144
        assert!(u128::BITS < MAX_INITIAL_VALUE_BITS);
    }
}
