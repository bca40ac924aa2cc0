use index_types::{IndexError, TokenListConfig};
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

// ============================================================================
// SOROBAN RESOURCE LIMITS
// ============================================================================
// - A list holds at most 25 addresses (~1.4 KB), well below the 128 KiB entry cap
// - Config and tokens of a list are separate persistent entries so that
//   reading a config never pulls the token array
// - Sorting a full list reads 25 scores from one strategy call
// ============================================================================

/// Storage keys for the registry
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Registry owner (Instance storage)
    Owner,
    /// TWAP oracle asked to record observations (Instance storage)
    PriceOracle,
    /// Number of lists created; also the highest valid id (Instance storage)
    ListCount,
    /// list_id -> TokenListConfig (Persistent storage)
    ListConfig(u32),
    /// list_id -> token addresses (Persistent storage)
    ListTokens(u32),
}

const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Roles ===

pub fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, IndexError::NotInitialized))
}

pub fn get_price_oracle(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::PriceOracle)
        .unwrap_or_else(|| panic_with_error!(env, IndexError::NotInitialized))
}

// === Lists ===

pub fn get_list_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ListCount)
        .unwrap_or(0)
}

pub fn set_list_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ListCount, &count);
    extend_instance_ttl(env);
}

/// Rejects ids outside `[1, count]`
pub fn require_valid_list(env: &Env, list_id: u32) {
    if list_id == 0 || list_id > get_list_count(env) {
        panic_with_error!(env, IndexError::InvalidListId);
    }
}

pub fn get_config(env: &Env, list_id: u32) -> TokenListConfig {
    require_valid_list(env, list_id);
    env.storage()
        .persistent()
        .get(&DataKey::ListConfig(list_id))
        .unwrap_or_else(|| panic_with_error!(env, IndexError::InvalidListId))
}

pub fn set_config(env: &Env, list_id: u32, config: &TokenListConfig) {
    let key = DataKey::ListConfig(list_id);
    env.storage().persistent().set(&key, config);
    extend_persistent_ttl(env, &key);
}

pub fn get_tokens(env: &Env, list_id: u32) -> Vec<Address> {
    require_valid_list(env, list_id);
    env.storage()
        .persistent()
        .get(&DataKey::ListTokens(list_id))
        .unwrap_or(Vec::new(env))
}

pub fn set_tokens(env: &Env, list_id: u32, tokens: &Vec<Address>) {
    let key = DataKey::ListTokens(list_id);
    env.storage().persistent().set(&key, tokens);
    extend_persistent_ttl(env, &key);
}
