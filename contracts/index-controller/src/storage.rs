use index_types::{IndexError, IndexPoolMeta, DEFAULT_SELLER_PREMIUM};
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS
// ============================================================================
// - Roles and collaborator addresses share the instance entry
// - Each pool's metadata (~120 bytes) and seller are separate persistent entries
// - A reindex reads at most 10 token records through the pool, so a single
//   call stays far below the 100 read entry limit
// ============================================================================

/// Storage keys for the controller
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner: prepares pools, forces reindexes, sets fees and premiums (Instance)
    Owner,
    /// Governance: pool controller and exit fee recipients (Instance)
    Governance,
    /// May toggle public swap alongside the owner (Instance)
    CircuitBreaker,
    /// TWAP price oracle (Instance)
    PriceOracle,
    /// Scored token list registry (Instance)
    TokenLists,
    /// Keyed factory deploying pools, initializers and sellers (Instance)
    PoolFactory,
    /// Exit fee recipient handed to newly initialized pools (Instance)
    DefaultExitFeeRecipient,
    /// Premium handed to newly deployed sellers (Instance)
    DefaultSellerPremium,
    /// pool -> IndexPoolMeta (Persistent)
    PoolMeta(Address),
    /// pool -> unbound token seller (Persistent)
    PoolSeller(Address),
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

// === Roles and collaborators ===

/// Read a required address from instance storage
pub fn get_address(env: &Env, key: &DataKey) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(env, IndexError::NotInitialized))
}

pub fn set_address(env: &Env, key: &DataKey, address: &Address) {
    env.storage().instance().set(key, address);
    extend_instance_ttl(env);
}

pub fn get_default_seller_premium(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::DefaultSellerPremium)
        .unwrap_or(DEFAULT_SELLER_PREMIUM)
}

pub fn set_default_seller_premium(env: &Env, premium: u32) {
    env.storage()
        .instance()
        .set(&DataKey::DefaultSellerPremium, &premium);
    extend_instance_ttl(env);
}

// === Pools ===

pub fn get_meta(env: &Env, pool: &Address) -> Option<IndexPoolMeta> {
    let key = DataKey::PoolMeta(pool.clone());
    let meta = env.storage().persistent().get(&key);
    if meta.is_some() {
        extend_persistent_ttl(env, &key);
    }
    meta
}

/// Metadata of a pool the controller has finished initializing
pub fn get_initialized_meta(env: &Env, pool: &Address) -> IndexPoolMeta {
    match get_meta(env, pool) {
        Some(meta) if meta.initialized => meta,
        _ => panic_with_error!(env, IndexError::PoolNotFound),
    }
}

pub fn set_meta(env: &Env, pool: &Address, meta: &IndexPoolMeta) {
    let key = DataKey::PoolMeta(pool.clone());
    env.storage().persistent().set(&key, meta);
    extend_persistent_ttl(env, &key);
}

pub fn get_seller(env: &Env, pool: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PoolSeller(pool.clone()))
}

pub fn set_seller(env: &Env, pool: &Address, seller: &Address) {
    let key = DataKey::PoolSeller(pool.clone());
    env.storage().persistent().set(&key, seller);
    extend_persistent_ttl(env, &key);
}
