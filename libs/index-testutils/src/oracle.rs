use index_types::{price_key, IndexError};
use soroban_sdk::{contract, contractimpl, contracttype, panic_with_error, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
enum OracleKey {
    Price(Address),
    Observation(Address, u64),
    CirculatingCap(Address),
}

/// TWAP oracle returning whatever price was last set for a token
#[contract]
pub struct MockPriceOracle;

#[contractimpl]
impl MockPriceOracle {
    pub fn set_price(env: Env, token: Address, price: u128) {
        env.storage().instance().set(&OracleKey::Price(token), &price);
    }

    pub fn clear_price(env: Env, token: Address) {
        env.storage().instance().remove(&OracleKey::Price(token));
    }

    pub fn compute_average_eth_price(env: Env, token: Address, _min_elapsed: u64, _max_elapsed: u64) -> u128 {
        read_price(&env, &token)
    }

    pub fn compute_average_eth_prices(
        env: Env,
        tokens: Vec<Address>,
        _min_elapsed: u64,
        _max_elapsed: u64,
    ) -> Vec<u128> {
        let mut prices = Vec::new(&env);
        for token in tokens.iter() {
            prices.push_back(read_price(&env, &token));
        }
        prices
    }

    pub fn has_price_observation_in_window(env: Env, token: Address, price_key: u64) -> bool {
        env.storage()
            .instance()
            .has(&OracleKey::Observation(token, price_key))
    }

    /// Records an observation in the current hour for every priced token
    pub fn update_prices(env: Env, tokens: Vec<Address>) -> Vec<bool> {
        let key = price_key(env.ledger().timestamp());
        let mut updated = Vec::new(&env);
        for token in tokens.iter() {
            let priced = env.storage().instance().has(&OracleKey::Price(token.clone()));
            let observation = OracleKey::Observation(token, key);
            let fresh = priced && !env.storage().instance().has(&observation);
            if fresh {
                env.storage().instance().set(&observation, &true);
            }
            updated.push_back(fresh);
        }
        updated
    }
}

fn read_price(env: &Env, token: &Address) -> u128 {
    match env
        .storage()
        .instance()
        .get::<_, u128>(&OracleKey::Price(token.clone()))
    {
        Some(price) if price > 0 => price,
        _ => panic_with_error!(env, IndexError::PriceUnavailable),
    }
}

/// Circulating market cap feed backed by values set in tests
#[contract]
pub struct MockCirculatingCapOracle;

#[contractimpl]
impl MockCirculatingCapOracle {
    pub fn set_circulating_market_caps(env: Env, tokens: Vec<Address>, caps: Vec<u128>) {
        if tokens.len() != caps.len() {
            panic_with_error!(&env, IndexError::ArrayLengthMismatch);
        }
        for (token, cap) in tokens.iter().zip(caps.iter()) {
            env.storage()
                .instance()
                .set(&OracleKey::CirculatingCap(token), &cap);
        }
    }

    pub fn get_circulating_market_caps(env: Env, tokens: Vec<Address>) -> Vec<u128> {
        let mut caps = Vec::new(&env);
        for token in tokens.iter() {
            let cap: u128 = env
                .storage()
                .instance()
                .get(&OracleKey::CirculatingCap(token))
                .unwrap_or(0);
            caps.push_back(cap);
        }
        caps
    }
}
