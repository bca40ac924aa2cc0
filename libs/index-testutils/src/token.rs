use soroban_sdk::{contract, contractimpl, contracttype, Env};

#[contracttype]
#[derive(Clone)]
enum TokenKey {
    TotalSupply,
}

/// Token exposing only a settable total supply
#[contract]
pub struct MockSupplyToken;

#[contractimpl]
impl MockSupplyToken {
    pub fn set_total_supply(env: Env, supply: i128) {
        env.storage().instance().set(&TokenKey::TotalSupply, &supply);
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&TokenKey::TotalSupply)
            .unwrap_or(0)
    }
}
