use index_types::IndexError;
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, Address, Env, IntoVal, Symbol, Vec,
};

#[contracttype]
#[derive(Clone)]
enum InitializerKey {
    Controller,
    Pool,
    Tokens,
    Amounts,
}

/// Pool initializer that simply remembers the desired contributions and
/// forwards them to the controller when finished
#[contract]
pub struct MockPoolInitializer;

#[contractimpl]
impl MockPoolInitializer {
    pub fn initialize(env: Env, controller: Address, pool: Address, tokens: Vec<Address>, amounts: Vec<u128>) {
        let storage = env.storage().instance();
        if storage.has(&InitializerKey::Controller) {
            panic_with_error!(&env, IndexError::AlreadyInitialized);
        }
        storage.set(&InitializerKey::Controller, &controller);
        storage.set(&InitializerKey::Pool, &pool);
        storage.set(&InitializerKey::Tokens, &tokens);
        storage.set(&InitializerKey::Amounts, &amounts);
    }

    pub fn get_desired_tokens(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&InitializerKey::Tokens)
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_desired_amounts(env: Env) -> Vec<u128> {
        env.storage()
            .instance()
            .get(&InitializerKey::Amounts)
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_pool(env: Env) -> Option<Address> {
        env.storage().instance().get(&InitializerKey::Pool)
    }

    /// Hand the desired contributions to the controller as the collected balances
    pub fn finish(env: Env) {
        let tokens = Self::get_desired_tokens(env.clone());
        let amounts = Self::get_desired_amounts(env.clone());
        Self::finish_with(env, tokens, amounts);
    }

    pub fn finish_with(env: Env, tokens: Vec<Address>, balances: Vec<u128>) {
        let storage = env.storage().instance();
        let controller: Address = match storage.get(&InitializerKey::Controller) {
            Some(controller) => controller,
            None => panic_with_error!(&env, IndexError::NotInitialized),
        };
        let pool: Address = match storage.get(&InitializerKey::Pool) {
            Some(pool) => pool,
            None => panic_with_error!(&env, IndexError::NotInitialized),
        };
        env.invoke_contract::<()>(
            &controller,
            &Symbol::new(&env, "finish_prepared_index_pool"),
            (env.current_contract_address(), pool, tokens, balances).into_val(&env),
        );
    }
}
