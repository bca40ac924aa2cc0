use index_types::IndexError;
use soroban_sdk::{contract, contractimpl, contracttype, panic_with_error, Address, Env};

#[contracttype]
#[derive(Clone)]
enum SellerKey {
    Controller,
    Pool,
    Premium,
}

/// Unbound token seller holding only its configuration
#[contract]
pub struct MockTokenSeller;

#[contractimpl]
impl MockTokenSeller {
    pub fn initialize(env: Env, controller: Address, pool: Address, premium: u32) {
        let storage = env.storage().instance();
        if storage.has(&SellerKey::Controller) {
            panic_with_error!(&env, IndexError::AlreadyInitialized);
        }
        storage.set(&SellerKey::Controller, &controller);
        storage.set(&SellerKey::Pool, &pool);
        storage.set(&SellerKey::Premium, &premium);
    }

    pub fn set_premium_percent(env: Env, premium: u32) {
        let controller: Address = match env.storage().instance().get(&SellerKey::Controller) {
            Some(controller) => controller,
            None => panic_with_error!(&env, IndexError::NotInitialized),
        };
        controller.require_auth();
        env.storage().instance().set(&SellerKey::Premium, &premium);
    }

    pub fn get_premium_percent(env: Env) -> u32 {
        env.storage().instance().get(&SellerKey::Premium).unwrap_or(0)
    }

    pub fn get_controller(env: Env) -> Option<Address> {
        env.storage().instance().get(&SellerKey::Controller)
    }

    pub fn get_pool(env: Env) -> Option<Address> {
        env.storage().instance().get(&SellerKey::Pool)
    }
}
