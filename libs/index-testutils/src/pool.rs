use index_math::mul_div;
use index_types::{IndexError, TokenRecord};
use soroban_sdk::{contract, contractimpl, contracttype, panic_with_error, Address, Env, String, Vec};

#[contracttype]
#[derive(Clone)]
enum PoolKey {
    Controller,
    Name,
    Symbol,
    Initialized,
    CurrentTokens,
    DesiredTokens,
    Record(Address),
    SwapFee,
    PublicSwap,
    ExitFeeRecipient,
    TokenProvider,
    UnbindHandler,
}

/// Index pool that records what the controller asks of it
#[contract]
pub struct MockIndexPool;

#[contractimpl]
impl MockIndexPool {
    pub fn configure(env: Env, controller: Address, name: String, symbol: String) {
        let storage = env.storage().instance();
        if storage.has(&PoolKey::Controller) {
            panic_with_error!(&env, IndexError::AlreadyInitialized);
        }
        storage.set(&PoolKey::Controller, &controller);
        storage.set(&PoolKey::Name, &name);
        storage.set(&PoolKey::Symbol, &symbol);
    }

    pub fn initialize(
        env: Env,
        tokens: Vec<Address>,
        balances: Vec<u128>,
        denorms: Vec<u128>,
        token_provider: Address,
        unbind_handler: Address,
        exit_fee_recipient: Address,
    ) {
        require_controller(&env);
        if env.storage().instance().has(&PoolKey::Initialized) {
            panic_with_error!(&env, IndexError::AlreadyInitialized);
        }
        if tokens.len() != balances.len() || tokens.len() != denorms.len() {
            panic_with_error!(&env, IndexError::ArrayLengthMismatch);
        }
        for i in 0..tokens.len() {
            let denorm = denorms.get_unchecked(i);
            let record = TokenRecord {
                bound: true,
                ready: true,
                denorm,
                desired_denorm: denorm,
                balance: balances.get_unchecked(i),
                minimum_balance: 0,
            };
            write_record(&env, &tokens.get_unchecked(i), &record);
        }
        let storage = env.storage().instance();
        storage.set(&PoolKey::CurrentTokens, &tokens);
        storage.set(&PoolKey::DesiredTokens, &tokens);
        storage.set(&PoolKey::TokenProvider, &token_provider);
        storage.set(&PoolKey::UnbindHandler, &unbind_handler);
        storage.set(&PoolKey::ExitFeeRecipient, &exit_fee_recipient);
        storage.set(&PoolKey::PublicSwap, &true);
        storage.set(&PoolKey::Initialized, &true);
    }

    pub fn set_swap_fee(env: Env, swap_fee: u128) {
        require_controller(&env);
        env.storage().instance().set(&PoolKey::SwapFee, &swap_fee);
    }

    pub fn set_controller(env: Env, controller: Address) {
        require_controller(&env);
        env.storage().instance().set(&PoolKey::Controller, &controller);
    }

    pub fn set_public_swap(env: Env, enabled: bool) {
        require_controller(&env);
        env.storage().instance().set(&PoolKey::PublicSwap, &enabled);
    }

    pub fn set_exit_fee_recipient(env: Env, recipient: Address) {
        require_controller(&env);
        env.storage().instance().set(&PoolKey::ExitFeeRecipient, &recipient);
    }

    pub fn reweigh_tokens(env: Env, tokens: Vec<Address>, desired_denorms: Vec<u128>) {
        require_controller(&env);
        if tokens.len() != desired_denorms.len() {
            panic_with_error!(&env, IndexError::ArrayLengthMismatch);
        }
        for (token, denorm) in tokens.iter().zip(desired_denorms.iter()) {
            let mut record = read_record(&env, &token);
            if !record.bound {
                panic_with_error!(&env, IndexError::NotFound);
            }
            record.desired_denorm = denorm;
            write_record(&env, &token, &record);
        }
    }

    /// New tokens are bound as not-ready with the given minimum balance;
    /// bound tokens missing from `tokens` are marked for removal.
    pub fn reindex_tokens(
        env: Env,
        tokens: Vec<Address>,
        desired_denorms: Vec<u128>,
        minimum_balances: Vec<u128>,
    ) {
        require_controller(&env);
        if tokens.len() != desired_denorms.len() || tokens.len() != minimum_balances.len() {
            panic_with_error!(&env, IndexError::ArrayLengthMismatch);
        }
        let mut current = Self::get_current_tokens(env.clone());
        for token in current.iter() {
            if !tokens.contains(&token) {
                let mut record = read_record(&env, &token);
                record.desired_denorm = 0;
                write_record(&env, &token, &record);
            }
        }
        for i in 0..tokens.len() {
            let token = tokens.get_unchecked(i);
            let mut record = read_record(&env, &token);
            if !record.bound {
                record.bound = true;
                record.ready = false;
                record.minimum_balance = minimum_balances.get_unchecked(i);
                current.push_back(token.clone());
            }
            record.desired_denorm = desired_denorms.get_unchecked(i);
            write_record(&env, &token, &record);
        }
        let storage = env.storage().instance();
        storage.set(&PoolKey::CurrentTokens, &current);
        storage.set(&PoolKey::DesiredTokens, &tokens);
    }

    pub fn set_minimum_balance(env: Env, token: Address, minimum_balance: u128) {
        require_controller(&env);
        let mut record = read_record(&env, &token);
        if !record.bound {
            panic_with_error!(&env, IndexError::NotFound);
        }
        if record.ready {
            panic_with_error!(&env, IndexError::TokenReady);
        }
        record.minimum_balance = minimum_balance;
        write_record(&env, &token, &record);
    }

    pub fn extrapolate_pool_value(env: Env) -> (Address, u128) {
        let current = Self::get_current_tokens(env.clone());
        let mut total_denorm = 0u128;
        let mut reference: Option<(Address, TokenRecord)> = None;
        for token in current.iter() {
            let record = read_record(&env, &token);
            if !record.ready {
                continue;
            }
            total_denorm += record.denorm;
            if reference.is_none() {
                reference = Some((token, record));
            }
        }
        match reference {
            Some((token, record)) => {
                let value = mul_div(&env, record.balance, total_denorm, record.denorm);
                (token, value)
            }
            None => panic_with_error!(&env, IndexError::NotFound),
        }
    }

    // ---- reads ----

    pub fn get_current_tokens(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&PoolKey::CurrentTokens)
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_current_desired_tokens(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&PoolKey::DesiredTokens)
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_token_record(env: Env, token: Address) -> TokenRecord {
        read_record(&env, &token)
    }

    pub fn get_minimum_balance(env: Env, token: Address) -> u128 {
        read_record(&env, &token).minimum_balance
    }

    pub fn get_controller(env: Env) -> Option<Address> {
        env.storage().instance().get(&PoolKey::Controller)
    }

    pub fn get_name(env: Env) -> Option<String> {
        env.storage().instance().get(&PoolKey::Name)
    }

    pub fn get_symbol(env: Env) -> Option<String> {
        env.storage().instance().get(&PoolKey::Symbol)
    }

    pub fn get_swap_fee(env: Env) -> u128 {
        env.storage().instance().get(&PoolKey::SwapFee).unwrap_or(0)
    }

    pub fn is_public_swap(env: Env) -> bool {
        env.storage().instance().get(&PoolKey::PublicSwap).unwrap_or(false)
    }

    pub fn get_exit_fee_recipient(env: Env) -> Option<Address> {
        env.storage().instance().get(&PoolKey::ExitFeeRecipient)
    }

    pub fn get_token_provider(env: Env) -> Option<Address> {
        env.storage().instance().get(&PoolKey::TokenProvider)
    }

    pub fn get_unbind_handler(env: Env) -> Option<Address> {
        env.storage().instance().get(&PoolKey::UnbindHandler)
    }

    // ---- test hooks ----

    pub fn set_token_ready(env: Env, token: Address, ready: bool) {
        let mut record = read_record(&env, &token);
        record.ready = ready;
        write_record(&env, &token, &record);
    }

    pub fn set_token_balance(env: Env, token: Address, balance: u128) {
        let mut record = read_record(&env, &token);
        record.balance = balance;
        write_record(&env, &token, &record);
    }
}

fn require_controller(env: &Env) {
    let controller: Address = match env.storage().instance().get(&PoolKey::Controller) {
        Some(controller) => controller,
        None => panic_with_error!(env, IndexError::NotInitialized),
    };
    controller.require_auth();
}

fn read_record(env: &Env, token: &Address) -> TokenRecord {
    env.storage()
        .instance()
        .get(&PoolKey::Record(token.clone()))
        .unwrap_or_default()
}

fn write_record(env: &Env, token: &Address, record: &TokenRecord) {
    env.storage()
        .instance()
        .set(&PoolKey::Record(token.clone()), record);
}
