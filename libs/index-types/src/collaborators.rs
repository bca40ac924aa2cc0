// ============================================================================
// CROSS-CONTRACT CALLS
// ============================================================================
//
// Thin wrappers over the entry points the registry, strategies and controller
// consume from contracts they do not own. Each wrapper re-fetches from the
// collaborator on every call; nothing is cached across invocations.
//
// Function names are bound by Soroban's 32 character symbol limit.
// ============================================================================

use soroban_sdk::{Address, BytesN, Env, IntoVal, String, Symbol, Vec};

use crate::TokenRecord;

/// Uniswap-style TWAP price oracle. Prices are wei per whole token, 18 decimals.
pub mod price_oracle {
    use super::*;

    /// Average price over a window of `[min_elapsed, max_elapsed]` seconds.
    /// The oracle rejects the call when no observation falls in the window.
    pub fn average_eth_price(
        env: &Env,
        oracle: &Address,
        token: &Address,
        min_elapsed: u64,
        max_elapsed: u64,
    ) -> u128 {
        env.invoke_contract(
            oracle,
            &Symbol::new(env, "compute_average_eth_price"),
            (token, min_elapsed, max_elapsed).into_val(env),
        )
    }

    pub fn average_eth_prices(
        env: &Env,
        oracle: &Address,
        tokens: &Vec<Address>,
        min_elapsed: u64,
        max_elapsed: u64,
    ) -> Vec<u128> {
        env.invoke_contract(
            oracle,
            &Symbol::new(env, "compute_average_eth_prices"),
            (tokens, min_elapsed, max_elapsed).into_val(env),
        )
    }

    /// Records a fresh observation for each token, returning which ones updated
    pub fn update_prices(env: &Env, oracle: &Address, tokens: &Vec<Address>) -> Vec<bool> {
        env.invoke_contract(
            oracle,
            &Symbol::new(env, "update_prices"),
            (tokens,).into_val(env),
        )
    }
}

/// External circulating market cap feed
pub mod cap_oracle {
    use super::*;

    pub fn circulating_market_caps(env: &Env, oracle: &Address, tokens: &Vec<Address>) -> Vec<u128> {
        env.invoke_contract(
            oracle,
            &Symbol::new(env, "get_circulating_market_caps"),
            (tokens,).into_val(env),
        )
    }
}

/// Total supply of a token exposing `total_supply`
pub fn total_supply(env: &Env, token: &Address) -> u128 {
    let supply: i128 = env.invoke_contract(token, &Symbol::new(env, "total_supply"), ().into_val(env));
    if supply < 0 {
        panic!("Negative total supply");
    }
    supply as u128
}

/// Scoring strategy contracts
pub mod strategy {
    use super::*;

    pub fn token_scores(env: &Env, strategy: &Address, tokens: &Vec<Address>) -> Vec<u128> {
        env.invoke_contract(
            strategy,
            &Symbol::new(env, "get_token_scores"),
            (tokens,).into_val(env),
        )
    }
}

/// Scored token list registry
pub mod token_lists {
    use super::*;

    pub fn top_tokens_and_scores(
        env: &Env,
        registry: &Address,
        list_id: u32,
        count: u32,
    ) -> (Vec<Address>, Vec<u128>) {
        env.invoke_contract(
            registry,
            &Symbol::new(env, "get_top_tokens_and_scores"),
            (list_id, count).into_val(env),
        )
    }

    pub fn token_scores(
        env: &Env,
        registry: &Address,
        list_id: u32,
        tokens: &Vec<Address>,
    ) -> Vec<u128> {
        env.invoke_contract(
            registry,
            &Symbol::new(env, "get_token_scores"),
            (list_id, tokens).into_val(env),
        )
    }
}

/// Keyed factory deploying pools, initializers and sellers
pub mod pool_factory {
    use super::*;

    pub fn deploy(env: &Env, factory: &Address, implementation_id: &Symbol, salt: &BytesN<32>) -> Address {
        env.invoke_contract(
            factory,
            &Symbol::new(env, "deploy"),
            (implementation_id, salt).into_val(env),
        )
    }

    pub fn compute_address(
        env: &Env,
        factory: &Address,
        implementation_id: &Symbol,
        salt: &BytesN<32>,
    ) -> Address {
        env.invoke_contract(
            factory,
            &Symbol::new(env, "compute_address"),
            (implementation_id, salt).into_val(env),
        )
    }
}

/// Index pool administrative and read entry points
pub mod index_pool {
    use super::*;

    pub fn configure(env: &Env, pool: &Address, controller: &Address, name: &String, symbol: &String) {
        env.invoke_contract::<()>(
            pool,
            &Symbol::new(env, "configure"),
            (controller, name, symbol).into_val(env),
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: &Env,
        pool: &Address,
        tokens: &Vec<Address>,
        balances: &Vec<u128>,
        denorms: &Vec<u128>,
        token_provider: &Address,
        unbind_handler: &Address,
        exit_fee_recipient: &Address,
    ) {
        env.invoke_contract::<()>(
            pool,
            &Symbol::new(env, "initialize"),
            (tokens, balances, denorms, token_provider, unbind_handler, exit_fee_recipient)
                .into_val(env),
        );
    }

    pub fn set_swap_fee(env: &Env, pool: &Address, swap_fee: u128) {
        env.invoke_contract::<()>(pool, &Symbol::new(env, "set_swap_fee"), (swap_fee,).into_val(env));
    }

    pub fn set_controller(env: &Env, pool: &Address, controller: &Address) {
        env.invoke_contract::<()>(
            pool,
            &Symbol::new(env, "set_controller"),
            (controller,).into_val(env),
        );
    }

    pub fn set_public_swap(env: &Env, pool: &Address, enabled: bool) {
        env.invoke_contract::<()>(
            pool,
            &Symbol::new(env, "set_public_swap"),
            (enabled,).into_val(env),
        );
    }

    pub fn set_exit_fee_recipient(env: &Env, pool: &Address, recipient: &Address) {
        env.invoke_contract::<()>(
            pool,
            &Symbol::new(env, "set_exit_fee_recipient"),
            (recipient,).into_val(env),
        );
    }

    pub fn reweigh_tokens(env: &Env, pool: &Address, tokens: &Vec<Address>, desired_denorms: &Vec<u128>) {
        env.invoke_contract::<()>(
            pool,
            &Symbol::new(env, "reweigh_tokens"),
            (tokens, desired_denorms).into_val(env),
        );
    }

    pub fn reindex_tokens(
        env: &Env,
        pool: &Address,
        tokens: &Vec<Address>,
        desired_denorms: &Vec<u128>,
        minimum_balances: &Vec<u128>,
    ) {
        env.invoke_contract::<()>(
            pool,
            &Symbol::new(env, "reindex_tokens"),
            (tokens, desired_denorms, minimum_balances).into_val(env),
        );
    }

    pub fn set_minimum_balance(env: &Env, pool: &Address, token: &Address, minimum_balance: u128) {
        env.invoke_contract::<()>(
            pool,
            &Symbol::new(env, "set_minimum_balance"),
            (token, minimum_balance).into_val(env),
        );
    }

    pub fn current_desired_tokens(env: &Env, pool: &Address) -> Vec<Address> {
        env.invoke_contract(
            pool,
            &Symbol::new(env, "get_current_desired_tokens"),
            ().into_val(env),
        )
    }

    pub fn token_record(env: &Env, pool: &Address, token: &Address) -> TokenRecord {
        env.invoke_contract(pool, &Symbol::new(env, "get_token_record"), (token,).into_val(env))
    }

    /// A ready token and the balance that token would need to represent the
    /// whole pool at its current weight
    pub fn extrapolate_pool_value(env: &Env, pool: &Address) -> (Address, u128) {
        env.invoke_contract(
            pool,
            &Symbol::new(env, "extrapolate_pool_value"),
            ().into_val(env),
        )
    }
}

/// Pool initializer collecting the first contributions
pub mod pool_initializer {
    use super::*;

    pub fn initialize(
        env: &Env,
        initializer: &Address,
        controller: &Address,
        pool: &Address,
        tokens: &Vec<Address>,
        amounts: &Vec<u128>,
    ) {
        env.invoke_contract::<()>(
            initializer,
            &Symbol::new(env, "initialize"),
            (controller, pool, tokens, amounts).into_val(env),
        );
    }
}

/// Seller of tokens unbound from a pool during reindexing
pub mod token_seller {
    use super::*;

    pub fn initialize(env: &Env, seller: &Address, controller: &Address, pool: &Address, premium: u32) {
        env.invoke_contract::<()>(
            seller,
            &Symbol::new(env, "initialize"),
            (controller, pool, premium).into_val(env),
        );
    }

    pub fn set_premium_percent(env: &Env, seller: &Address, premium: u32) {
        env.invoke_contract::<()>(
            seller,
            &Symbol::new(env, "set_premium_percent"),
            (premium,).into_val(env),
        );
    }
}
