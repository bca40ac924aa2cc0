#![no_std]

mod sorting;
mod storage;

use index_types::collaborators::{price_oracle, strategy};
use index_types::{valid_score_bounds, IndexError, TokenListConfig, MAX_LIST_TOKENS};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env, Symbol, Vec};
use storage::{
    extend_instance_ttl, get_config, get_list_count, get_owner, get_price_oracle, get_tokens,
    require_valid_list, set_config, set_list_count, set_tokens, DataKey,
};

#[contract]
pub struct ScoredTokenLists;

#[contractimpl]
impl ScoredTokenLists {
    /// Initialize the registry with its owner and the TWAP oracle used for price updates
    pub fn initialize(env: Env, owner: Address, price_oracle: Address) {
        if env.storage().instance().has(&DataKey::Owner) {
            panic_with_error!(&env, IndexError::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage()
            .instance()
            .set(&DataKey::PriceOracle, &price_oracle);
        set_list_count(&env, 0);
    }

    /// Create a list scored by `scoring_strategy` and filtered to
    /// `[min_score, max_score]`. Returns the new list id (1-based).
    pub fn create_token_list(
        env: Env,
        metadata_hash: BytesN<32>,
        scoring_strategy: Address,
        min_score: u128,
        max_score: u128,
    ) -> u32 {
        get_owner(&env).require_auth();

        if !valid_score_bounds(min_score, max_score) {
            panic_with_error!(&env, IndexError::InvalidScoreBounds);
        }

        let list_id = get_list_count(&env) + 1;
        let config = TokenListConfig {
            scoring_strategy: scoring_strategy.clone(),
            min_score,
            max_score,
            metadata_hash: metadata_hash.clone(),
        };
        set_config(&env, list_id, &config);
        set_tokens(&env, list_id, &Vec::new(&env));
        set_list_count(&env, list_id);

        env.events().publish(
            (Symbol::new(&env, "token_list_added"), list_id),
            (metadata_hash, scoring_strategy, min_score, max_score),
        );
        list_id
    }

    pub fn add_token(env: Env, list_id: u32, token: Address) {
        get_owner(&env).require_auth();

        let mut tokens = get_tokens(&env, list_id);
        if tokens.len() >= MAX_LIST_TOKENS {
            panic_with_error!(&env, IndexError::CapacityExceeded);
        }
        if tokens.contains(&token) {
            panic_with_error!(&env, IndexError::DuplicateMembership);
        }
        tokens.push_back(token.clone());
        set_tokens(&env, list_id, &tokens);

        env.events()
            .publish((Symbol::new(&env, "token_added"), list_id), token);
    }

    /// Batch add. Each new token is checked against the members present before
    /// the batch, not against the rest of the batch.
    pub fn add_tokens(env: Env, list_id: u32, new_tokens: Vec<Address>) {
        get_owner(&env).require_auth();

        let existing = get_tokens(&env, list_id);
        if existing.len() + new_tokens.len() > MAX_LIST_TOKENS {
            panic_with_error!(&env, IndexError::CapacityExceeded);
        }

        let mut tokens = existing.clone();
        for token in new_tokens.iter() {
            if existing.contains(&token) {
                panic_with_error!(&env, IndexError::DuplicateMembership);
            }
            tokens.push_back(token.clone());
            env.events()
                .publish((Symbol::new(&env, "token_added"), list_id), token);
        }
        set_tokens(&env, list_id, &tokens);
    }

    /// Remove `token` by swapping it with the last member; order is not preserved
    pub fn remove_token(env: Env, list_id: u32, token: Address) {
        get_owner(&env).require_auth();

        let mut tokens = get_tokens(&env, list_id);
        if tokens.is_empty() {
            panic_with_error!(&env, IndexError::EmptyList);
        }
        let index = sorting::position_of(&tokens, &token)
            .unwrap_or_else(|| panic_with_error!(&env, IndexError::NotFound));

        let last = tokens.len() - 1;
        if index != last {
            let tail = tokens.get_unchecked(last);
            tokens.set(index, tail);
        }
        tokens.pop_back();
        set_tokens(&env, list_id, &tokens);

        env.events()
            .publish((Symbol::new(&env, "token_removed"), list_id), token);
    }

    /// Re-score every member, sort descending and drop those outside the bounds.
    /// Open to anyone.
    pub fn sort_and_filter_tokens(env: Env, list_id: u32) {
        sort_and_filter(&env, list_id);
    }

    /// The `count` highest scoring members, sorted and filtered in memory.
    /// The stored list is left untouched.
    pub fn get_top_tokens_and_scores(env: Env, list_id: u32, count: u32) -> (Vec<Address>, Vec<u128>) {
        let (tokens, scores) = ranked_members(&env, list_id);
        if count > tokens.len() {
            panic_with_error!(&env, IndexError::ListSizeExceeded);
        }
        (tokens.slice(0..count), scores.slice(0..count))
    }

    /// Scores from the list's strategy, in the order given
    pub fn get_token_scores(env: Env, list_id: u32, tokens: Vec<Address>) -> Vec<u128> {
        let config = get_config(&env, list_id);
        read_scores(&env, &config, &tokens)
    }

    /// Ask the price oracle to record an observation for every member.
    /// Returns which tokens got a fresh observation.
    pub fn update_token_prices(env: Env, list_id: u32) -> Vec<bool> {
        let tokens = get_tokens(&env, list_id);
        price_oracle::update_prices(&env, &get_price_oracle(&env), &tokens)
    }

    // === Views ===

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    pub fn price_oracle(env: Env) -> Address {
        get_price_oracle(&env)
    }

    pub fn token_list_count(env: Env) -> u32 {
        extend_instance_ttl(&env);
        get_list_count(&env)
    }

    pub fn get_token_list_config(env: Env, list_id: u32) -> TokenListConfig {
        get_config(&env, list_id)
    }

    pub fn get_token_list(env: Env, list_id: u32) -> Vec<Address> {
        get_tokens(&env, list_id)
    }

    pub fn is_token_in_list(env: Env, list_id: u32, token: Address) -> bool {
        require_valid_list(&env, list_id);
        get_tokens(&env, list_id).contains(&token)
    }
}

fn read_scores(env: &Env, config: &TokenListConfig, tokens: &Vec<Address>) -> Vec<u128> {
    let scores = strategy::token_scores(env, &config.scoring_strategy, tokens);
    if scores.len() != tokens.len() {
        panic_with_error!(env, IndexError::ArrayLengthMismatch);
    }
    scores
}

/// Members scored, sorted descending and filtered to the list's bounds
fn ranked_members(env: &Env, list_id: u32) -> (Vec<Address>, Vec<u128>) {
    let config = get_config(env, list_id);
    let tokens = get_tokens(env, list_id);
    let scores = read_scores(env, &config, &tokens);

    let (sorted_tokens, sorted_scores) = sorting::sort_descending(env, &tokens, &scores);
    sorting::filter_in_bounds(env, &config, &sorted_tokens, &sorted_scores)
}

/// Sorts and filters a list in place, returning the surviving members and their scores
fn sort_and_filter(env: &Env, list_id: u32) -> (Vec<Address>, Vec<u128>) {
    let (kept_tokens, kept_scores) = ranked_members(env, list_id);
    set_tokens(env, list_id, &kept_tokens);

    env.events().publish(
        (Symbol::new(env, "list_sorted"), list_id),
        kept_tokens.len(),
    );
    (kept_tokens, kept_scores)
}
