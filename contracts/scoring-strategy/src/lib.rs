#![no_std]

mod scoring;

use index_math::market_cap;
use index_types::collaborators::{cap_oracle, price_oracle, total_supply};
use index_types::{IndexError, LONG_TWAP_MAX_TIME_ELAPSED, LONG_TWAP_MIN_TIME_ELAPSED};
use soroban_sdk::{contract, contractimpl, contracttype, panic_with_error, Address, Env, Symbol, Vec};

pub use scoring::{BARBELL_5, BARBELL_6, FIVE_WAY_SPLIT_TOKENS, PEGGED_MIN_TOKENS};

/// Scoring rule a strategy instance applies
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ScoringKind {
    /// total supply * long TWAP price
    FullyDiluted = 0,
    SqrtFullyDiluted = 1,
    /// circulating market cap from the cap oracle
    Circulating = 2,
    SqrtCirculating = 3,
    /// one unit for each of exactly five tokens
    FiveWaySplit = 4,
    Barbell5 = 5,
    Barbell6 = 6,
    /// circulating caps with the two largest pegged at 20%
    Pegged20 = 7,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Kind,
    /// Price oracle or circulating cap oracle, depending on the kind
    Oracle,
}

const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;

#[contract]
pub struct ScoringStrategy;

#[contractimpl]
impl ScoringStrategy {
    pub fn initialize(env: Env, admin: Address, kind: ScoringKind, oracle: Option<Address>) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, IndexError::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Kind, &kind);
        if let Some(oracle) = oracle {
            env.storage().instance().set(&DataKey::Oracle, &oracle);
        }
        extend_instance_ttl(&env);
    }

    /// Scores for `tokens`, same length and order
    pub fn get_token_scores(env: Env, tokens: Vec<Address>) -> Vec<u128> {
        let kind = Self::kind(env.clone());
        let len = tokens.len();

        match kind {
            ScoringKind::FullyDiluted => fully_diluted_caps(&env, &tokens),
            ScoringKind::SqrtFullyDiluted => scoring::sqrt_all(&env, &fully_diluted_caps(&env, &tokens)),
            ScoringKind::Circulating => circulating_caps(&env, &tokens),
            ScoringKind::SqrtCirculating => scoring::sqrt_all(&env, &circulating_caps(&env, &tokens)),
            ScoringKind::FiveWaySplit => scoring::five_way_split(&env, len)
                .unwrap_or_else(|| panic_with_error!(&env, IndexError::InvalidTokenCount)),
            ScoringKind::Barbell5 => scoring::barbell(&env, len, &BARBELL_5)
                .unwrap_or_else(|| panic_with_error!(&env, IndexError::InsufficientTokens)),
            ScoringKind::Barbell6 => scoring::barbell(&env, len, &BARBELL_6)
                .unwrap_or_else(|| panic_with_error!(&env, IndexError::InsufficientTokens)),
            ScoringKind::Pegged20 => {
                if len < PEGGED_MIN_TOKENS {
                    panic_with_error!(&env, IndexError::InsufficientTokens);
                }
                scoring::pegged(&env, &circulating_caps(&env, &tokens))
                    .unwrap_or_else(|| panic_with_error!(&env, IndexError::InsufficientTokens))
            }
        }
    }

    /// Replace the oracle the scores are read from
    pub fn set_oracle(env: Env, oracle: Address) {
        let admin = Self::admin(env.clone());
        admin.require_auth();

        env.storage().instance().set(&DataKey::Oracle, &oracle);
        env.events()
            .publish((Symbol::new(&env, "oracle_updated"),), oracle);
        extend_instance_ttl(&env);
    }

    pub fn admin(env: Env) -> Address {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&env, IndexError::NotInitialized))
    }

    pub fn kind(env: Env) -> ScoringKind {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Kind)
            .unwrap_or_else(|| panic_with_error!(&env, IndexError::NotInitialized))
    }

    pub fn oracle(env: Env) -> Option<Address> {
        extend_instance_ttl(&env);
        env.storage().instance().get(&DataKey::Oracle)
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn read_oracle(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .unwrap_or_else(|| panic_with_error!(env, IndexError::OracleNotSet))
}

/// total supply * long-window TWAP price for each token
fn fully_diluted_caps(env: &Env, tokens: &Vec<Address>) -> Vec<u128> {
    let oracle = read_oracle(env);
    let prices = price_oracle::average_eth_prices(
        env,
        &oracle,
        tokens,
        LONG_TWAP_MIN_TIME_ELAPSED,
        LONG_TWAP_MAX_TIME_ELAPSED,
    );
    let mut caps = Vec::new(env);
    for (token, price) in tokens.iter().zip(prices.iter()) {
        caps.push_back(market_cap(env, total_supply(env, &token), price));
    }
    caps
}

fn circulating_caps(env: &Env, tokens: &Vec<Address>) -> Vec<u128> {
    let oracle = read_oracle(env);
    let caps = cap_oracle::circulating_market_caps(env, &oracle, tokens);
    if caps.len() != tokens.len() {
        panic_with_error!(env, IndexError::ArrayLengthMismatch);
    }
    caps
}
