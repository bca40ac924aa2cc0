use soroban_sdk::{contracttype, Address, BytesN};

/// Configuration of a scored token list.
/// The tokens themselves are stored under their own key.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenListConfig {
    /// Contract implementing `get_token_scores`
    pub scoring_strategy: Address,
    /// Inclusive lower score bound, never 0
    pub min_score: u128,
    /// Inclusive upper score bound, >= min_score
    pub max_score: u128,
    /// Off-chain metadata reference supplied at creation
    pub metadata_hash: BytesN<32>,
}

impl TokenListConfig {
    pub fn score_in_bounds(&self, score: u128) -> bool {
        score >= self.min_score && score <= self.max_score
    }
}

/// Whether `(min_score, max_score)` is an acceptable list filter
pub fn valid_score_bounds(min_score: u128, max_score: u128) -> bool {
    min_score > 0 && max_score >= min_score
}
