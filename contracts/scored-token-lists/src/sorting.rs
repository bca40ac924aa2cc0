use index_types::TokenListConfig;
use soroban_sdk::{Address, Env, Vec};

/// Descending by score. Equal scores keep their incoming order.
pub fn sort_descending(
    env: &Env,
    tokens: &Vec<Address>,
    scores: &Vec<u128>,
) -> (Vec<Address>, Vec<u128>) {
    let mut sorted_tokens: Vec<Address> = Vec::new(env);
    let mut sorted_scores: Vec<u128> = Vec::new(env);

    for (token, score) in tokens.iter().zip(scores.iter()) {
        // Insert after every entry scoring at least as much
        let mut position = sorted_scores.len();
        while position > 0 && sorted_scores.get_unchecked(position - 1) < score {
            position -= 1;
        }
        sorted_tokens.insert(position, token);
        sorted_scores.insert(position, score);
    }

    (sorted_tokens, sorted_scores)
}

/// Drops entries whose score is outside the list's bounds, keeping order
pub fn filter_in_bounds(
    env: &Env,
    config: &TokenListConfig,
    tokens: &Vec<Address>,
    scores: &Vec<u128>,
) -> (Vec<Address>, Vec<u128>) {
    let mut kept_tokens = Vec::new(env);
    let mut kept_scores = Vec::new(env);
    for (token, score) in tokens.iter().zip(scores.iter()) {
        if config.score_in_bounds(score) {
            kept_tokens.push_back(token);
            kept_scores.push_back(score);
        }
    }
    (kept_tokens, kept_scores)
}

/// Index of `token`, linear scan
pub fn position_of(tokens: &Vec<Address>, token: &Address) -> Option<u32> {
    tokens.first_index_of(token)
}
