use index_types::ONE;
use soroban_sdk::Env;

use crate::mul_div;

/// Share of the extrapolated pool value a newly admitted token must reach
pub const MINIMUM_BALANCE_DIVISOR: u128 = 100;

/// Value in wei of `amount` tokens at `price` (wei per whole token)
pub fn eth_value(env: &Env, price: u128, amount: u128) -> u128 {
    mul_div(env, amount, price, ONE)
}

/// Amount of tokens worth `eth` wei at `price`
pub fn token_amount(env: &Env, price: u128, eth: u128) -> u128 {
    mul_div(env, eth, ONE, price)
}

/// Market cap of a token: `supply * price`, both 18-decimal
pub fn market_cap(env: &Env, supply: u128, price: u128) -> u128 {
    mul_div(env, supply, price, ONE)
}

/// Minimum balance for a token entering a pool.
///
/// The pool value is extrapolated from a single ready reference token
/// (`reference_balance` at `reference_price`); the new token must hold 1% of it.
pub fn minimum_balance(
    env: &Env,
    reference_price: u128,
    reference_balance: u128,
    token_price: u128,
) -> u128 {
    let pool_value = eth_value(env, reference_price, reference_balance);
    token_amount(env, token_price, pool_value / MINIMUM_BALANCE_DIVISOR)
}
