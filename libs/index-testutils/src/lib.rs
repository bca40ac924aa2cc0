#![no_std]

// ============================================================================
// MOCK COLLABORATORS
// ============================================================================
//
// Minimal stand-ins for the contracts the index protocol talks to but does not
// own: price and circulating-cap oracles, supply tokens, the index pool, its
// initializer, the unbound token seller and the keyed pool factory.
// They are registered in unit tests with `env.register(Mock…, ())`.
// ============================================================================

mod factory;
mod initializer;
mod oracle;
mod pool;
mod seller;
mod token;

pub use factory::*;
pub use initializer::*;
pub use oracle::*;
pub use pool::*;
pub use seller::*;
pub use token::*;

use index_types::IndexError;

/// The host error a `try_*` client call surfaces when a contract rejects with `err`
pub fn contract_error(err: IndexError) -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(err as u32)
}
