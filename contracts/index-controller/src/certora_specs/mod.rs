// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the index controller's weight arithmetic and reweigh cadence.
//
// - weight_specs.rs  : denorms, target balances, integer sqrt, minimum balance
// - cadence_specs.rs : reweigh/reindex phase and forced reindex alignment
//
// USAGE:
// - Unit tests: cargo test -p index-controller
// - Certora build: cargo build --features certora -p index-controller
// - Verification: certoraSorobanProver index_controller.conf
//
// ============================================================================

pub mod cadence_specs;
pub mod weight_specs;
