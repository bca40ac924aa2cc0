#![no_std]

#[cfg(any(test, feature = "certora"))]
mod certora_specs;
mod invariants;
mod storage;

use index_math::{denorms, eth_value, minimum_balance, sum, target_balances, weight_units};
use index_types::collaborators::{
    index_pool, pool_factory, pool_initializer, price_oracle, token_lists, token_seller,
};
use index_types::{
    initializer_implementation_id, pool_implementation_id, pool_salt, seller_implementation_id,
    IndexError, IndexPoolMeta, WeightingFormula, SHORT_TWAP_MAX_TIME_ELAPSED,
    SHORT_TWAP_MIN_TIME_ELAPSED,
};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Symbol, Vec};
use storage::{
    extend_instance_ttl, get_address, get_default_seller_premium, get_initialized_meta, get_meta,
    get_seller, set_address, set_default_seller_premium, set_meta, set_seller, DataKey,
};

#[contract]
pub struct IndexController;

#[contractimpl]
impl IndexController {
    /// Initialize the controller with its roles and collaborators
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        owner: Address,
        governance: Address,
        circuit_breaker: Address,
        price_oracle: Address,
        token_lists: Address,
        pool_factory: Address,
        default_exit_fee_recipient: Address,
    ) {
        if env.storage().instance().has(&DataKey::Owner) {
            panic_with_error!(&env, IndexError::AlreadyInitialized);
        }
        owner.require_auth();

        set_address(&env, &DataKey::Owner, &owner);
        set_address(&env, &DataKey::Governance, &governance);
        set_address(&env, &DataKey::CircuitBreaker, &circuit_breaker);
        set_address(&env, &DataKey::PriceOracle, &price_oracle);
        set_address(&env, &DataKey::TokenLists, &token_lists);
        set_address(&env, &DataKey::PoolFactory, &pool_factory);
        set_address(
            &env,
            &DataKey::DefaultExitFeeRecipient,
            &default_exit_fee_recipient,
        );
    }

    // ========================================================================
    // POOL DEPLOYMENT
    // ========================================================================

    /// Deploy a pool and its initializer for the top `index_size` tokens of
    /// `list_id`, worth `initial_value` wei in total.
    /// Returns the pool address.
    pub fn prepare_index_pool(
        env: Env,
        list_id: u32,
        index_size: u32,
        initial_value: u128,
        formula: WeightingFormula,
        name: String,
        symbol: String,
    ) -> Address {
        require_owner(&env);

        if !invariants::index_size_in_bounds(index_size) {
            panic_with_error!(&env, IndexError::InvalidSizeBounds);
        }

        let factory = get_address(&env, &DataKey::PoolFactory);
        let salt = pool_salt(&env, list_id, index_size);
        let expected = pool_factory::compute_address(&env, &factory, &pool_implementation_id(), &salt);
        if get_meta(&env, &expected).is_some() {
            panic_with_error!(&env, IndexError::PoolAlreadyExists);
        }

        let (tokens, balances) = initial_tokens_and_balances(&env, list_id, index_size, initial_value, formula);

        let controller = env.current_contract_address();
        let pool = pool_factory::deploy(&env, &factory, &pool_implementation_id(), &salt);
        index_pool::configure(&env, &pool, &controller, &name, &symbol);

        let initializer = pool_factory::deploy(&env, &factory, &initializer_implementation_id(), &salt);
        pool_initializer::initialize(&env, &initializer, &controller, &pool, &tokens, &balances);

        let meta = IndexPoolMeta::new(list_id, index_size, formula, initializer.clone());
        set_meta(&env, &pool, &meta);

        env.events().publish(
            (Symbol::new(&env, "new_pool_initializer"), pool.clone()),
            (initializer, list_id, index_size, formula),
        );
        pool
    }

    /// Called by a pool's initializer once the desired tokens are collected.
    /// Weights are taken from the value of the contributed balances.
    pub fn finish_prepared_index_pool(
        env: Env,
        initializer: Address,
        pool: Address,
        tokens: Vec<Address>,
        balances: Vec<u128>,
    ) {
        initializer.require_auth();

        let mut meta = match get_meta(&env, &pool) {
            Some(meta) => meta,
            None => panic_with_error!(&env, IndexError::NotPreDeployPool),
        };
        if meta.initialized {
            panic_with_error!(&env, IndexError::AlreadyInitialized);
        }
        if meta.initializer != initializer {
            panic_with_error!(&env, IndexError::Unauthorized);
        }
        if tokens.len() != balances.len() {
            panic_with_error!(&env, IndexError::ArrayLengthMismatch);
        }

        let prices = short_twap_prices(&env, &tokens);
        let mut values = Vec::new(&env);
        for (price, balance) in prices.iter().zip(balances.iter()) {
            values.push_back(eth_value(&env, price, balance));
        }
        require_nonzero_units(&env, &values);
        let pool_denorms = denorms(&env, &values);
        debug_assert!(invariants::denorms_bounded(&pool_denorms));

        let controller = env.current_contract_address();
        let factory = get_address(&env, &DataKey::PoolFactory);
        let salt = pool_salt(&env, meta.list_id, meta.index_size);
        let seller = pool_factory::deploy(&env, &factory, &seller_implementation_id(), &salt);
        token_seller::initialize(&env, &seller, &controller, &pool, get_default_seller_premium(&env));

        index_pool::initialize(
            &env,
            &pool,
            &tokens,
            &balances,
            &pool_denorms,
            &initializer,
            &seller,
            &get_address(&env, &DataKey::DefaultExitFeeRecipient),
        );
        index_pool::set_public_swap(&env, &pool, true);

        meta.initialized = true;
        meta.last_reweigh = env.ledger().timestamp();
        set_meta(&env, &pool, &meta);
        set_seller(&env, &pool, &seller);

        env.events().publish(
            (Symbol::new(&env, "pool_initialized"), pool),
            (seller, meta.list_id, meta.index_size),
        );
    }

    /// Top `index_size` tokens of a list and the balances worth `eth_value` in total.
    /// Changes nothing on the controller.
    pub fn get_initial_tokens_and_balances(
        env: Env,
        list_id: u32,
        index_size: u32,
        eth_value: u128,
        formula: WeightingFormula,
    ) -> (Vec<Address>, Vec<u128>) {
        initial_tokens_and_balances(&env, list_id, index_size, eth_value, formula)
    }

    pub fn compute_pool_address(env: Env, list_id: u32, index_size: u32) -> Address {
        let factory = get_address(&env, &DataKey::PoolFactory);
        let salt = pool_salt(&env, list_id, index_size);
        pool_factory::compute_address(&env, &factory, &pool_implementation_id(), &salt)
    }

    pub fn compute_initializer_address(env: Env, pool: Address) -> Address {
        let meta = get_meta(&env, &pool).unwrap_or_else(|| panic_with_error!(&env, IndexError::PoolNotFound));
        let factory = get_address(&env, &DataKey::PoolFactory);
        let salt = pool_salt(&env, meta.list_id, meta.index_size);
        pool_factory::compute_address(&env, &factory, &initializer_implementation_id(), &salt)
    }

    pub fn compute_seller_address(env: Env, pool: Address) -> Address {
        let meta = get_meta(&env, &pool).unwrap_or_else(|| panic_with_error!(&env, IndexError::PoolNotFound));
        let factory = get_address(&env, &DataKey::PoolFactory);
        let salt = pool_salt(&env, meta.list_id, meta.index_size);
        pool_factory::compute_address(&env, &factory, &seller_implementation_id(), &salt)
    }

    // ========================================================================
    // REWEIGH / REINDEX
    // ========================================================================

    /// Re-score the pool's current tokens and push new desired weights.
    /// Membership does not change.
    pub fn reweigh_pool(env: Env, pool: Address) {
        let mut meta = get_initialized_meta(&env, &pool);
        let now = env.ledger().timestamp();
        if !meta.reweigh_delay_elapsed(now) {
            panic_with_error!(&env, IndexError::ReweighDelay);
        }
        if meta.reindex_due() {
            panic_with_error!(&env, IndexError::ReweighIndex);
        }
        meta.reweigh_index = meta.next_reweigh_index();
        meta.last_reweigh = now;
        debug_assert!(invariants::cadence_step_valid(meta.reweigh_index, false));

        let tokens = index_pool::current_desired_tokens(&env, &pool);
        let scores = token_lists::token_scores(
            &env,
            &get_address(&env, &DataKey::TokenLists),
            meta.list_id,
            &tokens,
        );
        let units = weight_units(&env, &scores, meta.formula);
        require_nonzero_units(&env, &units);
        index_pool::reweigh_tokens(&env, &pool, &tokens, &denorms(&env, &units));

        set_meta(&env, &pool, &meta);
        env.events().publish(
            (Symbol::new(&env, "pool_reweighed"), pool),
            meta.reweigh_index,
        );
    }

    /// Recompute the pool's membership from its list along with new weights.
    /// Due on every fourth step of the cadence.
    pub fn reindex_pool(env: Env, pool: Address) {
        let mut meta = get_initialized_meta(&env, &pool);
        let now = env.ledger().timestamp();
        if !meta.reweigh_delay_elapsed(now) {
            panic_with_error!(&env, IndexError::ReweighDelay);
        }
        if !meta.reindex_due() {
            panic_with_error!(&env, IndexError::ReweighIndex);
        }
        meta.reweigh_index = meta.next_reweigh_index();
        meta.last_reweigh = now;
        debug_assert!(invariants::cadence_step_valid(meta.reweigh_index, true));

        reindex(&env, &pool, &meta);

        set_meta(&env, &pool, &meta);
        env.events().publish(
            (Symbol::new(&env, "pool_reindexed"), pool),
            meta.reweigh_index,
        );
    }

    /// Reindex now, skipping the delay and the cadence check. The index jumps
    /// to the next multiple of the cycle.
    pub fn force_reindex_pool(env: Env, pool: Address) {
        require_owner(&env);

        let mut meta = get_initialized_meta(&env, &pool);
        let forced = meta.forced_reindex_index();
        debug_assert!(invariants::forced_index_valid(meta.reweigh_index, forced));
        meta.reweigh_index = forced;
        meta.last_reweigh = env.ledger().timestamp();

        reindex(&env, &pool, &meta);

        set_meta(&env, &pool, &meta);
        env.events().publish(
            (Symbol::new(&env, "pool_force_reindexed"), pool),
            meta.reweigh_index,
        );
    }

    /// Refresh the minimum balance of a token that is still filling up
    pub fn update_minimum_balance(env: Env, pool: Address, token: Address) {
        get_initialized_meta(&env, &pool);

        let record = index_pool::token_record(&env, &pool, &token);
        if !record.bound {
            panic_with_error!(&env, IndexError::NotFound);
        }
        if record.ready {
            panic_with_error!(&env, IndexError::TokenReady);
        }

        let oracle = get_address(&env, &DataKey::PriceOracle);
        let (reference_token, reference_balance) = index_pool::extrapolate_pool_value(&env, &pool);
        let reference_price = short_twap_price(&env, &oracle, &reference_token);
        let token_price = short_twap_price(&env, &oracle, &token);
        let minimum = minimum_balance(&env, reference_price, reference_balance, token_price);

        index_pool::set_minimum_balance(&env, &pool, &token, minimum);
        env.events().publish(
            (Symbol::new(&env, "minimum_balance_updated"), pool),
            (token, minimum),
        );
    }

    // ========================================================================
    // POOL ADMINISTRATION
    // ========================================================================

    pub fn set_swap_fee(env: Env, pool: Address, swap_fee: u128) {
        require_owner(&env);
        get_initialized_meta(&env, &pool);
        index_pool::set_swap_fee(&env, &pool, swap_fee);
        env.events()
            .publish((Symbol::new(&env, "swap_fee_updated"), pool), swap_fee);
    }

    /// Owner or circuit breaker may pause and resume swaps
    pub fn set_public_swap(env: Env, caller: Address, pool: Address, enabled: bool) {
        caller.require_auth();
        if caller != get_address(&env, &DataKey::Owner)
            && caller != get_address(&env, &DataKey::CircuitBreaker)
        {
            panic_with_error!(&env, IndexError::Unauthorized);
        }
        get_initialized_meta(&env, &pool);
        index_pool::set_public_swap(&env, &pool, enabled);
        env.events()
            .publish((Symbol::new(&env, "public_swap_updated"), pool), enabled);
    }

    /// Hand a pool over to another controller
    pub fn set_controller(env: Env, pool: Address, controller: Address) {
        require_governance(&env);
        get_initialized_meta(&env, &pool);
        index_pool::set_controller(&env, &pool, &controller);
        env.events()
            .publish((Symbol::new(&env, "pool_controller_updated"), pool), controller);
    }

    pub fn set_exit_fee_recipient(env: Env, pool: Address, recipient: Address) {
        require_governance(&env);
        get_initialized_meta(&env, &pool);
        index_pool::set_exit_fee_recipient(&env, &pool, &recipient);
        env.events()
            .publish((Symbol::new(&env, "exit_fee_recipient_updated"), pool), recipient);
    }

    pub fn set_default_exit_fee_recipient(env: Env, recipient: Address) {
        require_governance(&env);
        set_address(&env, &DataKey::DefaultExitFeeRecipient, &recipient);
        env.events()
            .publish((Symbol::new(&env, "default_exit_fee_recipient"),), recipient);
    }

    pub fn set_circuit_breaker(env: Env, circuit_breaker: Address) {
        require_owner(&env);
        set_address(&env, &DataKey::CircuitBreaker, &circuit_breaker);
        env.events()
            .publish((Symbol::new(&env, "circuit_breaker_updated"),), circuit_breaker);
    }

    /// Premium (percent) given to sellers deployed from now on
    pub fn set_default_seller_premium(env: Env, premium: u32) {
        require_owner(&env);
        if !invariants::premium_in_range(premium) {
            panic_with_error!(&env, IndexError::InvalidPremium);
        }
        set_default_seller_premium(&env, premium);
        env.events()
            .publish((Symbol::new(&env, "default_seller_premium"),), premium);
    }

    pub fn update_seller_premium(env: Env, seller: Address, premium: u32) {
        require_owner(&env);
        if !invariants::premium_in_range(premium) {
            panic_with_error!(&env, IndexError::InvalidPremium);
        }
        token_seller::set_premium_percent(&env, &seller, premium);
        env.events()
            .publish((Symbol::new(&env, "seller_premium_updated"), seller), premium);
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    pub fn owner(env: Env) -> Address {
        get_address(&env, &DataKey::Owner)
    }

    pub fn governance(env: Env) -> Address {
        get_address(&env, &DataKey::Governance)
    }

    pub fn circuit_breaker(env: Env) -> Address {
        get_address(&env, &DataKey::CircuitBreaker)
    }

    pub fn default_exit_fee_recipient(env: Env) -> Address {
        get_address(&env, &DataKey::DefaultExitFeeRecipient)
    }

    pub fn default_seller_premium(env: Env) -> u32 {
        extend_instance_ttl(&env);
        get_default_seller_premium(&env)
    }

    pub fn get_pool_meta(env: Env, pool: Address) -> IndexPoolMeta {
        get_meta(&env, &pool).unwrap_or_else(|| panic_with_error!(&env, IndexError::PoolNotFound))
    }

    pub fn get_token_seller(env: Env, pool: Address) -> Address {
        get_seller(&env, &pool).unwrap_or_else(|| panic_with_error!(&env, IndexError::PoolNotFound))
    }
}

fn require_owner(env: &Env) {
    get_address(env, &DataKey::Owner).require_auth();
}

fn require_governance(env: &Env) {
    get_address(env, &DataKey::Governance).require_auth();
}

fn require_nonzero_units(env: &Env, units: &Vec<u128>) {
    if sum(units) == 0 {
        panic_with_error!(env, IndexError::ZeroTotalScore);
    }
}

fn short_twap_price(env: &Env, oracle: &Address, token: &Address) -> u128 {
    price_oracle::average_eth_price(
        env,
        oracle,
        token,
        SHORT_TWAP_MIN_TIME_ELAPSED,
        SHORT_TWAP_MAX_TIME_ELAPSED,
    )
}

fn short_twap_prices(env: &Env, tokens: &Vec<Address>) -> Vec<u128> {
    let prices = price_oracle::average_eth_prices(
        env,
        &get_address(env, &DataKey::PriceOracle),
        tokens,
        SHORT_TWAP_MIN_TIME_ELAPSED,
        SHORT_TWAP_MAX_TIME_ELAPSED,
    );
    if prices.len() != tokens.len() {
        panic_with_error!(env, IndexError::ArrayLengthMismatch);
    }
    prices
}

fn initial_tokens_and_balances(
    env: &Env,
    list_id: u32,
    index_size: u32,
    eth_value: u128,
    formula: WeightingFormula,
) -> (Vec<Address>, Vec<u128>) {
    let (tokens, scores) = token_lists::top_tokens_and_scores(
        env,
        &get_address(env, &DataKey::TokenLists),
        list_id,
        index_size,
    );
    let units = weight_units(env, &scores, formula);
    require_nonzero_units(env, &units);
    let prices = short_twap_prices(env, &tokens);
    let balances = target_balances(env, &units, &prices, eth_value);
    if !invariants::balances_above_minimum(&balances) {
        panic_with_error!(env, IndexError::BelowMinimumBalance);
    }
    (tokens, balances)
}

/// Push the list's current top tokens into the pool. Every token gets a minimum
/// balance worth 1% of the pool value extrapolated from one ready token; the
/// pool only applies it to tokens it is newly binding.
fn reindex(env: &Env, pool: &Address, meta: &IndexPoolMeta) {
    let (tokens, scores) = token_lists::top_tokens_and_scores(
        env,
        &get_address(env, &DataKey::TokenLists),
        meta.list_id,
        meta.index_size,
    );
    let units = weight_units(env, &scores, meta.formula);
    require_nonzero_units(env, &units);
    let desired_denorms = denorms(env, &units);

    let oracle = get_address(env, &DataKey::PriceOracle);
    let prices = short_twap_prices(env, &tokens);
    let (reference_token, reference_balance) = index_pool::extrapolate_pool_value(env, pool);
    let reference_price = short_twap_price(env, &oracle, &reference_token);

    let mut minimum_balances = Vec::new(env);
    for price in prices.iter() {
        minimum_balances.push_back(minimum_balance(env, reference_price, reference_balance, price));
    }

    index_pool::reindex_tokens(env, pool, &tokens, &desired_denorms, &minimum_balances);
}

#[cfg(test)]
mod tests {
    use super::*;
    use index_math::minimum_balance;
    use index_testutils::{
        contract_error, MockCirculatingCapOracle, MockCirculatingCapOracleClient, MockIndexPool,
        MockIndexPoolClient, MockPoolFactory, MockPoolFactoryClient, MockPoolInitializer,
        MockPoolInitializerClient, MockPriceOracle, MockPriceOracleClient, MockTokenSeller,
        MockSupplyToken, MockSupplyTokenClient, MockTokenSellerClient,
    };
    use index_types::{POOL_REWEIGH_DELAY, ONE, WEIGHT_MULTIPLIER};
    use scored_token_lists::{ScoredTokenLists, ScoredTokenListsClient};
    use scoring_strategy::{ScoringKind, ScoringStrategy, ScoringStrategyClient};
    use soroban_sdk::testutils::{Address as _, Ledger};
    use soroban_sdk::{vec, Address, BytesN, Env, String};

    const START: u64 = 1_000_000;

    struct Setup<'a> {
        controller: IndexControllerClient<'a>,
        registry: ScoredTokenListsClient<'a>,
        caps: MockCirculatingCapOracleClient<'a>,
        prices: MockPriceOracleClient<'a>,
        pool: MockIndexPoolClient<'a>,
        initializer: MockPoolInitializerClient<'a>,
        seller: MockTokenSellerClient<'a>,
        owner: Address,
        governance: Address,
        circuit_breaker: Address,
        exit_fee_recipient: Address,
        tokens: Vec<Address>,
        list_id: u32,
    }

    /// Controller wired to a real registry and strategy over five tokens scored
    /// 500, 400, 300, 200 and 100 with a price of one
    fn setup(env: &Env) -> Setup<'_> {
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.timestamp = START);

        let owner = Address::generate(env);
        let governance = Address::generate(env);
        let circuit_breaker = Address::generate(env);
        let exit_fee_recipient = Address::generate(env);

        let prices = MockPriceOracleClient::new(env, &env.register(MockPriceOracle, ()));
        let caps = MockCirculatingCapOracleClient::new(env, &env.register(MockCirculatingCapOracle, ()));

        let strategy = env.register(ScoringStrategy, ());
        ScoringStrategyClient::new(env, &strategy).initialize(
            &owner,
            &ScoringKind::Circulating,
            &Some(caps.address.clone()),
        );

        let registry = ScoredTokenListsClient::new(env, &env.register(ScoredTokenLists, ()));
        registry.initialize(&owner, &prices.address);
        let list_id = registry.create_token_list(
            &BytesN::from_array(env, &[1u8; 32]),
            &strategy,
            &1,
            &u128::MAX,
        );

        let mut tokens = Vec::new(env);
        for _ in 0..5 {
            tokens.push_back(Address::generate(env));
        }
        registry.add_tokens(&list_id, &tokens);
        caps.set_circulating_market_caps(
            &tokens,
            &vec![env, 500 * ONE, 400 * ONE, 300 * ONE, 200 * ONE, 100 * ONE],
        );
        for token in tokens.iter() {
            prices.set_price(&token, &ONE);
        }

        let pool = MockIndexPoolClient::new(env, &env.register(MockIndexPool, ()));
        let initializer = MockPoolInitializerClient::new(env, &env.register(MockPoolInitializer, ()));
        let seller = MockTokenSellerClient::new(env, &env.register(MockTokenSeller, ()));
        let factory = MockPoolFactoryClient::new(env, &env.register(MockPoolFactory, ()));
        factory.stage(&pool_implementation_id(), &pool.address);
        factory.stage(&initializer_implementation_id(), &initializer.address);
        factory.stage(&seller_implementation_id(), &seller.address);

        let controller = IndexControllerClient::new(env, &env.register(IndexController, ()));
        controller.initialize(
            &owner,
            &governance,
            &circuit_breaker,
            &prices.address,
            &registry.address,
            &factory.address,
            &exit_fee_recipient,
        );

        Setup {
            controller,
            registry,
            caps,
            prices,
            pool,
            initializer,
            seller,
            owner,
            governance,
            circuit_breaker,
            exit_fee_recipient,
            tokens,
            list_id,
        }
    }

    fn prepare(env: &Env, s: &Setup) -> Address {
        s.controller.prepare_index_pool(
            &s.list_id,
            &2,
            &(9 * ONE),
            &WeightingFormula::Linear,
            &String::from_str(env, "Top 2 Index"),
            &String::from_str(env, "TOP2"),
        )
    }

    /// Prepared and finished pool holding 5 of token 0 and 4 of token 1
    fn setup_live_pool(env: &Env) -> (Setup<'_>, Address) {
        let s = setup(env);
        let pool = prepare(env, &s);
        s.initializer.finish();
        (s, pool)
    }

    fn advance(env: &Env, seconds: u64) {
        env.ledger().with_mut(|li| li.timestamp += seconds);
    }

    // === Initialization ===

    #[test]
    fn test_initialize_controller() {
        let env = Env::default();
        let s = setup(&env);
        assert_eq!(s.controller.owner(), s.owner);
        assert_eq!(s.controller.governance(), s.governance);
        assert_eq!(s.controller.circuit_breaker(), s.circuit_breaker);
        assert_eq!(s.controller.default_exit_fee_recipient(), s.exit_fee_recipient);
        assert_eq!(s.controller.default_seller_premium(), 2);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let env = Env::default();
        let s = setup(&env);
        let other = Address::generate(&env);
        let result = s.controller.try_initialize(&other, &other, &other, &other, &other, &other, &other);
        assert_eq!(result, Err(Ok(contract_error(IndexError::AlreadyInitialized))));
    }

    // === Initial balances ===

    #[test]
    fn test_get_initial_tokens_and_balances() {
        let env = Env::default();
        let s = setup(&env);

        let (tokens, balances) = s.controller.get_initial_tokens_and_balances(
            &s.list_id,
            &2,
            &(9 * ONE),
            &WeightingFormula::Linear,
        );
        assert_eq!(tokens, vec![&env, s.tokens.get_unchecked(0), s.tokens.get_unchecked(1)]);
        assert_eq!(balances, vec![&env, 5 * ONE, 4 * ONE]);

        // Nothing changes between two reads
        let again = s.controller.get_initial_tokens_and_balances(
            &s.list_id,
            &2,
            &(9 * ONE),
            &WeightingFormula::Linear,
        );
        assert_eq!(again, (tokens, balances));
    }

    #[test]
    fn test_initial_balances_leave_registry_untouched() {
        let env = Env::default();
        let s = setup(&env);
        // Token 4 falls below the list's min score of 1
        s.caps.set_circulating_market_caps(&vec![&env, s.tokens.get_unchecked(4)], &vec![&env, 0u128]);

        let (tokens, _) = s.controller.get_initial_tokens_and_balances(
            &s.list_id,
            &2,
            &(9 * ONE),
            &WeightingFormula::Linear,
        );
        assert_eq!(tokens.len(), 2);

        assert_eq!(s.registry.get_token_list(&s.list_id), s.tokens);
        assert!(s.registry.is_token_in_list(&s.list_id, &s.tokens.get_unchecked(4)));
    }

    #[test]
    fn test_initial_balances_sqrt_equal_scores() {
        let env = Env::default();
        let s = setup(&env);
        let top = vec![&env, s.tokens.get_unchecked(0), s.tokens.get_unchecked(1)];
        s.caps.set_circulating_market_caps(&top, &vec![&env, 900 * ONE, 900 * ONE]);

        let (_, balances) = s.controller.get_initial_tokens_and_balances(
            &s.list_id,
            &2,
            &(10 * ONE),
            &WeightingFormula::Sqrt,
        );
        assert_eq!(balances, vec![&env, 5 * ONE, 5 * ONE]);
    }

    #[test]
    fn test_initial_balances_use_prices() {
        let env = Env::default();
        let s = setup(&env);
        s.prices.set_price(&s.tokens.get_unchecked(0), &(ONE / 2));

        let (_, balances) = s.controller.get_initial_tokens_and_balances(
            &s.list_id,
            &2,
            &(9 * ONE),
            &WeightingFormula::Linear,
        );
        assert_eq!(balances, vec![&env, 10 * ONE, 4 * ONE]);
    }

    #[test]
    fn test_initial_balances_below_minimum() {
        let env = Env::default();
        let s = setup(&env);
        let result = s.controller.try_get_initial_tokens_and_balances(
            &s.list_id,
            &2,
            &1_000,
            &WeightingFormula::Linear,
        );
        assert_eq!(result, Err(Ok(contract_error(IndexError::BelowMinimumBalance))));
    }

    #[test]
    fn test_initial_balances_size_over_list() {
        let env = Env::default();
        let s = setup(&env);
        let result = s.controller.try_get_initial_tokens_and_balances(
            &s.list_id,
            &6,
            &(9 * ONE),
            &WeightingFormula::Linear,
        );
        assert!(result.is_err());
    }

    // === Prepare ===

    #[test]
    fn test_prepare_index_pool() {
        let env = Env::default();
        let s = setup(&env);
        assert_eq!(s.controller.compute_pool_address(&s.list_id, &2), s.pool.address);

        let pool = prepare(&env, &s);
        assert_eq!(pool, s.pool.address);
        assert_eq!(s.controller.compute_pool_address(&s.list_id, &2), pool);
        assert_eq!(s.controller.compute_initializer_address(&pool), s.initializer.address);
        assert_eq!(s.controller.compute_seller_address(&pool), s.seller.address);

        assert_eq!(s.pool.get_controller(), Some(s.controller.address.clone()));
        assert_eq!(s.pool.get_symbol(), Some(String::from_str(&env, "TOP2")));
        assert_eq!(
            s.initializer.get_desired_tokens(),
            vec![&env, s.tokens.get_unchecked(0), s.tokens.get_unchecked(1)]
        );
        assert_eq!(s.initializer.get_desired_amounts(), vec![&env, 5 * ONE, 4 * ONE]);

        let meta = s.controller.get_pool_meta(&pool);
        assert!(!meta.initialized);
        assert_eq!(meta.list_id, s.list_id);
        assert_eq!(meta.index_size, 2);
        assert_eq!(meta.reweigh_index, 0);
        assert_eq!(meta.initializer, s.initializer.address);
    }

    #[test]
    fn test_prepare_rejects_size_bounds() {
        let env = Env::default();
        let s = setup(&env);
        for size in [0u32, 1, 11] {
            let result = s.controller.try_prepare_index_pool(
                &s.list_id,
                &size,
                &(9 * ONE),
                &WeightingFormula::Linear,
                &String::from_str(&env, "Index"),
                &String::from_str(&env, "IDX"),
            );
            assert_eq!(result, Err(Ok(contract_error(IndexError::InvalidSizeBounds))));
        }
    }

    #[test]
    fn test_prepare_twice_fails() {
        let env = Env::default();
        let s = setup(&env);
        prepare(&env, &s);
        let result = s.controller.try_prepare_index_pool(
            &s.list_id,
            &2,
            &(9 * ONE),
            &WeightingFormula::Linear,
            &String::from_str(&env, "Again"),
            &String::from_str(&env, "AGN"),
        );
        assert_eq!(result, Err(Ok(contract_error(IndexError::PoolAlreadyExists))));
    }

    #[test]
    #[should_panic]
    fn test_prepare_requires_owner() {
        let env = Env::default();
        let s = setup(&env);
        env.mock_auths(&[]);
        prepare(&env, &s);
    }

    #[test]
    fn test_prepared_pool_is_not_live() {
        let env = Env::default();
        let s = setup(&env);
        let pool = prepare(&env, &s);
        advance(&env, POOL_REWEIGH_DELAY);
        assert_eq!(s.controller.try_reweigh_pool(&pool), Err(Ok(contract_error(IndexError::PoolNotFound))));
        assert_eq!(
            s.controller.try_set_swap_fee(&pool, &1_000),
            Err(Ok(contract_error(IndexError::PoolNotFound)))
        );
    }

    // === Finish ===

    #[test]
    fn test_finish_prepared_index_pool() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);

        let meta = s.controller.get_pool_meta(&pool);
        assert!(meta.initialized);
        assert_eq!(meta.last_reweigh, START);
        assert_eq!(s.controller.get_token_seller(&pool), s.seller.address);

        // Denorms follow the value of what was contributed
        let record0 = s.pool.get_token_record(&s.tokens.get_unchecked(0));
        let record1 = s.pool.get_token_record(&s.tokens.get_unchecked(1));
        assert!(record0.ready && record1.ready);
        assert_eq!(record0.balance, 5 * ONE);
        assert_eq!(record0.denorm, WEIGHT_MULTIPLIER * 5 / 9);
        assert_eq!(record1.denorm, WEIGHT_MULTIPLIER * 4 / 9);
        assert!(invariants::denorms_bounded(&vec![&env, record0.denorm, record1.denorm]));

        assert!(s.pool.is_public_swap());
        assert_eq!(s.pool.get_exit_fee_recipient(), Some(s.exit_fee_recipient.clone()));
        assert_eq!(s.pool.get_token_provider(), Some(s.initializer.address.clone()));
        assert_eq!(s.pool.get_unbind_handler(), Some(s.seller.address.clone()));

        assert_eq!(s.seller.get_pool(), Some(pool));
        assert_eq!(s.seller.get_premium_percent(), 2);
    }

    #[test]
    fn test_finish_weights_use_prices() {
        let env = Env::default();
        let s = setup(&env);
        prepare(&env, &s);
        // Token 1 doubles in value before the pool is finished
        s.prices.set_price(&s.tokens.get_unchecked(1), &(2 * ONE));
        s.initializer.finish();

        let record0 = s.pool.get_token_record(&s.tokens.get_unchecked(0));
        let record1 = s.pool.get_token_record(&s.tokens.get_unchecked(1));
        assert_eq!(record0.denorm, WEIGHT_MULTIPLIER * 5 / 13);
        assert_eq!(record1.denorm, WEIGHT_MULTIPLIER * 8 / 13);
    }

    #[test]
    fn test_finish_twice_fails() {
        let env = Env::default();
        let (s, _) = setup_live_pool(&env);
        assert!(s.initializer.try_finish().is_err());
    }

    #[test]
    fn test_finish_from_other_initializer_fails() {
        let env = Env::default();
        let s = setup(&env);
        let pool = prepare(&env, &s);
        let result = s.controller.try_finish_prepared_index_pool(
            &Address::generate(&env),
            &pool,
            &s.initializer.get_desired_tokens(),
            &s.initializer.get_desired_amounts(),
        );
        assert_eq!(result, Err(Ok(contract_error(IndexError::Unauthorized))));
    }

    #[test]
    fn test_finish_unknown_pool_fails() {
        let env = Env::default();
        let s = setup(&env);
        let result = s.controller.try_finish_prepared_index_pool(
            &s.initializer.address,
            &Address::generate(&env),
            &Vec::new(&env),
            &Vec::new(&env),
        );
        assert_eq!(result, Err(Ok(contract_error(IndexError::NotPreDeployPool))));
    }

    #[test]
    fn test_finish_length_mismatch_fails() {
        let env = Env::default();
        let s = setup(&env);
        let pool = prepare(&env, &s);
        let result = s.controller.try_finish_prepared_index_pool(
            &s.initializer.address,
            &pool,
            &s.initializer.get_desired_tokens(),
            &vec![&env, ONE],
        );
        assert_eq!(result, Err(Ok(contract_error(IndexError::ArrayLengthMismatch))));
    }

    // === Reweigh ===

    #[test]
    fn test_reweigh_pool() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        let t0 = s.tokens.get_unchecked(0);
        let t1 = s.tokens.get_unchecked(1);
        s.caps.set_circulating_market_caps(
            &vec![&env, t0.clone(), t1.clone()],
            &vec![&env, 300 * ONE, 600 * ONE],
        );

        advance(&env, POOL_REWEIGH_DELAY);
        s.controller.reweigh_pool(&pool);

        let meta = s.controller.get_pool_meta(&pool);
        assert_eq!(meta.reweigh_index, 1);
        assert_eq!(meta.last_reweigh, START + POOL_REWEIGH_DELAY);
        assert_eq!(s.pool.get_token_record(&t0).desired_denorm, WEIGHT_MULTIPLIER / 3);
        assert_eq!(s.pool.get_token_record(&t1).desired_denorm, WEIGHT_MULTIPLIER * 2 / 3);
        // Membership unchanged
        assert_eq!(s.pool.get_current_desired_tokens(), vec![&env, t0, t1]);
    }

    #[test]
    fn test_reweigh_too_early() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        advance(&env, POOL_REWEIGH_DELAY - 1);
        assert_eq!(s.controller.try_reweigh_pool(&pool), Err(Ok(contract_error(IndexError::ReweighDelay))));

        advance(&env, 1);
        s.controller.reweigh_pool(&pool);
        assert_eq!(s.controller.try_reweigh_pool(&pool), Err(Ok(contract_error(IndexError::ReweighDelay))));
    }

    #[test]
    fn test_reweigh_unknown_pool() {
        let env = Env::default();
        let s = setup(&env);
        assert_eq!(
            s.controller.try_reweigh_pool(&Address::generate(&env)),
            Err(Ok(contract_error(IndexError::PoolNotFound)))
        );
    }

    #[test]
    fn test_cadence_cycles_through_reindex() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);

        for expected in 1..=3u32 {
            advance(&env, POOL_REWEIGH_DELAY);
            assert_eq!(s.controller.try_reindex_pool(&pool), Err(Ok(contract_error(IndexError::ReweighIndex))));
            s.controller.reweigh_pool(&pool);
            assert_eq!(s.controller.get_pool_meta(&pool).reweigh_index, expected);
        }

        advance(&env, POOL_REWEIGH_DELAY);
        assert_eq!(s.controller.try_reweigh_pool(&pool), Err(Ok(contract_error(IndexError::ReweighIndex))));
        s.controller.reindex_pool(&pool);
        let meta = s.controller.get_pool_meta(&pool);
        assert_eq!(meta.reweigh_index, 4);
        assert!(invariants::cadence_step_valid(meta.reweigh_index, true));

        advance(&env, POOL_REWEIGH_DELAY);
        s.controller.reweigh_pool(&pool);
        assert_eq!(s.controller.get_pool_meta(&pool).reweigh_index, 5);
    }

    #[test]
    fn test_reweigh_all_zero_scores() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        s.caps.set_circulating_market_caps(
            &vec![&env, s.tokens.get_unchecked(0), s.tokens.get_unchecked(1)],
            &vec![&env, 0u128, 0],
        );

        advance(&env, POOL_REWEIGH_DELAY);
        assert_eq!(
            s.controller.try_reweigh_pool(&pool),
            Err(Ok(contract_error(IndexError::ZeroTotalScore)))
        );
        assert_eq!(s.controller.get_pool_meta(&pool).reweigh_index, 0);
    }

    #[test]
    fn test_reweigh_sqrt_pool() {
        let env = Env::default();
        let s = setup(&env);
        let pool = s.controller.prepare_index_pool(
            &s.list_id,
            &2,
            &(9 * ONE),
            &WeightingFormula::Sqrt,
            &String::from_str(&env, "Sqrt Top 2"),
            &String::from_str(&env, "SQT2"),
        );
        assert_eq!(s.controller.get_pool_meta(&pool).formula, WeightingFormula::Sqrt);
        s.initializer.finish();

        let t0 = s.tokens.get_unchecked(0);
        let t1 = s.tokens.get_unchecked(1);
        // Roots of 1e20 and 4e20 are 1e10 and 2e10
        s.caps.set_circulating_market_caps(
            &vec![&env, t0.clone(), t1.clone()],
            &vec![&env, 100 * ONE, 400 * ONE],
        );

        advance(&env, POOL_REWEIGH_DELAY);
        s.controller.reweigh_pool(&pool);

        assert_eq!(s.pool.get_token_record(&t0).desired_denorm, WEIGHT_MULTIPLIER / 3);
        assert_eq!(s.pool.get_token_record(&t1).desired_denorm, WEIGHT_MULTIPLIER * 2 / 3);
    }

    #[test]
    fn test_fully_diluted_list_end_to_end() {
        let env = Env::default();
        let s = setup(&env);

        let mut tokens = Vec::new(&env);
        for supply in [100u128, 300, 200] {
            let token = MockSupplyTokenClient::new(&env, &env.register(MockSupplyToken, ()));
            token.set_total_supply(&((supply * ONE) as i128));
            s.prices.set_price(&token.address, &ONE);
            tokens.push_back(token.address.clone());
        }
        let strategy = env.register(ScoringStrategy, ());
        ScoringStrategyClient::new(&env, &strategy).initialize(
            &s.owner,
            &ScoringKind::FullyDiluted,
            &Some(s.prices.address.clone()),
        );
        let list_id = s.registry.create_token_list(
            &BytesN::from_array(&env, &[2u8; 32]),
            &strategy,
            &1,
            &u128::MAX,
        );
        s.registry.add_tokens(&list_id, &tokens);
        let t1 = tokens.get_unchecked(1);
        let t2 = tokens.get_unchecked(2);

        // Supply times price gives caps of 100, 300 and 200
        let (top, balances) = s.controller.get_initial_tokens_and_balances(
            &list_id,
            &2,
            &(10 * ONE),
            &WeightingFormula::Linear,
        );
        assert_eq!(top, vec![&env, t1.clone(), t2.clone()]);
        assert_eq!(balances, vec![&env, 6 * ONE, 4 * ONE]);

        let pool = s.controller.prepare_index_pool(
            &list_id,
            &2,
            &(10 * ONE),
            &WeightingFormula::Linear,
            &String::from_str(&env, "Diluted Top 2"),
            &String::from_str(&env, "DIL2"),
        );
        s.initializer.finish();
        assert_eq!(s.pool.get_token_record(&t1).denorm, WEIGHT_MULTIPLIER * 6 / 10);
        assert_eq!(s.pool.get_token_record(&t2).denorm, WEIGHT_MULTIPLIER * 4 / 10);

        // Doubling token 2's price moves its cap to 400
        s.prices.set_price(&t2, &(2 * ONE));
        advance(&env, POOL_REWEIGH_DELAY);
        s.controller.reweigh_pool(&pool);

        assert_eq!(s.pool.get_token_record(&t1).desired_denorm, WEIGHT_MULTIPLIER * 3 / 7);
        assert_eq!(s.pool.get_token_record(&t2).desired_denorm, WEIGHT_MULTIPLIER * 4 / 7);
    }

    // === Reindex ===

    #[test]
    fn test_reindex_pool_after_three_reweighs_admits_new_token() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        let t0 = s.tokens.get_unchecked(0);
        let t1 = s.tokens.get_unchecked(1);
        let t2 = s.tokens.get_unchecked(2);

        for _ in 0..3 {
            advance(&env, POOL_REWEIGH_DELAY);
            s.controller.reweigh_pool(&pool);
        }

        // Token 2 overtakes token 1
        s.caps.set_circulating_market_caps(&vec![&env, t2.clone()], &vec![&env, 450 * ONE]);
        s.prices.set_price(&t2, &(2 * ONE));
        let (reference_token, reference_balance) = s.pool.extrapolate_pool_value();
        assert_eq!(reference_token, t0);

        advance(&env, POOL_REWEIGH_DELAY);
        s.controller.reindex_pool(&pool);

        let meta = s.controller.get_pool_meta(&pool);
        assert_eq!(meta.reweigh_index, 4);
        assert_eq!(meta.last_reweigh, START + 4 * POOL_REWEIGH_DELAY);

        assert_eq!(s.pool.get_current_desired_tokens(), vec![&env, t0.clone(), t2.clone()]);
        let record2 = s.pool.get_token_record(&t2);
        assert!(record2.bound);
        assert!(!record2.ready);
        assert_eq!(
            record2.minimum_balance,
            minimum_balance(&env, ONE, reference_balance, 2 * ONE)
        );
        assert_eq!(record2.desired_denorm, WEIGHT_MULTIPLIER * 450 / 950);
        assert_eq!(s.pool.get_token_record(&t0).desired_denorm, WEIGHT_MULTIPLIER * 500 / 950);
        assert_eq!(s.pool.get_token_record(&t1).desired_denorm, 0);
    }

    #[test]
    fn test_reindex_admits_new_token() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        let t0 = s.tokens.get_unchecked(0);
        let t1 = s.tokens.get_unchecked(1);
        let t2 = s.tokens.get_unchecked(2);

        // Token 2 overtakes token 0
        s.caps.set_circulating_market_caps(
            &vec![&env, t0.clone(), t2.clone()],
            &vec![&env, 100 * ONE, 1_000 * ONE],
        );
        s.prices.set_price(&t2, &(2 * ONE));
        let (reference_token, reference_balance) = s.pool.extrapolate_pool_value();
        assert_eq!(reference_token, t0);
        let expected_minimum = minimum_balance(&env, ONE, reference_balance, 2 * ONE);

        s.controller.force_reindex_pool(&pool);

        assert_eq!(s.pool.get_current_desired_tokens(), vec![&env, t2.clone(), t1.clone()]);
        let record2 = s.pool.get_token_record(&t2);
        assert!(record2.bound);
        assert!(!record2.ready);
        assert_eq!(record2.minimum_balance, expected_minimum);
        assert_eq!(record2.desired_denorm, WEIGHT_MULTIPLIER * 1_000 / 1_400);
        assert_eq!(s.pool.get_token_record(&t0).desired_denorm, 0);
        // 1% of a pool worth 9, bought at a price of 2
        assert_eq!(expected_minimum, 9 * ONE / 100 / 2);
    }

    #[test]
    fn test_reindex_on_wrong_phase() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        advance(&env, POOL_REWEIGH_DELAY);
        s.controller.reweigh_pool(&pool);

        advance(&env, POOL_REWEIGH_DELAY);
        assert_eq!(s.controller.get_pool_meta(&pool).reweigh_index, 1);
        assert_eq!(s.controller.try_reindex_pool(&pool), Err(Ok(contract_error(IndexError::ReweighIndex))));
    }

    #[test]
    fn test_force_reindex_jumps_to_cycle_boundary() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        advance(&env, POOL_REWEIGH_DELAY);
        s.controller.reweigh_pool(&pool);

        s.controller.force_reindex_pool(&pool);
        let meta = s.controller.get_pool_meta(&pool);
        assert_eq!(meta.reweigh_index, 4);
        assert!(invariants::forced_index_valid(1, meta.reweigh_index));
        assert_eq!(meta.last_reweigh, START + POOL_REWEIGH_DELAY);

        // Delay restarts from the forced reindex
        assert_eq!(s.controller.try_reweigh_pool(&pool), Err(Ok(contract_error(IndexError::ReweighDelay))));

        s.controller.force_reindex_pool(&pool);
        assert_eq!(s.controller.get_pool_meta(&pool).reweigh_index, 8);
    }

    #[test]
    #[should_panic]
    fn test_force_reindex_requires_owner() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        env.mock_auths(&[]);
        s.controller.force_reindex_pool(&pool);
    }

    // === Minimum balance ===

    #[test]
    fn test_update_minimum_balance() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        let t0 = s.tokens.get_unchecked(0);
        let t2 = s.tokens.get_unchecked(2);
        s.caps.set_circulating_market_caps(&vec![&env, t2.clone()], &vec![&env, 1_000 * ONE]);
        s.controller.force_reindex_pool(&pool);

        s.prices.set_price(&t2, &(4 * ONE));
        s.controller.update_minimum_balance(&pool, &t2);

        let (_, reference_balance) = s.pool.extrapolate_pool_value();
        assert_eq!(
            s.pool.get_minimum_balance(&t2),
            minimum_balance(&env, ONE, reference_balance, 4 * ONE)
        );

        assert_eq!(
            s.controller.try_update_minimum_balance(&pool, &t0),
            Err(Ok(contract_error(IndexError::TokenReady)))
        );
        assert_eq!(
            s.controller.try_update_minimum_balance(&pool, &Address::generate(&env)),
            Err(Ok(contract_error(IndexError::NotFound)))
        );
    }

    // === Administration ===

    #[test]
    fn test_pool_setters() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);

        s.controller.set_swap_fee(&pool, &2_500);
        assert_eq!(s.pool.get_swap_fee(), 2_500);

        let recipient = Address::generate(&env);
        s.controller.set_exit_fee_recipient(&pool, &recipient);
        assert_eq!(s.pool.get_exit_fee_recipient(), Some(recipient.clone()));

        s.controller.set_default_exit_fee_recipient(&recipient);
        assert_eq!(s.controller.default_exit_fee_recipient(), recipient);

        let next_controller = Address::generate(&env);
        s.controller.set_controller(&pool, &next_controller);
        assert_eq!(s.pool.get_controller(), Some(next_controller));
    }

    #[test]
    fn test_pool_setters_unknown_pool() {
        let env = Env::default();
        let s = setup(&env);
        let unknown = Address::generate(&env);
        assert_eq!(
            s.controller.try_set_swap_fee(&unknown, &1),
            Err(Ok(contract_error(IndexError::PoolNotFound)))
        );
        assert_eq!(
            s.controller.try_set_controller(&unknown, &unknown),
            Err(Ok(contract_error(IndexError::PoolNotFound)))
        );
        assert_eq!(
            s.controller.try_set_exit_fee_recipient(&unknown, &unknown),
            Err(Ok(contract_error(IndexError::PoolNotFound)))
        );
        assert_eq!(
            s.controller.try_set_public_swap(&s.owner, &unknown, &false),
            Err(Ok(contract_error(IndexError::PoolNotFound)))
        );
        assert_eq!(
            s.controller.try_update_minimum_balance(&unknown, &unknown),
            Err(Ok(contract_error(IndexError::PoolNotFound)))
        );
        assert_eq!(
            s.controller.try_get_pool_meta(&unknown),
            Err(Ok(contract_error(IndexError::PoolNotFound)))
        );
    }

    #[test]
    fn test_set_public_swap_roles() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);

        s.controller.set_public_swap(&s.circuit_breaker, &pool, &false);
        assert!(!s.pool.is_public_swap());
        s.controller.set_public_swap(&s.owner, &pool, &true);
        assert!(s.pool.is_public_swap());

        assert_eq!(
            s.controller.try_set_public_swap(&Address::generate(&env), &pool, &false),
            Err(Ok(contract_error(IndexError::Unauthorized)))
        );

        let breaker = Address::generate(&env);
        s.controller.set_circuit_breaker(&breaker);
        assert_eq!(s.controller.circuit_breaker(), breaker);
        s.controller.set_public_swap(&breaker, &pool, &false);
        assert!(!s.pool.is_public_swap());
    }

    #[test]
    #[should_panic]
    fn test_governance_setters_require_governance() {
        let env = Env::default();
        let (s, pool) = setup_live_pool(&env);
        env.mock_auths(&[]);
        s.controller.set_exit_fee_recipient(&pool, &Address::generate(&env));
    }

    #[test]
    fn test_seller_premium() {
        let env = Env::default();
        let (s, _) = setup_live_pool(&env);

        for premium in [0u32, 20, 21] {
            assert_eq!(
                s.controller.try_set_default_seller_premium(&premium),
                Err(Ok(contract_error(IndexError::InvalidPremium)))
            );
            assert_eq!(
                s.controller.try_update_seller_premium(&s.seller.address, &premium),
                Err(Ok(contract_error(IndexError::InvalidPremium)))
            );
        }

        s.controller.set_default_seller_premium(&5);
        assert_eq!(s.controller.default_seller_premium(), 5);

        s.controller.update_seller_premium(&s.seller.address, &19);
        assert_eq!(s.seller.get_premium_percent(), 19);
        assert_eq!(s.seller.get_controller(), Some(s.controller.address.clone()));
    }
}
