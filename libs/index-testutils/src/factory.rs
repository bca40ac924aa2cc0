use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, Symbol, Vec};

#[contracttype]
#[derive(Clone)]
enum FactoryKey {
    Staged(Symbol),
    Deployed(Symbol, BytesN<32>),
}

/// Keyed factory handing out pre-registered instances in the order they were staged
#[contract]
pub struct MockPoolFactory;

#[contractimpl]
impl MockPoolFactory {
    /// Queue an already registered contract as the next instance of `implementation_id`
    pub fn stage(env: Env, implementation_id: Symbol, instance: Address) {
        let key = FactoryKey::Staged(implementation_id);
        let mut staged: Vec<Address> = env.storage().instance().get(&key).unwrap_or(Vec::new(&env));
        staged.push_back(instance);
        env.storage().instance().set(&key, &staged);
    }

    pub fn deploy(env: Env, implementation_id: Symbol, salt: BytesN<32>) -> Address {
        let deployed_key = FactoryKey::Deployed(implementation_id.clone(), salt);
        if env.storage().instance().has(&deployed_key) {
            panic!("Salt already used");
        }
        let staged_key = FactoryKey::Staged(implementation_id);
        let mut staged: Vec<Address> = env
            .storage()
            .instance()
            .get(&staged_key)
            .unwrap_or(Vec::new(&env));
        let instance = match staged.pop_front() {
            Some(instance) => instance,
            None => panic!("Nothing staged"),
        };
        env.storage().instance().set(&staged_key, &staged);
        env.storage().instance().set(&deployed_key, &instance);
        instance
    }

    /// Deployed instance for the salt, or the one the next deploy would return
    pub fn compute_address(env: Env, implementation_id: Symbol, salt: BytesN<32>) -> Address {
        let deployed_key = FactoryKey::Deployed(implementation_id.clone(), salt);
        if let Some(instance) = env.storage().instance().get(&deployed_key) {
            return instance;
        }
        let staged: Vec<Address> = env
            .storage()
            .instance()
            .get(&FactoryKey::Staged(implementation_id))
            .unwrap_or(Vec::new(&env));
        match staged.first() {
            Some(instance) => instance,
            None => panic!("Nothing staged"),
        }
    }
}
