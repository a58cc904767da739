use soroban_sdk::{contracttype, Address, Env};

use crate::errors::PoolError;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const RESERVE_LIFETIME_THRESHOLD: u32 = 17280;
const RESERVE_BUMP_AMOUNT: u32 = 1_555_200; // ~90 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolConfig {
    pub admin: Address,
    pub certificate: Address,
}

/// Tracked accounting for one token. `shares` is zero only while `balance`
/// is zero.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reserve {
    pub balance: i128,
    pub shares: i128,
}

/// Threshold-gated pool actions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PoolAction {
    List(Address),
    Delist(Address),
    Sync(Address),
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    PoolConfig,
    Listed(Address),
    Reserve(Address),
}

pub fn has_pool_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::PoolConfig)
}

pub fn get_pool_config(env: &Env) -> Result<PoolConfig, PoolError> {
    env.storage()
        .instance()
        .get(&DataKey::PoolConfig)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_pool_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::PoolConfig, config);
}

pub fn is_listed(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Listed(token.clone()))
        .unwrap_or(false)
}

pub fn set_listed(env: &Env, token: &Address, listed: bool) {
    let key = DataKey::Listed(token.clone());
    if !listed {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, RESERVE_LIFETIME_THRESHOLD, RESERVE_BUMP_AMOUNT);
}

pub fn get_reserve(env: &Env, token: &Address) -> Reserve {
    env.storage()
        .persistent()
        .get(&DataKey::Reserve(token.clone()))
        .unwrap_or_default()
}

pub fn set_reserve(env: &Env, token: &Address, reserve: &Reserve) {
    let key = DataKey::Reserve(token.clone());
    env.storage().persistent().set(&key, reserve);
    env.storage()
        .persistent()
        .extend_ttl(&key, RESERVE_LIFETIME_THRESHOLD, RESERVE_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
