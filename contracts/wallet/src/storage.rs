use soroban_sdk::{contracttype, Address, Env};

use crate::errors::WalletError;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    WalletAdmin,
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::WalletAdmin)
}

pub fn get_admin(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::WalletAdmin)
        .ok_or(WalletError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::WalletAdmin, admin);
}
