use soroban_sdk::{token::TokenClient, Env};

use crate::{
    errors::PoolError,
    events::PoolEvents,
    storage::{self, PoolAction},
};

/// Applies a pool action once its proposal reaches the threshold.
///
/// Delisting only stops new deposits; holders of existing certificates can
/// still redeem. Sync only ever raises the tracked balance.
pub fn apply(env: &Env, action: &PoolAction) -> Result<(), PoolError> {
    match action {
        PoolAction::List(token) => {
            if storage::is_listed(env, token) {
                return Err(PoolError::AlreadyListed);
            }
            storage::set_listed(env, token, true);
            PoolEvents::listed(env, token);
        }
        PoolAction::Delist(token) => {
            if !storage::is_listed(env, token) {
                return Err(PoolError::NotListed);
            }
            storage::set_listed(env, token, false);
            PoolEvents::delisted(env, token);
        }
        PoolAction::Sync(token) => {
            let mut reserve = storage::get_reserve(env, token);
            if reserve.shares == 0 {
                return Err(PoolError::NoOutstandingShares);
            }

            let held = TokenClient::new(env, token).balance(&env.current_contract_address());
            if held > reserve.balance {
                reserve.balance = held;
                storage::set_reserve(env, token, &reserve);
            }
            PoolEvents::sync(env, token, reserve.balance, reserve.shares);
        }
    }
    Ok(())
}
