use soroban_sdk::{symbol_short, Address, Env};

pub struct PoolEvents;

impl PoolEvents {
    /// Emits a `deposit` event after a certificate has been minted.
    ///
    /// Topics: `("deposit", depositor, token)`
    /// Data:   `(amount, shares, serial)`
    pub fn deposit(
        env: &Env,
        depositor: &Address,
        token: &Address,
        amount: i128,
        shares: i128,
        serial: u64,
    ) {
        env.events().publish(
            (symbol_short!("deposit"), depositor.clone(), token.clone()),
            (amount, shares, serial),
        );
    }

    /// Topics: `("redeem", owner, token)`
    /// Data:   `(serial, shares, payout)`
    pub fn redeem(
        env: &Env,
        owner: &Address,
        token: &Address,
        serial: u64,
        shares: i128,
        payout: i128,
    ) {
        env.events().publish(
            (symbol_short!("redeem"), owner.clone(), token.clone()),
            (serial, shares, payout),
        );
    }

    pub fn listed(env: &Env, token: &Address) {
        env.events().publish((symbol_short!("listed"),), token.clone());
    }

    pub fn delisted(env: &Env, token: &Address) {
        env.events().publish((symbol_short!("delisted"),), token.clone());
    }

    pub fn sync(env: &Env, token: &Address, balance: i128, shares: i128) {
        env.events()
            .publish((symbol_short!("sync"), token.clone()), (balance, shares));
    }
}
