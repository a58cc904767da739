use soroban_sdk::{symbol_short, Address, Env};

pub struct WalletEvents;

impl WalletEvents {
    /// Emitted once the ledger transfer for proposal `id` has gone through.
    ///
    /// Topics: `("sent", id)`
    /// Data:   `(token, recipient, amount)`
    pub fn sent(env: &Env, id: u64, token: &Address, recipient: &Address, amount: i128) {
        env.events().publish(
            (symbol_short!("sent"), id),
            (token.clone(), recipient.clone(), amount),
        );
    }
}
