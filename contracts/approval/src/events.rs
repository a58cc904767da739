use soroban_sdk::{symbol_short, Address, Env};

pub struct ApprovalEvents;

impl ApprovalEvents {
    /// Topics: `("proposed", id)`
    /// Data:   `proposer`
    pub fn proposed(env: &Env, id: u64, proposer: &Address) {
        env.events().publish((symbol_short!("proposed"), id), proposer.clone());
    }

    /// Topics: `("approved", id)`
    /// Data:   `(signer, approval_count)`
    pub fn approved(env: &Env, id: u64, signer: &Address, count: u32) {
        env.events().publish((symbol_short!("approved"), id), (signer.clone(), count));
    }

    pub fn executed(env: &Env, id: u64) {
        env.events().publish((symbol_short!("executed"), id), ());
    }

    /// Data carries the numeric error code returned by the executor.
    pub fn rejected(env: &Env, id: u64, code: u32) {
        env.events().publish((symbol_short!("rejected"), id), code);
    }
}
