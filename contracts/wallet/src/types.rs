use soroban_sdk::{contracttype, Address};

/// Payload of a wallet proposal: move `amount` of `token` from the wallet's
/// own balance to `recipient`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub token: Address,
    pub recipient: Address,
    pub amount: i128,
}
