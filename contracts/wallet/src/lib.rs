#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod errors;
mod events;
mod storage;
mod types;


pub use custody_approval::{Proposal, ProposalStatus};
pub use errors::WalletError;
pub use types::Transfer;

use events::WalletEvents;
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Vec};

#[contract]
pub struct SharedWallet;

#[contractimpl]
impl SharedWallet {
    /// Fixes the signer set and threshold. `admin` is the deploying identity
    /// and must authorize the call; it has no powers afterwards.
    pub fn initialize(
        env: Env,
        admin: Address,
        signers: Vec<Address>,
        threshold: u32,
    ) -> Result<(), WalletError> {
        if storage::has_admin(&env) {
            return Err(WalletError::AlreadyInitialized);
        }
        admin.require_auth();

        custody_approval::initialize(&env, signers, threshold)?;
        storage::set_admin(&env, &admin);
        Ok(())
    }

    /// Proposes sending `amount` of `token` to `recipient`. The wallet's
    /// balance is not checked here; it is checked when the threshold is met.
    pub fn propose_transfer(
        env: Env,
        signer: Address,
        token: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, WalletError> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let transfer = Transfer { token, recipient, amount };
        let id = custody_approval::propose(&env, &signer, transfer, |id, transfer: &Transfer| {
            execute_transfer(&env, id, transfer)
        })?;
        Ok(id)
    }

    /// Adds `signer`'s approval. The approval that meets the threshold sends
    /// the funds; a failed send leaves the proposal `Rejected` with the
    /// wallet error code recorded on it.
    pub fn approve_transfer(
        env: Env,
        signer: Address,
        proposal_id: u64,
    ) -> Result<ProposalStatus, WalletError> {
        let status = custody_approval::approve(&env, &signer, proposal_id, |id, transfer: &Transfer| {
            execute_transfer(&env, id, transfer)
        })?;
        Ok(status)
    }

    pub fn proposal(env: Env, proposal_id: u64) -> Result<Proposal, WalletError> {
        Ok(custody_approval::proposal(&env, proposal_id)?)
    }

    pub fn transfer(env: Env, proposal_id: u64) -> Result<Transfer, WalletError> {
        Ok(custody_approval::payload::<Transfer>(&env, proposal_id)?)
    }

    pub fn proposal_count(env: Env) -> u64 {
        custody_approval::proposal_count(&env)
    }

    pub fn threshold(env: Env) -> Result<u32, WalletError> {
        Ok(custody_approval::config(&env)?.threshold)
    }

    pub fn signers(env: Env) -> Result<Vec<Address>, WalletError> {
        Ok(custody_approval::config(&env)?.signers)
    }

    pub fn is_signer(env: Env, account: Address) -> bool {
        custody_approval::is_signer(&env, &account)
    }

    pub fn admin(env: Env) -> Result<Address, WalletError> {
        storage::get_admin(&env)
    }

    /// The wallet's own ledger balance of `token`.
    pub fn balance(env: Env, token: Address) -> i128 {
        TokenClient::new(&env, &token).balance(&env.current_contract_address())
    }
}

/// Sends the approved transfer from the wallet's balance.
///
/// Both ledger calls go through `try_*` so a failing token contract surfaces
/// as `TransferFailed` instead of aborting the approval that triggered it.
fn execute_transfer(env: &Env, id: u64, transfer: &Transfer) -> Result<(), WalletError> {
    let wallet = env.current_contract_address();
    let token = TokenClient::new(env, &transfer.token);

    let balance = match token.try_balance(&wallet) {
        Ok(Ok(balance)) => balance,
        _ => return Err(WalletError::TransferFailed),
    };
    if balance < transfer.amount {
        return Err(WalletError::InsufficientBalance);
    }

    match token.try_transfer(&wallet, &transfer.recipient, &transfer.amount) {
        Ok(Ok(())) => {}
        _ => return Err(WalletError::TransferFailed),
    }

    WalletEvents::sent(env, id, &transfer.token, &transfer.recipient, transfer.amount);
    Ok(())
}
