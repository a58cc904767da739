//! Threshold approval engine shared by the custody contracts.
//!
//! The engine keeps its state in the storage of whichever contract calls it.
//! A proposal collects approvals from a fixed signer set; the approval that
//! reaches the threshold runs the caller-supplied executor exactly once, in
//! the same invocation. Executor failures are recorded on the proposal as a
//! terminal `Rejected` status instead of being returned as errors, because an
//! error return would roll the status transition back with the rest of the
//! invocation.
#![no_std]

mod errors;
mod events;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::ApprovalError;
pub use events::ApprovalEvents;
pub use storage::{ApprovalConfig, Proposal, ProposalStatus};

use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, IntoVal, TryFromVal, Val, Vec};

/// Stores the signer set and threshold. Callable once per contract instance.
pub fn initialize(env: &Env, signers: Vec<Address>, threshold: u32) -> Result<(), ApprovalError> {
    if storage::has_config(env) {
        return Err(ApprovalError::AlreadyInitialized);
    }

    if signers.is_empty() {
        return Err(ApprovalError::EmptySignerSet);
    }

    if threshold == 0 || threshold > signers.len() {
        return Err(ApprovalError::InvalidThreshold);
    }

    for i in 0..signers.len() {
        for j in (i + 1)..signers.len() {
            if signers.get_unchecked(i) == signers.get_unchecked(j) {
                return Err(ApprovalError::DuplicateSigner);
            }
        }
    }

    storage::set_config(env, &ApprovalConfig { signers, threshold });
    storage::extend_instance_ttl(env);
    Ok(())
}

pub fn config(env: &Env) -> Result<ApprovalConfig, ApprovalError> {
    storage::get_config(env)
}

pub fn is_signer(env: &Env, account: &Address) -> bool {
    storage::get_config(env)
        .map(|config| config.signers.contains(account))
        .unwrap_or(false)
}

/// Opens a proposal for `payload` with the proposer's approval already counted.
///
/// If the threshold is 1 the executor runs before this returns. A payload that
/// is byte-identical (by XDR digest) to a pending proposal is refused with
/// `DuplicateProposal`; once that proposal is terminal the payload may be
/// proposed again under a new id.
pub fn propose<P, F, E>(
    env: &Env,
    proposer: &Address,
    payload: P,
    execute: F,
) -> Result<u64, ApprovalError>
where
    P: IntoVal<Env, Val> + Clone,
    F: FnOnce(u64, &P) -> Result<(), E>,
    E: Into<soroban_sdk::Error>,
{
    let config = storage::get_config(env)?;

    if !config.signers.contains(proposer) {
        return Err(ApprovalError::Unauthorized);
    }
    proposer.require_auth();

    let digest = digest_of(env, &payload);
    if storage::get_pending(env, &digest).is_some() {
        return Err(ApprovalError::DuplicateProposal);
    }

    let id = storage::get_proposal_count(env)
        .checked_add(1)
        .ok_or(ApprovalError::ArithmeticOverflow)?;
    storage::set_proposal_count(env, id);

    let mut approvals = Vec::new(env);
    approvals.push_back(proposer.clone());

    let proposal = Proposal {
        id,
        proposer: proposer.clone(),
        digest: digest.clone(),
        approvals,
        status: ProposalStatus::Pending,
        created_at: env.ledger().timestamp(),
        rejection: None,
    };

    storage::set_payload(env, id, &payload);
    storage::set_pending(env, &digest, id);

    ApprovalEvents::proposed(env, id, proposer);
    ApprovalEvents::approved(env, id, proposer, 1);

    settle(env, &config, proposal, &payload, execute);
    storage::extend_instance_ttl(env);

    Ok(id)
}

/// Records `signer`'s approval of proposal `id` and returns the resulting status.
///
/// # Errors
/// | Error               | Condition                                   |
/// |---------------------|---------------------------------------------|
/// | `NotInitialized`    | No signer set stored                        |
/// | `Unauthorized`      | `signer` is not in the signer set           |
/// | `NotFound`          | No proposal with this id                    |
/// | `AlreadyTerminal`   | Proposal is `Executed` or `Rejected`        |
/// | `DuplicateApproval` | `signer` already approved this proposal     |
pub fn approve<P, F, E>(
    env: &Env,
    signer: &Address,
    id: u64,
    execute: F,
) -> Result<ProposalStatus, ApprovalError>
where
    P: TryFromVal<Env, Val>,
    <P as TryFromVal<Env, Val>>::Error: core::fmt::Debug,
    F: FnOnce(u64, &P) -> Result<(), E>,
    E: Into<soroban_sdk::Error>,
{
    let config = storage::get_config(env)?;

    if !config.signers.contains(signer) {
        return Err(ApprovalError::Unauthorized);
    }
    signer.require_auth();

    let mut proposal = storage::get_proposal(env, id).ok_or(ApprovalError::NotFound)?;

    if proposal.status != ProposalStatus::Pending {
        return Err(ApprovalError::AlreadyTerminal);
    }

    if proposal.approvals.contains(signer) {
        return Err(ApprovalError::DuplicateApproval);
    }

    let payload: P = storage::get_payload(env, id).ok_or(ApprovalError::NotFound)?;

    proposal.approvals.push_back(signer.clone());
    ApprovalEvents::approved(env, id, signer, proposal.approvals.len());

    let status = settle(env, &config, proposal, &payload, execute);
    storage::extend_instance_ttl(env);

    Ok(status)
}

pub fn proposal(env: &Env, id: u64) -> Result<Proposal, ApprovalError> {
    storage::get_proposal(env, id).ok_or(ApprovalError::NotFound)
}

pub fn payload<P>(env: &Env, id: u64) -> Result<P, ApprovalError>
where
    P: TryFromVal<Env, Val>,
    <P as TryFromVal<Env, Val>>::Error: core::fmt::Debug,
{
    storage::get_payload(env, id).ok_or(ApprovalError::NotFound)
}

pub fn proposal_count(env: &Env) -> u64 {
    storage::get_proposal_count(env)
}

/// Persists `proposal` and, when its approvals reach the threshold, moves it
/// out of `Pending` before running the executor. Only one caller can observe
/// the `Pending -> Executed` transition for a given id.
fn settle<P, F, E>(
    env: &Env,
    config: &ApprovalConfig,
    mut proposal: Proposal,
    payload: &P,
    execute: F,
) -> ProposalStatus
where
    F: FnOnce(u64, &P) -> Result<(), E>,
    E: Into<soroban_sdk::Error>,
{
    if proposal.approvals.len() < config.threshold {
        storage::set_proposal(env, &proposal);
        return ProposalStatus::Pending;
    }

    proposal.status = ProposalStatus::Executed;
    storage::set_proposal(env, &proposal);
    storage::clear_pending(env, &proposal.digest);

    match execute(proposal.id, payload) {
        Ok(()) => {
            ApprovalEvents::executed(env, proposal.id);
        }
        Err(err) => {
            let error: soroban_sdk::Error = err.into();
            let code = error.get_code();
            proposal.status = ProposalStatus::Rejected;
            proposal.rejection = Some(code);
            storage::set_proposal(env, &proposal);
            ApprovalEvents::rejected(env, proposal.id, code);
        }
    }

    proposal.status
}

fn digest_of<P>(env: &Env, payload: &P) -> BytesN<32>
where
    P: IntoVal<Env, Val> + Clone,
{
    env.crypto().sha256(&payload.clone().to_xdr(env)).into()
}
