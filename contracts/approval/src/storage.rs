use soroban_sdk::{contracttype, Address, BytesN, Env, IntoVal, TryFromVal, Val, Vec};

use crate::errors::ApprovalError;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const PROPOSAL_LIFETIME_THRESHOLD: u32 = 17280;
const PROPOSAL_BUMP_AMOUNT: u32 = 1_555_200; // ~90 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalConfig {
    pub signers: Vec<Address>,
    pub threshold: u32,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalStatus {
    Pending = 0,
    Executed = 1,
    Rejected = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub digest: BytesN<32>,
    pub approvals: Vec<Address>,
    pub status: ProposalStatus,
    pub created_at: u64,
    pub rejection: Option<u32>,
}

// Shares the host contract's storage, so variant names must not collide with
// the host's own keys.
#[contracttype]
#[derive(Clone, Debug)]
pub enum ApprovalKey {
    ApprovalConfig,
    ProposalCount,
    Proposal(u64),
    ProposalPayload(u64),
    PendingDigest(BytesN<32>),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&ApprovalKey::ApprovalConfig)
}

pub fn get_config(env: &Env) -> Result<ApprovalConfig, ApprovalError> {
    env.storage()
        .instance()
        .get(&ApprovalKey::ApprovalConfig)
        .ok_or(ApprovalError::NotInitialized)
}

pub fn set_config(env: &Env, config: &ApprovalConfig) {
    env.storage().instance().set(&ApprovalKey::ApprovalConfig, config);
}

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage().instance().get(&ApprovalKey::ProposalCount).unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage().instance().set(&ApprovalKey::ProposalCount, &count);
}

pub fn get_proposal(env: &Env, id: u64) -> Option<Proposal> {
    let key = ApprovalKey::Proposal(id);
    let proposal = env.storage().persistent().get(&key);
    if proposal.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PROPOSAL_LIFETIME_THRESHOLD, PROPOSAL_BUMP_AMOUNT);
    }
    proposal
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = ApprovalKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROPOSAL_LIFETIME_THRESHOLD, PROPOSAL_BUMP_AMOUNT);
}

pub fn get_payload<P>(env: &Env, id: u64) -> Option<P>
where
    P: TryFromVal<Env, Val>,
    <P as TryFromVal<Env, Val>>::Error: core::fmt::Debug,
{
    env.storage().persistent().get(&ApprovalKey::ProposalPayload(id))
}

pub fn set_payload<P>(env: &Env, id: u64, payload: &P)
where
    P: IntoVal<Env, Val>,
{
    let key = ApprovalKey::ProposalPayload(id);
    env.storage().persistent().set(&key, payload);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROPOSAL_LIFETIME_THRESHOLD, PROPOSAL_BUMP_AMOUNT);
}

pub fn get_pending(env: &Env, digest: &BytesN<32>) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&ApprovalKey::PendingDigest(digest.clone()))
}

pub fn set_pending(env: &Env, digest: &BytesN<32>, id: u64) {
    let key = ApprovalKey::PendingDigest(digest.clone());
    env.storage().persistent().set(&key, &id);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROPOSAL_LIFETIME_THRESHOLD, PROPOSAL_BUMP_AMOUNT);
}

pub fn clear_pending(env: &Env, digest: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&ApprovalKey::PendingDigest(digest.clone()));
}

/// Extend instance storage TTL to keep the host contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
