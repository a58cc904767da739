#![cfg(test)]

// ---------------------------------------------------------------------------
// Approval engine test suite
//
// The engine has no contract of its own, so every test runs it inside
// `env.as_contract` against a minimal stub contract, exactly as a host
// contract would.
// ---------------------------------------------------------------------------


use core::cell::Cell;

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, testutils::Address as _,
    Address, Env, Symbol, Vec,
};

use crate::{ApprovalError, ProposalStatus};

#[contract]
pub struct EngineStub;

#[contractimpl]
impl EngineStub {}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StubError {
    Declined = 42,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Memo {
    pub tag: Symbol,
    pub amount: i128,
}

fn memo(amount: i128) -> Memo {
    Memo { tag: symbol_short!("pay"), amount }
}

fn ok(_: u64, _: &Memo) -> Result<(), StubError> {
    Ok(())
}

fn declined(_: u64, _: &Memo) -> Result<(), StubError> {
    Err(StubError::Declined)
}

struct Setup {
    env: Env,
    contract_id: Address,
    signers: [Address; 3],
}

/// Registers the stub and initializes the engine with three signers.
fn setup(threshold: u32) -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, EngineStub);
    let signers = [
        Address::generate(&env),
        Address::generate(&env),
        Address::generate(&env),
    ];

    env.as_contract(&contract_id, || {
        crate::initialize(&env, Vec::from_array(&env, signers.clone()), threshold).unwrap();
    });

    Setup { env, contract_id, signers }
}

// ============================================================================
// 1. Initialization
// ============================================================================
mod initialization {
    use super::*;

    fn init(env: &Env, signers: Vec<Address>, threshold: u32) -> Result<(), ApprovalError> {
        let contract_id = env.register_contract(None, EngineStub);
        env.as_contract(&contract_id, || crate::initialize(env, signers, threshold))
    }

    #[test]
    fn stores_signers_and_threshold() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            let config = crate::config(&s.env).unwrap();
            assert_eq!(config.threshold, 2);
            assert_eq!(config.signers.len(), 3);
            assert!(crate::is_signer(&s.env, &s.signers[1]));
            assert!(!crate::is_signer(&s.env, &Address::generate(&s.env)));
        });
    }

    #[test]
    fn double_init_fails() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            let result = crate::initialize(&s.env, Vec::from_array(&s.env, s.signers.clone()), 1);
            assert_eq!(result, Err(ApprovalError::AlreadyInitialized));
        });
    }

    #[test]
    fn empty_signer_set_fails() {
        let env = Env::default();
        assert_eq!(init(&env, Vec::new(&env), 1), Err(ApprovalError::EmptySignerSet));
    }

    #[test]
    fn zero_threshold_fails() {
        let env = Env::default();
        let signers = Vec::from_array(&env, [Address::generate(&env)]);
        assert_eq!(init(&env, signers, 0), Err(ApprovalError::InvalidThreshold));
    }

    #[test]
    fn threshold_above_signer_count_fails() {
        let env = Env::default();
        let signers = Vec::from_array(&env, [Address::generate(&env), Address::generate(&env)]);
        assert_eq!(init(&env, signers, 3), Err(ApprovalError::InvalidThreshold));
    }

    #[test]
    fn duplicate_signer_fails() {
        let env = Env::default();
        let a = Address::generate(&env);
        let signers = Vec::from_array(&env, [a.clone(), Address::generate(&env), a]);
        assert_eq!(init(&env, signers, 2), Err(ApprovalError::DuplicateSigner));
    }

    #[test]
    fn uninitialized_engine_rejects_proposals() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, EngineStub);
        let proposer = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let result = crate::propose(&env, &proposer, memo(1), ok);
            assert_eq!(result, Err(ApprovalError::NotInitialized));
        });
    }
}

// ============================================================================
// 2. Proposing
// ============================================================================
mod proposing {
    use super::*;

    #[test]
    fn proposal_starts_pending_with_proposer_approval() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            let id = crate::propose(&s.env, &s.signers[0], memo(10), ok).unwrap();
            assert_eq!(id, 1);

            let proposal = crate::proposal(&s.env, id).unwrap();
            assert_eq!(proposal.status, ProposalStatus::Pending);
            assert_eq!(proposal.proposer, s.signers[0]);
            assert_eq!(proposal.approvals, Vec::from_array(&s.env, [s.signers[0].clone()]));
            assert_eq!(proposal.rejection, None);
            assert_eq!(crate::payload::<Memo>(&s.env, id).unwrap(), memo(10));
        });
    }

    #[test]
    fn ids_are_sequential() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            assert_eq!(crate::propose(&s.env, &s.signers[0], memo(1), ok), Ok(1));
            assert_eq!(crate::propose(&s.env, &s.signers[1], memo(2), ok), Ok(2));
            assert_eq!(crate::propose(&s.env, &s.signers[2], memo(3), ok), Ok(3));
            assert_eq!(crate::proposal_count(&s.env), 3);
        });
    }

    #[test]
    fn non_signer_cannot_propose() {
        let s = setup(2);
        let outsider = Address::generate(&s.env);
        s.env.as_contract(&s.contract_id, || {
            let result = crate::propose(&s.env, &outsider, memo(10), ok);
            assert_eq!(result, Err(ApprovalError::Unauthorized));
            assert_eq!(crate::proposal_count(&s.env), 0);
        });
    }

    #[test]
    fn identical_pending_payload_is_refused() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            crate::propose(&s.env, &s.signers[0], memo(10), ok).unwrap();
            let result = crate::propose(&s.env, &s.signers[1], memo(10), ok);
            assert_eq!(result, Err(ApprovalError::DuplicateProposal));

            // A different payload is fine.
            assert_eq!(crate::propose(&s.env, &s.signers[1], memo(11), ok), Ok(2));
        });
    }

    #[test]
    fn payload_can_be_proposed_again_once_terminal() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            let first = crate::propose(&s.env, &s.signers[0], memo(10), ok).unwrap();
            crate::approve::<Memo, _, _>(&s.env, &s.signers[1], first, ok).unwrap();

            let second = crate::propose(&s.env, &s.signers[0], memo(10), ok).unwrap();
            assert_eq!(second, 2);
        });
    }

    #[test]
    fn threshold_of_one_executes_on_propose() {
        let s = setup(1);
        let runs = Cell::new(0u32);
        s.env.as_contract(&s.contract_id, || {
            let id = crate::propose(&s.env, &s.signers[0], memo(10), |_: u64, _: &Memo| {
                runs.set(runs.get() + 1);
                Ok::<(), StubError>(())
            })
            .unwrap();
            assert_eq!(crate::proposal(&s.env, id).unwrap().status, ProposalStatus::Executed);
        });
        assert_eq!(runs.get(), 1);
    }
}

// ============================================================================
// 3. Approving and threshold crossing
// ============================================================================
mod approving {
    use super::*;

    #[test]
    fn below_threshold_stays_pending() {
        let s = setup(3);
        let runs = Cell::new(0u32);
        s.env.as_contract(&s.contract_id, || {
            let id = crate::propose(&s.env, &s.signers[0], memo(10), ok).unwrap();
            let status = crate::approve(&s.env, &s.signers[1], id, |_: u64, _: &Memo| {
                runs.set(runs.get() + 1);
                Ok::<(), StubError>(())
            })
            .unwrap();
            assert_eq!(status, ProposalStatus::Pending);
            assert_eq!(crate::proposal(&s.env, id).unwrap().approvals.len(), 2);
        });
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn threshold_approval_executes_exactly_once() {
        let s = setup(2);
        let runs = Cell::new(0u32);
        let count = |_: u64, _: &Memo| {
            runs.set(runs.get() + 1);
            Ok::<(), StubError>(())
        };

        s.env.as_contract(&s.contract_id, || {
            let id = crate::propose(&s.env, &s.signers[0], memo(10), count).unwrap();
            assert_eq!(runs.get(), 0);

            let status = crate::approve(&s.env, &s.signers[1], id, count).unwrap();
            assert_eq!(status, ProposalStatus::Executed);
            assert_eq!(runs.get(), 1);

            // A third signer arriving late cannot re-trigger execution.
            let late = crate::approve(&s.env, &s.signers[2], id, count);
            assert_eq!(late, Err(ApprovalError::AlreadyTerminal));
        });
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn executor_receives_stored_payload() {
        let s = setup(2);
        let seen = Cell::new(0i128);
        s.env.as_contract(&s.contract_id, || {
            let id = crate::propose(&s.env, &s.signers[0], memo(77), ok).unwrap();
            crate::approve(&s.env, &s.signers[1], id, |_: u64, m: &Memo| {
                seen.set(m.amount);
                Ok::<(), StubError>(())
            })
            .unwrap();
        });
        assert_eq!(seen.get(), 77);
    }

    #[test]
    fn repeated_approval_is_refused_and_not_counted() {
        let s = setup(3);
        s.env.as_contract(&s.contract_id, || {
            let id = crate::propose(&s.env, &s.signers[0], memo(10), ok).unwrap();
            let result = crate::approve::<Memo, _, _>(&s.env, &s.signers[0], id, ok);
            assert_eq!(result, Err(ApprovalError::DuplicateApproval));
            assert_eq!(crate::proposal(&s.env, id).unwrap().approvals.len(), 1);
        });
    }

    #[test]
    fn non_signer_approval_is_refused_and_not_counted() {
        let s = setup(2);
        let outsider = Address::generate(&s.env);
        s.env.as_contract(&s.contract_id, || {
            let id = crate::propose(&s.env, &s.signers[0], memo(10), ok).unwrap();
            let result = crate::approve::<Memo, _, _>(&s.env, &outsider, id, ok);
            assert_eq!(result, Err(ApprovalError::Unauthorized));

            let proposal = crate::proposal(&s.env, id).unwrap();
            assert_eq!(proposal.approvals.len(), 1);
            assert_eq!(proposal.status, ProposalStatus::Pending);
        });
    }

    #[test]
    fn unknown_proposal_is_not_found() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            let result = crate::approve::<Memo, _, _>(&s.env, &s.signers[0], 99, ok);
            assert_eq!(result, Err(ApprovalError::NotFound));
            assert_eq!(crate::proposal(&s.env, 99), Err(ApprovalError::NotFound));
        });
    }

    #[test]
    fn executor_failure_rejects_with_code() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            let id = crate::propose(&s.env, &s.signers[0], memo(10), declined).unwrap();
            let status = crate::approve(&s.env, &s.signers[1], id, declined).unwrap();
            assert_eq!(status, ProposalStatus::Rejected);

            let proposal = crate::proposal(&s.env, id).unwrap();
            assert_eq!(proposal.status, ProposalStatus::Rejected);
            assert_eq!(proposal.rejection, Some(StubError::Declined as u32));

            // Rejected is terminal; no retry path.
            let retry = crate::approve::<Memo, _, _>(&s.env, &s.signers[2], id, ok);
            assert_eq!(retry, Err(ApprovalError::AlreadyTerminal));
        });
    }

    #[test]
    fn proposals_are_independent() {
        let s = setup(2);
        s.env.as_contract(&s.contract_id, || {
            let first = crate::propose(&s.env, &s.signers[0], memo(1), ok).unwrap();
            let second = crate::propose(&s.env, &s.signers[0], memo(2), ok).unwrap();

            crate::approve::<Memo, _, _>(&s.env, &s.signers[1], second, ok).unwrap();

            assert_eq!(crate::proposal(&s.env, first).unwrap().status, ProposalStatus::Pending);
            assert_eq!(crate::proposal(&s.env, second).unwrap().status, ProposalStatus::Executed);
        });
    }
}
