#![no_std]

mod errors;
mod events;
mod governance;
mod math;
mod storage;

#[cfg(test)]
extern crate std;


pub use custody_approval::{Proposal, ProposalStatus};
pub use errors::PoolError;
pub use storage::{PoolAction, Reserve};

use custody_certificate_interface::CertificateClient;
use events::PoolEvents;
use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Vec};
use storage::PoolConfig;

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    /// Binds the pool to its signer set and certificate registry. The registry
    /// must name this pool as its admin before the first deposit.
    pub fn initialize(
        env: Env,
        admin: Address,
        threshold: u32,
        signers: Vec<Address>,
        certificate: Address,
    ) -> Result<(), PoolError> {
        if storage::has_pool_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        admin.require_auth();

        custody_approval::initialize(&env, signers, threshold)?;
        storage::set_pool_config(&env, &PoolConfig { admin, certificate });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn propose_listing(env: Env, signer: Address, token: Address) -> Result<u64, PoolError> {
        Self::propose_action(&env, &signer, PoolAction::List(token))
    }

    pub fn propose_delisting(env: Env, signer: Address, token: Address) -> Result<u64, PoolError> {
        Self::propose_action(&env, &signer, PoolAction::Delist(token))
    }

    /// Proposes raising the tracked balance of `token` to what the pool
    /// actually holds, so tokens sent directly to the pool accrue to current
    /// holders. Applied only once the threshold approves it; fails at
    /// execution with `NoOutstandingShares` when no shares exist.
    pub fn propose_sync(env: Env, signer: Address, token: Address) -> Result<u64, PoolError> {
        Self::propose_action(&env, &signer, PoolAction::Sync(token))
    }

    /// Adds `signer`'s approval to a pool action proposal; the approval that
    /// meets the threshold applies it.
    pub fn approve(env: Env, signer: Address, proposal_id: u64) -> Result<ProposalStatus, PoolError> {
        let status = custody_approval::approve(&env, &signer, proposal_id, |_, action: &PoolAction| {
            governance::apply(&env, action)
        })?;
        Ok(status)
    }

    /// Deposits `amount` of a listed `token` and mints a certificate for the
    /// shares it buys. Open to any account.
    ///
    /// # Errors
    /// | Error                | Condition                                       |
    /// |----------------------|-------------------------------------------------|
    /// | `InvalidAmount`      | `amount <= 0`                                   |
    /// | `NotInitialized`     | Pool has not been initialized                   |
    /// | `NotListed`          | `token` is not accepted for deposits            |
    /// | `ZeroShares`         | Deposit too small to buy a whole share          |
    /// | `ArithmeticOverflow` | Share or balance arithmetic overflowed          |
    pub fn deposit(env: Env, depositor: Address, token: Address, amount: i128) -> Result<u64, PoolError> {
        depositor.require_auth();

        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let config = storage::get_pool_config(&env)?;
        if !storage::is_listed(&env, &token) {
            return Err(PoolError::NotListed);
        }

        let mut reserve = storage::get_reserve(&env, &token);
        let shares = math::shares_for_deposit(amount, &reserve)?;
        if shares == 0 {
            return Err(PoolError::ZeroShares);
        }

        TokenClient::new(&env, &token).transfer(&depositor, &env.current_contract_address(), &amount);

        reserve.balance = reserve
            .balance
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        reserve.shares = reserve
            .shares
            .checked_add(shares)
            .ok_or(PoolError::ArithmeticOverflow)?;
        storage::set_reserve(&env, &token, &reserve);

        let serial = CertificateClient::new(&env, &config.certificate).mint(&depositor, &token, &shares);
        storage::extend_instance_ttl(&env);

        PoolEvents::deposit(&env, &depositor, &token, amount, shares, serial);
        Ok(serial)
    }

    /// Burns certificate `serial` and pays its owner their share of the
    /// reserve as it stands now, rounded down.
    pub fn redeem(env: Env, owner: Address, serial: u64) -> Result<i128, PoolError> {
        owner.require_auth();

        let config = storage::get_pool_config(&env)?;
        let registry = CertificateClient::new(&env, &config.certificate);
        let certificate = registry.certificate(&serial).ok_or(PoolError::NotFound)?;
        if certificate.owner != owner {
            return Err(PoolError::NotOwner);
        }

        let mut reserve = storage::get_reserve(&env, &certificate.token);
        let payout = math::payout_for_shares(certificate.shares, &reserve)?;

        reserve.balance = reserve
            .balance
            .checked_sub(payout)
            .ok_or(PoolError::ArithmeticOverflow)?;
        reserve.shares = reserve
            .shares
            .checked_sub(certificate.shares)
            .ok_or(PoolError::ArithmeticOverflow)?;
        storage::set_reserve(&env, &certificate.token, &reserve);

        registry.burn(&serial);

        if payout > 0 {
            TokenClient::new(&env, &certificate.token).transfer(
                &env.current_contract_address(),
                &owner,
                &payout,
            );
        }
        storage::extend_instance_ttl(&env);

        PoolEvents::redeem(&env, &owner, &certificate.token, serial, certificate.shares, payout);
        Ok(payout)
    }

    pub fn quote_deposit(env: Env, token: Address, amount: i128) -> Result<i128, PoolError> {
        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }
        if !storage::is_listed(&env, &token) {
            return Err(PoolError::NotListed);
        }
        math::shares_for_deposit(amount, &storage::get_reserve(&env, &token))
    }

    pub fn quote_redeem(env: Env, serial: u64) -> Result<i128, PoolError> {
        let config = storage::get_pool_config(&env)?;
        let certificate = CertificateClient::new(&env, &config.certificate)
            .certificate(&serial)
            .ok_or(PoolError::NotFound)?;
        math::payout_for_shares(certificate.shares, &storage::get_reserve(&env, &certificate.token))
    }

    pub fn reserve(env: Env, token: Address) -> Reserve {
        storage::get_reserve(&env, &token)
    }

    pub fn is_listed(env: Env, token: Address) -> bool {
        storage::is_listed(&env, &token)
    }

    pub fn proposal(env: Env, proposal_id: u64) -> Result<Proposal, PoolError> {
        Ok(custody_approval::proposal(&env, proposal_id)?)
    }

    pub fn action(env: Env, proposal_id: u64) -> Result<PoolAction, PoolError> {
        Ok(custody_approval::payload::<PoolAction>(&env, proposal_id)?)
    }

    pub fn threshold(env: Env) -> Result<u32, PoolError> {
        Ok(custody_approval::config(&env)?.threshold)
    }

    pub fn signers(env: Env) -> Result<Vec<Address>, PoolError> {
        Ok(custody_approval::config(&env)?.signers)
    }

    pub fn certificate_registry(env: Env) -> Result<Address, PoolError> {
        Ok(storage::get_pool_config(&env)?.certificate)
    }

    pub fn admin(env: Env) -> Result<Address, PoolError> {
        Ok(storage::get_pool_config(&env)?.admin)
    }
}

impl LiquidityPool {
    fn propose_action(env: &Env, signer: &Address, action: PoolAction) -> Result<u64, PoolError> {
        storage::get_pool_config(env)?;
        let id = custody_approval::propose(env, signer, action, |_, action: &PoolAction| {
            governance::apply(env, action)
        })?;
        Ok(id)
    }
}
