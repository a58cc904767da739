#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate std;

mod events;
mod storage;


pub use custody_certificate_interface::{Certificate, CertificateError};

use custody_certificate_interface::CertificateRegistry;
use events::CertificateEvents;
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

#[contract]
pub struct LiquidityCertificate;

#[contractimpl]
impl LiquidityCertificate {
    /// Stores the admin (the only account allowed to mint and burn) and the
    /// collection metadata. Certificates are indivisible, so decimals are 0.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), CertificateError> {
        if storage::has_admin(&env) {
            return Err(CertificateError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: 0,
            name,
            symbol,
        });
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Hands minting rights to `new_admin`, typically the pool once deployed.
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), CertificateError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();

        storage::set_admin(&env, &new_admin);
        storage::extend_instance_ttl(&env);
        CertificateEvents::admin_changed(&env, &admin, &new_admin);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, CertificateError> {
        storage::get_admin(&env)
    }

    /// Number of certificates currently held by `owner`.
    pub fn balance(env: Env, owner: Address) -> u32 {
        storage::get_holdings(&env, &owner)
    }

    /// Serials issued so far, burned ones included.
    pub fn total_issued(env: Env) -> u64 {
        storage::get_issued_count(&env)
    }

    pub fn name(env: Env) -> Result<String, CertificateError> {
        if !storage::has_admin(&env) {
            return Err(CertificateError::NotInitialized);
        }
        Ok(TokenUtils::new(&env).metadata().get_metadata().name)
    }

    pub fn symbol(env: Env) -> Result<String, CertificateError> {
        if !storage::has_admin(&env) {
            return Err(CertificateError::NotInitialized);
        }
        Ok(TokenUtils::new(&env).metadata().get_metadata().symbol)
    }
}

#[contractimpl]
impl CertificateRegistry for LiquidityCertificate {
    fn mint(env: Env, to: Address, token: Address, shares: i128) -> Result<u64, CertificateError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();

        if shares <= 0 {
            return Err(CertificateError::InvalidShares);
        }

        let serial = storage::get_issued_count(&env)
            .checked_add(1)
            .ok_or(CertificateError::ArithmeticOverflow)?;
        storage::set_issued_count(&env, serial);

        let certificate = Certificate {
            serial,
            owner: to.clone(),
            token: token.clone(),
            shares,
        };
        storage::set_certificate(&env, &certificate);
        storage::add_holding(&env, &to)?;
        storage::extend_instance_ttl(&env);

        CertificateEvents::mint(&env, &to, serial, &token, shares);
        Ok(serial)
    }

    fn burn(env: Env, serial: u64) -> Result<(), CertificateError> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();

        let certificate =
            storage::get_certificate(&env, serial).ok_or(CertificateError::NotFound)?;

        storage::remove_certificate(&env, serial);
        storage::remove_holding(&env, &certificate.owner)?;

        CertificateEvents::burn(&env, &certificate.owner, serial);
        Ok(())
    }

    fn transfer(env: Env, from: Address, to: Address, serial: u64) -> Result<(), CertificateError> {
        from.require_auth();

        let mut certificate =
            storage::get_certificate(&env, serial).ok_or(CertificateError::NotFound)?;
        if certificate.owner != from {
            return Err(CertificateError::NotOwner);
        }

        certificate.owner = to.clone();
        storage::set_certificate(&env, &certificate);
        storage::remove_holding(&env, &from)?;
        storage::add_holding(&env, &to)?;

        CertificateEvents::transfer(&env, &from, &to, serial);
        Ok(())
    }

    fn certificate(env: Env, serial: u64) -> Option<Certificate> {
        storage::get_certificate(&env, serial)
    }

    fn owner_of(env: Env, serial: u64) -> Result<Address, CertificateError> {
        storage::get_certificate(&env, serial)
            .map(|certificate| certificate.owner)
            .ok_or(CertificateError::NotFound)
    }
}
