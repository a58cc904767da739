#![no_std]

use soroban_sdk::{contractclient, contracterror, contracttype, Address, Env};

/// A liquidity certificate: an indivisible claim on `shares` of the pool's
/// reserve of `token`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    pub serial: u64,
    pub owner: Address,
    pub token: Address,
    pub shares: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CertificateError {
    AlreadyInitialized = 600,
    NotInitialized = 601,
    NotFound = 602,
    NotOwner = 603,
    InvalidShares = 604,
    ArithmeticOverflow = 605,
}

/// Certificate Registry Interface.
/// The pool mints a certificate on deposit and burns it on redemption; only
/// the registry admin may do either. Holders move certificates with
/// `transfer`.
#[contractclient(name = "CertificateClient")]
pub trait CertificateRegistry {
    fn mint(env: Env, to: Address, token: Address, shares: i128) -> Result<u64, CertificateError>;

    fn burn(env: Env, serial: u64) -> Result<(), CertificateError>;

    fn transfer(env: Env, from: Address, to: Address, serial: u64) -> Result<(), CertificateError>;

    fn certificate(env: Env, serial: u64) -> Option<Certificate>;

    fn owner_of(env: Env, serial: u64) -> Result<Address, CertificateError>;
}
