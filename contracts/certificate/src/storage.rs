use custody_certificate_interface::{Certificate, CertificateError};
use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const ENTRY_LIFETIME_THRESHOLD: u32 = 17280;
const ENTRY_BUMP_AMOUNT: u32 = 1_555_200; // ~90 days in 5s ledgers

#[contracttype]
pub enum CertificateKey {
    Admin,
    IssuedCount,
    Certificate(u64),
    Holdings(Address),
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&CertificateKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, CertificateError> {
    env.storage()
        .instance()
        .get(&CertificateKey::Admin)
        .ok_or(CertificateError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&CertificateKey::Admin, admin);
}

pub fn get_issued_count(env: &Env) -> u64 {
    env.storage().instance().get(&CertificateKey::IssuedCount).unwrap_or(0)
}

pub fn set_issued_count(env: &Env, count: u64) {
    env.storage().instance().set(&CertificateKey::IssuedCount, &count);
}

pub fn get_certificate(env: &Env, serial: u64) -> Option<Certificate> {
    env.storage().persistent().get(&CertificateKey::Certificate(serial))
}

pub fn set_certificate(env: &Env, certificate: &Certificate) {
    let key = CertificateKey::Certificate(certificate.serial);
    env.storage().persistent().set(&key, certificate);
    env.storage()
        .persistent()
        .extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn remove_certificate(env: &Env, serial: u64) {
    env.storage().persistent().remove(&CertificateKey::Certificate(serial));
}

pub fn get_holdings(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&CertificateKey::Holdings(owner.clone()))
        .unwrap_or(0)
}

fn set_holdings(env: &Env, owner: &Address, count: u32) {
    let key = CertificateKey::Holdings(owner.clone());
    if count == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &count);
    env.storage()
        .persistent()
        .extend_ttl(&key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

pub fn add_holding(env: &Env, owner: &Address) -> Result<(), CertificateError> {
    let count = get_holdings(env, owner)
        .checked_add(1)
        .ok_or(CertificateError::ArithmeticOverflow)?;
    set_holdings(env, owner, count);
    Ok(())
}

pub fn remove_holding(env: &Env, owner: &Address) -> Result<(), CertificateError> {
    let count = get_holdings(env, owner)
        .checked_sub(1)
        .ok_or(CertificateError::ArithmeticOverflow)?;
    set_holdings(env, owner, count);
    Ok(())
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
