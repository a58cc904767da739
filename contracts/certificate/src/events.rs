use soroban_sdk::{symbol_short, Address, Env};

pub struct CertificateEvents;

impl CertificateEvents {
    /// Topics: `("mint", to)`
    /// Data:   `(serial, token, shares)`
    pub fn mint(env: &Env, to: &Address, serial: u64, token: &Address, shares: i128) {
        env.events()
            .publish((symbol_short!("mint"), to.clone()), (serial, token.clone(), shares));
    }

    pub fn burn(env: &Env, owner: &Address, serial: u64) {
        env.events().publish((symbol_short!("burn"), owner.clone()), serial);
    }

    /// Topics: `("transfer", from, to)`
    /// Data:   `serial`
    pub fn transfer(env: &Env, from: &Address, to: &Address, serial: u64) {
        env.events()
            .publish((symbol_short!("transfer"), from.clone(), to.clone()), serial);
    }

    pub fn admin_changed(env: &Env, previous: &Address, admin: &Address) {
        env.events()
            .publish((symbol_short!("set_admin"), previous.clone()), admin.clone());
    }
}
