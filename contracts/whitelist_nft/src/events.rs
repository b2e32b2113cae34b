use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const WLIST: Symbol = symbol_short!("WLIST");

#[derive(Clone)]
#[contracttype]
pub struct WhitelistChangedEvent {
    pub asset: Address,
    pub whitelisted: bool,
    pub timestamp: u64,
}

pub fn emit_added(env: &Env, asset: Address) {
    let event = WhitelistChangedEvent {
        asset,
        whitelisted: true,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((WLIST, symbol_short!("added")), event);
}

pub fn emit_removed(env: &Env, asset: Address) {
    let event = WhitelistChangedEvent {
        asset,
        whitelisted: false,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((WLIST, symbol_short!("removed")), event);
}

pub fn emit_owner_updated(env: &Env, previous: Address, owner: Address) {
    env.events()
        .publish((WLIST, symbol_short!("owner")), (previous, owner));
}
