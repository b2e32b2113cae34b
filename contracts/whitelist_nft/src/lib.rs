#![no_std]


mod errors;
mod events;

pub use errors::Error;
pub use events::WhitelistChangedEvent;

use soroban_sdk::{contract, contractimpl, contractmeta, contracttype, Address, Env};

contractmeta!(
    key = "Description",
    val = "Owner-managed registry of NFT assets admitted to token sales"
);

// ==================== Storage Keys ====================

#[contracttype]
pub enum DataKey {
    Owner,          // instance
    Entry(Address), // persistent, one per collection
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WhitelistEntry {
    pub asset: Address,
    pub added_at: u64,
}

#[contract]
pub struct WhitelistNftContract;

#[contractimpl]
impl WhitelistNftContract {
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        env.storage().instance().set(&DataKey::Owner, &owner);
        Ok(())
    }

    /// Hand the registry to `new_owner`. Signed by the current owner.
    pub fn update_owner(env: Env, new_owner: Address) -> Result<(), Error> {
        let owner = Self::require_owner(&env)?;
        env.storage().instance().set(&DataKey::Owner, &new_owner);
        events::emit_owner_updated(&env, owner, new_owner);
        Ok(())
    }

    pub fn add_whitelist(env: Env, asset: Address) -> Result<(), Error> {
        Self::require_owner(&env)?;

        let key = DataKey::Entry(asset.clone());
        if env.storage().persistent().has(&key) {
            return Err(Error::AlreadyWhitelisted);
        }
        let entry = WhitelistEntry {
            asset: asset.clone(),
            added_at: env.ledger().timestamp(),
        };
        env.storage().persistent().set(&key, &entry);

        events::emit_added(&env, asset);
        Ok(())
    }

    pub fn remove_whitelist(env: Env, asset: Address) -> Result<(), Error> {
        Self::require_owner(&env)?;

        let key = DataKey::Entry(asset.clone());
        if !env.storage().persistent().has(&key) {
            return Err(Error::NotWhitelisted);
        }
        env.storage().persistent().remove(&key);

        events::emit_removed(&env, asset);
        Ok(())
    }

    // View functions
    pub fn is_whitelisted(env: Env, asset: Address) -> bool {
        env.storage().persistent().has(&DataKey::Entry(asset))
    }

    pub fn get_entry(env: Env, asset: Address) -> Option<WhitelistEntry> {
        env.storage().persistent().get(&DataKey::Entry(asset))
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    // ==================== Internal ====================

    fn require_owner(env: &Env) -> Result<Address, Error> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        owner.require_auth();
        Ok(owner)
    }
}
