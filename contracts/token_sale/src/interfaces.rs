use soroban_sdk::{contractclient, Address, Env};

/// Lock pool that reports how much a user has staked in it.
#[contractclient(name = "StakingPoolClient")]
pub trait StakingPool {
    fn staked_amount(env: Env, user: Address) -> i128;
}

/// Registry of NFTs that are eligible for the NFT allocation.
#[contractclient(name = "WhitelistRegistryClient")]
pub trait WhitelistRegistry {
    fn is_whitelisted(env: Env, asset: Address) -> bool;
}
