#![no_std]

mod allocation;
mod contract;
mod errors;
mod events;
mod interfaces;
mod storage;
mod types;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::Error;
pub use events::{DepositEvent, DepositPath};
pub use interfaces::{StakingPool, StakingPoolClient, WhitelistRegistry, WhitelistRegistryClient};
pub use types::{
    AllocationGrant, LockPool, NftAllocation, ParticipantAllocation, Sale, SaleParams,
    TierSchedule, TIER_COUNT,
};
