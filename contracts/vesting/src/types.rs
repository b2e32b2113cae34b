use soroban_sdk::{contracttype, Address};

/// Denominator of `tge_fraction`; 100_000 unlocks everything at start.
pub const TGE_DENOMINATOR: u32 = 100_000;

/// Administrator input for `create_vesting_schedule`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingParams {
    pub sale_contract: Address,
    pub sale_id: u64,
    pub token: Address,
    pub total_vested: i128,
    pub tge_fraction: u32,
    pub vesting_start: u64,
    pub vesting_duration: u64,
    pub claim_granularity: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingSchedule {
    pub id: u64,
    pub owner: Address,
    pub sale_contract: Address,
    pub sale_id: u64,
    pub token: Address,
    pub total_vested: i128, // TGE share included
    pub tge_fraction: u32,
    pub vesting_start: u64,
    pub vesting_duration: u64,
    pub claim_granularity: u64,
    /// Sale's `total_raised` when the schedule was created.
    pub sale_total: i128,
    pub total_claimed: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingAccount {
    pub schedule_id: u64,
    pub participant: Address,
    pub claimed_amount: i128,
}

#[contracttype]
pub enum DataKey {
    ScheduleCount,
    Schedule(u64),
    Account(u64, Address),
}
