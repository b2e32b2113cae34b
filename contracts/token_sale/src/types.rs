use soroban_sdk::{contracttype, Address, Env, Vec};

/// Number of stake brackets every tier schedule carries.
pub const TIER_COUNT: u32 = 7;

/// Lock-duration pool a staking-backed deposit draws its allocation from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum LockPool {
    /// 7 day lock.
    Short = 0,
    /// 2 month lock.
    Long = 1,
}

/// Ascending stake brackets and the allocation cap of each bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TierSchedule {
    /// Minimum stake for each tier, strictly ascending.
    pub thresholds: Vec<i128>,
    pub caps: Vec<i128>,
}

/// Administrator input for `create_sale`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub payment_token: Address,
    pub short_pool: Address,
    pub long_pool: Address,
    pub whitelist_registry: Address,
    pub total_offered: i128,
    pub start_time: u64,
    pub duration: u64,
    pub short_tiers: TierSchedule,
    pub long_tiers: TierSchedule,
    pub nft_cap: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Sale {
    pub id: u64,
    pub owner: Address,
    pub payment_token: Address,
    pub short_pool: Address,
    pub long_pool: Address,
    pub whitelist_registry: Address,
    pub total_offered: i128,
    pub total_raised: i128,
    pub total_withdrawn: i128,
    pub start_time: u64,
    pub duration: u64,
    pub short_tiers: TierSchedule,
    pub long_tiers: TierSchedule,
    pub nft_cap: i128,
}

impl Sale {
    pub fn end_time(&self) -> u64 {
        // Representability is checked when the sale is created.
        self.start_time.saturating_add(self.duration)
    }

    pub fn tiers(&self, pool: LockPool) -> &TierSchedule {
        match pool {
            LockPool::Short => &self.short_tiers,
            LockPool::Long => &self.long_tiers,
        }
    }

    pub fn pool_address(&self, pool: LockPool) -> &Address {
        match pool {
            LockPool::Short => &self.short_pool,
            LockPool::Long => &self.long_pool,
        }
    }
}

/// Consumed allocation of one participant in one sale.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ParticipantAllocation {
    pub sale_id: u64,
    pub participant: Address,
    /// Everything this participant paid in, across every deposit path.
    pub paid_amount: i128,
    pub used_short: i128,
    pub used_long: i128,
    pub used_grant: i128,
}

impl ParticipantAllocation {
    pub fn new(sale_id: u64, participant: Address) -> Self {
        Self {
            sale_id,
            participant,
            paid_amount: 0,
            used_short: 0,
            used_long: 0,
            used_grant: 0,
        }
    }

    pub fn used_in(&self, pool: LockPool) -> i128 {
        match pool {
            LockPool::Short => self.used_short,
            LockPool::Long => self.used_long,
        }
    }

    pub fn set_used_in(&mut self, pool: LockPool, used: i128) {
        match pool {
            LockPool::Short => self.used_short = used,
            LockPool::Long => self.used_long = used,
        }
    }
}

/// Consumed allocation of one whitelisted NFT in one sale.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct NftAllocation {
    pub sale_id: u64,
    pub asset: Address,
    pub used_amount: i128,
}

/// Allocation granted to a participant directly by the sale owner.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllocationGrant {
    pub sale_id: u64,
    pub participant: Address,
    pub allocation: i128,
}

#[contracttype]
pub enum DataKey {
    SaleCount,
    Sale(u64),
    Allocation(u64, Address),
    NftAllocation(u64, Address),
    Grant(u64, Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
