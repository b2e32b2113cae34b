/// Shared fixtures for the cross-contract tests.
use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger},
    token, vec, Address, Env,
};
use token_sale::{LockPool, SaleParams, TierSchedule, TokenSaleContract, TokenSaleContractClient};
use vesting::{VestingContract, VestingContractClient, VestingParams};
use whitelist_nft::{WhitelistNftContract, WhitelistNftContractClient};

pub mod constants {
    pub const SALE_START: u64 = 1_000;
    pub const SALE_DURATION: u64 = 500;
    pub const TOTAL_OFFERED: i128 = 10_000_000_000;
    pub const NFT_CAP: i128 = 20_000_000;

    pub const VESTING_START: u64 = 10_000;
    pub const VESTING_DURATION: u64 = 1_000;
    pub const CLAIM_STEP: u64 = 100;
    /// 10% of the entitlement unlocks at vesting start.
    pub const TGE_FRACTION: u32 = 10_000;
}

use constants::*;

/// Staking pool exposing only the balance the sale reads.
#[contract]
pub struct MockStakingPool;

#[contractimpl]
impl MockStakingPool {
    pub fn set_stake(env: Env, user: Address, amount: i128) {
        env.storage().persistent().set(&user, &amount);
    }

    pub fn staked_amount(env: Env, user: Address) -> i128 {
        env.storage().persistent().get(&user).unwrap_or(0)
    }
}

pub fn short_tiers(env: &Env) -> TierSchedule {
    TierSchedule {
        thresholds: vec![env, 1_000, 5_000, 10_000, 25_000, 50_000, 100_000, 250_000],
        caps: vec![
            env,
            20_000_000,
            100_000_000,
            200_000_000,
            400_000_000,
            900_000_000,
            30_320_000_000,
            60_640_000_000,
        ],
    }
}

pub fn long_tiers(env: &Env) -> TierSchedule {
    TierSchedule {
        thresholds: vec![env, 1_000, 5_000, 10_000, 25_000, 50_000, 100_000, 250_000],
        caps: vec![
            env,
            60_000_000,
            300_000_000,
            600_000_000,
            1_200_000_000,
            2_100_000_000,
            30_320_000_000,
            60_640_000_000,
        ],
    }
}

/// Every contract of the launchpad registered in one environment.
pub struct Launchpad {
    pub env: Env,
    pub owner: Address,
    pub sale: TokenSaleContractClient<'static>,
    pub sale_address: Address,
    pub vesting: VestingContractClient<'static>,
    pub vesting_address: Address,
    pub whitelist: WhitelistNftContractClient<'static>,
    pub payment: token::Client<'static>,
    pub payment_admin: token::StellarAssetClient<'static>,
    pub project_token: token::Client<'static>,
    pub project_admin: token::StellarAssetClient<'static>,
    pub short_pool: MockStakingPoolClient<'static>,
    pub long_pool: MockStakingPoolClient<'static>,
}

impl Launchpad {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|l| l.timestamp = SALE_START - 100);

        let owner = Address::generate(&env);

        let payment_id = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let project_id = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();

        let short_id = env.register_contract(None, MockStakingPool);
        let long_id = env.register_contract(None, MockStakingPool);

        let whitelist_id = env.register_contract(None, WhitelistNftContract);
        let whitelist = WhitelistNftContractClient::new(&env, &whitelist_id);
        whitelist.initialize(&owner);

        let sale_address = env.register_contract(None, TokenSaleContract);
        let vesting_address = env.register_contract(None, VestingContract);

        Self {
            sale: TokenSaleContractClient::new(&env, &sale_address),
            vesting: VestingContractClient::new(&env, &vesting_address),
            whitelist,
            payment: token::Client::new(&env, &payment_id),
            payment_admin: token::StellarAssetClient::new(&env, &payment_id),
            project_token: token::Client::new(&env, &project_id),
            project_admin: token::StellarAssetClient::new(&env, &project_id),
            short_pool: MockStakingPoolClient::new(&env, &short_id),
            long_pool: MockStakingPoolClient::new(&env, &long_id),
            sale_address,
            vesting_address,
            owner,
            env,
        }
    }

    pub fn sale_params(&self) -> SaleParams {
        SaleParams {
            payment_token: self.payment.address.clone(),
            short_pool: self.short_pool.address.clone(),
            long_pool: self.long_pool.address.clone(),
            whitelist_registry: self.whitelist.address.clone(),
            total_offered: TOTAL_OFFERED,
            start_time: SALE_START,
            duration: SALE_DURATION,
            short_tiers: short_tiers(&self.env),
            long_tiers: long_tiers(&self.env),
            nft_cap: NFT_CAP,
        }
    }

    pub fn create_sale(&self) -> u64 {
        self.sale.create_sale(&self.owner, &self.sale_params())
    }

    pub fn vesting_params(&self, sale_id: u64, total_vested: i128) -> VestingParams {
        VestingParams {
            sale_contract: self.sale_address.clone(),
            sale_id,
            token: self.project_token.address.clone(),
            total_vested,
            tge_fraction: TGE_FRACTION,
            vesting_start: VESTING_START,
            vesting_duration: VESTING_DURATION,
            claim_granularity: CLAIM_STEP,
        }
    }

    /// Mint project tokens to the owner and open a schedule over `sale_id`.
    pub fn create_schedule(&self, sale_id: u64, total_vested: i128) -> u64 {
        self.project_admin.mint(&self.owner, &total_vested);
        self.vesting
            .create_vesting_schedule(&self.owner, &self.vesting_params(sale_id, total_vested))
    }

    /// Participant with payment tokens, a stake in `pool` and an open
    /// allocation in `sale_id`.
    pub fn staker(&self, sale_id: u64, pool: LockPool, stake: i128, balance: i128) -> Address {
        let user = Address::generate(&self.env);
        self.payment_admin.mint(&user, &balance);
        match pool {
            LockPool::Short => self.short_pool.set_stake(&user, &stake),
            LockPool::Long => self.long_pool.set_stake(&user, &stake),
        }
        self.sale.create_participant_allocation(&sale_id, &user);
        user
    }

    /// A new NFT collection (a Stellar asset) with one token held by `holder`.
    pub fn nft_collection(&self, holder: &Address) -> Address {
        let asset = self
            .env
            .register_stellar_asset_contract_v2(Address::generate(&self.env))
            .address();
        token::StellarAssetClient::new(&self.env, &asset).mint(holder, &1);
        asset
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }
}

impl Default for Launchpad {
    fn default() -> Self {
        Self::new()
    }
}
