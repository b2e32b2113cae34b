use crate::allocation::{admit_deposit, admit_within_cap, tier_cap, validate_tiers};
use crate::errors::Error;
use crate::events::{self, DepositPath};
use crate::interfaces::{StakingPoolClient, WhitelistRegistryClient};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Tiered allocation-capped token sale"
);

#[contract]
pub struct TokenSaleContract;

fn load_sale(env: &Env, sale_id: u64) -> Result<Sale, Error> {
    get_sale(env, sale_id).ok_or(Error::SaleNotFound)
}

fn load_allocation(
    env: &Env,
    sale_id: u64,
    participant: &Address,
) -> Result<ParticipantAllocation, Error> {
    get_allocation(env, sale_id, participant).ok_or(Error::AllocationNotFound)
}

/// Moves `amount` of `token` and fails with `InsufficientFunds` instead of
/// trapping inside the token contract when the source is short.
fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    if client.balance(from) < amount {
        return Err(Error::InsufficientFunds);
    }
    client.transfer(from, to, &amount);
    Ok(())
}

fn collect_deposit(env: &Env, sale: &Sale, participant: &Address, amount: i128) -> Result<(), Error> {
    transfer(
        env,
        &sale.payment_token,
        participant,
        &env.current_contract_address(),
        amount,
    )
}

#[contractimpl]
impl TokenSaleContract {
    /// Create a sale owned by `owner`; returns its id.
    pub fn create_sale(env: Env, owner: Address, params: SaleParams) -> Result<u64, Error> {
        owner.require_auth();

        if params.total_offered <= 0 {
            return Err(Error::InvalidAmount);
        }
        if params.start_time < get_ledger_timestamp(&env) {
            return Err(Error::InvalidStartTime);
        }
        if params.duration == 0 || params.start_time.checked_add(params.duration).is_none() {
            return Err(Error::InvalidDuration);
        }
        validate_tiers(&params.short_tiers)?;
        validate_tiers(&params.long_tiers)?;
        if params.nft_cap < 0 {
            return Err(Error::InvalidTierSchedule);
        }

        let sale_id = get_sale_count(&env);
        let sale = Sale {
            id: sale_id,
            owner,
            payment_token: params.payment_token,
            short_pool: params.short_pool,
            long_pool: params.long_pool,
            whitelist_registry: params.whitelist_registry,
            total_offered: params.total_offered,
            total_raised: 0,
            total_withdrawn: 0,
            start_time: params.start_time,
            duration: params.duration,
            short_tiers: params.short_tiers,
            long_tiers: params.long_tiers,
            nft_cap: params.nft_cap,
        };

        set_sale(&env, &sale);
        set_sale_count(&env, sale_id + 1);

        events::emit_sale_created(&env, &sale);
        Ok(sale_id)
    }

    /// Open the allocation record a participant deposits against.
    pub fn create_participant_allocation(
        env: Env,
        sale_id: u64,
        participant: Address,
    ) -> Result<(), Error> {
        participant.require_auth();
        load_sale(&env, sale_id)?;

        if has_allocation(&env, sale_id, &participant) {
            return Err(Error::AlreadyExists);
        }
        set_allocation(&env, &ParticipantAllocation::new(sale_id, participant.clone()));

        events::emit_allocation_created(&env, sale_id, participant, false);
        Ok(())
    }

    /// Open the allocation record of an NFT; one per asset per sale.
    pub fn create_nft_allocation(env: Env, sale_id: u64, asset: Address) -> Result<(), Error> {
        load_sale(&env, sale_id)?;

        if has_nft_allocation(&env, sale_id, &asset) {
            return Err(Error::AlreadyExists);
        }
        set_nft_allocation(
            &env,
            &NftAllocation {
                sale_id,
                asset: asset.clone(),
                used_amount: 0,
            },
        );

        events::emit_allocation_created(&env, sale_id, asset, true);
        Ok(())
    }

    /// Grant (or replace) a direct allocation for `participant`.
    pub fn grant_allocation(
        env: Env,
        sale_id: u64,
        participant: Address,
        allocation: i128,
    ) -> Result<(), Error> {
        let sale = load_sale(&env, sale_id)?;
        sale.owner.require_auth();

        if allocation <= 0 {
            return Err(Error::InvalidAmount);
        }
        set_grant(
            &env,
            &AllocationGrant {
                sale_id,
                participant: participant.clone(),
                allocation,
            },
        );

        events::emit_grant(&env, sale_id, participant, allocation);
        Ok(())
    }

    /// Zero out a granted allocation; what was already deposited stays.
    pub fn revoke_allocation(env: Env, sale_id: u64, participant: Address) -> Result<(), Error> {
        let sale = load_sale(&env, sale_id)?;
        sale.owner.require_auth();

        let mut grant = get_grant(&env, sale_id, &participant).ok_or(Error::AllocationNotFound)?;
        grant.allocation = 0;
        set_grant(&env, &grant);

        events::emit_grant(&env, sale_id, participant, 0);
        Ok(())
    }

    /// Deposit against the tier cap of the participant's stake in `pool`.
    pub fn deposit_with_staking(
        env: Env,
        sale_id: u64,
        participant: Address,
        pool: LockPool,
        amount: i128,
    ) -> Result<(), Error> {
        participant.require_auth();

        let mut sale = load_sale(&env, sale_id)?;
        let mut allocation = load_allocation(&env, sale_id, &participant)?;

        let raised = admit_deposit(&sale, get_ledger_timestamp(&env), amount)?;

        let staked = StakingPoolClient::new(&env, sale.pool_address(pool)).staked_amount(&participant);
        let cap = tier_cap(sale.tiers(pool), staked)?;
        let used = admit_within_cap(allocation.used_in(pool), cap, amount)?;
        let paid = allocation
            .paid_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        collect_deposit(&env, &sale, &participant, amount)?;

        sale.total_raised = raised;
        allocation.set_used_in(pool, used);
        allocation.paid_amount = paid;
        set_sale(&env, &sale);
        set_allocation(&env, &allocation);

        events::emit_deposit(&env, &sale, participant, DepositPath::from(pool), amount);
        Ok(())
    }

    /// Deposit against the flat cap of a whitelisted NFT the participant holds.
    pub fn deposit_with_nft(
        env: Env,
        sale_id: u64,
        participant: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        participant.require_auth();

        let mut sale = load_sale(&env, sale_id)?;
        let mut allocation = load_allocation(&env, sale_id, &participant)?;
        let mut nft = get_nft_allocation(&env, sale_id, &asset).ok_or(Error::AllocationNotFound)?;

        let raised = admit_deposit(&sale, get_ledger_timestamp(&env), amount)?;

        if token::Client::new(&env, &asset).balance(&participant) <= 0 {
            return Err(Error::NotNftOwner);
        }
        if !WhitelistRegistryClient::new(&env, &sale.whitelist_registry).is_whitelisted(&asset) {
            return Err(Error::NotWhitelisted);
        }
        let used = admit_within_cap(nft.used_amount, sale.nft_cap, amount)?;
        let paid = allocation
            .paid_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        collect_deposit(&env, &sale, &participant, amount)?;

        sale.total_raised = raised;
        nft.used_amount = used;
        allocation.paid_amount = paid;
        set_sale(&env, &sale);
        set_nft_allocation(&env, &nft);
        set_allocation(&env, &allocation);

        events::emit_deposit(&env, &sale, participant, DepositPath::Nft, amount);
        Ok(())
    }

    /// Deposit against an allocation granted by the sale owner.
    pub fn deposit_with_grant(
        env: Env,
        sale_id: u64,
        participant: Address,
        amount: i128,
    ) -> Result<(), Error> {
        participant.require_auth();

        let mut sale = load_sale(&env, sale_id)?;
        let mut allocation = load_allocation(&env, sale_id, &participant)?;

        let raised = admit_deposit(&sale, get_ledger_timestamp(&env), amount)?;

        let granted = get_grant(&env, sale_id, &participant)
            .map(|grant| grant.allocation)
            .unwrap_or(0);
        let used = admit_within_cap(allocation.used_grant, granted, amount)?;
        let paid = allocation
            .paid_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        collect_deposit(&env, &sale, &participant, amount)?;

        sale.total_raised = raised;
        allocation.used_grant = used;
        allocation.paid_amount = paid;
        set_sale(&env, &sale);
        set_allocation(&env, &allocation);

        events::emit_deposit(&env, &sale, participant, DepositPath::Grant, amount);
        Ok(())
    }

    /// Move raised funds out of the sale vault.
    pub fn withdraw(
        env: Env,
        sale_id: u64,
        recipient: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let mut sale = load_sale(&env, sale_id)?;
        sale.owner.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let withdrawn = sale
            .total_withdrawn
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if withdrawn > sale.total_raised {
            return Err(Error::InsufficientRaised);
        }

        transfer(
            &env,
            &sale.payment_token,
            &env.current_contract_address(),
            &recipient,
            amount,
        )?;

        sale.total_withdrawn = withdrawn;
        set_sale(&env, &sale);

        events::emit_withdraw(&env, &sale, recipient, amount);
        Ok(())
    }

    // View functions
    pub fn get_sale(env: Env, sale_id: u64) -> Result<Sale, Error> {
        load_sale(&env, sale_id)
    }

    pub fn get_sale_owner(env: Env, sale_id: u64) -> Result<Address, Error> {
        Ok(load_sale(&env, sale_id)?.owner)
    }

    pub fn get_total_raised(env: Env, sale_id: u64) -> Result<i128, Error> {
        Ok(load_sale(&env, sale_id)?.total_raised)
    }

    /// First instant at which deposits are refused.
    pub fn get_end_time(env: Env, sale_id: u64) -> Result<u64, Error> {
        Ok(load_sale(&env, sale_id)?.end_time())
    }

    pub fn sale_count(env: Env) -> u64 {
        get_sale_count(&env)
    }

    /// Total paid in by `participant` across every path; zero without a record.
    pub fn get_contribution(env: Env, sale_id: u64, participant: Address) -> i128 {
        get_allocation(&env, sale_id, &participant)
            .map(|allocation| allocation.paid_amount)
            .unwrap_or(0)
    }

    pub fn get_allocation(
        env: Env,
        sale_id: u64,
        participant: Address,
    ) -> Option<ParticipantAllocation> {
        get_allocation(&env, sale_id, &participant)
    }

    pub fn get_nft_allocation(env: Env, sale_id: u64, asset: Address) -> Option<NftAllocation> {
        get_nft_allocation(&env, sale_id, &asset)
    }

    pub fn get_grant(env: Env, sale_id: u64, participant: Address) -> Option<AllocationGrant> {
        get_grant(&env, sale_id, &participant)
    }

    /// Cap the participant's current stake in `pool` entitles them to.
    pub fn staking_cap(
        env: Env,
        sale_id: u64,
        participant: Address,
        pool: LockPool,
    ) -> Result<i128, Error> {
        let sale = load_sale(&env, sale_id)?;
        let staked = StakingPoolClient::new(&env, sale.pool_address(pool)).staked_amount(&participant);
        tier_cap(sale.tiers(pool), staked)
    }
}
