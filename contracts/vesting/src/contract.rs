use crate::errors::Error;
use crate::events;
use crate::interfaces::SaleLedgerClient;
use crate::schedule::{claimable_amount, entitled_amount};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Pro-rata vesting of sale tokens with TGE unlock"
);

#[contract]
pub struct VestingContract;

fn load_schedule(env: &Env, schedule_id: u64) -> Result<VestingSchedule, Error> {
    get_schedule(env, schedule_id).ok_or(Error::ScheduleNotFound)
}

fn validate_params(params: &VestingParams) -> Result<(), Error> {
    if params.total_vested <= 0 {
        return Err(Error::InvalidAmount);
    }
    if params.vesting_start == 0 {
        return Err(Error::InvalidStartTime);
    }
    if params.vesting_duration == 0 || params.claim_granularity == 0 {
        return Err(Error::InvalidDuration);
    }
    if params.claim_granularity > params.vesting_duration {
        return Err(Error::InvalidGranularity);
    }
    if params.tge_fraction > TGE_DENOMINATOR {
        return Err(Error::InvalidTgeFraction);
    }
    Ok(())
}

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

/// Participant's share of the schedule, from their contribution to the sale.
fn entitlement_of(env: &Env, schedule: &VestingSchedule, participant: &Address) -> Result<i128, Error> {
    let contributed = SaleLedgerClient::new(env, &schedule.sale_contract)
        .get_contribution(&schedule.sale_id, participant);
    entitled_amount(schedule.total_vested, contributed, schedule.sale_total)
}

#[contractimpl]
impl VestingContract {
    /// Create a schedule over a finished sale and fund it with
    /// `total_vested` tokens from `owner`, who must own the sale.
    pub fn create_vesting_schedule(
        env: Env,
        owner: Address,
        params: VestingParams,
    ) -> Result<u64, Error> {
        owner.require_auth();
        validate_params(&params)?;

        let ledger = SaleLedgerClient::new(&env, &params.sale_contract);
        let sale_owner = match ledger.try_get_sale_owner(&params.sale_id) {
            Ok(Ok(sale_owner)) => sale_owner,
            _ => return Err(Error::SaleNotFound),
        };
        if sale_owner != owner {
            return Err(Error::Unauthorized);
        }
        // Contributions must be final before the denominator is fixed.
        match ledger.try_get_end_time(&params.sale_id) {
            Ok(Ok(end_time)) if env.ledger().timestamp() >= end_time => {}
            Ok(Ok(_)) => return Err(Error::SaleNotEnded),
            _ => return Err(Error::SaleNotFound),
        }
        let sale_total = match ledger.try_get_total_raised(&params.sale_id) {
            Ok(Ok(raised)) => raised,
            _ => return Err(Error::SaleNotFound),
        };
        if sale_total <= 0 {
            return Err(Error::NothingRaised);
        }

        transfer(
            &env,
            &params.token,
            &owner,
            &env.current_contract_address(),
            params.total_vested,
        )?;

        let schedule_id = get_schedule_count(&env);
        let schedule = VestingSchedule {
            id: schedule_id,
            owner,
            sale_contract: params.sale_contract,
            sale_id: params.sale_id,
            token: params.token,
            total_vested: params.total_vested,
            tge_fraction: params.tge_fraction,
            vesting_start: params.vesting_start,
            vesting_duration: params.vesting_duration,
            claim_granularity: params.claim_granularity,
            sale_total,
            total_claimed: 0,
        };
        set_schedule(&env, &schedule);
        set_schedule_count(&env, schedule_id + 1);

        events::emit_schedule_created(&env, &schedule);
        Ok(schedule_id)
    }

    pub fn create_vesting_account(
        env: Env,
        schedule_id: u64,
        participant: Address,
    ) -> Result<(), Error> {
        participant.require_auth();
        load_schedule(&env, schedule_id)?;

        if has_account(&env, schedule_id, &participant) {
            return Err(Error::AlreadyExists);
        }
        set_account(
            &env,
            &VestingAccount {
                schedule_id,
                participant: participant.clone(),
                claimed_amount: 0,
            },
        );

        events::emit_account_created(&env, schedule_id, participant);
        Ok(())
    }

    /// Transfer everything vested and not yet claimed; returns the amount.
    pub fn claim(env: Env, schedule_id: u64, participant: Address) -> Result<i128, Error> {
        participant.require_auth();

        let mut schedule = load_schedule(&env, schedule_id)?;
        let mut account =
            get_account(&env, schedule_id, &participant).ok_or(Error::AccountNotFound)?;

        let entitled = entitlement_of(&env, &schedule, &participant)?;
        let claimable = claimable_amount(
            &schedule,
            entitled,
            account.claimed_amount,
            env.ledger().timestamp(),
        )?;
        if claimable <= 0 {
            return Err(Error::NothingToClaim);
        }

        let claimed = account
            .claimed_amount
            .checked_add(claimable)
            .ok_or(Error::ArithmeticOverflow)?;
        let total_claimed = schedule
            .total_claimed
            .checked_add(claimable)
            .ok_or(Error::ArithmeticOverflow)?;
        // The vault is shared by every schedule; pay out only this one's deposit.
        if total_claimed > schedule.total_vested {
            return Err(Error::InsufficientFunds);
        }

        transfer(
            &env,
            &schedule.token,
            &env.current_contract_address(),
            &participant,
            claimable,
        )?;

        account.claimed_amount = claimed;
        schedule.total_claimed = total_claimed;
        set_account(&env, &account);
        set_schedule(&env, &schedule);

        events::emit_claim(&env, schedule_id, participant, claimable, claimed);
        Ok(claimable)
    }

    // View functions
    pub fn get_schedule(env: Env, schedule_id: u64) -> Result<VestingSchedule, Error> {
        load_schedule(&env, schedule_id)
    }

    pub fn get_vesting_account(
        env: Env,
        schedule_id: u64,
        participant: Address,
    ) -> Option<VestingAccount> {
        get_account(&env, schedule_id, &participant)
    }

    pub fn schedule_count(env: Env) -> u64 {
        get_schedule_count(&env)
    }

    /// Total the participant will receive over the whole schedule.
    pub fn entitled_amount(env: Env, schedule_id: u64, participant: Address) -> Result<i128, Error> {
        let schedule = load_schedule(&env, schedule_id)?;
        entitlement_of(&env, &schedule, &participant)
    }

    /// What `claim` would transfer at the current ledger time.
    pub fn claimable(env: Env, schedule_id: u64, participant: Address) -> Result<i128, Error> {
        let schedule = load_schedule(&env, schedule_id)?;
        let claimed = get_account(&env, schedule_id, &participant)
            .map(|account| account.claimed_amount)
            .unwrap_or(0);
        let entitled = entitlement_of(&env, &schedule, &participant)?;
        claimable_amount(&schedule, entitled, claimed, env.ledger().timestamp())
    }
}
