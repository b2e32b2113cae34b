use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::VestingSchedule;

const VEST: Symbol = symbol_short!("VEST");

#[derive(Clone)]
#[contracttype]
pub struct ScheduleCreatedEvent {
    pub schedule_id: u64,
    pub sale_id: u64,
    pub token: Address,
    pub total_vested: i128,
    pub sale_total: i128,
    pub vesting_start: u64,
    pub vesting_end: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct ClaimEvent {
    pub schedule_id: u64,
    pub participant: Address,
    pub amount: i128,
    /// Participant's cumulative claimed amount after this claim.
    pub claimed_amount: i128,
    pub timestamp: u64,
}

pub fn emit_schedule_created(env: &Env, schedule: &VestingSchedule) {
    let event = ScheduleCreatedEvent {
        schedule_id: schedule.id,
        sale_id: schedule.sale_id,
        token: schedule.token.clone(),
        total_vested: schedule.total_vested,
        sale_total: schedule.sale_total,
        vesting_start: schedule.vesting_start,
        vesting_end: schedule
            .vesting_start
            .saturating_add(schedule.vesting_duration),
    };
    env.events().publish((VEST, symbol_short!("created")), event);
}

pub fn emit_account_created(env: &Env, schedule_id: u64, participant: Address) {
    env.events()
        .publish((VEST, symbol_short!("account")), (schedule_id, participant));
}

pub fn emit_claim(env: &Env, schedule_id: u64, participant: Address, amount: i128, claimed_amount: i128) {
    let event = ClaimEvent {
        schedule_id,
        participant,
        amount,
        claimed_amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((VEST, symbol_short!("claim")), event);
}
