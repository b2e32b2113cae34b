use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn get_schedule_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ScheduleCount)
        .unwrap_or(0)
}

pub fn set_schedule_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ScheduleCount, &count);
}

pub fn get_schedule(env: &Env, schedule_id: u64) -> Option<VestingSchedule> {
    env.storage()
        .persistent()
        .get(&DataKey::Schedule(schedule_id))
}

pub fn set_schedule(env: &Env, schedule: &VestingSchedule) {
    env.storage()
        .persistent()
        .set(&DataKey::Schedule(schedule.id), schedule);
}

pub fn has_account(env: &Env, schedule_id: u64, participant: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Account(schedule_id, participant.clone()))
}

pub fn get_account(env: &Env, schedule_id: u64, participant: &Address) -> Option<VestingAccount> {
    env.storage()
        .persistent()
        .get(&DataKey::Account(schedule_id, participant.clone()))
}

pub fn set_account(env: &Env, account: &VestingAccount) {
    env.storage().persistent().set(
        &DataKey::Account(account.schedule_id, account.participant.clone()),
        account,
    );
}
