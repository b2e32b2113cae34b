//! Release arithmetic. All divisions truncate; every product is checked.

use crate::errors::Error;
use crate::types::{VestingSchedule, TGE_DENOMINATOR};

/// Share of `total_vested` owed to a participant who paid `contributed` out of
/// `sale_total`, never more than `total_vested`.
pub fn entitled_amount(total_vested: i128, contributed: i128, sale_total: i128) -> Result<i128, Error> {
    if sale_total <= 0 || contributed <= 0 {
        return Ok(0);
    }
    let product = total_vested
        .checked_mul(contributed)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok((product / sale_total).min(total_vested))
}

/// Portion of `entitled` unlocked at `vesting_start`.
pub fn tge_amount(entitled: i128, tge_fraction: u32) -> Result<i128, Error> {
    let product = entitled
        .checked_mul(tge_fraction as i128)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(product / TGE_DENOMINATOR as i128)
}

/// Seconds of the linear window that count as released at `now`: whole
/// claim steps only, never past `vesting_duration`.
pub fn unlocked_time(schedule: &VestingSchedule, now: u64) -> u64 {
    let elapsed = now.saturating_sub(schedule.vesting_start);
    let stepped = elapsed / schedule.claim_granularity * schedule.claim_granularity;
    stepped.min(schedule.vesting_duration)
}

/// Amount of `entitled` vested by `now`, TGE share included.
pub fn vested_to_date(schedule: &VestingSchedule, entitled: i128, now: u64) -> Result<i128, Error> {
    if now < schedule.vesting_start {
        return Ok(0);
    }

    let tge = tge_amount(entitled, schedule.tge_fraction)?;
    let released = (entitled - tge)
        .checked_mul(unlocked_time(schedule, now) as i128)
        .ok_or(Error::ArithmeticOverflow)?
        / schedule.vesting_duration as i128;

    Ok((tge + released).min(entitled))
}

/// What a participant with `claimed` already withdrawn may take at `now`.
pub fn claimable_amount(
    schedule: &VestingSchedule,
    entitled: i128,
    claimed: i128,
    now: u64,
) -> Result<i128, Error> {
    let vested = vested_to_date(schedule, entitled, now)?;
    Ok((vested - claimed).max(0))
}
