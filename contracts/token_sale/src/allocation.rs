//! Admission arithmetic for the sale ledger and the per-identity caps.
//!
//! Pure functions of the stored records and the inputs; nothing here writes
//! storage or moves funds.

use crate::errors::Error;
use crate::types::{Sale, TierSchedule, TIER_COUNT};

/// Checks a deposit against the sale window and the offering cap.
///
/// Returns the `total_raised` the sale would have after the deposit; the
/// caller commits it together with the allocation counters.
pub fn admit_deposit(sale: &Sale, now: u64, amount: i128) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if now < sale.start_time {
        return Err(Error::SaleNotStarted);
    }
    if now >= sale.end_time() {
        return Err(Error::SaleEnded);
    }

    let raised = sale
        .total_raised
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if raised > sale.total_offered {
        return Err(Error::ExceedsOffering);
    }
    Ok(raised)
}

/// Checks `amount` against a cap of which `used` is already consumed and
/// returns the new consumed value.
pub fn admit_within_cap(used: i128, cap: i128, amount: i128) -> Result<i128, Error> {
    let next = used.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
    if next > cap {
        return Err(Error::InsufficientAllocation);
    }
    Ok(next)
}

/// Highest tier whose threshold the stake reaches, `None` below the first one.
pub fn tier_index(tiers: &TierSchedule, staked: i128) -> Option<u32> {
    let mut tier = None;
    for (index, threshold) in tiers.thresholds.iter().enumerate() {
        if staked < threshold {
            break;
        }
        tier = Some(index as u32);
    }
    tier
}

/// Allocation cap for a stake, or `NotStaked` below the lowest bracket.
pub fn tier_cap(tiers: &TierSchedule, staked: i128) -> Result<i128, Error> {
    let tier = tier_index(tiers, staked).ok_or(Error::NotStaked)?;
    tiers.caps.get(tier).ok_or(Error::InvalidTierSchedule)
}

pub fn validate_tiers(tiers: &TierSchedule) -> Result<(), Error> {
    if tiers.thresholds.len() != TIER_COUNT || tiers.caps.len() != TIER_COUNT {
        return Err(Error::InvalidTierSchedule);
    }

    let mut previous: Option<i128> = None;
    for threshold in tiers.thresholds.iter() {
        if threshold < 0 {
            return Err(Error::InvalidTierSchedule);
        }
        if let Some(prev) = previous {
            if threshold <= prev {
                return Err(Error::InvalidTierSchedule);
            }
        }
        previous = Some(threshold);
    }

    if tiers.caps.iter().any(|cap| cap < 0) {
        return Err(Error::InvalidTierSchedule);
    }
    Ok(())
}
