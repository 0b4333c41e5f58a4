//! Percentage vesting schedule (basis points) and payout math.
//!
//! - portions unlock at strictly increasing times
//! - percents sum to exactly `BPS_DENOMINATOR`
//! - unlocked_bps(now) = sum of percents whose unlock_time <= now (inclusive)
//! - payout = floor(entitlement * unlocked_bps / BPS_DENOMINATOR)

use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::constants::{BPS_DENOMINATOR, MAX_VESTING_PORTIONS};
use crate::error::DistributorError;

/// One unlock step of a schedule.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct VestingPortion {
    pub unlock_time: i64,
    pub percent_bps: u64,
}

/// Validated, immutable vesting schedule. Only constructible through [`VestingSchedule::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    portions: Vec<VestingPortion>,
}

impl VestingSchedule {
    /// Validate and build a schedule. Malformed input is rejected as a whole.
    pub fn new(unlock_times: &[i64], percents_bps: &[u64]) -> Result<Self> {
        require!(
            unlock_times.len() == percents_bps.len(),
            DistributorError::LengthMismatch
        );
        require!(
            unlock_times.len() <= MAX_VESTING_PORTIONS,
            DistributorError::TooManyPortions
        );
        require!(
            unlock_times.windows(2).all(|w| w[1] > w[0]),
            DistributorError::OutOfOrder
        );

        // Overflowing sums can never equal the denominator.
        let total = percents_bps
            .iter()
            .try_fold(0u64, |acc, p| acc.checked_add(*p));
        require!(
            total == Some(BPS_DENOMINATOR),
            DistributorError::PrecisionError
        );

        let portions = unlock_times
            .iter()
            .zip(percents_bps)
            .map(|(&unlock_time, &percent_bps)| VestingPortion {
                unlock_time,
                percent_bps,
            })
            .collect();
        Ok(Self { portions })
    }

    pub fn portions(&self) -> &[VestingPortion] {
        &self.portions
    }

    pub fn len(&self) -> usize {
        self.portions.len()
    }

    /// Always false for a validated schedule.
    pub fn is_empty(&self) -> bool {
        self.portions.is_empty()
    }

    pub fn unlock_time(&self, index: usize) -> Option<i64> {
        self.portions.get(index).map(|p| p.unlock_time)
    }

    pub fn percent_at(&self, unlock_time: i64) -> Option<u64> {
        self.portions
            .iter()
            .find(|p| p.unlock_time == unlock_time)
            .map(|p| p.percent_bps)
    }

    /// Time at which the whole entitlement is unlocked.
    pub fn final_unlock_time(&self) -> Option<i64> {
        self.portions.last().map(|p| p.unlock_time)
    }

    /// Cumulative unlocked percent at `now`, inclusive at unlock boundaries.
    pub fn unlocked_bps(&self, now: i64) -> u64 {
        self.portions
            .iter()
            .take_while(|p| p.unlock_time <= now)
            .map(|p| p.percent_bps)
            .sum()
    }

    /// blake3 digest over the raw portion table.
    pub fn fingerprint(&self) -> [u8; 32] {
        let bytes: &[u8] = bytemuck::cast_slice(&self.portions);
        *blake3::hash(bytes).as_bytes()
    }
}

/// Amount of `entitlement` unlocked at `unlocked_bps`, rounded down.
pub fn vested_amount(entitlement: u64, unlocked_bps: u64) -> Result<u64> {
    let unlocked_bps = unlocked_bps.min(BPS_DENOMINATOR);
    let v = (entitlement as u128)
        .checked_mul(unlocked_bps as u128)
        .ok_or(DistributorError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    Ok(u64::try_from(v).map_err(|_| DistributorError::MathOverflow)?)
}
