use anchor_lang::prelude::*;

use crate::error::DistributorError;

/// Registration window. Open while `start_time <= now < end_time` and not stopped.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrationRound {
    pub start_time: i64,
    pub end_time: i64,
    /// Set by the admin to close registration before `end_time`.
    pub stopped: bool,
}

impl RegistrationRound {
    pub fn new(start_time: i64, end_time: i64) -> Result<Self> {
        require!(start_time < end_time, DistributorError::InvalidRange);
        Ok(Self {
            start_time,
            end_time,
            stopped: false,
        })
    }

    pub fn is_open(&self, now: i64) -> bool {
        !self.stopped && within(self.start_time, self.end_time, now)
    }
}

/// Participation window. Open while `start_time <= now < end_time`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionRound {
    pub start_time: i64,
    pub end_time: i64,
}

impl DistributionRound {
    pub fn new(start_time: i64, end_time: i64) -> Result<Self> {
        require!(start_time < end_time, DistributorError::InvalidRange);
        Ok(Self {
            start_time,
            end_time,
        })
    }

    pub fn is_open(&self, now: i64) -> bool {
        within(self.start_time, self.end_time, now)
    }
}

fn within(start_time: i64, end_time: i64, now: i64) -> bool {
    start_time <= now && now < end_time
}
