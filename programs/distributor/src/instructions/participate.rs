use anchor_lang::prelude::*;

use crate::clock::LogicalClock;
use crate::error::DistributorError;
use crate::state::{Distributor, Participation};

impl Distributor {
    pub fn participate<C: LogicalClock + ?Sized>(
        &mut self,
        signer: &Pubkey,
        clock: &C,
    ) -> Result<()> {
        let now = clock.now();
        require!(
            self.distribution_round.is_some_and(|r| r.is_open(now)),
            DistributorError::NotOpen
        );
        require!(
            self.registrations
                .get(signer)
                .is_some_and(|r| r.is_registered),
            DistributorError::NotRegistered
        );
        require!(
            !self.participations.contains_key(signer),
            DistributorError::AlreadyParticipated
        );
        require!(
            self.distribution
                .is_some_and(|d| d.has_capacity(self.participant_count)),
            DistributorError::CapacityExceeded
        );

        let participant_count = self
            .participant_count
            .checked_add(1)
            .ok_or(DistributorError::MathOverflow)?;
        self.participations.insert(
            *signer,
            Participation {
                amount: 0,
                is_participated: true,
                timestamp: now,
            },
        );
        self.participant_count = participant_count;

        emit!(UserParticipated {
            distributor: self.address,
            user: *signer,
            timestamp: now,
            participant_count,
        });
        Ok(())
    }
}

#[event]
pub struct UserParticipated {
    pub distributor: Pubkey,
    pub user: Pubkey,
    pub timestamp: i64,
    pub participant_count: u32,
}
