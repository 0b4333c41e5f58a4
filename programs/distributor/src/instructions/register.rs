use anchor_lang::prelude::*;

use crate::clock::LogicalClock;
use crate::error::DistributorError;
use crate::state::{Distributor, Registration};

impl Distributor {
    pub fn register<C: LogicalClock + ?Sized>(&mut self, signer: &Pubkey, clock: &C) -> Result<()> {
        let now = clock.now();
        require!(
            self.registration_round.is_some_and(|r| r.is_open(now)),
            DistributorError::NotOpen
        );
        require!(
            !self.registrations.contains_key(signer),
            DistributorError::AlreadyRegistered
        );

        self.registrations.insert(
            *signer,
            Registration {
                timestamp: now,
                is_registered: true,
            },
        );

        emit!(UserRegistered {
            distributor: self.address,
            user: *signer,
            timestamp: now,
        });
        Ok(())
    }
}

#[event]
pub struct UserRegistered {
    pub distributor: Pubkey,
    pub user: Pubkey,
    pub timestamp: i64,
}
