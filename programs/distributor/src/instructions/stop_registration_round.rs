use anchor_lang::prelude::*;

use crate::state::distributor::guard_transition;
use crate::state::Distributor;

impl Distributor {
    /// Close registration before its end time. One-way.
    pub fn stop_registration_round(&mut self, signer: &Pubkey) -> Result<()> {
        guard_transition(
            signer,
            Some(self.admin),
            self.registration_round.is_some(),
            self.registration_round.is_some_and(|r| r.stopped),
        )?;
        if let Some(round) = self.registration_round.as_mut() {
            round.stopped = true;
        }

        emit!(RegistrationRoundStopped {
            distributor: self.address,
            admin: self.admin,
        });
        Ok(())
    }
}

#[event]
pub struct RegistrationRoundStopped {
    pub distributor: Pubkey,
    pub admin: Pubkey,
}
