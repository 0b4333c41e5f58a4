use anchor_lang::prelude::*;

use crate::state::distributor::guard_transition;
use crate::state::{Distributor, RegistrationRound};

impl Distributor {
    pub fn set_registration_round(
        &mut self,
        signer: &Pubkey,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        guard_transition(
            signer,
            Some(self.admin),
            true,
            self.registration_round.is_some(),
        )?;
        let round = RegistrationRound::new(start_time, end_time)?;
        self.registration_round = Some(round);

        emit!(RegistrationRoundSet {
            distributor: self.address,
            admin: self.admin,
            start_time,
            end_time,
        });
        Ok(())
    }
}

#[event]
pub struct RegistrationRoundSet {
    pub distributor: Pubkey,
    pub admin: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
}
