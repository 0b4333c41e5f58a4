use anchor_lang::prelude::*;

use crate::state::distributor::guard_transition;
use crate::state::{DistributionRound, Distributor};

impl Distributor {
    /// Requires the distribution to be created first.
    pub fn set_distribution_round(
        &mut self,
        signer: &Pubkey,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        guard_transition(
            signer,
            Some(self.admin),
            self.distribution.is_some(),
            self.distribution_round.is_some(),
        )?;
        let round = DistributionRound::new(start_time, end_time)?;
        self.distribution_round = Some(round);

        emit!(DistributionRoundSet {
            distributor: self.address,
            admin: self.admin,
            start_time,
            end_time,
        });
        Ok(())
    }
}

#[event]
pub struct DistributionRoundSet {
    pub distributor: Pubkey,
    pub admin: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
}
