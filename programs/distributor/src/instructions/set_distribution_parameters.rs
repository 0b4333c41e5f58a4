use anchor_lang::prelude::*;

use crate::state::distributor::guard_transition;
use crate::state::{Distribution, Distributor};

impl Distributor {
    /// Create the distribution. `participant_cap == UNCAPPED` disables the cap.
    pub fn set_distribution_parameters(
        &mut self,
        signer: &Pubkey,
        total_amount: u64,
        participant_cap: u32,
        owner: Pubkey,
        asset: Pubkey,
    ) -> Result<()> {
        guard_transition(signer, Some(self.admin), true, self.distribution.is_some())?;
        let distribution = Distribution::new(total_amount, participant_cap, owner, asset)?;
        self.distribution = Some(distribution);

        emit!(DistributionParametersSet {
            distributor: self.address,
            admin: self.admin,
            total_amount,
            participant_cap,
            owner,
            asset,
        });
        Ok(())
    }
}

#[event]
pub struct DistributionParametersSet {
    pub distributor: Pubkey,
    pub admin: Pubkey,
    pub total_amount: u64,
    pub participant_cap: u32,
    pub owner: Pubkey,
    pub asset: Pubkey,
}
