use anchor_lang::prelude::*;

use crate::error::DistributorError;
use crate::state::Distributor;

impl Distributor {
    /// Assign `principal`'s total entitlement. Overwrites any previous value.
    pub fn set_address_distribution_amount(
        &mut self,
        signer: &Pubkey,
        principal: Pubkey,
        amount: u64,
    ) -> Result<()> {
        require_keys_eq!(*signer, self.admin, DistributorError::Unauthorized);

        let previous = self
            .distribution_amounts
            .insert(principal, amount)
            .unwrap_or(0);

        emit!(DistributionAmountSet {
            distributor: self.address,
            principal,
            previous,
            amount,
        });
        Ok(())
    }
}

#[event]
pub struct DistributionAmountSet {
    pub distributor: Pubkey,
    pub principal: Pubkey,
    pub previous: u64,
    pub amount: u64,
}
