use anchor_lang::prelude::*;

use crate::error::DistributorError;
use crate::ledger::AssetLedger;
use crate::state::distributor::guard_transition;
use crate::state::Distributor;

impl Distributor {
    /// Pull `total_amount` from the distribution owner into this instance's escrow.
    ///
    /// The owner must have approved this instance's address beforehand. Ledger
    /// failures propagate unchanged and leave `deposited` unset.
    pub fn deposit_tokens<L: AssetLedger + ?Sized>(
        &mut self,
        signer: &Pubkey,
        ledger: &mut L,
    ) -> Result<()> {
        guard_transition(
            signer,
            self.distribution.map(|d| d.owner),
            true,
            self.distribution.is_some_and(|d| d.deposited),
        )?;

        let vault = self.address;
        let distribution = self
            .distribution
            .as_mut()
            .ok_or(DistributorError::NotReady)?;

        ledger.transfer_from(
            &distribution.asset,
            &vault,
            &distribution.owner,
            &vault,
            distribution.total_amount,
        )?;
        distribution.deposited = true;

        emit!(TokensDeposited {
            distributor: vault,
            owner: distribution.owner,
            asset: distribution.asset,
            amount: distribution.total_amount,
            vault_balance: ledger.balance_of(&distribution.asset, &vault),
        });
        Ok(())
    }
}

#[event]
pub struct TokensDeposited {
    pub distributor: Pubkey,
    pub owner: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
