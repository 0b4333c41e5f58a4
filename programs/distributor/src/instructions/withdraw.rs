use anchor_lang::prelude::*;

use crate::clock::LogicalClock;
use crate::error::DistributorError;
use crate::ledger::AssetLedger;
use crate::state::{Distributor, Withdrawal};
use crate::utils::vesting::vested_amount;

impl Distributor {
    /// Pay out the currently unlocked share of `signer`'s entitlement.
    ///
    /// Single-shot: after one successful withdrawal the principal is settled,
    /// even if more of the schedule unlocks later. Returns the payout.
    pub fn withdraw<L, C>(&mut self, signer: &Pubkey, ledger: &mut L, clock: &C) -> Result<u64>
    where
        L: AssetLedger + ?Sized,
        C: LogicalClock + ?Sized,
    {
        let now = clock.now();
        require!(
            self.participations
                .get(signer)
                .is_some_and(|p| p.is_participated),
            DistributorError::NotParticipated
        );
        require!(
            !self.withdrawals.contains_key(signer),
            DistributorError::AlreadyWithdrawn
        );
        let schedule = self.vesting.as_ref().ok_or(DistributorError::NotReady)?;
        let distribution = self.distribution.ok_or(DistributorError::NotReady)?;

        let entitlement = self.distribution_amount(signer);
        let unlocked_bps = schedule.unlocked_bps(now);
        let payout = vested_amount(entitlement, unlocked_bps)?;
        require!(payout > 0, DistributorError::NothingToWithdraw);

        let released = distribution
            .released
            .checked_add(payout)
            .ok_or(DistributorError::MathOverflow)?;
        require!(
            released <= distribution.total_amount,
            DistributorError::ExceedsDistributionTotal
        );

        ledger.transfer(&distribution.asset, &self.address, signer, payout)?;

        if let Some(d) = self.distribution.as_mut() {
            d.released = released;
        }
        self.withdrawals.insert(
            *signer,
            Withdrawal {
                withdrawn: true,
                amount: payout,
                timestamp: now,
            },
        );

        msg!(
            "withdraw: {} received {} ({} bps of {})",
            signer,
            payout,
            unlocked_bps,
            entitlement
        );
        emit!(TokensWithdrawn {
            distributor: self.address,
            user: *signer,
            amount: payout,
            entitlement,
            unlocked_bps,
            released_total: released,
        });
        Ok(payout)
    }
}

#[event]
pub struct TokensWithdrawn {
    pub distributor: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub entitlement: u64,
    pub unlocked_bps: u64,
    pub released_total: u64,
}
