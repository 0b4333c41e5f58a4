use anchor_lang::prelude::*;

use crate::clock::LogicalClock;
use crate::error::DistributorError;
use crate::state::Distributor;
use crate::utils::vesting::vested_amount;

impl Distributor {
    /// Read-only view of what `principal` could withdraw at the clock's time.
    pub fn vesting_quote<C: LogicalClock + ?Sized>(
        &self,
        principal: &Pubkey,
        clock: &C,
    ) -> Result<VestingQuote> {
        let now = clock.now();
        let schedule = self.vesting.as_ref().ok_or(DistributorError::NotReady)?;

        let entitlement = self.distribution_amount(principal);
        let unlocked_bps = schedule.unlocked_bps(now);
        let participated = self
            .participations
            .get(principal)
            .is_some_and(|p| p.is_participated);
        let withdrawn = self.withdrawals.contains_key(principal);

        let claimable = if participated && !withdrawn {
            vested_amount(entitlement, unlocked_bps)?
        } else {
            0
        };

        Ok(VestingQuote {
            distributor: self.address,
            principal: *principal,
            timestamp: now,
            unlocked_bps,
            entitlement,
            claimable,
            participated,
            withdrawn,
        })
    }

    /// Same as [`Distributor::vesting_quote`], also emitted as an event.
    pub fn emit_vesting_quote<C: LogicalClock + ?Sized>(
        &self,
        principal: &Pubkey,
        clock: &C,
    ) -> Result<VestingQuote> {
        let quote = self.vesting_quote(principal, clock)?;
        emit!(quote.clone());
        Ok(quote)
    }
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingQuote {
    pub distributor: Pubkey,
    pub principal: Pubkey,
    pub timestamp: i64,
    pub unlocked_bps: u64,
    pub entitlement: u64,
    pub claimable: u64,
    pub participated: bool,
    pub withdrawn: bool,
}

#[cfg(test)]
mod tests {
    use crate::error::DistributorError;
    use crate::test_utils::*;

    #[test]
    fn quote_tracks_unlocks_until_withdrawal() {
        let mut fx = Fixture::ready_to_withdraw(50 * UNIT);
        let user = fx.user;

        let quote = fx.distributor().vesting_quote(&user, &fx.clock).unwrap();
        assert_eq!(quote.unlocked_bps, 0);
        assert_eq!(quote.claimable, 0);
        assert!(quote.participated);

        fx.clock.sleep_days(2);
        let quote = fx.distributor().emit_vesting_quote(&user, &fx.clock).unwrap();
        assert_eq!(quote.unlocked_bps, 5_000);
        assert_eq!(quote.claimable, 25 * UNIT);
        assert_eq!(quote.entitlement, 50 * UNIT);

        let paid = fx.withdraw(user).unwrap();
        assert_eq!(paid, quote.claimable);

        let quote = fx.distributor().vesting_quote(&user, &fx.clock).unwrap();
        assert!(quote.withdrawn);
        assert_eq!(quote.claimable, 0);
    }

    #[test]
    fn quote_for_non_participant_is_zero() {
        let mut fx = Fixture::ready_to_withdraw(50 * UNIT);
        let other = fx.other;
        fx.set_entitlement(other, 10 * UNIT);
        fx.clock.sleep_days(4);

        let quote = fx.distributor().vesting_quote(&other, &fx.clock).unwrap();
        assert!(!quote.participated);
        assert_eq!(quote.unlocked_bps, 10_000);
        assert_eq!(quote.claimable, 0);
    }

    #[test]
    fn quote_requires_vesting() {
        let fx = Fixture::new();
        assert_error(
            fx.distributor().vesting_quote(&fx.user, &fx.clock),
            DistributorError::NotReady,
        );
    }
}
