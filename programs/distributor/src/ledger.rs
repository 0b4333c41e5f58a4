//! Fungible-asset ledger the engine pulls deposits from and pays withdrawals to.

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::error::DistributorError;

/// Allowance-based fungible-asset store, keyed by asset id and holder.
///
/// Implementations must be all-or-nothing: a failed call leaves every
/// balance and allowance untouched.
pub trait AssetLedger {
    fn balance_of(&self, asset: &Pubkey, holder: &Pubkey) -> u64;

    fn allowance(&self, asset: &Pubkey, owner: &Pubkey, spender: &Pubkey) -> u64;

    /// Let `spender` move up to `amount` of `owner`'s funds (overwrites).
    fn approve(&mut self, asset: &Pubkey, owner: &Pubkey, spender: &Pubkey, amount: u64)
        -> Result<()>;

    fn transfer(&mut self, asset: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;

    /// Move `amount` from `owner` to `to`, consuming `spender`'s allowance.
    fn transfer_from(
        &mut self,
        asset: &Pubkey,
        spender: &Pubkey,
        owner: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<()>;
}

/// In-process ledger used by orchestration and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    balances: BTreeMap<(Pubkey, Pubkey), u64>,
    allowances: BTreeMap<(Pubkey, Pubkey, Pubkey), u64>,
    supply: BTreeMap<Pubkey, u64>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `amount` new units of `asset` in `to`'s balance.
    pub fn mint(&mut self, asset: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let supply = self
            .total_supply(asset)
            .checked_add(amount)
            .ok_or(DistributorError::MathOverflow)?;
        let balance = self
            .balance_of(asset, to)
            .checked_add(amount)
            .ok_or(DistributorError::MathOverflow)?;

        self.supply.insert(*asset, supply);
        self.balances.insert((*asset, *to), balance);
        Ok(())
    }

    pub fn total_supply(&self, asset: &Pubkey) -> u64 {
        self.supply.get(asset).copied().unwrap_or(0)
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance_of(&self, asset: &Pubkey, holder: &Pubkey) -> u64 {
        self.balances.get(&(*asset, *holder)).copied().unwrap_or(0)
    }

    fn allowance(&self, asset: &Pubkey, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances
            .get(&(*asset, *owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    fn approve(
        &mut self,
        asset: &Pubkey,
        owner: &Pubkey,
        spender: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        self.allowances.insert((*asset, *owner, *spender), amount);
        Ok(())
    }

    fn transfer(&mut self, asset: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let from_balance = self
            .balance_of(asset, from)
            .checked_sub(amount)
            .ok_or(DistributorError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance_of(asset, to)
            .checked_add(amount)
            .ok_or(DistributorError::MathOverflow)?;

        self.balances.insert((*asset, *from), from_balance);
        self.balances.insert((*asset, *to), to_balance);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        asset: &Pubkey,
        spender: &Pubkey,
        owner: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<()> {
        let remaining = self
            .allowance(asset, owner, spender)
            .checked_sub(amount)
            .ok_or(DistributorError::InsufficientAllowance)?;

        // Balances move first so a failed transfer keeps the allowance intact.
        self.transfer(asset, owner, to, amount)?;
        self.allowances.insert((*asset, *owner, *spender), remaining);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_error, key};

    #[test]
    fn mint_then_transfer_moves_balance() {
        let (asset, alice, bob) = (key(1), key(2), key(3));
        let mut ledger = InMemoryLedger::new();
        ledger.mint(&asset, &alice, 100).unwrap();

        ledger.transfer(&asset, &alice, &bob, 40).unwrap();

        assert_eq!(ledger.balance_of(&asset, &alice), 60);
        assert_eq!(ledger.balance_of(&asset, &bob), 40);
        assert_eq!(ledger.total_supply(&asset), 100);
    }

    #[test]
    fn transfer_over_balance_changes_nothing() {
        let (asset, alice, bob) = (key(1), key(2), key(3));
        let mut ledger = InMemoryLedger::new();
        ledger.mint(&asset, &alice, 10).unwrap();

        assert_error(
            ledger.transfer(&asset, &alice, &bob, 11),
            DistributorError::InsufficientBalance,
        );
        assert_eq!(ledger.balance_of(&asset, &alice), 10);
        assert_eq!(ledger.balance_of(&asset, &bob), 0);
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let (asset, owner, spender, vault) = (key(1), key(2), key(3), key(4));
        let mut ledger = InMemoryLedger::new();
        ledger.mint(&asset, &owner, 100).unwrap();
        ledger.approve(&asset, &owner, &spender, 70).unwrap();

        ledger
            .transfer_from(&asset, &spender, &owner, &vault, 50)
            .unwrap();

        assert_eq!(ledger.balance_of(&asset, &vault), 50);
        assert_eq!(ledger.allowance(&asset, &owner, &spender), 20);
        assert_error(
            ledger.transfer_from(&asset, &spender, &owner, &vault, 21),
            DistributorError::InsufficientAllowance,
        );
    }

    #[test]
    fn transfer_from_without_funds_keeps_allowance() {
        let (asset, owner, spender, vault) = (key(1), key(2), key(3), key(4));
        let mut ledger = InMemoryLedger::new();
        ledger.mint(&asset, &owner, 5).unwrap();
        ledger.approve(&asset, &owner, &spender, 50).unwrap();

        assert_error(
            ledger.transfer_from(&asset, &spender, &owner, &vault, 50),
            DistributorError::InsufficientBalance,
        );
        assert_eq!(ledger.allowance(&asset, &owner, &spender), 50);
        assert_eq!(ledger.balance_of(&asset, &owner), 5);
    }

    #[test]
    fn balances_are_per_asset() {
        let (gold, silver, alice) = (key(1), key(2), key(3));
        let mut ledger = InMemoryLedger::new();
        ledger.mint(&gold, &alice, 7).unwrap();

        assert_eq!(ledger.balance_of(&gold, &alice), 7);
        assert_eq!(ledger.balance_of(&silver, &alice), 0);
    }
}
