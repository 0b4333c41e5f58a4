use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::error::DistributorError;
use crate::ledger::AssetLedger;
use crate::state::{
    Distribution, DistributionRound, Participation, Registration, RegistrationRound, Withdrawal,
};
use crate::utils::vesting::VestingSchedule;

/// One distribution instance: its configuration phases and per-principal ledgers.
///
/// Created only through [`crate::registry::DistributorFactory`]. Operations
/// live in `instructions/`, one file per operation.
#[derive(Clone, Debug)]
pub struct Distributor {
    /// Program-derived custody address; holds the escrow in the asset ledger.
    pub(crate) address: Pubkey,
    pub(crate) bump: u8,
    /// Position in the factory index.
    pub(crate) index: u64,
    /// Authorizes round, parameter and vesting configuration.
    pub(crate) admin: Pubkey,

    pub(crate) registration_round: Option<RegistrationRound>,
    pub(crate) distribution: Option<Distribution>,
    pub(crate) distribution_round: Option<DistributionRound>,
    pub(crate) vesting: Option<VestingSchedule>,

    pub(crate) registrations: BTreeMap<Pubkey, Registration>,
    pub(crate) participations: BTreeMap<Pubkey, Participation>,
    pub(crate) participant_count: u32,
    pub(crate) distribution_amounts: BTreeMap<Pubkey, u64>,
    pub(crate) withdrawals: BTreeMap<Pubkey, Withdrawal>,
}

impl Distributor {
    pub(crate) fn new(address: Pubkey, bump: u8, index: u64, admin: Pubkey) -> Self {
        Self {
            address,
            bump,
            index,
            admin,
            registration_round: None,
            distribution: None,
            distribution_round: None,
            vesting: None,
            registrations: BTreeMap::new(),
            participations: BTreeMap::new(),
            participant_count: 0,
            distribution_amounts: BTreeMap::new(),
            withdrawals: BTreeMap::new(),
        }
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn bump(&self) -> u8 {
        self.bump
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn admin(&self) -> Pubkey {
        self.admin
    }

    pub fn registration_round(&self) -> Option<&RegistrationRound> {
        self.registration_round.as_ref()
    }

    pub fn distribution(&self) -> Option<&Distribution> {
        self.distribution.as_ref()
    }

    /// True once `set_distribution_parameters` succeeded.
    pub fn is_created(&self) -> bool {
        self.distribution.is_some()
    }

    pub fn distribution_round(&self) -> Option<&DistributionRound> {
        self.distribution_round.as_ref()
    }

    pub fn vesting_schedule(&self) -> Option<&VestingSchedule> {
        self.vesting.as_ref()
    }

    /// Percent (bps) unlocking exactly at `unlock_time`, if such a portion exists.
    pub fn vesting_percent_at(&self, unlock_time: i64) -> Option<u64> {
        self.vesting.as_ref()?.percent_at(unlock_time)
    }

    pub fn vesting_portion_unlock_time(&self, index: usize) -> Option<i64> {
        self.vesting.as_ref()?.unlock_time(index)
    }

    pub fn registration(&self, principal: &Pubkey) -> Option<&Registration> {
        self.registrations.get(principal)
    }

    pub fn participation(&self, principal: &Pubkey) -> Option<&Participation> {
        self.participations.get(principal)
    }

    pub fn participant_count(&self) -> u32 {
        self.participant_count
    }

    /// Entitlement assigned by the admin; 0 when none.
    pub fn distribution_amount(&self, principal: &Pubkey) -> u64 {
        self.distribution_amounts.get(principal).copied().unwrap_or(0)
    }

    pub fn withdrawal(&self, principal: &Pubkey) -> Option<&Withdrawal> {
        self.withdrawals.get(principal)
    }

    /// Current escrow held by this instance; 0 before a distribution exists.
    pub fn escrow_balance<L: AssetLedger + ?Sized>(&self, ledger: &L) -> u64 {
        self.distribution
            .as_ref()
            .map(|d| ledger.balance_of(&d.asset, &self.address))
            .unwrap_or(0)
    }
}

/// Gate shared by the one-time transitions, checked in fixed order:
/// role, then prerequisite phase, then the set-once flag.
///
/// `authority == None` means nobody holds the role yet.
pub(crate) fn guard_transition(
    signer: &Pubkey,
    authority: Option<Pubkey>,
    ready: bool,
    already_applied: bool,
) -> Result<()> {
    let authority = authority.ok_or_else(|| error!(DistributorError::Unauthorized))?;
    require_keys_eq!(*signer, authority, DistributorError::Unauthorized);
    require!(ready, DistributorError::NotReady);
    require!(!already_applied, DistributorError::AlreadySet);
    Ok(())
}
