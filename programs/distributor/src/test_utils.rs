//! Shared fixtures: a factory-created distributor, a fake ledger and a manual clock.

use std::fmt::Debug;

use anchor_lang::prelude::*;

pub use crate::clock::LogicalClock;
use crate::clock::ManualClock;
use crate::constants::SECONDS_PER_DAY;
use crate::error::DistributorError;
pub use crate::ledger::AssetLedger;
use crate::ledger::InMemoryLedger;
use crate::registry::DistributorFactory;
use crate::state::Distributor;

pub const HOUR: i64 = 3_600;
pub const DAY: i64 = SECONDS_PER_DAY;
/// One whole token at 9 decimals.
pub const UNIT: u64 = 1_000_000_000;
pub const GENESIS: i64 = 1_700_000_000;
pub const TOTAL_AMOUNT: u64 = 100 * UNIT;
pub const PARTICIPANT_CAP: u32 = 100;

pub fn key(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn assert_error<T: Debug>(result: Result<T>, expected: DistributorError) {
    let err = result.expect_err("operation should have failed");
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}

pub struct Fixture {
    pub factory: DistributorFactory,
    pub ledger: InMemoryLedger,
    pub clock: ManualClock,
    pub index: u64,
    pub admin: Pubkey,
    pub owner: Pubkey,
    pub asset: Pubkey,
    pub user: Pubkey,
    pub other: Pubkey,
}

impl Fixture {
    pub fn new() -> Self {
        let admin = key(1);
        let mut factory = DistributorFactory::new(key(200));
        let index = factory.create(&admin).unwrap();
        Self {
            factory,
            ledger: InMemoryLedger::new(),
            clock: ManualClock::new(GENESIS),
            index,
            admin,
            owner: key(2),
            asset: key(3),
            user: key(4),
            other: key(5),
        }
    }

    pub fn distributor(&self) -> &Distributor {
        self.factory.lookup(self.index).unwrap()
    }

    pub fn distributor_mut(&mut self) -> &mut Distributor {
        self.factory.lookup_mut(self.index).unwrap()
    }

    /// Registration open for one day from now.
    pub fn set_registration_round(&mut self) {
        let (admin, now) = (self.admin, self.clock.now());
        self.distributor_mut()
            .set_registration_round(&admin, now, now + DAY)
            .unwrap();
    }

    pub fn set_distribution_parameters(&mut self) {
        let (admin, owner, asset) = (self.admin, self.owner, self.asset);
        self.distributor_mut()
            .set_distribution_parameters(&admin, TOTAL_AMOUNT, PARTICIPANT_CAP, owner, asset)
            .unwrap();
    }

    /// Distribution opens a day after registration closes and lasts a day.
    pub fn set_distribution_round(&mut self) {
        let admin = self.admin;
        let start = self.distributor().registration_round().unwrap().end_time + DAY;
        self.clock.sleep(HOUR as u64);
        self.distributor_mut()
            .set_distribution_round(&admin, start, start + DAY)
            .unwrap();
    }

    /// Mint the total to the owner, approve the distributor, deposit.
    pub fn deposit_tokens(&mut self) {
        let total = self.distributor().distribution().unwrap().total_amount;
        let spender = self.distributor().address();
        self.ledger.mint(&self.asset, &self.owner, total).unwrap();
        self.ledger
            .approve(&self.asset, &self.owner, &spender, total)
            .unwrap();
        let distributor = self.factory.lookup_mut(self.index).unwrap();
        distributor
            .deposit_tokens(&self.owner, &mut self.ledger)
            .unwrap();
    }

    pub fn register(&mut self, who: Pubkey) -> Result<()> {
        let distributor = self.factory.lookup_mut(self.index)?;
        distributor.register(&who, &self.clock)
    }

    pub fn participate(&mut self, who: Pubkey) -> Result<()> {
        let distributor = self.factory.lookup_mut(self.index)?;
        distributor.participate(&who, &self.clock)
    }

    pub fn withdraw(&mut self, who: Pubkey) -> Result<u64> {
        let distributor = self.factory.lookup_mut(self.index)?;
        distributor.withdraw(&who, &mut self.ledger, &self.clock)
    }

    pub fn seek_distribution_start(&mut self) {
        let start = self.distributor().distribution_round().unwrap().start_time;
        self.clock.seek(start);
    }

    /// Four 25% portions unlocking one to four days from now.
    pub fn set_classic_vesting(&mut self) -> Vec<i64> {
        let (admin, now) = (self.admin, self.clock.now());
        let unlock_times: Vec<i64> = (1..=4).map(|d| now + d * DAY).collect();
        self.distributor_mut()
            .set_vesting_params(&admin, &unlock_times, &[2_500; 4])
            .unwrap();
        unlock_times
    }

    pub fn set_entitlement(&mut self, who: Pubkey, amount: u64) {
        let admin = self.admin;
        self.distributor_mut()
            .set_address_distribution_amount(&admin, who, amount)
            .unwrap();
    }

    /// Everything up to the distribution window being open.
    pub fn configured(mut self) -> Self {
        self.set_registration_round();
        self.set_distribution_parameters();
        self.set_distribution_round();
        self.deposit_tokens();
        self
    }

    /// `user` registered, participated, classic vesting set, entitlement assigned.
    pub fn ready_to_withdraw(entitlement: u64) -> Self {
        let mut fx = Self::new().configured();
        let user = fx.user;
        fx.register(user).unwrap();
        fx.seek_distribution_start();
        fx.participate(user).unwrap();
        fx.set_classic_vesting();
        fx.set_entitlement(user, entitlement);
        fx
    }

    pub fn balance(&self, who: &Pubkey) -> u64 {
        self.ledger.balance_of(&self.asset, who)
    }

    pub fn escrow(&self) -> u64 {
        self.distributor().escrow_balance(&self.ledger)
    }
}
