//! Registration-gated token distribution engine.
//!
//! A [`DistributorFactory`] creates [`Distributor`] instances bound to an
//! admin. Each instance runs registration and distribution windows, escrows
//! the owner's deposit in an [`AssetLedger`], and releases entitlements along
//! a basis-point [`VestingSchedule`] read against a [`LogicalClock`].

use anchor_lang::prelude::*;

pub mod clock;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod registry;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use clock::{LogicalClock, ManualClock};
pub use error::DistributorError;
pub use instructions::*;
pub use ledger::{AssetLedger, InMemoryLedger};
pub use registry::{DistributorCreated, DistributorFactory};
pub use state::*;
pub use utils::vesting::{VestingPortion, VestingSchedule};

declare_id!("FhwgMabHk2tEy3e18mnVwtSmMPo7iNes42vVTRnNQp5k");
