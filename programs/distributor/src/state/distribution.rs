use anchor_lang::prelude::*;

use crate::constants::UNCAPPED;
use crate::error::DistributorError;

/// Distribution parameters. Present on a distributor once created; set once.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Distribution {
    /// Amount the owner escrows on deposit.
    pub total_amount: u64,
    /// Max participants; `UNCAPPED` disables the limit.
    pub participant_cap: u32,
    /// Only principal allowed to deposit.
    pub owner: Pubkey,
    /// Asset id in the ledger.
    pub asset: Pubkey,
    /// Flips once the escrow pull succeeds.
    pub deposited: bool,
    /// Sum of all successful withdrawals.
    pub released: u64,
}

impl Distribution {
    pub fn new(total_amount: u64, participant_cap: u32, owner: Pubkey, asset: Pubkey) -> Result<Self> {
        require!(total_amount > 0, DistributorError::InvalidAmount);
        Ok(Self {
            total_amount,
            participant_cap,
            owner,
            asset,
            deposited: false,
            released: 0,
        })
    }

    pub fn is_capped(&self) -> bool {
        self.participant_cap != UNCAPPED
    }

    /// Whether one more participant fits beside `current` existing ones.
    pub fn has_capacity(&self, current: u32) -> bool {
        !self.is_capped() || current < self.participant_cap
    }

    pub fn remaining(&self) -> u64 {
        self.total_amount.saturating_sub(self.released)
    }
}
