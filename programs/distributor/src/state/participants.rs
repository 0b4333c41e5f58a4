use anchor_lang::prelude::*;

/// Per-principal registration record. Presence in the map means the entry exists.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    /// Logical time of the successful `register` call.
    pub timestamp: i64,
    pub is_registered: bool,
}

/// Per-principal participation record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Participation {
    /// Recorded as 0; entitlements are assigned separately by the admin.
    pub amount: u64,
    pub is_participated: bool,
    pub timestamp: i64,
}

/// Per-principal settlement record. Withdrawal is single-shot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Withdrawal {
    pub withdrawn: bool,
    /// Payout transferred by the withdrawal.
    pub amount: u64,
    pub timestamp: i64,
}
