use anchor_lang::prelude::*;

/// Every rejection the distribution engine can report.
///
/// Variants compare by code, so callers can assert on the exact cause.
#[error_code]
pub enum DistributorError {
    #[msg("Unauthorized: caller does not hold the required role")]
    Unauthorized,

    #[msg("Parameters already set")]
    AlreadySet,

    #[msg("Prerequisite phase is not configured")]
    NotReady,

    #[msg("Round is over or not started yet")]
    NotOpen,

    #[msg("Address already registered")]
    AlreadyRegistered,

    #[msg("Address already participated")]
    AlreadyParticipated,

    #[msg("Address has executed withdraw already")]
    AlreadyWithdrawn,

    #[msg("Address is not registered")]
    NotRegistered,

    #[msg("Address did not participate in distribution")]
    NotParticipated,

    #[msg("There is nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Unlock times length must equal percents length")]
    LengthMismatch,

    #[msg("Unlock time must be greater than previous")]
    OutOfOrder,

    #[msg("Precision percents issue: portions must sum to 10000 bps")]
    PrecisionError,

    #[msg("Participant cap reached")]
    CapacityExceeded,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Start time must be before end time")]
    InvalidRange,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Distributor instance not found")]
    InstanceNotFound,

    #[msg("Vesting schedule has too many portions")]
    TooManyPortions,

    #[msg("Withdrawal would exceed distribution total")]
    ExceedsDistributionTotal,

    #[msg("Math overflow")]
    MathOverflow,
}
