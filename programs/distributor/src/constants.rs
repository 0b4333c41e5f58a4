//! Engine-wide constants.

/// Basis-point denominator: 10_000 bps = 100.00%.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Max portions accepted in a single vesting schedule.
pub const MAX_VESTING_PORTIONS: usize = 64;

/// Participant cap value that disables the cap.
pub const UNCAPPED: u32 = 0;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// PDA seed prefix for distributor instance addresses.
pub const DISTRIBUTOR_SEED: &[u8] = b"distributor";
