use anchor_lang::prelude::*;

use crate::state::distributor::guard_transition;
use crate::state::Distributor;
use crate::utils::vesting::VestingSchedule;

impl Distributor {
    /// Store the vesting schedule: `percents_bps[i]` unlocks at `unlock_times[i]`.
    ///
    /// Validation order after the transition guard: length match, portion cap,
    /// strictly increasing times, percents summing to 10_000 bps.
    pub fn set_vesting_params(
        &mut self,
        signer: &Pubkey,
        unlock_times: &[i64],
        percents_bps: &[u64],
    ) -> Result<()> {
        guard_transition(
            signer,
            Some(self.admin),
            self.distribution.is_some(),
            self.vesting.is_some(),
        )?;
        let schedule = VestingSchedule::new(unlock_times, percents_bps)?;

        emit!(VestingParamsSet {
            distributor: self.address,
            admin: self.admin,
            portion_count: schedule.len() as u32,
            final_unlock_time: schedule.final_unlock_time().unwrap_or_default(),
            schedule_hash: schedule.fingerprint(),
        });
        self.vesting = Some(schedule);
        Ok(())
    }
}

#[event]
pub struct VestingParamsSet {
    pub distributor: Pubkey,
    pub admin: Pubkey,
    pub portion_count: u32,
    pub final_unlock_time: i64,
    /// blake3 over the stored portion table.
    pub schedule_hash: [u8; 32],
}
