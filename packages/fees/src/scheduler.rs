// Base fee schedule evaluation

use crate::types::{BaseFee, BaseFeeMode, DecaySchedule};
use mantaswap_math::{pow_q64, MathError, BASIS_POINT_MAX, Q64};

/// Base fee numerator after `elapsed` activation units
///
/// `elapsed` is measured from the pool's activation point in the pool's
/// activation units (ledgers or seconds). Decaying schedules stop moving once
/// their period count is exhausted.
pub fn base_fee_numerator(base_fee: &BaseFee, elapsed: u64) -> Result<u64, MathError> {
    match &base_fee.mode {
        BaseFeeMode::Flat => Ok(base_fee.cliff_fee_numerator),
        BaseFeeMode::LinearDecay(schedule) => {
            linear_numerator(base_fee.cliff_fee_numerator, schedule, elapsed)
        }
        BaseFeeMode::ExponentialDecay(schedule) => {
            exponential_numerator(base_fee.cliff_fee_numerator, schedule, elapsed)
        }
    }
}

/// Numerator once the schedule has fully played out (the schedule's floor)
pub fn floor_fee_numerator(base_fee: &BaseFee) -> Result<u64, MathError> {
    match &base_fee.mode {
        BaseFeeMode::Flat => Ok(base_fee.cliff_fee_numerator),
        BaseFeeMode::LinearDecay(schedule) | BaseFeeMode::ExponentialDecay(schedule) => {
            let full = (schedule.period_count as u64)
                .checked_mul(schedule.period_length)
                .ok_or(MathError::Overflow)?;
            base_fee_numerator(base_fee, full)
        }
    }
}

fn elapsed_periods(schedule: &DecaySchedule, elapsed: u64) -> u64 {
    let raw = if schedule.period_length == 0 {
        schedule.period_count as u64
    } else {
        elapsed / schedule.period_length
    };
    raw.min(schedule.period_count as u64)
}

fn linear_numerator(cliff: u64, schedule: &DecaySchedule, elapsed: u64) -> Result<u64, MathError> {
    let periods = elapsed_periods(schedule, elapsed);
    let reduction = periods
        .checked_mul(schedule.reduction_factor)
        .ok_or(MathError::Overflow)?;
    cliff.checked_sub(reduction).ok_or(MathError::Overflow)
}

fn exponential_numerator(
    cliff: u64,
    schedule: &DecaySchedule,
    elapsed: u64,
) -> Result<u64, MathError> {
    let periods = elapsed_periods(schedule, elapsed);
    if periods == 0 {
        return Ok(cliff);
    }

    let retain_bps = BASIS_POINT_MAX
        .checked_sub(schedule.reduction_factor)
        .ok_or(MathError::Overflow)?;
    // (retain/10_000)^periods in Q64.64, then applied to the cliff
    let factor_q64 = (retain_bps as u128) * Q64 / (BASIS_POINT_MAX as u128);
    let decay_q64 = pow_q64(factor_q64, periods)?;

    let fee = (cliff as u128)
        .checked_mul(decay_q64)
        .ok_or(MathError::Overflow)?
        >> 64;
    Ok(fee as u64)
}
