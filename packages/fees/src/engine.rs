// Fee composition and settlement-side splitting

use crate::dynamic::variable_fee_numerator;
use crate::scheduler::{base_fee_numerator, floor_fee_numerator};
use crate::types::{BaseFeeMode, FeeConfigError, PoolFees, VolatilityTracker};
use mantaswap_math::{
    mul_div, MathError, Rounding, BASIS_POINT_MAX, FEE_DENOMINATOR, MAX_FEE_NUMERATOR,
    MAX_PROTOCOL_FEE_PERCENT, MIN_FEE_NUMERATOR,
};
use soroban_sdk::Env;

/// Outcome of charging a fee on a trade amount
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FeeBreakdown {
    /// Amount remaining after the total fee
    pub net_amount: u128,
    /// Fee share credited to liquidity providers
    pub lp_fee: u128,
    /// Fee share accrued for the protocol
    pub protocol_fee: u128,
}

/// Effective total fee numerator for one swap
///
/// Base schedule at `elapsed`, plus the dynamic overlay if configured,
/// clamped to MAX_FEE_NUMERATOR.
pub fn effective_fee_numerator(
    pool_fees: &PoolFees,
    elapsed: u64,
    tracker: &VolatilityTracker,
) -> Result<u64, MathError> {
    let base = base_fee_numerator(&pool_fees.base_fee, elapsed)?;
    let total = match &pool_fees.dynamic_fee {
        Some(dynamic) => base
            .checked_add(variable_fee_numerator(dynamic, tracker)?)
            .ok_or(MathError::Overflow)?,
        None => base,
    };
    Ok(total.min(MAX_FEE_NUMERATOR))
}

/// Charge `fee_numerator` on `amount` and split the fee
///
/// The total fee rounds up against the trader; the protocol share rounds
/// down so remainders stay with LPs.
pub fn split_fees(
    env: &Env,
    amount: u128,
    fee_numerator: u64,
    protocol_fee_percent: u32,
) -> Result<FeeBreakdown, MathError> {
    let total_fee = mul_div(
        env,
        amount,
        fee_numerator as u128,
        FEE_DENOMINATOR as u128,
        Rounding::Up,
    )?;
    let protocol_fee = mul_div(
        env,
        total_fee,
        protocol_fee_percent as u128,
        100,
        Rounding::Down,
    )?;
    let lp_fee = total_fee - protocol_fee;
    let net_amount = amount.checked_sub(total_fee).ok_or(MathError::Overflow)?;

    Ok(FeeBreakdown {
        net_amount,
        lp_fee,
        protocol_fee,
    })
}

/// Gross input needed so that exactly `net_amount` remains after the fee
///
/// Inverse of `split_fees` for fee-on-input partial fills; rounds the gross
/// amount up so the pool never undercharges.
pub fn gross_amount_for_net(
    env: &Env,
    net_amount: u128,
    fee_numerator: u64,
) -> Result<u128, MathError> {
    let keep_numerator = FEE_DENOMINATOR
        .checked_sub(fee_numerator)
        .ok_or(MathError::Overflow)?;
    mul_div(
        env,
        net_amount,
        FEE_DENOMINATOR as u128,
        keep_numerator as u128,
        Rounding::Up,
    )
}

/// Reject malformed fee configurations at creation time
pub fn validate_pool_fees(pool_fees: &PoolFees) -> Result<(), FeeConfigError> {
    let base = &pool_fees.base_fee;
    if base.cliff_fee_numerator > MAX_FEE_NUMERATOR {
        return Err(FeeConfigError::ExceedsMaxFee);
    }
    if base.cliff_fee_numerator < MIN_FEE_NUMERATOR {
        return Err(FeeConfigError::BelowMinFee);
    }

    match &base.mode {
        BaseFeeMode::Flat => {}
        BaseFeeMode::LinearDecay(schedule) => {
            if schedule.period_count == 0
                || schedule.period_length == 0
                || schedule.reduction_factor == 0
            {
                return Err(FeeConfigError::InvalidSchedule);
            }
        }
        BaseFeeMode::ExponentialDecay(schedule) => {
            if schedule.period_count == 0
                || schedule.period_length == 0
                || schedule.reduction_factor == 0
                || schedule.reduction_factor >= BASIS_POINT_MAX
            {
                return Err(FeeConfigError::InvalidSchedule);
            }
        }
    }

    // The fully decayed fee must stay above the global floor
    let floor = floor_fee_numerator(base).map_err(|_| FeeConfigError::InvalidSchedule)?;
    if floor < MIN_FEE_NUMERATOR {
        return Err(FeeConfigError::BelowMinFee);
    }

    if pool_fees.protocol_fee_percent > MAX_PROTOCOL_FEE_PERCENT {
        return Err(FeeConfigError::InvalidProtocolShare);
    }

    if let Some(dynamic) = &pool_fees.dynamic_fee {
        let bin_step_ok = dynamic.bin_step > 0 && (dynamic.bin_step as u64) <= BASIS_POINT_MAX;
        let windows_ok = dynamic.decay_period > 0 && dynamic.filter_period < dynamic.decay_period;
        let factors_ok = (dynamic.reduction_factor as u64) <= BASIS_POINT_MAX
            && dynamic.variable_fee_control > 0
            && dynamic.max_volatility_accumulator > 0;
        if !bin_step_ok || !windows_ok || !factors_ok {
            return Err(FeeConfigError::InvalidDynamicFee);
        }
    }

    Ok(())
}
