// Volatility tracking and the variable fee overlay

use crate::types::{DynamicFee, VolatilityTracker};
use mantaswap_math::{div_q64, MathError, Rounding, BASIS_POINT_MAX, MAX_FEE_NUMERATOR, Q64};
use soroban_sdk::Env;

/// Precision divisor applied to the squared volatility term
const VARIABLE_FEE_PRECISION: u128 = 100_000_000_000;

/// Roll the volatility references forward
///
/// Runs before each swap. Outside the filter window the price reference moves
/// to the current price and the accumulator is either decayed into the
/// reference or fully reset, depending on how much time has passed.
pub fn update_references(
    tracker: &mut VolatilityTracker,
    dynamic: &DynamicFee,
    sqrt_price: u128,
    now: u64,
) {
    let elapsed = now.saturating_sub(tracker.last_update);
    if elapsed < dynamic.filter_period {
        return;
    }

    tracker.sqrt_price_reference = sqrt_price;
    tracker.volatility_reference = if elapsed >= dynamic.decay_period {
        0
    } else {
        tracker.volatility_accumulator * (dynamic.reduction_factor as u128)
            / (BASIS_POINT_MAX as u128)
    };
    tracker.last_update = now;
}

/// Fold the current price movement into the volatility accumulator
pub fn update_volatility_accumulator(
    env: &Env,
    tracker: &mut VolatilityTracker,
    dynamic: &DynamicFee,
    sqrt_price: u128,
) -> Result<(), MathError> {
    let (upper, lower) = if sqrt_price > tracker.sqrt_price_reference {
        (sqrt_price, tracker.sqrt_price_reference)
    } else {
        (tracker.sqrt_price_reference, sqrt_price)
    };

    let ratio_q64 = div_q64(env, upper, lower, Rounding::Down)?;
    let bin_step_q64 = (dynamic.bin_step as u128) * Q64 / (BASIS_POINT_MAX as u128);
    let delta_bins = (ratio_q64.saturating_sub(Q64) / bin_step_q64)
        .checked_mul(2)
        .ok_or(MathError::Overflow)?;

    let accumulated = tracker
        .volatility_reference
        .checked_add(
            delta_bins
                .checked_mul(BASIS_POINT_MAX as u128)
                .ok_or(MathError::Overflow)?,
        )
        .ok_or(MathError::Overflow)?;

    tracker.volatility_accumulator =
        accumulated.min(dynamic.max_volatility_accumulator as u128);
    Ok(())
}

/// Variable fee numerator derived from accumulated volatility
///
/// Quadratic in (accumulator x bin_step) so small wobbles stay cheap and
/// sustained movement gets expensive, bounded by MAX_FEE_NUMERATOR.
pub fn variable_fee_numerator(
    dynamic: &DynamicFee,
    tracker: &VolatilityTracker,
) -> Result<u64, MathError> {
    if dynamic.variable_fee_control == 0 {
        return Ok(0);
    }

    let volatility_bins = tracker
        .volatility_accumulator
        .checked_mul(dynamic.bin_step as u128)
        .ok_or(MathError::Overflow)?;
    let squared = volatility_bins
        .checked_mul(volatility_bins)
        .ok_or(MathError::Overflow)?;
    let scaled = (dynamic.variable_fee_control as u128)
        .checked_mul(squared)
        .ok_or(MathError::Overflow)?
        .checked_add(VARIABLE_FEE_PRECISION - 1)
        .ok_or(MathError::Overflow)?
        / VARIABLE_FEE_PRECISION;

    Ok(scaled.min(MAX_FEE_NUMERATOR as u128) as u64)
}
