use crate::types::{Position, PositionError};
use mantaswap_math::{mul_shr, Rounding, Q128_SCALE};
use soroban_sdk::Env;

/// Fees earned since the last checkpoint, per token
///
/// pending = (fee_growth_global - checkpoint) * liquidity >> 128, rounded
/// down. Growth accumulators carry 128 fractional bits so sub-unit fees
/// against large liquidity are not lost. A checkpoint ahead of its
/// accumulator means the ledger is corrupt and nothing may settle against
/// it.
pub fn pending_fees(
    env: &Env,
    position: &Position,
    fee_growth_global_a: u128,
    fee_growth_global_b: u128,
) -> Result<(u128, u128), PositionError> {
    let delta_a = fee_growth_global_a
        .checked_sub(position.fee_growth_checkpoint_a)
        .ok_or(PositionError::StaleCheckpoint)?;
    let delta_b = fee_growth_global_b
        .checked_sub(position.fee_growth_checkpoint_b)
        .ok_or(PositionError::StaleCheckpoint)?;

    if position.liquidity == 0 {
        return Ok((0, 0));
    }

    let pending_a = mul_shr(
        env,
        delta_a,
        position.liquidity,
        Q128_SCALE,
        Rounding::Down,
    )
    .map_err(|_| PositionError::Overflow)?;
    let pending_b = mul_shr(
        env,
        delta_b,
        position.liquidity,
        Q128_SCALE,
        Rounding::Down,
    )
    .map_err(|_| PositionError::Overflow)?;

    Ok((pending_a, pending_b))
}

/// Fold pending fees into `tokens_owed_*` and advance the checkpoints
///
/// Runs before every liquidity change or claim so owed amounts never mix
/// accrual windows.
pub fn settle_fees(
    env: &Env,
    position: &mut Position,
    fee_growth_global_a: u128,
    fee_growth_global_b: u128,
) -> Result<(), PositionError> {
    let (pending_a, pending_b) =
        pending_fees(env, position, fee_growth_global_a, fee_growth_global_b)?;

    position.tokens_owed_a = position
        .tokens_owed_a
        .checked_add(pending_a)
        .ok_or(PositionError::Overflow)?;
    position.tokens_owed_b = position
        .tokens_owed_b
        .checked_add(pending_b)
        .ok_or(PositionError::Overflow)?;
    position.fee_growth_checkpoint_a = fee_growth_global_a;
    position.fee_growth_checkpoint_b = fee_growth_global_b;
    Ok(())
}

/// Drain the owed balances for a claim
pub fn take_owed(position: &mut Position) -> (u128, u128) {
    let owed = (position.tokens_owed_a, position.tokens_owed_b);
    position.tokens_owed_a = 0;
    position.tokens_owed_b = 0;
    owed
}
