// Position Management Logic

use crate::fees::settle_fees;
use crate::types::{Position, PositionError};
use soroban_sdk::Env;

/// Grow a position after settling its fees
///
/// Settlement comes first so the added liquidity earns nothing from the
/// accrual window that closed before it existed.
pub fn increase_liquidity(
    env: &Env,
    position: &mut Position,
    liquidity_delta: u128,
    fee_growth_global_a: u128,
    fee_growth_global_b: u128,
) -> Result<(), PositionError> {
    settle_fees(env, position, fee_growth_global_a, fee_growth_global_b)?;
    position.liquidity = position
        .liquidity
        .checked_add(liquidity_delta)
        .ok_or(PositionError::Overflow)?;
    Ok(())
}

/// Shrink a position after settling its fees
pub fn decrease_liquidity(
    env: &Env,
    position: &mut Position,
    liquidity_delta: u128,
    fee_growth_global_a: u128,
    fee_growth_global_b: u128,
) -> Result<(), PositionError> {
    settle_fees(env, position, fee_growth_global_a, fee_growth_global_b)?;
    position.liquidity = position
        .liquidity
        .checked_sub(liquidity_delta)
        .ok_or(PositionError::InsufficientLiquidity)?;
    Ok(())
}

/// Check if a position has any liquidity
#[inline]
pub fn has_liquidity(position: &Position) -> bool {
    position.liquidity > 0
}

/// Check if a position has uncollected fees
#[inline]
pub fn has_uncollected_fees(position: &Position) -> bool {
    position.tokens_owed_a > 0 || position.tokens_owed_b > 0
}

/// Check if a position is empty (no liquidity and no fees)
#[inline]
pub fn is_empty(position: &Position) -> bool {
    position.liquidity == 0 && position.tokens_owed_a == 0 && position.tokens_owed_b == 0
}
