// Price movement and bounded swap steps

use crate::amounts::{get_delta_amount_a, get_delta_amount_b};
use crate::types::SwapStep;
use mantaswap_math::{shl_div, u256_div_to_u128, MathError, Rounding, Q128_SCALE};
use soroban_sdk::{Env, U256};

/// Price after absorbing `amount_in` of the input token
///
/// Token A in pushes the price down:
///   sqrt_price' = L * sqrt_price / (L + amount * sqrt_price), rounded up
/// Token B in pushes the price up:
///   sqrt_price' = sqrt_price + (amount << 128) / L, quotient rounded down
///
/// Both roundings keep the movement at or inside the exact curve, so the
/// pool never pays out more than the input covers.
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_in: u128,
    a_to_b: bool,
) -> Result<u128, MathError> {
    if liquidity == 0 {
        return Err(MathError::DivisionByZero);
    }

    if a_to_b {
        let liquidity_wide = U256::from_u128(env, liquidity);
        let numerator = liquidity_wide.mul(&U256::from_u128(env, sqrt_price));
        let denominator = liquidity_wide.add(
            &U256::from_u128(env, amount_in).mul(&U256::from_u128(env, sqrt_price)),
        );
        u256_div_to_u128(env, &numerator, &denominator, Rounding::Up)
    } else {
        let quotient = shl_div(env, amount_in, Q128_SCALE, liquidity, Rounding::Down)?;
        sqrt_price.checked_add(quotient).ok_or(MathError::Overflow)
    }
}

/// Advance the price toward `target_sqrt_price`, consuming at most
/// `amount_in`
///
/// The input needed to reach the target is computed first (rounded up); if
/// the offered amount covers it the step stops exactly at the target and
/// the surplus stays with the caller. Output always rounds down. Requires
/// the target on the correct side of the current price for the direction.
pub fn compute_swap_step(
    env: &Env,
    sqrt_price: u128,
    target_sqrt_price: u128,
    liquidity: u128,
    amount_in: u128,
    a_to_b: bool,
) -> Result<SwapStep, MathError> {
    let amount_to_target = if a_to_b {
        get_delta_amount_a(env, target_sqrt_price, sqrt_price, liquidity, Rounding::Up)?
    } else {
        get_delta_amount_b(env, sqrt_price, target_sqrt_price, liquidity, Rounding::Up)?
    };

    if amount_in >= amount_to_target {
        let amount_out = if a_to_b {
            get_delta_amount_b(env, target_sqrt_price, sqrt_price, liquidity, Rounding::Down)?
        } else {
            get_delta_amount_a(env, sqrt_price, target_sqrt_price, liquidity, Rounding::Down)?
        };
        return Ok(SwapStep {
            next_sqrt_price: target_sqrt_price,
            amount_in_consumed: amount_to_target,
            amount_out,
        });
    }

    // amount_in is strictly below what the bound needs, so the next price
    // stays strictly inside it and the additions below cannot overflow
    let next_sqrt_price =
        get_next_sqrt_price_from_input(env, sqrt_price, liquidity, amount_in, a_to_b)?;

    let amount_out = if a_to_b {
        get_delta_amount_b(env, next_sqrt_price, sqrt_price, liquidity, Rounding::Down)?
    } else {
        get_delta_amount_a(env, sqrt_price, next_sqrt_price, liquidity, Rounding::Down)?
    };

    Ok(SwapStep {
        next_sqrt_price,
        amount_in_consumed: amount_in,
        amount_out,
    })
}
