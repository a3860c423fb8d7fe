// Token amount deltas along the constant-liquidity curve

use mantaswap_math::{mul_shr, u256_div_to_u128, MathError, Rounding, Q128_SCALE};
use soroban_sdk::{Env, U256};

/// Token A owed when the price moves across `[lower, upper]` at `liquidity`
///
/// delta_a = L * (upper - lower) / (lower * upper)
///
/// The price product alone spans up to 194 bits, so both sides of the
/// division are built in 256-bit space.
pub fn get_delta_amount_a(
    env: &Env,
    lower_sqrt_price: u128,
    upper_sqrt_price: u128,
    liquidity: u128,
    rounding: Rounding,
) -> Result<u128, MathError> {
    if lower_sqrt_price == 0 {
        return Err(MathError::DivisionByZero);
    }
    let delta = upper_sqrt_price
        .checked_sub(lower_sqrt_price)
        .ok_or(MathError::Overflow)?;

    let numerator = U256::from_u128(env, liquidity).mul(&U256::from_u128(env, delta));
    let denominator =
        U256::from_u128(env, lower_sqrt_price).mul(&U256::from_u128(env, upper_sqrt_price));
    u256_div_to_u128(env, &numerator, &denominator, rounding)
}

/// Token B owed when the price moves across `[lower, upper]` at `liquidity`
///
/// delta_b = L * (upper - lower) >> 128, both factors carrying 64
/// fractional bits.
pub fn get_delta_amount_b(
    env: &Env,
    lower_sqrt_price: u128,
    upper_sqrt_price: u128,
    liquidity: u128,
    rounding: Rounding,
) -> Result<u128, MathError> {
    let delta = upper_sqrt_price
        .checked_sub(lower_sqrt_price)
        .ok_or(MathError::Overflow)?;
    mul_shr(env, liquidity, delta, Q128_SCALE, rounding)
}

/// Both token amounts tied up by `liquidity` at the current price
///
/// Every position spans the full pool range, so token A covers
/// `[sqrt_price, sqrt_max]` and token B covers `[sqrt_min, sqrt_price]`.
/// Round up when tokens flow into the pool, down when they flow out.
pub fn get_amounts_for_liquidity(
    env: &Env,
    liquidity: u128,
    sqrt_min_price: u128,
    sqrt_max_price: u128,
    sqrt_price: u128,
    rounding: Rounding,
) -> Result<(u128, u128), MathError> {
    let amount_a = get_delta_amount_a(env, sqrt_price, sqrt_max_price, liquidity, rounding)?;
    let amount_b = get_delta_amount_b(env, sqrt_min_price, sqrt_price, liquidity, rounding)?;
    Ok((amount_a, amount_b))
}

/// Deposits required to seed a fresh pool with `liquidity`
///
/// Always rounds up; the creator pays the dust.
pub fn get_initialize_amounts(
    env: &Env,
    liquidity: u128,
    sqrt_min_price: u128,
    sqrt_max_price: u128,
    sqrt_price: u128,
) -> Result<(u128, u128), MathError> {
    get_amounts_for_liquidity(
        env,
        liquidity,
        sqrt_min_price,
        sqrt_max_price,
        sqrt_price,
        Rounding::Up,
    )
}
