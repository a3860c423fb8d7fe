// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};
use crate::constants::Q64;

pub const ONE_X64: u128 = Q64;

/// Arithmetic failure kinds surfaced by every checked operation
/// Overflow is always an error here, never a clamp or a wrap
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    Overflow,
    DivisionByZero,
    CastOverflow,
}

/// Rounding direction for division results
/// Down favors the pool, Up charges the caller the remainder
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

/// Type conversion helpers
#[inline]
pub fn i128_to_u128_safe(x: i128) -> Result<u128, MathError> {
    if x < 0 {
        Err(MathError::CastOverflow)
    } else {
        Ok(x as u128)
    }
}

#[inline]
pub fn u128_to_i128_safe(x: u128) -> Result<i128, MathError> {
    if x > i128::MAX as u128 {
        Err(MathError::CastOverflow)
    } else {
        Ok(x as i128)
    }
}

/// Multiply two Q64.64 numbers, returning Q64.64 result
/// Uses decomposition to avoid intermediate overflow; truncates toward zero
#[inline]
pub fn mul_q64(a: u128, b: u128) -> Result<u128, MathError> {
    let a_hi = a >> 64;
    let a_lo = a & 0xFFFFFFFFFFFFFFFF;
    let b_hi = b >> 64;
    let b_lo = b & 0xFFFFFFFFFFFFFFFF;

    let term_hh = a_hi * b_hi;
    if term_hh > (u128::MAX >> 64) {
        return Err(MathError::Overflow);
    }
    let term_hl = a_hi * b_lo;
    let term_lh = a_lo * b_hi;
    let term_ll = a_lo * b_lo;

    (term_hh << 64)
        .checked_add(term_hl)
        .and_then(|v| v.checked_add(term_lh))
        .and_then(|v| v.checked_add(term_ll >> 64))
        .ok_or(MathError::Overflow)
}

/// Raise a Q64.64 number to an integer power by repeated squaring
/// Each step truncates, so results never exceed the exact value
pub fn pow_q64(base: u128, mut exp: u64) -> Result<u128, MathError> {
    let mut result = ONE_X64;
    let mut b = base;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_q64(result, b)?;
        }
        exp >>= 1;
        if exp > 0 {
            b = mul_q64(b, b)?;
        }
    }
    Ok(result)
}

/// Safe multiply-divide using U256 to prevent overflow
/// Calculates: (a * b) / denominator with the requested rounding
pub fn mul_div(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
    rounding: Rounding,
) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let den = U256::from_u128(env, denominator);

    u256_div_to_u128(env, &product, &den, rounding)
}

/// Calculates: (a * b) >> shift with the requested rounding
/// Used to reduce Q-scale products back to token amounts
pub fn mul_shr(
    env: &Env,
    a: u128,
    b: u128,
    shift: u32,
    rounding: Rounding,
) -> Result<u128, MathError> {
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let den = u256_pow2(env, shift);

    u256_div_to_u128(env, &product, &den, rounding)
}

/// Calculates: (a << shift) / denominator with the requested rounding
/// Used to lift a token amount to Q-scale before dividing
pub fn shl_div(
    env: &Env,
    a: u128,
    shift: u32,
    denominator: u128,
    rounding: Rounding,
) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let numerator = U256::from_u128(env, a).mul(&u256_pow2(env, shift));
    let den = U256::from_u128(env, denominator);

    u256_div_to_u128(env, &numerator, &den, rounding)
}

/// Divide in Q64.64 format: (a * 2^64) / b, exact over the full u128 range
#[inline]
pub fn div_q64(env: &Env, a: u128, b: u128, rounding: Rounding) -> Result<u128, MathError> {
    shl_div(env, a, 64, b, rounding)
}

/// Divide with rounding up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        result.checked_add(1).ok_or(MathError::Overflow)
    } else {
        Ok(result)
    }
}

fn u256_pow2(env: &Env, bits: u32) -> U256 {
    U256::from_u32(env, 2).pow(bits)
}

/// Reduce a U256 quotient back to u128 with the requested rounding
/// Callers build wide numerators and denominators when either side alone
/// can exceed 128 bits
pub fn u256_div_to_u128(
    env: &Env,
    numerator: &U256,
    denominator: &U256,
    rounding: Rounding,
) -> Result<u128, MathError> {
    if denominator == &U256::from_u32(env, 0) {
        return Err(MathError::DivisionByZero);
    }
    let quotient = numerator.div(denominator);
    let result = match rounding {
        Rounding::Down => quotient,
        Rounding::Up => {
            if numerator.rem_euclid(denominator) == U256::from_u32(env, 0) {
                quotient
            } else {
                quotient.add(&U256::from_u32(env, 1))
            }
        }
    };
    result.to_u128().ok_or(MathError::Overflow)
}
