// MantaSwap Math Package

#![no_std]

pub mod constants;
pub mod q64;

// Re-export commonly used items from constants
pub use constants::*;

// Re-export Q64 arithmetic functions
pub use q64::{
    div_q64,
    div_round_up,
    i128_to_u128_safe,
    mul_div,
    mul_q64,
    mul_shr,
    pow_q64,
    shl_div,
    u128_to_i128_safe,
    u256_div_to_u128,
    MathError,
    Rounding,
    ONE_X64,
};
