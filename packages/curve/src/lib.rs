// MantaSwap Curve Package

#![no_std]

pub mod amounts;
pub mod swap;
pub mod types;

// Re-export types
pub use types::SwapStep;

// Re-export curve functions
pub use amounts::{
    get_amounts_for_liquidity,
    get_delta_amount_a,
    get_delta_amount_b,
    get_initialize_amounts,
};
pub use swap::{compute_swap_step, get_next_sqrt_price_from_input};
