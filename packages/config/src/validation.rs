// Range validation and activation clocks

use crate::types::ActivationType;
use mantaswap_math::{MAX_SQRT_PRICE, MIN_SQRT_PRICE};
use soroban_sdk::Env;

/// Validation failures for config records
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    InvalidPriceRange,
}

/// Price bounds must sit inside the representable band, strictly ordered
pub fn validate_price_range(
    sqrt_min_price: u128,
    sqrt_max_price: u128,
) -> Result<(), ConfigError> {
    if sqrt_min_price < MIN_SQRT_PRICE
        || sqrt_min_price >= sqrt_max_price
        || sqrt_max_price > MAX_SQRT_PRICE
    {
        return Err(ConfigError::InvalidPriceRange);
    }
    Ok(())
}

/// Current value of the clock a pool activates against
pub fn current_point(env: &Env, activation_type: ActivationType) -> u64 {
    match activation_type {
        ActivationType::Slot => env.ledger().sequence() as u64,
        ActivationType::Timestamp => env.ledger().timestamp(),
    }
}

/// Whether a pool gated on `activation_point` is live at `now`
pub fn is_activated(activation_point: u64, now: u64) -> bool {
    now >= activation_point
}
