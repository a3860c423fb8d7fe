// MantaSwap Config Package

#![no_std]

pub mod types;
pub mod validation;

// Re-export shared types
pub use types::{ActivationType, ConfigType, CreatorAuthority, PoolConfig};

// Re-export validation helpers
pub use validation::{current_point, is_activated, validate_price_range, ConfigError};
