#![no_std]

pub mod types;
pub mod manager;
pub mod fees;

pub use types::{Position, PositionError};
pub use manager::{decrease_liquidity, has_liquidity, has_uncollected_fees, increase_liquidity, is_empty};
pub use fees::{pending_fees, settle_fees, take_owed};
