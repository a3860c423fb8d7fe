// MantaSwap Fee Engine Package

#![no_std]

pub mod dynamic;
pub mod engine;
pub mod scheduler;
pub mod types;

pub use dynamic::{update_references, update_volatility_accumulator, variable_fee_numerator};
pub use engine::{
    effective_fee_numerator, gross_amount_for_net, split_fees, validate_pool_fees, FeeBreakdown,
};
pub use scheduler::{base_fee_numerator, floor_fee_numerator};
pub use types::{
    BaseFee, BaseFeeMode, CollectFeeMode, DecaySchedule, DynamicFee, FeeConfigError, FeeMode,
    PoolFees, VolatilityTracker,
};
