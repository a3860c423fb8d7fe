// Pool Types - Using types from packages

use soroban_sdk::{contracttype, Address};

use mantaswap_config::ActivationType;
use mantaswap_fees::{CollectFeeMode, PoolFees, VolatilityTracker};

// Re-export types from packages
pub use mantaswap_position::Position;

// ============================================================
// POOL STATE
// ============================================================

/// Full state of one pool
///
/// The fee and band fields are a snapshot of the config taken at
/// initialization; registry changes never reach a running pool.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Pool {
    /// Registry the config was read from
    pub registry: Address,
    /// Config id within that registry
    pub config_id: u64,
    /// First token of the pair
    pub token_a: Address,
    /// Second token of the pair
    pub token_b: Address,
    /// Lower bound of the price band
    pub sqrt_min_price: u128,
    /// Upper bound of the price band
    pub sqrt_max_price: u128,
    /// Current sqrt price as Q64.64, always inside the band
    pub sqrt_price: u128,
    /// Aggregate Q64.64-scaled liquidity across all positions
    pub liquidity: u128,
    /// Per-liquidity fee accumulator for token A, 128 fractional bits
    pub fee_growth_global_a: u128,
    /// Per-liquidity fee accumulator for token B
    pub fee_growth_global_b: u128,
    /// Protocol fee share accrued in token A, awaiting claim
    pub protocol_fee_a: u128,
    /// Protocol fee share accrued in token B
    pub protocol_fee_b: u128,
    /// Fee parameterization
    pub pool_fees: PoolFees,
    /// Which token trading fees settle in
    pub collect_fee_mode: CollectFeeMode,
    /// How the activation point is measured
    pub activation_type: ActivationType,
    /// Point the pool trades from; also anchors fee-schedule decay
    pub activation_point: u64,
    /// Pool creator
    pub creator: Address,
    /// Schema tag, 0 on creation
    pub version: u32,
    /// Mutable volatility state for the dynamic fee overlay
    pub volatility: VolatilityTracker,
}

// ============================================================
// SWAP RESULT
// ============================================================

/// Outcome of a swap or a quote
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    /// Gross input taken from the trader, fee included
    pub amount_in_consumed: u128,
    /// Output delivered after fees
    pub amount_out: u128,
    /// Total trading fee charged
    pub fee_amount: u128,
    /// Portion of the fee accrued to the protocol
    pub protocol_fee: u128,
    /// Input left untouched because the price reached the pool bound
    pub unfilled_in: u128,
    /// Pool price after the step
    pub next_sqrt_price: u128,
}

// ============================================================
// CUSTOMIZE PARAMS
// ============================================================

/// Per-pool overrides supplied when creating from a dynamic config
/// Re-validated in full at the call
#[contracttype]
#[derive(Clone, Debug)]
pub struct CustomizeParams {
    pub pool_fees: PoolFees,
    pub sqrt_min_price: u128,
    pub sqrt_max_price: u128,
    pub collect_fee_mode: CollectFeeMode,
    pub activation_type: ActivationType,
}
