// Compatible with OpenZeppelin Stellar Soroban Contracts patterns
//
// Error handling module following OpenZeppelin conventions:
// - Uses contracterror derive macro for typed errors (recommended by OZ)
// - Grouped numeric ranges, one range per concern

use soroban_sdk::contracterror;

use mantaswap_math::MathError;
use mantaswap_position::PositionError;

/// Contract-level errors following OpenZeppelin contracterror pattern
/// These errors are returned from contract functions and can be caught by callers
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Initialization errors (100-199)
    /// Pool has already been initialized
    AlreadyInitialized = 100,
    /// Pool has not been initialized
    NotInitialized = 101,
    /// Activation point lies in the past
    InvalidActivationPoint = 102,

    // Configuration errors (200-299)
    /// Referenced config does not exist on the registry
    ConfigNotFound = 200,
    /// Operation requires a dynamic config
    InvalidConfigType = 201,
    /// Fee parameters rejected by validation
    InvalidFeeConfig = 202,
    /// Price outside the configured band, or a malformed band
    InvalidPriceRange = 203,
    /// Both sides of the pair are the same token
    IdenticalMints = 204,

    // Token and amount errors (300-399)
    /// Input token is not part of the pair
    InvalidTokenIn = 300,
    /// Amount is zero or below the allowed minimum
    InvalidAmount = 301,

    // Liquidity errors (400-499)
    /// Not enough liquidity in the position or the pool
    InsufficientLiquidity = 400,

    // Swap errors (500-599)
    /// Caller's slippage bound violated
    SlippageExceeded = 500,

    // Position errors (600-699)
    /// Position id has no entry
    PositionNotFound = 600,
    /// Position still holds liquidity or unclaimed fees
    PositionNotEmpty = 601,
    /// Position checkpoint is ahead of the global accumulator
    StaleCheckpoint = 602,

    // Authorization errors (700-799)
    /// Caller is not allowed to perform this action
    Unauthorized = 700,

    // State errors (800-899)
    /// Pool has not reached its activation point
    PoolNotActivated = 800,

    // Math errors (900-999)
    /// Arithmetic overflow or division by zero
    ArithmeticOverflow = 900,
}

impl From<MathError> for PoolError {
    fn from(_: MathError) -> Self {
        PoolError::ArithmeticOverflow
    }
}

impl From<PositionError> for PoolError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::StaleCheckpoint => PoolError::StaleCheckpoint,
            PositionError::InsufficientLiquidity => PoolError::InsufficientLiquidity,
            PositionError::Overflow => PoolError::ArithmeticOverflow,
        }
    }
}
