// Compatible with OpenZeppelin Stellar Soroban Contracts patterns
//
// Constants module following OpenZeppelin conventions:
// - Clear documentation for each constant
// - Grouped by functionality
// - Uses appropriate types for each constant

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// Minimum valid sqrt price for any pool
/// Lowest representable price on the curve, ~5.4e-20 token B per token A
pub const MIN_SQRT_PRICE: u128 = 4295048016;

/// Maximum valid sqrt price for any pool
/// Highest representable price on the curve, ~1.8e19 token B per token A
pub const MAX_SQRT_PRICE: u128 = 79226673521066979257578248091;

/// Sqrt price for a 1:1 price ratio (2^64)
/// This represents price = 1.0 in Q64.64 format
pub const SQRT_PRICE_1_1: u128 = 18446744073709551616_u128;

// ============================================================
// LIQUIDITY CONSTANTS
// ============================================================

/// Number of fractional bits in the liquidity representation
pub const LIQUIDITY_SCALE: u32 = 64;

/// Minimum liquidity to seed a new pool (one whole Q64.64 unit)
/// Prevents dust pools where rounding dominates the curve
pub const MIN_LP_AMOUNT: u128 = 1u128 << 64;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Denominator for all fee numerators (parts per billion)
pub const FEE_DENOMINATOR: u64 = 1_000_000_000;

/// Maximum total fee numerator (50%)
/// Hard cap applied after the dynamic overlay is added
pub const MAX_FEE_NUMERATOR: u64 = 500_000_000;

/// Minimum base fee numerator (0.01%)
/// Floor for every point of a fee schedule
pub const MIN_FEE_NUMERATOR: u64 = 100_000;

/// Maximum share of the trading fee routed to the protocol (percent)
pub const MAX_PROTOCOL_FEE_PERCENT: u32 = 50;

/// Basis point denominator (100% = 10000 bps)
pub const BASIS_POINT_MAX: u64 = 10_000;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
/// Used as the scaling factor for Q64.64 format
pub const Q64: u128 = 1u128 << 64;

/// Bit width of the product of two Q64.64 values
/// Used when reducing Q128.128 intermediates back to token amounts
pub const Q128_SCALE: u32 = 128;
