//! Fee engine type definitions

use soroban_sdk::contracttype;

// ============================================================
// POOL FEES
// ============================================================

/// Complete fee parameterization for a pool
///
/// The base fee always applies; the dynamic overlay is optional and adds a
/// volatility-responsive component on top, capped at MAX_FEE_NUMERATOR.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolFees {
    /// Base fee schedule
    pub base_fee: BaseFee,
    /// Share of every trading fee routed to the protocol (percent, 0-50)
    pub protocol_fee_percent: u32,
    /// Optional volatility-responsive overlay
    pub dynamic_fee: Option<DynamicFee>,
    /// Reserved for forward compatibility
    pub padding: u64,
}

/// Base fee: a starting (cliff) numerator plus the schedule that moves it
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseFee {
    /// Fee numerator at activation, over FEE_DENOMINATOR
    pub cliff_fee_numerator: u64,
    /// How the numerator evolves after activation
    pub mode: BaseFeeMode,
}

/// Fee schedule shape
///
/// Schedule parameters travel inside the variant, so a flat fee carries no
/// meaningless factor fields and decaying fees cannot omit theirs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BaseFeeMode {
    /// Constant numerator forever
    Flat,
    /// Numerator drops by reduction_factor per elapsed period
    LinearDecay(DecaySchedule),
    /// Numerator multiplies by (1 - reduction_factor/10_000) per period
    ExponentialDecay(DecaySchedule),
}

/// Decay timing shared by both decaying modes
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecaySchedule {
    /// Number of periods after which the fee stops decaying
    pub period_count: u32,
    /// Length of one period, in the pool's activation units
    pub period_length: u64,
    /// Per-period reduction: absolute numerator cut (linear) or bps of the
    /// remaining fee (exponential)
    pub reduction_factor: u64,
}

// ============================================================
// DYNAMIC FEE
// ============================================================

/// Volatility-responsive fee overlay parameters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DynamicFee {
    /// Price granularity for volatility measurement, in bps of sqrt price
    pub bin_step: u32,
    /// Minimum time between reference updates, in activation units
    pub filter_period: u64,
    /// Time after which accumulated volatility fully decays
    pub decay_period: u64,
    /// Fraction of the accumulator carried into the next reference (bps)
    pub reduction_factor: u32,
    /// Scales squared volatility into a fee numerator
    pub variable_fee_control: u32,
    /// Upper bound on the volatility accumulator
    pub max_volatility_accumulator: u32,
}

/// Mutable volatility state carried by a pool between swaps
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VolatilityTracker {
    /// Activation-unit point of the last reference update
    pub last_update: u64,
    /// Sqrt price at the last reference update
    pub sqrt_price_reference: u128,
    /// Current accumulated volatility, in bin-bps units
    pub volatility_accumulator: u128,
    /// Accumulator snapshot carried across reference updates
    pub volatility_reference: u128,
}

impl VolatilityTracker {
    /// Fresh tracker anchored at the pool's starting price
    pub fn new(sqrt_price: u128, now: u64) -> Self {
        Self {
            last_update: now,
            sqrt_price_reference: sqrt_price,
            volatility_accumulator: 0,
            volatility_reference: 0,
        }
    }
}

// ============================================================
// FEE COLLECTION MODE
// ============================================================

/// Which token trading fees are settled in
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CollectFeeMode {
    /// Fees taken in whichever token the trader pays in
    InputToken,
    /// Fees always settled in token B, on the input or output side as needed
    OnlyTokenB,
}

/// Per-swap resolution of the collection mode against the trade direction
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FeeMode {
    /// Charge the fee before the curve step (on input) or after (on output)
    pub fees_on_input: bool,
    /// The fee token is token A
    pub fees_on_token_a: bool,
}

impl FeeMode {
    /// Resolve the collection policy for one swap
    ///
    /// `a_to_b` is true when token A is the input side.
    pub fn resolve(collect_fee_mode: CollectFeeMode, a_to_b: bool) -> Self {
        match collect_fee_mode {
            CollectFeeMode::InputToken => Self {
                fees_on_input: true,
                fees_on_token_a: a_to_b,
            },
            CollectFeeMode::OnlyTokenB => Self {
                // B is the input on b-to-a trades, the output on a-to-b
                fees_on_input: !a_to_b,
                fees_on_token_a: false,
            },
        }
    }
}

// ============================================================
// VALIDATION ERRORS
// ============================================================

/// Reasons a fee configuration is rejected at creation time
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FeeConfigError {
    ExceedsMaxFee,
    BelowMinFee,
    InvalidSchedule,
    InvalidProtocolShare,
    InvalidDynamicFee,
}
