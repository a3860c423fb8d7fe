//! Registry type definitions

use soroban_sdk::{contracttype, BytesN};

use mantaswap_config::{ActivationType, CreatorAuthority};
use mantaswap_fees::{CollectFeeMode, PoolFees};

// ============================================================
// CREATE CONFIG PARAMS
// ============================================================

/// Parameters for registering a static pool config
/// Bundled into a struct to stay within the host param limit
#[contracttype]
#[derive(Clone, Debug)]
pub struct CreateConfigParams {
    /// Full fee parameterization (base schedule, protocol share, overlay)
    pub pool_fees: PoolFees,
    /// Lower sqrt price bound for pools created from this config
    pub sqrt_min_price: u128,
    /// Upper sqrt price bound
    pub sqrt_max_price: u128,
    /// Optional external vault binding
    pub vault_config: Option<BytesN<32>>,
    /// Who may initialize a pool from this config
    pub pool_creator_authority: CreatorAuthority,
    /// Whether activation points are ledger sequences or timestamps
    pub activation_type: ActivationType,
    /// Which token trading fees are settled in
    pub collect_fee_mode: CollectFeeMode,
}
