// Pool configuration shared between the registry and pool contracts

use mantaswap_fees::types::{CollectFeeMode, PoolFees};
use soroban_sdk::{contracttype, Address, BytesN};

/// Who may create pools under a config
///
/// The open case is its own variant rather than a sentinel address, so a
/// restricted config can never accidentally widen.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CreatorAuthority {
    Anyone,
    Only(Address),
}

impl CreatorAuthority {
    pub fn permits(&self, creator: &Address) -> bool {
        match self {
            CreatorAuthority::Anyone => true,
            CreatorAuthority::Only(address) => address == creator,
        }
    }
}

/// Clock the pool's activation point is read against
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActivationType {
    Slot,
    Timestamp,
}

/// How the config came into the registry
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigType {
    Static,
    Dynamic,
}

/// Registry-stored pool template
///
/// Pools snapshot the whole record at creation, so later registry changes
/// never reach running pools.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub pool_fees: PoolFees,
    pub sqrt_min_price: u128,
    pub sqrt_max_price: u128,
    /// External custody policy reference, None for unmanaged pools
    pub vault_config: Option<BytesN<32>>,
    pub pool_creator_authority: CreatorAuthority,
    pub activation_type: ActivationType,
    pub collect_fee_mode: CollectFeeMode,
    pub config_type: ConfigType,
}
