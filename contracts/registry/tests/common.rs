use soroban_sdk::{testutils::Address as _, Address, Env};

use mantaswap_config::{ActivationType, CreatorAuthority};
use mantaswap_fees::{BaseFee, BaseFeeMode, CollectFeeMode, PoolFees};
use mantaswap_math::{MAX_SQRT_PRICE, MIN_SQRT_PRICE};
use mantaswap_registry::{CreateConfigParams, MantaRegistry, MantaRegistryClient};

// Test constants
pub const DEFAULT_CLIFF_FEE: u64 = 2_500_000; // 0.25%
pub const DEFAULT_PROTOCOL_FEE_PERCENT: u32 = 20;

/// Register and initialize a registry
pub fn setup_registry(env: &Env) -> (MantaRegistryClient<'_>, Address) {
    let admin = Address::generate(env);
    let registry_id = env.register(MantaRegistry, ());
    let client = MantaRegistryClient::new(env, &registry_id);
    client.initialize(&admin);
    (client, admin)
}

/// Flat fee setup with the default protocol share
pub fn flat_pool_fees(cliff_fee_numerator: u64) -> PoolFees {
    PoolFees {
        base_fee: BaseFee {
            cliff_fee_numerator,
            mode: BaseFeeMode::Flat,
        },
        protocol_fee_percent: DEFAULT_PROTOCOL_FEE_PERCENT,
        dynamic_fee: None,
        padding: 0,
    }
}

pub fn default_config_params(_env: &Env) -> CreateConfigParams {
    CreateConfigParams {
        pool_fees: flat_pool_fees(DEFAULT_CLIFF_FEE),
        sqrt_min_price: MIN_SQRT_PRICE,
        sqrt_max_price: MAX_SQRT_PRICE,
        vault_config: None,
        pool_creator_authority: CreatorAuthority::Anyone,
        activation_type: ActivationType::Slot,
        collect_fee_mode: CollectFeeMode::InputToken,
    }
}
