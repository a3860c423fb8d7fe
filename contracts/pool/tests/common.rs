use soroban_sdk::{testutils::Address as _, Address, Env};

use mantaswap_config::{ActivationType, CreatorAuthority};
use mantaswap_fees::{BaseFee, BaseFeeMode, CollectFeeMode, PoolFees};
use mantaswap_math::{MAX_SQRT_PRICE, MIN_SQRT_PRICE};
use mantaswap_pool::{MantaPool, MantaPoolClient};
use mantaswap_registry::{CreateConfigParams, MantaRegistry, MantaRegistryClient};

// Test constants
pub const CONFIG_ID: u64 = 1;
pub const DEFAULT_CLIFF_FEE: u64 = 10_000_000; // 1%
pub const DEFAULT_PROTOCOL_FEE_PERCENT: u32 = 20;
pub const Q64: u128 = 1u128 << 64; // price 1.0
pub const DEFAULT_LIQUIDITY: u128 = 1000 * Q64;
pub const DEFAULT_MINT: i128 = 1_000_000_000;

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

/// Full-band config: pools created from it can trade across the whole curve
pub fn default_config_params() -> CreateConfigParams {
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

/// Band confined to [0.5, 2.0] in sqrt terms so swaps can hit the bounds
pub fn narrow_config_params() -> CreateConfigParams {
    CreateConfigParams {
        sqrt_min_price: Q64 / 2,
        sqrt_max_price: Q64 * 2,
        ..default_config_params()
    }
}

/// Register a registry and store one config under CONFIG_ID
pub fn setup_registry_with_config(env: &Env, params: &CreateConfigParams) -> (Address, Address) {
    let admin = Address::generate(env);
    let registry_id = env.register(MantaRegistry, ());
    let registry = MantaRegistryClient::new(env, &registry_id);
    registry.initialize(&admin);
    registry.create_config(&admin, &CONFIG_ID, params);
    (registry_id, admin)
}

/// Full-band pool seeded with the default liquidity at price 1.0
pub fn setup_pool(env: &Env) -> (MantaPoolClient<'_>, Address, Address, Address, Address) {
    setup_custom_pool(env, &default_config_params(), DEFAULT_LIQUIDITY, Q64)
}

/// Pool built from arbitrary config params, liquidity and start price
///
/// Returns (pool client, creator, registry admin, token_a, token_b). The
/// creator pays the seed deposits and owns position 0.
pub fn setup_custom_pool<'a>(
    env: &'a Env,
    params: &CreateConfigParams,
    liquidity: u128,
    sqrt_price: u128,
) -> (MantaPoolClient<'a>, Address, Address, Address, Address) {
    let (registry, admin) = setup_registry_with_config(env, params);

    let creator = Address::generate(env);
    let token_a = create_token(env, &creator);
    let token_b = create_token(env, &creator);
    mint_tokens(env, &token_a, &creator, DEFAULT_MINT);
    mint_tokens(env, &token_b, &creator, DEFAULT_MINT);

    let pool_id = env.register(MantaPool, ());
    let client = MantaPoolClient::new(env, &pool_id);

    client.initialize(
        &creator,
        &creator,
        &registry,
        &CONFIG_ID,
        &token_a,
        &token_b,
        &liquidity,
        &sqrt_price,
        &None,
    );

    (client, creator, admin, token_a, token_b)
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

/// Token balance as i128 (native token client unit)
pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    use soroban_sdk::token::TokenClient;
    TokenClient::new(env, token).balance(who)
}

/// Generate a trader holding both pool tokens
pub fn funded_trader(env: &Env, token_a: &Address, token_b: &Address) -> Address {
    let trader = Address::generate(env);
    mint_tokens(env, token_a, &trader, DEFAULT_MINT);
    mint_tokens(env, token_b, &trader, DEFAULT_MINT);
    trader
}
