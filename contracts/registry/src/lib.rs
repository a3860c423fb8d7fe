#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env};

// External packages
use mantaswap_config::{validate_price_range, ActivationType, ConfigType, CreatorAuthority, PoolConfig};
use mantaswap_fees::{validate_pool_fees, BaseFee, BaseFeeMode, CollectFeeMode, PoolFees};
use mantaswap_math::{MAX_SQRT_PRICE, MIN_FEE_NUMERATOR, MIN_SQRT_PRICE};

// Local modules
mod error;
mod events;
mod storage;
pub mod types;

pub use error::RegistryError;
pub use types::CreateConfigParams;

use events::*;
use storage::*;

#[contract]
pub struct MantaRegistry;

#[contractimpl]
impl MantaRegistry {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the registry with its admin. One shot.
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        admin.require_auth();

        if has_admin(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }

        write_admin(&env, &admin);
        write_config_count(&env, 0);

        emit_initialized(&env, &admin);
        Ok(())
    }

    // ========================================================
    // CONFIG MANAGEMENT
    // ========================================================

    /// Register an immutable static pool config under `id`
    ///
    /// Creation is the only write: there is no update entry point, and pools
    /// snapshot the record at initialization, so nothing the registry does
    /// later can reach a running pool.
    ///
    /// # Arguments
    /// * `admin` - Must match the stored registry admin
    /// * `id` - Caller-chosen config id, must be unused
    /// * `params` - Fee, price-band and authority parameters
    pub fn create_config(
        env: Env,
        admin: Address,
        id: u64,
        params: CreateConfigParams,
    ) -> Result<u64, RegistryError> {
        Self::require_admin(&env, &admin)?;

        if has_config(&env, id) {
            return Err(RegistryError::DuplicateConfigId);
        }

        validate_pool_fees(&params.pool_fees).map_err(|_| RegistryError::InvalidFeeConfig)?;
        validate_price_range(params.sqrt_min_price, params.sqrt_max_price)
            .map_err(|_| RegistryError::InvalidPriceRange)?;

        let config = PoolConfig {
            pool_fees: params.pool_fees.clone(),
            sqrt_min_price: params.sqrt_min_price,
            sqrt_max_price: params.sqrt_max_price,
            vault_config: params.vault_config.clone(),
            pool_creator_authority: params.pool_creator_authority.clone(),
            activation_type: params.activation_type,
            collect_fee_mode: params.collect_fee_mode,
            config_type: ConfigType::Static,
        };
        write_config(&env, id, &config);
        write_config_count(&env, read_config_count(&env).saturating_add(1));

        emit_config_created(
            &env,
            id,
            config.pool_fees.base_fee.cliff_fee_numerator,
            config.sqrt_min_price,
            config.sqrt_max_price,
        );
        Ok(id)
    }

    /// Register a dynamic config under `id`
    ///
    /// A dynamic config carries no parameters of its own beyond the creator
    /// authority: the named address supplies the full fee and price setup per
    /// pool through `initialize_with_customize_config`. The stored fee and
    /// band fields are placeholders that the pool call overrides.
    pub fn create_dynamic_config(
        env: Env,
        admin: Address,
        id: u64,
        pool_creator_authority: Address,
    ) -> Result<u64, RegistryError> {
        Self::require_admin(&env, &admin)?;

        if has_config(&env, id) {
            return Err(RegistryError::DuplicateConfigId);
        }

        let config = PoolConfig {
            pool_fees: PoolFees {
                base_fee: BaseFee {
                    cliff_fee_numerator: MIN_FEE_NUMERATOR,
                    mode: BaseFeeMode::Flat,
                },
                protocol_fee_percent: 0,
                dynamic_fee: None,
                padding: 0,
            },
            sqrt_min_price: MIN_SQRT_PRICE,
            sqrt_max_price: MAX_SQRT_PRICE,
            vault_config: None,
            pool_creator_authority: CreatorAuthority::Only(pool_creator_authority.clone()),
            activation_type: ActivationType::Slot,
            collect_fee_mode: CollectFeeMode::InputToken,
            config_type: ConfigType::Dynamic,
        };
        write_config(&env, id, &config);
        write_config_count(&env, read_config_count(&env).saturating_add(1));

        emit_dynamic_config_created(&env, id, &pool_creator_authority);
        Ok(id)
    }

    /// Withdraw a config from future pool creation
    ///
    /// Existing pools are unaffected: they hold their own copy of the record.
    pub fn close_config(env: Env, admin: Address, id: u64) -> Result<(), RegistryError> {
        Self::require_admin(&env, &admin)?;

        if !has_config(&env, id) {
            return Err(RegistryError::ConfigNotFound);
        }

        remove_config(&env, id);
        write_config_count(&env, read_config_count(&env).saturating_sub(1));

        emit_config_closed(&env, id);
        Ok(())
    }

    // ========================================================
    // ADMIN
    // ========================================================

    /// Hand the registry over to a new admin
    ///
    /// Both the current and the new admin must authorize the transfer.
    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), RegistryError> {
        Self::require_admin(&env, &admin)?;
        new_admin.require_auth();

        write_admin(&env, &new_admin);

        emit_admin_updated(&env, &admin, &new_admin);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Check if the registry is initialized
    pub fn is_initialized(env: Env) -> bool {
        has_admin(&env)
    }

    /// Get the current registry admin
    pub fn get_admin(env: Env) -> Result<Address, RegistryError> {
        read_admin(&env).ok_or(RegistryError::NotInitialized)
    }

    /// Get a stored config by id
    pub fn get_config(env: Env, id: u64) -> Result<PoolConfig, RegistryError> {
        read_config(&env, id).ok_or(RegistryError::ConfigNotFound)
    }

    /// Check whether a config id is in use
    pub fn has_config(env: Env, id: u64) -> bool {
        has_config(&env, id)
    }

    /// Get the number of live configs
    pub fn get_config_count(env: Env) -> u32 {
        read_config_count(&env)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Admin gate shared by every mutating entry point
    fn require_admin(env: &Env, admin: &Address) -> Result<(), RegistryError> {
        admin.require_auth();

        let stored = read_admin(env).ok_or(RegistryError::NotInitialized)?;
        if &stored != admin {
            return Err(RegistryError::Unauthorized);
        }
        Ok(())
    }
}
