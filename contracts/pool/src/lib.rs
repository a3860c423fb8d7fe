#![no_std]

use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, IntoVal, Symbol};

// External packages
use mantaswap_config::{
    current_point, is_activated, validate_price_range, ActivationType, ConfigType, PoolConfig,
};
use mantaswap_curve::{get_amounts_for_liquidity, get_initialize_amounts};
use mantaswap_fees::{
    effective_fee_numerator, update_references, validate_pool_fees, CollectFeeMode, PoolFees,
    VolatilityTracker,
};
use mantaswap_math::{u128_to_i128_safe, Rounding, MIN_LP_AMOUNT};
use mantaswap_position::{decrease_liquidity, increase_liquidity, is_empty, settle_fees, take_owed};

// Local modules
mod error;
mod events;
mod storage;
mod swap;
pub mod types;

pub use error::PoolError;
pub use types::{CustomizeParams, Pool, Position, SwapResult};

use events::*;
use storage::*;

/// Config fields a pool actually copies at creation
///
/// Either the stored registry record or the per-call customize overrides,
/// already validated by the caller path.
struct EffectiveSetup {
    pool_fees: PoolFees,
    sqrt_min_price: u128,
    sqrt_max_price: u128,
    collect_fee_mode: CollectFeeMode,
    activation_type: ActivationType,
}

#[contract]
pub struct MantaPool;

#[contractimpl]
impl MantaPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the pool from a registry config
    ///
    /// Seeds the full starting liquidity into position id 0, owned by
    /// `creator`, and returns that id. Tokens are pulled from `payer`.
    ///
    /// # Arguments
    /// * `payer` - Pays the initial deposits; can be anyone
    /// * `creator` - Pool creator; must satisfy the config's authority
    /// * `registry` - Registry contract holding the config
    /// * `config_id` - Config to copy parameters from
    /// * `token_a` - First token
    /// * `token_b` - Second token
    /// * `liquidity` - Starting liquidity, Q64.64-scaled
    /// * `sqrt_price` - Starting price, must sit inside the config band
    /// * `activation_point` - Optional future gate; defaults to now
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        payer: Address,
        creator: Address,
        registry: Address,
        config_id: u64,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        sqrt_price: u128,
        activation_point: Option<u64>,
    ) -> Result<u64, PoolError> {
        payer.require_auth();

        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }

        let config = Self::fetch_config(&env, &registry, config_id)?;
        if !config.pool_creator_authority.permits(&creator) {
            return Err(PoolError::Unauthorized);
        }

        let setup = EffectiveSetup {
            pool_fees: config.pool_fees,
            sqrt_min_price: config.sqrt_min_price,
            sqrt_max_price: config.sqrt_max_price,
            collect_fee_mode: config.collect_fee_mode,
            activation_type: config.activation_type,
        };

        Self::internal_initialize(
            &env,
            &payer,
            &creator,
            &registry,
            config_id,
            &token_a,
            &token_b,
            liquidity,
            sqrt_price,
            activation_point,
            setup,
        )
    }

    /// Initialize the pool from a dynamic config with per-pool overrides
    ///
    /// The referenced config must be dynamic; its creator authority is the
    /// only identity allowed here. `custom` replaces the stored fee and band
    /// parameters and is re-validated in full.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_with_customize_config(
        env: Env,
        payer: Address,
        creator: Address,
        registry: Address,
        config_id: u64,
        token_a: Address,
        token_b: Address,
        liquidity: u128,
        sqrt_price: u128,
        custom: CustomizeParams,
        activation_point: Option<u64>,
    ) -> Result<u64, PoolError> {
        payer.require_auth();

        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }

        let config = Self::fetch_config(&env, &registry, config_id)?;
        if config.config_type != ConfigType::Dynamic {
            return Err(PoolError::InvalidConfigType);
        }
        if !config.pool_creator_authority.permits(&creator) {
            return Err(PoolError::Unauthorized);
        }

        validate_pool_fees(&custom.pool_fees).map_err(|_| PoolError::InvalidFeeConfig)?;
        validate_price_range(custom.sqrt_min_price, custom.sqrt_max_price)
            .map_err(|_| PoolError::InvalidPriceRange)?;

        let setup = EffectiveSetup {
            pool_fees: custom.pool_fees,
            sqrt_min_price: custom.sqrt_min_price,
            sqrt_max_price: custom.sqrt_max_price,
            collect_fee_mode: custom.collect_fee_mode,
            activation_type: custom.activation_type,
        };

        Self::internal_initialize(
            &env,
            &payer,
            &creator,
            &registry,
            config_id,
            &token_a,
            &token_b,
            liquidity,
            sqrt_price,
            activation_point,
            setup,
        )
    }

    // ========================================================
    // POSITIONS
    // ========================================================

    /// Open an empty position checkpointed at the current accumulators
    pub fn create_position(env: Env, owner: Address) -> Result<u64, PoolError> {
        owner.require_auth();

        let pool = read_pool(&env).ok_or(PoolError::NotInitialized)?;
        Self::require_activated(&env, &pool)?;

        let id = next_position_id(&env);
        let position = Position::new(
            owner.clone(),
            pool.fee_growth_global_a,
            pool.fee_growth_global_b,
        );
        write_position(&env, id, &position);

        emit_position_created(&env, id, &owner);
        Ok(id)
    }

    /// Add liquidity to a position
    ///
    /// Settles the position's fees first, then deposits the round-up token
    /// amounts for `liquidity_delta` at the current price. `max_amount_*`
    /// cap what the sender is willing to pay.
    pub fn add_liquidity(
        env: Env,
        sender: Address,
        position_id: u64,
        liquidity_delta: u128,
        max_amount_a: u128,
        max_amount_b: u128,
    ) -> Result<(u128, u128), PoolError> {
        sender.require_auth();

        if liquidity_delta == 0 {
            return Err(PoolError::InvalidAmount);
        }

        let mut pool = read_pool(&env).ok_or(PoolError::NotInitialized)?;
        Self::require_activated(&env, &pool)?;

        let mut position = read_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
        if position.owner != sender {
            return Err(PoolError::Unauthorized);
        }

        increase_liquidity(
            &env,
            &mut position,
            liquidity_delta,
            pool.fee_growth_global_a,
            pool.fee_growth_global_b,
        )?;

        let (amount_a, amount_b) = get_amounts_for_liquidity(
            &env,
            liquidity_delta,
            pool.sqrt_min_price,
            pool.sqrt_max_price,
            pool.sqrt_price,
            Rounding::Up,
        )?;
        if amount_a > max_amount_a || amount_b > max_amount_b {
            return Err(PoolError::SlippageExceeded);
        }

        pool.liquidity = pool
            .liquidity
            .checked_add(liquidity_delta)
            .ok_or(PoolError::ArithmeticOverflow)?;

        write_pool(&env, &pool);
        write_position(&env, position_id, &position);

        let pull_a = u128_to_i128_safe(amount_a)?;
        let pull_b = u128_to_i128_safe(amount_b)?;
        if pull_a > 0 {
            token::Client::new(&env, &pool.token_a).transfer(
                &sender,
                &env.current_contract_address(),
                &pull_a,
            );
        }
        if pull_b > 0 {
            token::Client::new(&env, &pool.token_b).transfer(
                &sender,
                &env.current_contract_address(),
                &pull_b,
            );
        }

        emit_liquidity_added(&env, position_id, liquidity_delta, amount_a, amount_b);
        Ok((amount_a, amount_b))
    }

    /// Remove liquidity from a position
    ///
    /// Settles fees first, withdraws the round-down amounts at the current
    /// price. `min_amount_*` are the sender's slippage floors.
    pub fn remove_liquidity(
        env: Env,
        sender: Address,
        position_id: u64,
        liquidity_delta: u128,
        min_amount_a: u128,
        min_amount_b: u128,
    ) -> Result<(u128, u128), PoolError> {
        sender.require_auth();

        if liquidity_delta == 0 {
            return Err(PoolError::InvalidAmount);
        }

        let mut pool = read_pool(&env).ok_or(PoolError::NotInitialized)?;
        Self::require_activated(&env, &pool)?;

        let mut position = read_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
        if position.owner != sender {
            return Err(PoolError::Unauthorized);
        }

        decrease_liquidity(
            &env,
            &mut position,
            liquidity_delta,
            pool.fee_growth_global_a,
            pool.fee_growth_global_b,
        )?;

        let (amount_a, amount_b) = get_amounts_for_liquidity(
            &env,
            liquidity_delta,
            pool.sqrt_min_price,
            pool.sqrt_max_price,
            pool.sqrt_price,
            Rounding::Down,
        )?;
        if amount_a < min_amount_a || amount_b < min_amount_b {
            return Err(PoolError::SlippageExceeded);
        }

        pool.liquidity = pool
            .liquidity
            .checked_sub(liquidity_delta)
            .ok_or(PoolError::ArithmeticOverflow)?;

        write_pool(&env, &pool);
        write_position(&env, position_id, &position);

        let push_a = u128_to_i128_safe(amount_a)?;
        let push_b = u128_to_i128_safe(amount_b)?;
        if push_a > 0 {
            token::Client::new(&env, &pool.token_a).transfer(
                &env.current_contract_address(),
                &sender,
                &push_a,
            );
        }
        if push_b > 0 {
            token::Client::new(&env, &pool.token_b).transfer(
                &env.current_contract_address(),
                &sender,
                &push_b,
            );
        }

        emit_liquidity_removed(&env, position_id, liquidity_delta, amount_a, amount_b);
        Ok((amount_a, amount_b))
    }

    /// Pay out a position's accrued fees
    pub fn claim_fees(
        env: Env,
        sender: Address,
        position_id: u64,
    ) -> Result<(u128, u128), PoolError> {
        sender.require_auth();

        let pool = read_pool(&env).ok_or(PoolError::NotInitialized)?;
        let mut position = read_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
        if position.owner != sender {
            return Err(PoolError::Unauthorized);
        }

        settle_fees(
            &env,
            &mut position,
            pool.fee_growth_global_a,
            pool.fee_growth_global_b,
        )?;
        let (amount_a, amount_b) = take_owed(&mut position);
        write_position(&env, position_id, &position);

        let push_a = u128_to_i128_safe(amount_a)?;
        let push_b = u128_to_i128_safe(amount_b)?;
        if push_a > 0 {
            token::Client::new(&env, &pool.token_a).transfer(
                &env.current_contract_address(),
                &sender,
                &push_a,
            );
        }
        if push_b > 0 {
            token::Client::new(&env, &pool.token_b).transfer(
                &env.current_contract_address(),
                &sender,
                &push_b,
            );
        }

        emit_fees_claimed(&env, position_id, amount_a, amount_b);
        Ok((amount_a, amount_b))
    }

    /// Close an empty position
    pub fn close_position(env: Env, sender: Address, position_id: u64) -> Result<(), PoolError> {
        sender.require_auth();

        let position = read_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
        if position.owner != sender {
            return Err(PoolError::Unauthorized);
        }
        if !is_empty(&position) {
            return Err(PoolError::PositionNotEmpty);
        }

        remove_position(&env, position_id);

        emit_position_closed(&env, position_id, &sender);
        Ok(())
    }

    // ========================================================
    // SWAPS
    // ========================================================

    /// Execute a swap
    ///
    /// Direction follows `token_in`. When the price reaches the pool bound
    /// the fill is partial: only the consumed input is pulled from the
    /// sender and the remainder is reported as `unfilled_in`.
    pub fn swap(
        env: Env,
        sender: Address,
        token_in: Address,
        amount_in: u128,
        min_amount_out: u128,
    ) -> Result<SwapResult, PoolError> {
        sender.require_auth();

        if amount_in == 0 {
            return Err(PoolError::InvalidAmount);
        }

        let mut pool = read_pool(&env).ok_or(PoolError::NotInitialized)?;
        let now = Self::require_activated(&env, &pool)?;

        let a_to_b = Self::direction(&pool, &token_in)?;

        let result = swap::execute_swap(&env, &mut pool, a_to_b, amount_in, now)?;
        if result.amount_out < min_amount_out {
            return Err(PoolError::SlippageExceeded);
        }

        write_pool(&env, &pool);

        let (token_in_addr, token_out_addr) = if a_to_b {
            (&pool.token_a, &pool.token_b)
        } else {
            (&pool.token_b, &pool.token_a)
        };
        let pull = u128_to_i128_safe(result.amount_in_consumed)?;
        let push = u128_to_i128_safe(result.amount_out)?;
        if pull > 0 {
            token::Client::new(&env, token_in_addr).transfer(
                &sender,
                &env.current_contract_address(),
                &pull,
            );
        }
        if push > 0 {
            token::Client::new(&env, token_out_addr).transfer(
                &env.current_contract_address(),
                &sender,
                &push,
            );
        }

        emit_swap(
            &env,
            a_to_b,
            result.amount_in_consumed,
            result.amount_out,
            result.fee_amount,
            result.protocol_fee,
            result.next_sqrt_price,
        );
        Ok(result)
    }

    // ========================================================
    // PROTOCOL FEES
    // ========================================================

    /// Pay accrued protocol fees out to the registry admin
    pub fn claim_protocol_fees(env: Env, claimer: Address) -> Result<(u128, u128), PoolError> {
        claimer.require_auth();

        let mut pool = read_pool(&env).ok_or(PoolError::NotInitialized)?;
        let admin = Self::registry_admin(&env, &pool.registry)?;
        if claimer != admin {
            return Err(PoolError::Unauthorized);
        }

        let amount_a = pool.protocol_fee_a;
        let amount_b = pool.protocol_fee_b;
        pool.protocol_fee_a = 0;
        pool.protocol_fee_b = 0;
        write_pool(&env, &pool);

        let push_a = u128_to_i128_safe(amount_a)?;
        let push_b = u128_to_i128_safe(amount_b)?;
        if push_a > 0 {
            token::Client::new(&env, &pool.token_a).transfer(
                &env.current_contract_address(),
                &claimer,
                &push_a,
            );
        }
        if push_b > 0 {
            token::Client::new(&env, &pool.token_b).transfer(
                &env.current_contract_address(),
                &claimer,
                &push_b,
            );
        }

        emit_protocol_fees_claimed(&env, &claimer, amount_a, amount_b);
        Ok((amount_a, amount_b))
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Check if the pool is initialized
    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    /// Get the full pool state
    pub fn get_pool(env: Env) -> Result<Pool, PoolError> {
        read_pool(&env).ok_or(PoolError::NotInitialized)
    }

    /// Get a position by id
    pub fn get_position(env: Env, position_id: u64) -> Result<Position, PoolError> {
        read_position(&env, position_id).ok_or(PoolError::PositionNotFound)
    }

    /// Number of position ids issued so far
    pub fn get_position_count(env: Env) -> u64 {
        read_position_count(&env)
    }

    /// Effective fee numerator a swap arriving now would pay
    pub fn get_fee_rate(env: Env) -> Result<u64, PoolError> {
        let mut pool = read_pool(&env).ok_or(PoolError::NotInitialized)?;
        let now = current_point(&env, pool.activation_type);

        if let Some(dynamic) = &pool.pool_fees.dynamic_fee {
            update_references(&mut pool.volatility, dynamic, pool.sqrt_price, now);
        }
        let elapsed = now.saturating_sub(pool.activation_point);
        let rate = effective_fee_numerator(&pool.pool_fees, elapsed, &pool.volatility)?;
        Ok(rate)
    }

    /// Dry-run a swap against current state without executing it
    pub fn quote_swap(
        env: Env,
        token_in: Address,
        amount_in: u128,
    ) -> Result<SwapResult, PoolError> {
        if amount_in == 0 {
            return Err(PoolError::InvalidAmount);
        }

        let mut pool = read_pool(&env).ok_or(PoolError::NotInitialized)?;
        let now = Self::require_activated(&env, &pool)?;
        let a_to_b = Self::direction(&pool, &token_in)?;

        // Pool copy is discarded; only the result escapes
        swap::execute_swap(&env, &mut pool, a_to_b, amount_in, now)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Shared creation path for both initialize entry points
    #[allow(clippy::too_many_arguments)]
    fn internal_initialize(
        env: &Env,
        payer: &Address,
        creator: &Address,
        registry: &Address,
        config_id: u64,
        token_a: &Address,
        token_b: &Address,
        liquidity: u128,
        sqrt_price: u128,
        activation_point: Option<u64>,
        setup: EffectiveSetup,
    ) -> Result<u64, PoolError> {
        if token_a == token_b {
            return Err(PoolError::IdenticalMints);
        }
        if sqrt_price < setup.sqrt_min_price || sqrt_price > setup.sqrt_max_price {
            return Err(PoolError::InvalidPriceRange);
        }
        if liquidity < MIN_LP_AMOUNT {
            return Err(PoolError::InvalidAmount);
        }

        let now = current_point(env, setup.activation_type);
        let activation_point = match activation_point {
            Some(point) if point < now => return Err(PoolError::InvalidActivationPoint),
            Some(point) => point,
            None => now,
        };

        let (amount_a, amount_b) = get_initialize_amounts(
            env,
            liquidity,
            setup.sqrt_min_price,
            setup.sqrt_max_price,
            sqrt_price,
        )?;
        if amount_a == 0 && amount_b == 0 {
            return Err(PoolError::InvalidAmount);
        }

        let pool = Pool {
            registry: registry.clone(),
            config_id,
            token_a: token_a.clone(),
            token_b: token_b.clone(),
            sqrt_min_price: setup.sqrt_min_price,
            sqrt_max_price: setup.sqrt_max_price,
            sqrt_price,
            liquidity,
            fee_growth_global_a: 0,
            fee_growth_global_b: 0,
            protocol_fee_a: 0,
            protocol_fee_b: 0,
            pool_fees: setup.pool_fees,
            collect_fee_mode: setup.collect_fee_mode,
            activation_type: setup.activation_type,
            activation_point,
            creator: creator.clone(),
            version: 0,
            volatility: VolatilityTracker::new(sqrt_price, now),
        };
        write_pool(env, &pool);

        // The creator's seed position carries the whole starting liquidity
        let position_id = next_position_id(env);
        let mut position = Position::new(creator.clone(), 0, 0);
        position.liquidity = liquidity;
        write_position(env, position_id, &position);

        let pull_a = u128_to_i128_safe(amount_a)?;
        let pull_b = u128_to_i128_safe(amount_b)?;
        if pull_a > 0 {
            token::Client::new(env, token_a).transfer(
                payer,
                &env.current_contract_address(),
                &pull_a,
            );
        }
        if pull_b > 0 {
            token::Client::new(env, token_b).transfer(
                payer,
                &env.current_contract_address(),
                &pull_b,
            );
        }

        emit_pool_initialized(
            env,
            creator,
            token_a,
            token_b,
            sqrt_price,
            liquidity,
            activation_point,
        );
        emit_position_created(env, position_id, creator);
        Ok(position_id)
    }

    /// Resolve trade direction from the input token
    fn direction(pool: &Pool, token_in: &Address) -> Result<bool, PoolError> {
        if token_in == &pool.token_a {
            Ok(true)
        } else if token_in == &pool.token_b {
            Ok(false)
        } else {
            Err(PoolError::InvalidTokenIn)
        }
    }

    /// Activation gate; returns the current point on success
    fn require_activated(env: &Env, pool: &Pool) -> Result<u64, PoolError> {
        let now = current_point(env, pool.activation_type);
        if !is_activated(pool.activation_point, now) {
            return Err(PoolError::PoolNotActivated);
        }
        Ok(now)
    }

    /// Read a config from the registry contract
    fn fetch_config(env: &Env, registry: &Address, config_id: u64) -> Result<PoolConfig, PoolError> {
        let result = env.try_invoke_contract::<PoolConfig, soroban_sdk::Error>(
            registry,
            &Symbol::new(env, "get_config"),
            vec![env, config_id.into_val(env)],
        );
        match result {
            Ok(Ok(config)) => Ok(config),
            _ => Err(PoolError::ConfigNotFound),
        }
    }

    /// Ask the registry who its admin is
    fn registry_admin(env: &Env, registry: &Address) -> Result<Address, PoolError> {
        let result = env.try_invoke_contract::<Address, soroban_sdk::Error>(
            registry,
            &Symbol::new(env, "get_admin"),
            vec![env],
        );
        match result {
            Ok(Ok(admin)) => Ok(admin),
            _ => Err(PoolError::Unauthorized),
        }
    }
}
