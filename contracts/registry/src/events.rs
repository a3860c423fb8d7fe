//! Registry events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the registry is initialized
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "RegistryInit"),),
        (admin.clone(),),
    );
}

/// Emitted when a static config is registered
pub fn emit_config_created(
    env: &Env,
    id: u64,
    cliff_fee_numerator: u64,
    sqrt_min_price: u128,
    sqrt_max_price: u128,
) {
    env.events().publish(
        (Symbol::new(env, "ConfigCreated"),),
        (id, cliff_fee_numerator, sqrt_min_price, sqrt_max_price),
    );
}

/// Emitted when a dynamic config is registered
pub fn emit_dynamic_config_created(env: &Env, id: u64, pool_creator_authority: &Address) {
    env.events().publish(
        (Symbol::new(env, "DynConfigCreated"),),
        (id, pool_creator_authority.clone()),
    );
}

/// Emitted when a config is withdrawn from future use
pub fn emit_config_closed(env: &Env, id: u64) {
    env.events().publish(
        (Symbol::new(env, "ConfigClosed"),),
        (id,),
    );
}

/// Emitted when admin is updated
pub fn emit_admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "AdminUpdated"),),
        (old_admin.clone(), new_admin.clone()),
    );
}
