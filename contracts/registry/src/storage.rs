// Registry storage module for MantaSwap

use soroban_sdk::{contracttype, Address, Env};

use mantaswap_config::PoolConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Registry admin
    Admin,
    /// Pool config by id
    Config(u64),
    /// Number of live configs
    ConfigCount,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// ADMIN
// ============================================================

// Presence of the admin key doubles as the initialization flag.

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

// ============================================================
// CONFIG ENTRIES
// ============================================================

pub fn has_config(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Config(id))
}

pub fn write_config(env: &Env, id: u64, config: &PoolConfig) {
    let key = DataKey::Config(id);
    env.storage().persistent().set(&key, config);
    extend_ttl(env, &key);
}

pub fn read_config(env: &Env, id: u64) -> Option<PoolConfig> {
    let key = DataKey::Config(id);
    let config = env.storage().persistent().get(&key);
    if config.is_some() {
        extend_ttl(env, &key);
    }
    config
}

pub fn remove_config(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Config(id));
}

// ============================================================
// CONFIG COUNT
// ============================================================

pub fn read_config_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::ConfigCount).unwrap_or(0)
}

pub fn write_config_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ConfigCount, &count);
    extend_instance_ttl(env);
}
