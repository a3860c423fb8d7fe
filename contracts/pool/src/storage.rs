// Pool storage module for MantaSwap

use soroban_sdk::{contracttype, Env};

use crate::types::{Pool, Position};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Pool state
    Pool,
    /// Position by id
    Position(u64),
    /// Next position id to issue
    NextPositionId,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

/// Extend TTL for a persistent storage key
fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// POOL STATE
// ============================================================

/// Check if the pool is initialized
pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Pool)
}

/// Write pool state
pub fn write_pool(env: &Env, pool: &Pool) {
    env.storage().persistent().set(&DataKey::Pool, pool);
    extend_ttl(env, &DataKey::Pool);
}

/// Read pool state
pub fn read_pool(env: &Env) -> Option<Pool> {
    let result = env.storage().persistent().get(&DataKey::Pool);
    if result.is_some() {
        extend_ttl(env, &DataKey::Pool);
    }
    result
}

// ============================================================
// POSITIONS
// ============================================================

/// Write a position by id
pub fn write_position(env: &Env, id: u64, position: &Position) {
    let key = DataKey::Position(id);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}

/// Read a position by id
pub fn read_position(env: &Env, id: u64) -> Option<Position> {
    let key = DataKey::Position(id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

/// Delete a position entry
pub fn remove_position(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Position(id));
}

/// Issue the next sequential position id
pub fn next_position_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::NextPositionId)
        .unwrap_or(0);
    env.storage()
        .persistent()
        .set(&DataKey::NextPositionId, &(id + 1));
    extend_ttl(env, &DataKey::NextPositionId);
    id
}

/// Number of position ids issued so far
pub fn read_position_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::NextPositionId)
        .unwrap_or(0)
}
