// Pool events module for MantaSwap
// All events use compact names to reduce storage/gas costs

use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the pool is created
/// Topics: ("PoolInit",)
/// Data: (creator, token_a, token_b, sqrt_price, liquidity, activation_point)
pub fn emit_pool_initialized(
    env: &Env,
    creator: &Address,
    token_a: &Address,
    token_b: &Address,
    sqrt_price: u128,
    liquidity: u128,
    activation_point: u64,
) {
    env.events().publish(
        (Symbol::new(env, "PoolInit"),),
        (
            creator.clone(),
            token_a.clone(),
            token_b.clone(),
            sqrt_price,
            liquidity,
            activation_point,
        ),
    );
}

/// Emitted when a position is opened
/// Topics: ("PosCreated",)
/// Data: (position_id, owner)
pub fn emit_position_created(env: &Env, position_id: u64, owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "PosCreated"),),
        (position_id, owner.clone()),
    );
}

/// Emitted when liquidity is added to a position
/// Topics: ("LiqAdded",)
/// Data: (position_id, liquidity_delta, amount_a, amount_b)
pub fn emit_liquidity_added(
    env: &Env,
    position_id: u64,
    liquidity_delta: u128,
    amount_a: u128,
    amount_b: u128,
) {
    env.events().publish(
        (Symbol::new(env, "LiqAdded"),),
        (position_id, liquidity_delta, amount_a, amount_b),
    );
}

/// Emitted when liquidity is removed from a position
/// Topics: ("LiqRemoved",)
/// Data: (position_id, liquidity_delta, amount_a, amount_b)
pub fn emit_liquidity_removed(
    env: &Env,
    position_id: u64,
    liquidity_delta: u128,
    amount_a: u128,
    amount_b: u128,
) {
    env.events().publish(
        (Symbol::new(env, "LiqRemoved"),),
        (position_id, liquidity_delta, amount_a, amount_b),
    );
}

/// Emitted after every executed swap
/// Topics: ("SwapExec",)
/// Data: (a_to_b, amount_in_consumed, amount_out, fee_amount, protocol_fee, next_sqrt_price)
pub fn emit_swap(
    env: &Env,
    a_to_b: bool,
    amount_in_consumed: u128,
    amount_out: u128,
    fee_amount: u128,
    protocol_fee: u128,
    next_sqrt_price: u128,
) {
    env.events().publish(
        (Symbol::new(env, "SwapExec"),),
        (
            a_to_b,
            amount_in_consumed,
            amount_out,
            fee_amount,
            protocol_fee,
            next_sqrt_price,
        ),
    );
}

/// Emitted when a position's accrued fees are paid out
/// Topics: ("FeesClaim",)
/// Data: (position_id, amount_a, amount_b)
pub fn emit_fees_claimed(env: &Env, position_id: u64, amount_a: u128, amount_b: u128) {
    env.events().publish(
        (Symbol::new(env, "FeesClaim"),),
        (position_id, amount_a, amount_b),
    );
}

/// Emitted when an empty position is closed
/// Topics: ("PosClosed",)
/// Data: (position_id, owner)
pub fn emit_position_closed(env: &Env, position_id: u64, owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "PosClosed"),),
        (position_id, owner.clone()),
    );
}

/// Emitted when the registry admin collects protocol fees
/// Topics: ("ProtoClaim",)
/// Data: (claimer, amount_a, amount_b)
pub fn emit_protocol_fees_claimed(env: &Env, claimer: &Address, amount_a: u128, amount_b: u128) {
    env.events().publish(
        (Symbol::new(env, "ProtoClaim"),),
        (claimer.clone(), amount_a, amount_b),
    );
}
