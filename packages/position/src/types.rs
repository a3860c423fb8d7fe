use soroban_sdk::{contracttype, Address};

/// A single full-range liquidity position inside a pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub owner: Address,
    /// Q64.64-scaled share of the pool's aggregate liquidity
    pub liquidity: u128,
    pub fee_growth_checkpoint_a: u128,
    pub fee_growth_checkpoint_b: u128,
    pub tokens_owed_a: u128,
    pub tokens_owed_b: u128,
}

impl Position {
    /// Empty position checkpointed at the current global accumulators
    pub fn new(
        owner: Address,
        fee_growth_global_a: u128,
        fee_growth_global_b: u128,
    ) -> Self {
        Self {
            owner,
            liquidity: 0,
            fee_growth_checkpoint_a: fee_growth_global_a,
            fee_growth_checkpoint_b: fee_growth_global_b,
            tokens_owed_a: 0,
            tokens_owed_b: 0,
        }
    }
}

/// Position ledger failures
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PositionError {
    /// A checkpoint ran ahead of its global accumulator
    StaleCheckpoint,
    InsufficientLiquidity,
    Overflow,
}
