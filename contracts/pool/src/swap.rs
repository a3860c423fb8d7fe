// Swap pipeline shared by execution and quoting

use soroban_sdk::Env;

use mantaswap_curve::compute_swap_step;
use mantaswap_fees::{
    effective_fee_numerator, gross_amount_for_net, split_fees, update_references,
    update_volatility_accumulator, FeeMode,
};
use mantaswap_math::{shl_div, Rounding, Q128_SCALE};

use crate::error::PoolError;
use crate::types::{Pool, SwapResult};

/// Run one swap against the pool
///
/// Mutates `pool` in place: price, fee accumulators, protocol balances and
/// the volatility tracker all advance. The caller decides whether the
/// mutation is persisted (swap) or discarded (quote).
pub fn execute_swap(
    env: &Env,
    pool: &mut Pool,
    a_to_b: bool,
    amount_in: u128,
    now: u64,
) -> Result<SwapResult, PoolError> {
    if pool.liquidity == 0 {
        return Err(PoolError::InsufficientLiquidity);
    }

    if let Some(dynamic) = &pool.pool_fees.dynamic_fee {
        update_references(&mut pool.volatility, dynamic, pool.sqrt_price, now);
    }

    // The fee a trade pays reflects volatility accumulated by earlier swaps;
    // this trade's own excursion is folded in afterwards.
    let elapsed = now.saturating_sub(pool.activation_point);
    let fee_numerator = effective_fee_numerator(&pool.pool_fees, elapsed, &pool.volatility)?;
    let fee_mode = FeeMode::resolve(pool.collect_fee_mode, a_to_b);
    let protocol_percent = pool.pool_fees.protocol_fee_percent;

    let target = if a_to_b {
        pool.sqrt_min_price
    } else {
        pool.sqrt_max_price
    };

    let (amount_in_consumed, amount_out, lp_fee, protocol_fee, next_sqrt_price) =
        if fee_mode.fees_on_input {
            let full = split_fees(env, amount_in, fee_numerator, protocol_percent)?;
            let step = compute_swap_step(
                env,
                pool.sqrt_price,
                target,
                pool.liquidity,
                full.net_amount,
                a_to_b,
            )?;
            if step.amount_in_consumed == full.net_amount {
                (
                    amount_in,
                    step.amount_out,
                    full.lp_fee,
                    full.protocol_fee,
                    step.next_sqrt_price,
                )
            } else {
                // Stopped at the pool bound: the fee applies only to the
                // gross input whose net part the curve absorbed.
                let gross = gross_amount_for_net(env, step.amount_in_consumed, fee_numerator)?;
                let part = split_fees(env, gross, fee_numerator, protocol_percent)?;
                (
                    gross,
                    step.amount_out,
                    part.lp_fee,
                    part.protocol_fee,
                    step.next_sqrt_price,
                )
            }
        } else {
            let step = compute_swap_step(
                env,
                pool.sqrt_price,
                target,
                pool.liquidity,
                amount_in,
                a_to_b,
            )?;
            let split = split_fees(env, step.amount_out, fee_numerator, protocol_percent)?;
            (
                step.amount_in_consumed,
                split.net_amount,
                split.lp_fee,
                split.protocol_fee,
                step.next_sqrt_price,
            )
        };

    // LP share becomes per-liquidity growth in the fee token
    if lp_fee > 0 {
        let growth = shl_div(env, lp_fee, Q128_SCALE, pool.liquidity, Rounding::Down)?;
        if fee_mode.fees_on_token_a {
            pool.fee_growth_global_a = pool
                .fee_growth_global_a
                .checked_add(growth)
                .ok_or(PoolError::ArithmeticOverflow)?;
        } else {
            pool.fee_growth_global_b = pool
                .fee_growth_global_b
                .checked_add(growth)
                .ok_or(PoolError::ArithmeticOverflow)?;
        }
    }
    if fee_mode.fees_on_token_a {
        pool.protocol_fee_a = pool
            .protocol_fee_a
            .checked_add(protocol_fee)
            .ok_or(PoolError::ArithmeticOverflow)?;
    } else {
        pool.protocol_fee_b = pool
            .protocol_fee_b
            .checked_add(protocol_fee)
            .ok_or(PoolError::ArithmeticOverflow)?;
    }

    pool.sqrt_price = next_sqrt_price;

    if let Some(dynamic) = &pool.pool_fees.dynamic_fee {
        update_volatility_accumulator(env, &mut pool.volatility, dynamic, pool.sqrt_price)?;
    }

    Ok(SwapResult {
        amount_in_consumed,
        amount_out,
        fee_amount: lp_fee + protocol_fee,
        protocol_fee,
        unfilled_in: amount_in - amount_in_consumed,
        next_sqrt_price,
    })
}
