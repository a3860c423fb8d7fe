mod common;

use soroban_sdk::Env;

use mantaswap_fees::DynamicFee;
use mantaswap_registry::CreateConfigParams;

// ============================================================
// QUOTES
// ============================================================

#[test]
fn test_quote_matches_execution() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);

    let quote = client.quote_swap(&token_b, &1011);
    let result = client.swap(&trader, &token_b, &1011, &0);

    assert_eq!(quote, result);
}

#[test]
fn test_quote_leaves_state_untouched() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, _token_a, token_b) = common::setup_pool(&env);

    let before = client.get_pool();
    client.quote_swap(&token_b, &123_456);
    let after = client.get_pool();

    assert_eq!(before.sqrt_price, after.sqrt_price);
    assert_eq!(before.liquidity, after.liquidity);
    assert_eq!(before.fee_growth_global_a, after.fee_growth_global_a);
    assert_eq!(before.fee_growth_global_b, after.fee_growth_global_b);
    assert_eq!(before.protocol_fee_a, after.protocol_fee_a);
    assert_eq!(before.protocol_fee_b, after.protocol_fee_b);
}

#[test]
fn test_quote_reports_partial_fill() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, _token_a, token_b) = common::setup_custom_pool(
        &env,
        &common::narrow_config_params(),
        common::DEFAULT_LIQUIDITY,
        common::Q64,
    );

    let quote = client.quote_swap(&token_b, &5000);
    assert_eq!(quote.amount_in_consumed, 1011);
    assert_eq!(quote.unfilled_in, 3989);
    assert_eq!(quote.next_sqrt_price, 2 * common::Q64);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_quote_zero_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, _token_a, token_b) = common::setup_pool(&env);
    client.quote_swap(&token_b, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #300)")]
fn test_quote_invalid_token() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, creator, _admin, _token_a, _token_b) = common::setup_pool(&env);
    let stranger_token = common::create_token(&env, &creator);
    client.quote_swap(&stranger_token, &1000);
}

// ============================================================
// FEE RATE
// ============================================================

#[test]
fn test_fee_rate_flat() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, _token_a, _token_b) = common::setup_pool(&env);
    assert_eq!(client.get_fee_rate(), common::DEFAULT_CLIFF_FEE);
}

fn dynamic_fee_params() -> CreateConfigParams {
    let mut params = common::narrow_config_params();
    params.pool_fees.dynamic_fee = Some(DynamicFee {
        bin_step: 100, // 1%
        filter_period: 10,
        decay_period: 600,
        reduction_factor: 5000,
        variable_fee_control: 2_000_000,
        max_volatility_accumulator: 100_000,
    });
    params
}

#[test]
fn test_fee_rate_rises_with_volatility() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, token_a, token_b) = common::setup_custom_pool(
        &env,
        &dynamic_fee_params(),
        common::DEFAULT_LIQUIDITY,
        common::Q64,
    );
    let trader = common::funded_trader(&env, &token_a, &token_b);

    // Quiet pool pays the base rate
    assert_eq!(client.get_fee_rate(), common::DEFAULT_CLIFF_FEE);
    let first = client.swap(&trader, &token_b, &1000, &0);
    assert_eq!(first.fee_amount, 10);

    // A near-2x price excursion saturates the accumulator, pinning the
    // rate at the 50% cap
    assert_eq!(client.get_fee_rate(), 500_000_000);

    let quote = client.quote_swap(&token_b, &1000);
    assert!(quote.fee_amount > first.fee_amount);
    assert_eq!(quote.fee_amount, 500);
}

#[test]
fn test_volatile_swap_pays_more_than_first() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, token_a, token_b) = common::setup_custom_pool(
        &env,
        &dynamic_fee_params(),
        common::DEFAULT_LIQUIDITY,
        common::Q64,
    );
    let trader = common::funded_trader(&env, &token_a, &token_b);

    let first = client.swap(&trader, &token_b, &1000, &0);
    let second = client.swap(&trader, &token_a, &1000, &0);
    assert!(second.fee_amount > first.fee_amount);
}
