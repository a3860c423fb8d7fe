mod common;

use soroban_sdk::{testutils::Address as _, Address, Env};

// ============================================================
// POSITION FEE CLAIMS
// ============================================================
//
// The 1011-unit swap pattern: 1% fee on gross 1011 is 11, of which the
// protocol keeps 2 and LPs earn 9. Spread over 1000 Q64 units of
// liquidity the sole position collects 8, the floor of its share.

#[test]
fn test_claim_fees_pays_position() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, creator, _admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &1011, &0);

    let balance_before = common::balance(&env, &token_b, &creator);
    let (amount_a, amount_b) = client.claim_fees(&creator, &0);
    assert_eq!(amount_a, 0);
    assert_eq!(amount_b, 8);
    assert_eq!(
        common::balance(&env, &token_b, &creator),
        balance_before + 8
    );

    let position = client.get_position(&0);
    assert_eq!(position.tokens_owed_a, 0);
    assert_eq!(position.tokens_owed_b, 0);
}

#[test]
fn test_claim_fees_idempotent() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, creator, _admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &1011, &0);

    client.claim_fees(&creator, &0);
    let (amount_a, amount_b) = client.claim_fees(&creator, &0);
    assert_eq!((amount_a, amount_b), (0, 0));
}

#[test]
fn test_fees_split_pro_rata() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, creator, _admin, token_a, token_b) = common::setup_pool(&env);
    let lp = common::funded_trader(&env, &token_a, &token_b);
    let position_id = client.create_position(&lp);
    client.add_liquidity(&lp, &position_id, &common::DEFAULT_LIQUIDITY, &1000, &1000);

    // Two equal positions split the 17-unit LP fee evenly, dust floored
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &2022, &0);

    let (_, creator_fee) = client.claim_fees(&creator, &0);
    let (_, lp_fee) = client.claim_fees(&lp, &position_id);
    assert_eq!(creator_fee, 8);
    assert_eq!(lp_fee, 8);
}

#[test]
fn test_new_position_starts_clean() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &1011, &0);

    // Opened after the swap: checkpointed at the raised accumulator
    let lp = common::funded_trader(&env, &token_a, &token_b);
    let position_id = client.create_position(&lp);
    let (amount_a, amount_b) = client.claim_fees(&lp, &position_id);
    assert_eq!((amount_a, amount_b), (0, 0));
}

#[test]
fn test_fees_survive_liquidity_changes() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, creator, _admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &1011, &0);

    // Settling on the liquidity change banks the owed amount
    client.add_liquidity(&creator, &0, &common::Q64, &10, &10);
    let (amount_a, amount_b) = client.claim_fees(&creator, &0);
    assert_eq!(amount_a, 0);
    assert_eq!(amount_b, 8);
}

#[test]
#[should_panic(expected = "Error(Contract, #700)")]
fn test_claim_fees_not_owner() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, _admin, _token_a, _token_b) = common::setup_pool(&env);
    let outsider = Address::generate(&env);
    client.claim_fees(&outsider, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #600)")]
fn test_claim_fees_missing_position() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, creator, _admin, _token_a, _token_b) = common::setup_pool(&env);
    client.claim_fees(&creator, &17);
}

// ============================================================
// PROTOCOL FEE CLAIMS
// ============================================================

#[test]
fn test_protocol_fees_to_registry_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &1011, &0);

    let (amount_a, amount_b) = client.claim_protocol_fees(&admin);
    assert_eq!((amount_a, amount_b), (0, 2));
    assert_eq!(common::balance(&env, &token_b, &admin), 2);

    let pool = client.get_pool();
    assert_eq!(pool.protocol_fee_a, 0);
    assert_eq!(pool.protocol_fee_b, 0);
}

#[test]
fn test_protocol_fees_claim_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &1011, &0);

    client.claim_protocol_fees(&admin);
    let (amount_a, amount_b) = client.claim_protocol_fees(&admin);
    assert_eq!((amount_a, amount_b), (0, 0));
}

#[test]
fn test_protocol_fees_accumulate_across_swaps() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _creator, admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &1011, &0);
    client.swap(&trader, &token_a, &1011, &0);

    let (amount_a, amount_b) = client.claim_protocol_fees(&admin);
    assert_eq!(amount_a, 2);
    assert_eq!(amount_b, 2);
}

#[test]
#[should_panic(expected = "Error(Contract, #700)")]
fn test_protocol_fees_not_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, creator, _admin, token_a, token_b) = common::setup_pool(&env);
    let trader = common::funded_trader(&env, &token_a, &token_b);
    client.swap(&trader, &token_b, &1011, &0);

    client.claim_protocol_fees(&creator);
}
