#![cfg(test)]

use crate::payroll::{
    PayrollEngineContract, PayrollEngineContractClient, PayrollError, SECONDS_PER_DAY,
};
use soroban_sdk::token::{StellarAssetClient as TokenAdmin, TokenClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    vec, Address, Env, IntoVal, Symbol,
};

fn setup_token(env: &Env) -> (Address, TokenAdmin) {
    let token_admin = Address::generate(env);
    let token_contract_id = env.register_stellar_asset_contract_v2(token_admin.clone());
    (
        token_contract_id.address(),
        TokenAdmin::new(env, &token_contract_id.address()),
    )
}

fn setup<'a>(env: &Env) -> (Address, PayrollEngineContractClient<'a>, Address) {
    let contract_id = env.register(PayrollEngineContract, ());
    let client = PayrollEngineContractClient::new(env, &contract_id);

    let owner = Address::generate(env);
    let native_token = Address::generate(env);

    env.mock_all_auths();
    client.initialize(&owner, &native_token);

    (contract_id, client, owner)
}

fn advance(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

#[test]
fn test_execute_payment_transfers_and_advances_schedule() {
    let env = Env::default();
    let (contract_id, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let employee = Address::generate(&env);
    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &5_000i128);

    client.add_employee(&owner, &employee, &1_000i128, &token_address, &30u32);
    advance(&env, 30 * SECONDS_PER_DAY);

    client.execute_payment(&employee);

    let token_client = TokenClient::new(&env, &token_address);
    assert_eq!(token_client.balance(&employee), 1_000);
    assert_eq!(token_client.balance(&contract_id), 4_000);

    let record = client.get_employee(&employee).unwrap();
    assert_eq!(record.last_payment_time, env.ledger().timestamp());
    assert!(!client.is_payment_due(&employee));
}

#[test]
fn test_execute_payment_emits_event() {
    let env = Env::default();
    let (contract_id, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let employee = Address::generate(&env);
    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &5_000i128);
    client.add_employee(&owner, &employee, &1_000i128, &token_address, &30u32);
    advance(&env, 30 * SECONDS_PER_DAY);

    client.execute_payment(&employee);

    let events = env.events().all();
    let event = events.last().unwrap();
    assert_eq!(event.0, contract_id);
    let expected_topics: soroban_sdk::Vec<soroban_sdk::Val> =
        (Symbol::new(&env, "PaymentExecuted"),).into_val(&env);
    assert_eq!(event.1, expected_topics);
}

#[test]
fn test_double_execute_settles_exactly_once() {
    let env = Env::default();
    let (contract_id, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let employee = Address::generate(&env);
    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &5_000i128);
    client.add_employee(&owner, &employee, &1_000i128, &token_address, &30u32);
    advance(&env, 30 * SECONDS_PER_DAY);

    client.execute_payment(&employee);

    // The period is settled; a racing second call loses.
    let second = client.try_execute_payment(&employee);
    assert_eq!(second, Err(Ok(PayrollError::PaymentNotDue)));

    let token_client = TokenClient::new(&env, &token_address);
    assert_eq!(token_client.balance(&employee), 1_000);
    assert_eq!(token_client.balance(&contract_id), 4_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #9)")]
fn test_execute_payment_not_due() {
    let env = Env::default();
    let (_, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let employee = Address::generate(&env);
    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &5_000i128);
    client.add_employee(&owner, &employee, &1_000i128, &token_address, &30u32);

    client.execute_payment(&employee);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #5)")]
fn test_execute_payment_unknown_employee() {
    let env = Env::default();
    let (_, client, _) = setup(&env);

    let stranger = Address::generate(&env);
    client.execute_payment(&stranger);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #10)")]
fn test_execute_payment_insufficient_funds() {
    let env = Env::default();
    let (_, client, owner) = setup(&env);
    let (token_address, _) = setup_token(&env);

    let employee = Address::generate(&env);
    client.add_employee(&owner, &employee, &1_000i128, &token_address, &30u32);
    advance(&env, 30 * SECONDS_PER_DAY);

    client.execute_payment(&employee);
}

#[test]
fn test_execute_all_pays_due_and_skips_underfunded() {
    let env = Env::default();
    let (contract_id, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let whale = Address::generate(&env);
    let minnow = Address::generate(&env);

    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &500i128);

    // Registry order puts the unaffordable employee first; the sweep
    // must still reach the affordable one behind them.
    client.add_employee(&owner, &whale, &10_000i128, &token_address, &30u32);
    client.add_employee(&owner, &minnow, &100i128, &token_address, &30u32);
    advance(&env, 30 * SECONDS_PER_DAY);

    let whale_before = client.get_employee(&whale).unwrap();
    let paid = client.execute_all_payments();
    assert_eq!(paid, 1);

    let token_client = TokenClient::new(&env, &token_address);
    assert_eq!(token_client.balance(&minnow), 100);
    assert_eq!(token_client.balance(&whale), 0);
    assert_eq!(token_client.balance(&contract_id), 400);

    // The skipped employee's schedule is untouched and still due.
    let whale_after = client.get_employee(&whale).unwrap();
    assert_eq!(whale_after.last_payment_time, whale_before.last_payment_time);
    assert!(client.is_payment_due(&whale));
}

#[test]
fn test_execute_all_with_nothing_due() {
    let env = Env::default();
    let (_, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let employee = Address::generate(&env);
    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &5_000i128);
    client.add_employee(&owner, &employee, &1_000i128, &token_address, &30u32);

    assert_eq!(client.execute_all_payments(), 0);
}

#[test]
fn test_execute_all_skips_paused_employee() {
    let env = Env::default();
    let (_, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let active = Address::generate(&env);
    let paused = Address::generate(&env);

    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &5_000i128);
    client.add_employee(&owner, &active, &100i128, &token_address, &7u32);
    client.add_employee(&owner, &paused, &100i128, &token_address, &7u32);
    client.pause_employee(&owner, &paused);

    advance(&env, 7 * SECONDS_PER_DAY);

    assert_eq!(client.execute_all_payments(), 1);

    let token_client = TokenClient::new(&env, &token_address);
    assert_eq!(token_client.balance(&active), 100);
    assert_eq!(token_client.balance(&paused), 0);
}

#[test]
fn test_execute_batch_over_subset() {
    let env = Env::default();
    let (_, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let first = Address::generate(&env);
    let second = Address::generate(&env);
    let third = Address::generate(&env);
    let stranger = Address::generate(&env);

    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &5_000i128);
    client.add_employee(&owner, &first, &100i128, &token_address, &7u32);
    client.add_employee(&owner, &second, &100i128, &token_address, &7u32);
    client.add_employee(&owner, &third, &100i128, &token_address, &7u32);

    advance(&env, 7 * SECONDS_PER_DAY);

    // Unknown addresses in the batch are ignored, not errors.
    let batch = vec![&env, first.clone(), third.clone(), stranger.clone()];
    let paid = client.execute_batch_payments(&batch);
    assert_eq!(paid, 2);

    let token_client = TokenClient::new(&env, &token_address);
    assert_eq!(token_client.balance(&first), 100);
    assert_eq!(token_client.balance(&second), 0);
    assert_eq!(token_client.balance(&third), 100);

    // The untouched employee is still due for a later run.
    assert!(client.is_payment_due(&second));
}

#[test]
fn test_sweep_then_single_execution_consistency() {
    let env = Env::default();
    let (_, client, owner) = setup(&env);
    let (token_address, token_admin) = setup_token(&env);

    let employee = Address::generate(&env);
    token_admin.mint(&owner, &10_000);
    client.deposit_tokens(&owner, &token_address, &5_000i128);
    client.add_employee(&owner, &employee, &1_000i128, &token_address, &7u32);

    advance(&env, 7 * SECONDS_PER_DAY);
    assert_eq!(client.execute_all_payments(), 1);

    // A sweep right after pays nobody; the interval restarts.
    assert_eq!(client.execute_all_payments(), 0);

    advance(&env, 7 * SECONDS_PER_DAY);
    assert_eq!(client.execute_all_payments(), 1);

    let token_client = TokenClient::new(&env, &token_address);
    assert_eq!(token_client.balance(&employee), 2_000);
}
