extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use crate::events::{ContributionMade, FundsClaimed, WithdrawClaimed};
use crate::{CampaignLedger, CampaignLedgerClient, Error};

fn setup(goal: i128) -> (Env, CampaignLedgerClient<'static>, Address, token::StellarAssetClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let owner = Address::generate(&env);
    let issuer = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(issuer);
    let contract_id = env.register(CampaignLedger, (owner.clone(), sac.address(), goal, 100i128));
    let client = CampaignLedgerClient::new(&env, &contract_id);
    let token_admin = token::StellarAssetClient::new(&env, &sac.address());
    (env, client, owner, token_admin)
}

#[test]
fn test_contribution_made_event() {
    let (env, client, _, token_admin) = setup(10_000);
    let contributor = Address::generate(&env);
    token_admin.mint(&contributor, &1_000);

    client.contribute(&contributor, &1_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("contrib").into_val(&env),
        contributor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ContributionMade = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionMade {
            contributor: contributor.clone(),
            amount: 1_000,
        }
    );
}

#[test]
fn test_receive_emits_contribution_made() {
    let (env, client, _, token_admin) = setup(10_000);
    let contributor = Address::generate(&env);
    token_admin.mint(&contributor, &500);

    client.receive(&contributor, &500);

    let last_event = env.events().all().last().expect("No events found");
    let event_data: ContributionMade = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data.contributor, contributor);
    assert_eq!(event_data.amount, 500);
}

#[test]
fn test_funds_claimed_event() {
    let (env, client, owner, token_admin) = setup(1_000);
    let contributor = Address::generate(&env);
    token_admin.mint(&contributor, &1_500);
    client.contribute(&contributor, &1_500);

    env.ledger().set_timestamp(client.deadline() + 1);
    client.claim(&owner);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        owner.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsClaimed {
            owner: owner.clone(),
            amount: 1_500,
        }
    );
}

#[test]
fn test_withdraw_claimed_event() {
    let (env, client, _, token_admin) = setup(10_000);
    let contributor = Address::generate(&env);
    token_admin.mint(&contributor, &700);
    client.contribute(&contributor, &700);

    client.withdraw(&contributor);

    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("withdrawn").into_val(&env),
        contributor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: WithdrawClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        WithdrawClaimed {
            contributor: contributor.clone(),
            amount: 700,
        }
    );
}

#[test]
fn test_rejected_operation_emits_no_ledger_event() {
    let (env, client, _, token_admin) = setup(10_000);
    let contributor = Address::generate(&env);
    token_admin.mint(&contributor, &1_000);

    let result = client.try_contribute(&contributor, &50);
    assert_eq!(result, Err(Ok(Error::BelowMinimum)));

    let ledger_events = env
        .events()
        .all()
        .iter()
        .filter(|e| e.0 == client.address)
        .count();
    assert_eq!(ledger_events, 0);
}
