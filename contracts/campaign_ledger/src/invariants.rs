#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, Env};

use crate::types::{Campaign, CampaignStatus};
use crate::CampaignLedgerClient;

/// INV-1: the deadline is always `created_at + FUNDING_WINDOW_SECS`.
pub fn assert_deadline_fixed(campaign: &Campaign) {
    assert_eq!(
        campaign.deadline,
        campaign.created_at + crate::FUNDING_WINDOW_SECS,
        "INV-1 violated: deadline {} is not created_at {} + window",
        campaign.deadline,
        campaign.created_at
    );
}

/// INV-2: the configuration never changes after construction.
pub fn assert_campaign_immutable(original: &Campaign, current: &Campaign) {
    assert_eq!(original, current, "INV-2 violated: campaign configuration changed");
}

/// INV-3: the reported status equals the rule applied to fresh inputs.
pub fn assert_status_follows_rule(env: &Env, client: &CampaignLedgerClient) {
    let campaign = client.get_campaign();
    let expected = CampaignStatus::derive(
        env.ledger().timestamp(),
        campaign.deadline,
        client.balance(),
        campaign.goal,
    );
    assert_eq!(
        client.status(),
        expected,
        "INV-3 violated: status diverged from the derivation rule"
    );
}

/// INV-4: a successful contribution moves the entry and the balance by `amount`.
pub fn assert_contribution_delta(
    entry_before: i128,
    entry_after: i128,
    balance_before: i128,
    balance_after: i128,
    amount: i128,
) {
    assert_eq!(
        entry_after,
        entry_before + amount,
        "INV-4 violated: entry {} + {} != {}",
        entry_before,
        amount,
        entry_after
    );
    assert_eq!(
        balance_after,
        balance_before + amount,
        "INV-4 violated: balance {} + {} != {}",
        balance_before,
        amount,
        balance_after
    );
}

/// INV-5: with no outside transfers, tracked entries sum to the balance.
pub fn assert_entries_match_balance(client: &CampaignLedgerClient, contributors: &[Address]) {
    let sum: i128 = contributors.iter().map(|c| client.contribution_of(c)).sum();
    assert_eq!(
        sum,
        client.balance(),
        "INV-5 violated: tracked entries {} != balance {}",
        sum,
        client.balance()
    );
}

/// INV-6: a rejected operation leaves balance and the given entries untouched.
pub fn assert_unchanged(
    client: &CampaignLedgerClient,
    balance_before: i128,
    entries_before: &[(Address, i128)],
) {
    assert_eq!(
        client.balance(),
        balance_before,
        "INV-6 violated: balance changed by a rejected operation"
    );
    for (who, amount) in entries_before {
        assert_eq!(
            client.contribution_of(who),
            *amount,
            "INV-6 violated: entry changed by a rejected operation"
        );
    }
}
