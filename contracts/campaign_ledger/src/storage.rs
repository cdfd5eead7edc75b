//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key        | Type       | Description                          |
//! |------------|------------|--------------------------------------|
//! | `Campaign` | `Campaign` | Immutable configuration              |
//! | `Claimed`  | `bool`     | Set once the owner has been paid     |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type   | Description                          |
//! |-------------------------|--------|--------------------------------------|
//! | `Contribution(address)` | `i128` | Cumulative, non-withdrawn amount     |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//! Withdrawn entries are kept at zero rather than removed; a missing entry
//! reads as zero. Once `Claimed` is set every entry reads as zero: the owner
//! has received those funds.
//!
//! The custody balance is not stored here at all: it is whatever the token
//! contract reports for the ledger's own address.

use soroban_sdk::{contracttype, token, Address, Env};

use crate::types::Campaign;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable campaign configuration (Instance).
    Campaign,
    /// Owner payout completed (Instance).
    Claimed,
    /// Per-contributor cumulative amount (Persistent).
    Contribution(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Store the campaign configuration. Only the constructor calls this.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    bump_instance(env);
}

/// Load the campaign configuration.
///
/// The constructor always writes it, so a missing entry means the contract
/// was never constructed; that is a deployment bug, not a caller error.
pub fn load_campaign(env: &Env) -> Campaign {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .expect("campaign not constructed")
}

pub fn is_claimed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Claimed)
        .unwrap_or(false)
}

pub fn set_claimed(env: &Env, claimed: bool) {
    env.storage().instance().set(&DataKey::Claimed, &claimed);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Cumulative amount tracked for `contributor`; zero if never seen or if
/// the balance has already been claimed.
pub fn load_contribution(env: &Env, contributor: &Address) -> i128 {
    if is_claimed(env) {
        return 0;
    }
    let key = DataKey::Contribution(contributor.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Overwrite the tracked amount for `contributor`.
pub fn save_contribution(env: &Env, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ── Custody ──────────────────────────────────────────────────────────

/// Token balance currently held by this contract.
pub fn custody_balance(env: &Env, campaign: &Campaign) -> i128 {
    token::Client::new(env, &campaign.token).balance(&env.current_contract_address())
}
