//! # Campaign Ledger Contract
//!
//! A single-campaign fundraising ledger. Contributions are accepted toward a
//! fixed goal for a fixed 30-day window; afterwards the campaign resolves to
//! either an owner payout or contributor refunds.
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | `__constructor`                                  |
//! | Funding      | [`CampaignLedger::contribute`], `receive`        |
//! | Resolution   | [`CampaignLedger::claim`], [`CampaignLedger::withdraw`] |
//! | Rejection    | `fallback`                                       |
//! | Queries      | `balance`, `contribution_of`, `status`, `get_campaign`, ... |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`], event publication to
//! [`events`]. The status rule lives in [`types::CampaignStatus::derive`]
//! and is evaluated afresh by every entry point that needs it.
//!
//! Outgoing transfers go through the token's fallible `try_transfer`. The
//! contributor entry is zeroed before a refund leaves the contract and
//! restored if the token rejects it, so a failed operation leaves no trace.
//! A claim settles every contribution entry at once: afterwards they all read
//! as zero and no former contributor can withdraw.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, token, Address, Env, Symbol,
};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use storage::{
    custody_balance, load_campaign, load_contribution, save_campaign, save_contribution,
    set_claimed,
};
pub use types::{
    Campaign, CampaignStatus, DEFAULT_GOAL, DEFAULT_MINIMUM_CONTRIBUTION, FUNDING_WINDOW_SECS,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contribution attempted after the deadline.
    NotOpen = 1,
    /// Contribution smaller than the configured minimum.
    BelowMinimum = 2,
    /// Claim attempted by someone other than the owner.
    NotOwner = 3,
    /// Claim attempted while the campaign is not `Successful`.
    GoalNotMet = 4,
    /// Claim attempted with nothing held.
    NothingToClaim = 5,
    /// Withdrawal attempted after the campaign succeeded.
    CampaignSucceeded = 6,
    /// Withdrawal attempted with no tracked contribution.
    NothingToWithdraw = 7,
    /// The token contract refused the transfer.
    TransferFailed = 8,
    /// Call to an operation the ledger does not define.
    InvalidOperation = 9,
    /// Negative goal or minimum, or a deadline that does not fit in `u64`.
    InvalidParameters = 10,
}

#[contract]
pub struct CampaignLedger;

#[contractimpl]
impl CampaignLedger {
    // ─────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────

    /// Create the campaign. `owner` must authorise and becomes the sole claimant.
    ///
    /// The deadline is fixed here at `now + FUNDING_WINDOW_SECS` and never changes.
    pub fn __constructor(
        env: Env,
        owner: Address,
        token: Address,
        goal: i128,
        minimum_contribution: i128,
    ) {
        owner.require_auth();

        if goal < 0 || minimum_contribution < 0 {
            panic_with_error!(&env, Error::InvalidParameters);
        }

        let created_at = env.ledger().timestamp();
        let deadline = match created_at.checked_add(FUNDING_WINDOW_SECS) {
            Some(deadline) => deadline,
            None => panic_with_error!(&env, Error::InvalidParameters),
        };

        save_campaign(
            &env,
            &Campaign {
                owner,
                token,
                goal,
                minimum_contribution,
                created_at,
                deadline,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` from `contributor` while the campaign is open.
    ///
    /// There is no cap: the balance may exceed the goal.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), Error> {
        contributor.require_auth();
        Self::accept_contribution(&env, contributor, amount)
    }

    /// Bare deposit with no operation attached. Treated exactly like
    /// [`CampaignLedger::contribute`] from `from`.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::accept_contribution(&env, from, amount)
    }

    /// Catch-all for undefined operations. Always rejects and never takes
    /// custody of `amount`. The caller is not authenticated and not logged.
    pub fn fallback(
        env: Env,
        _caller: Address,
        operation: Symbol,
        amount: i128,
    ) -> Result<(), Error> {
        log!(&env, "rejected undefined operation", operation, amount);
        Err(Error::InvalidOperation)
    }

    // ─────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────

    /// Transfer the whole balance to the owner once the campaign succeeded.
    ///
    /// A second claim finds either a `Failed` campaign (balance now below the
    /// goal) or, for a zero goal, an empty balance; both are rejected.
    /// Contribution entries read as zero from then on.
    pub fn claim(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let campaign = load_campaign(&env);
        if caller != campaign.owner {
            return Err(Error::NotOwner);
        }

        let balance = custody_balance(&env, &campaign);
        if Self::status_for(&env, &campaign, balance) != CampaignStatus::Successful {
            return Err(Error::GoalNotMet);
        }
        if balance <= 0 {
            return Err(Error::NothingToClaim);
        }

        // Settle every contribution entry before the tokens leave.
        set_claimed(&env, true);
        if let Err(e) = Self::transfer_out(&env, &campaign.token, &campaign.owner, balance) {
            set_claimed(&env, false);
            return Err(e);
        }

        events::emit_funds_claimed(&env, campaign.owner, balance);
        Ok(balance)
    }

    /// Refund the caller's whole tracked contribution.
    ///
    /// Allowed while funding and after failure; rejected once successful.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let campaign = load_campaign(&env);
        let balance = custody_balance(&env, &campaign);
        if Self::status_for(&env, &campaign, balance) == CampaignStatus::Successful {
            return Err(Error::CampaignSucceeded);
        }

        let amount = load_contribution(&env, &caller);
        if amount <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        // Debit before the tokens leave; restore if the token refuses.
        save_contribution(&env, &caller, 0);
        if let Err(e) = Self::transfer_out(&env, &campaign.token, &caller, amount) {
            save_contribution(&env, &caller, amount);
            return Err(e);
        }

        events::emit_withdraw_claimed(&env, caller, amount);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Tokens currently held by the ledger.
    pub fn balance(env: Env) -> i128 {
        let campaign = load_campaign(&env);
        custody_balance(&env, &campaign)
    }

    /// Tracked contribution of `contributor`; zero if never contributed.
    pub fn contribution_of(env: Env, contributor: Address) -> i128 {
        load_contribution(&env, &contributor)
    }

    /// Current status, computed from the ledger time and balance.
    pub fn status(env: Env) -> CampaignStatus {
        let campaign = load_campaign(&env);
        let balance = custody_balance(&env, &campaign);
        Self::status_for(&env, &campaign, balance)
    }

    pub fn get_campaign(env: Env) -> Campaign {
        load_campaign(&env)
    }

    pub fn owner(env: Env) -> Address {
        load_campaign(&env).owner
    }

    pub fn token(env: Env) -> Address {
        load_campaign(&env).token
    }

    pub fn goal(env: Env) -> i128 {
        load_campaign(&env).goal
    }

    pub fn minimum_contribution(env: Env) -> i128 {
        load_campaign(&env).minimum_contribution
    }

    pub fn created_at(env: Env) -> u64 {
        load_campaign(&env).created_at
    }

    pub fn deadline(env: Env) -> u64 {
        load_campaign(&env).deadline
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn status_for(env: &Env, campaign: &Campaign, balance: i128) -> CampaignStatus {
        CampaignStatus::derive(
            env.ledger().timestamp(),
            campaign.deadline,
            balance,
            campaign.goal,
        )
    }

    fn accept_contribution(env: &Env, contributor: Address, amount: i128) -> Result<(), Error> {
        let campaign = load_campaign(env);
        let balance = custody_balance(env, &campaign);
        if Self::status_for(env, &campaign, balance) != CampaignStatus::Funding {
            return Err(Error::NotOpen);
        }
        if amount < campaign.minimum_contribution {
            return Err(Error::BelowMinimum);
        }

        let token_client = token::Client::new(env, &campaign.token);
        match token_client.try_transfer(&contributor, &env.current_contract_address(), &amount) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }

        let tracked = load_contribution(env, &contributor);
        save_contribution(env, &contributor, tracked + amount);

        events::emit_contribution_made(env, contributor, amount);
        Ok(())
    }

    fn transfer_out(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        let token_client = token::Client::new(env, token);
        match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }
}
