//! # Types
//!
//! Shared data structures for the campaign ledger.
//!
//! ## Status is derived, never stored
//!
//! [`CampaignStatus`] is a pure function of the current ledger time, the
//! deadline, the custody balance and the goal:
//!
//! ```text
//! now <= deadline                      -> Funding
//! now >  deadline && balance >= goal   -> Successful
//! now >  deadline && balance <  goal   -> Failed
//! ```
//!
//! Every entry point that depends on the status calls [`CampaignStatus::derive`]
//! with fresh inputs, so there is no stored copy that could go stale.

use soroban_sdk::{contracttype, Address};

/// Length of the funding window added to the creation time (30 days).
pub const FUNDING_WINDOW_SECS: u64 = 30 * 24 * 60 * 60;

/// Goal used by the deployment script: 0.1 of a 7-decimal asset.
pub const DEFAULT_GOAL: i128 = 1_000_000;

/// Minimum contribution used by the deployment script: 0.001 of a 7-decimal asset.
pub const DEFAULT_MINIMUM_CONTRIBUTION: i128 = 10_000;

/// Lifecycle status of the campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Deadline not yet passed; contributions accepted.
    Funding,
    /// Deadline passed with the goal met; owner may claim.
    Successful,
    /// Deadline passed short of the goal; contributors may withdraw.
    Failed,
}

impl CampaignStatus {
    /// Classify the campaign from its inputs. Idempotent and side-effect free.
    pub fn derive(now: u64, deadline: u64, balance: i128, goal: i128) -> Self {
        if now <= deadline {
            CampaignStatus::Funding
        } else if balance >= goal {
            CampaignStatus::Successful
        } else {
            CampaignStatus::Failed
        }
    }
}

/// Immutable campaign configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Creator of the campaign and sole claimant on success.
    pub owner: Address,
    /// Token contract that holds the contributed funds.
    pub token: Address,
    /// Target amount in the token's smallest unit.
    pub goal: i128,
    /// Smallest accepted single contribution.
    pub minimum_contribution: i128,
    /// Ledger timestamp at construction.
    pub created_at: u64,
    /// `created_at + FUNDING_WINDOW_SECS`.
    pub deadline: u64,
}
