//! Event types emitted by the campaign ledger contract.
//!
//! These mirror the records published from `contracts/campaign_ledger/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the campaign ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Tokens were contributed (`contrib` topic).
    ContributionMade,
    /// The owner claimed the balance (`claimed` topic).
    FundsClaimed,
    /// A contributor was refunded (`withdrawn` topic).
    WithdrawClaimed,
    /// An event from this contract that we don't recognise.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "contrib" => Self::ContributionMade,
            "claimed" => Self::FundsClaimed,
            "withdrawn" => Self::WithdrawClaimed,
            _ => Self::Unknown,
        }
    }

    /// Identifier stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContributionMade => "contribution_made",
            Self::FundsClaimed => "funds_claimed",
            Self::WithdrawClaimed => "withdraw_claimed",
            Self::Unknown => "unknown",
        }
    }

    /// Inverse of [`EventKind::as_str`].
    pub fn from_stored(event_type: &str) -> Self {
        match event_type {
            "contribution_made" => Self::ContributionMade,
            "funds_claimed" => Self::FundsClaimed,
            "withdraw_claimed" => Self::WithdrawClaimed,
            _ => Self::Unknown,
        }
    }

    /// Name of the payload field holding the acting address.
    pub fn actor_field(&self) -> Option<&'static str> {
        match self {
            Self::ContributionMade | Self::WithdrawClaimed => Some("contributor"),
            Self::FundsClaimed => Some("owner"),
            Self::Unknown => None,
        }
    }
}

/// A decoded ledger event, ready to be stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignEvent {
    pub event_type: String,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event row as read back from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

/// Totals derived from indexed records only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CampaignSummary {
    pub contributed: i128,
    pub withdrawn: i128,
    pub claimed: i128,
    /// What the ledger should still hold from tracked activity.
    pub held: i128,
    pub contributors: usize,
}

impl CampaignSummary {
    /// Fold a sequence of records into totals. Rows with a missing or
    /// unparsable amount are skipped.
    pub fn from_records(records: &[EventRecord]) -> Self {
        let mut summary = Self::default();
        let mut seen = std::collections::HashSet::new();

        for record in records {
            let Some(amount) = record.amount.as_deref().and_then(|a| a.parse::<i128>().ok())
            else {
                continue;
            };
            match EventKind::from_stored(&record.event_type) {
                EventKind::ContributionMade => {
                    summary.contributed += amount;
                    if let Some(actor) = &record.actor {
                        seen.insert(actor.clone());
                    }
                }
                EventKind::WithdrawClaimed => summary.withdrawn += amount,
                EventKind::FundsClaimed => summary.claimed += amount,
                EventKind::Unknown => {}
            }
        }

        summary.held = summary.contributed - summary.withdrawn - summary.claimed;
        summary.contributors = seen.len();
        summary
    }
}
