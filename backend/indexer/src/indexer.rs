//! Long-running background task that polls the Soroban RPC and writes
//! decoded campaign ledger events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::errors::Result;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Poll until `shutdown` is cancelled. Poll errors are logged and retried on
/// the next tick; they never stop the loop.
pub async fn run(state: Arc<IndexerState>, shutdown: CancellationToken) {
    info!("Indexer starting — contract: {}", state.config.contract_id);

    let (last_ledger, saved_cursor) = match db::load_cursor(&state.pool).await {
        Ok(saved) => saved,
        Err(e) => {
            error!("Could not read saved cursor, starting fresh: {e}");
            (0, None)
        }
    };

    let mut current_ledger = resume_ledger(last_ledger, state.config.start_ledger);
    let mut cursor = saved_cursor;

    info!("Resuming from ledger {current_ledger}");

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            polled = poll_once(&state, current_ledger, cursor.as_deref()) => match polled {
                Ok((next_ledger, next_cursor)) => {
                    current_ledger = next_ledger;
                    cursor = next_cursor;
                }
                Err(e) => error!("Indexer poll error: {e}"),
            },
        }

        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)) => {}
        }
    }

    info!("Indexer stopped at ledger {current_ledger}");
}

/// One poll iteration. Returns `(next_start_ledger, next_cursor)`.
async fn poll_once(
    state: &IndexerState,
    start_ledger: u32,
    cursor: Option<&str>,
) -> Result<(u32, Option<String>)> {
    let config = &state.config;
    let page = rpc::fetch_events(
        &state.client,
        &config.rpc_url,
        &config.contract_id,
        start_ledger,
        cursor,
        config.events_per_page,
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events, &config.contract_id);
        let inserted = db::insert_events(&state.pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            page.events.len(),
            inserted
        );
    }

    let next_ledger = next_start_ledger(start_ledger, page.latest_ledger);

    // Persist before returning so a restart resumes from the same point.
    db::save_cursor(&state.pool, next_ledger as i64, page.cursor.as_deref()).await?;

    Ok((next_ledger, page.cursor))
}

/// Ledger to resume from: the saved one when it is a valid ledger number,
/// otherwise the configured start.
fn resume_ledger(saved_ledger: i64, configured_start: u32) -> u32 {
    if saved_ledger <= 0 {
        return configured_start;
    }
    u32::try_from(saved_ledger).unwrap_or(configured_start)
}

/// The start ledger only moves forward.
fn next_start_ledger(start_ledger: u32, latest_ledger: Option<u64>) -> u32 {
    latest_ledger
        .map(|l| (l.min(u32::MAX as u64) as u32).max(start_ledger))
        .unwrap_or(start_ledger)
}
