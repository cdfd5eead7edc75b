//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::errors::IndexerError;
use crate::events::{CampaignSummary, EventRecord};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ContributorEventsResponse {
    pub address: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for IndexerError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Build the API router over `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/contributors/:address/events", get(get_contributor_events))
        .route("/summary", get(get_summary))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /contributors/:address/events`
///
/// Contributions and refunds (or claims, for the owner) made by one address.
pub async fn get_contributor_events(
    State(state): State<Arc<ApiState>>,
    Path(address): Path<String>,
) -> Result<Json<ContributorEventsResponse>, IndexerError> {
    let events = db::get_events_for_actor(&state.pool, &address).await?;
    Ok(Json(ContributorEventsResponse {
        address,
        count: events.len(),
        events,
    }))
}

/// `GET /events`
pub async fn get_all_events(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<AllEventsResponse>, IndexerError> {
    let events = db::get_all_events(&state.pool).await?;
    Ok(Json(AllEventsResponse {
        count: events.len(),
        events,
    }))
}

/// `GET /summary`
///
/// Totals computed from indexed records. This is a mirror of the ledger's
/// activity, not a read of its live balance.
pub async fn get_summary(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<CampaignSummary>, IndexerError> {
    let events = db::get_all_events(&state.pool).await?;
    Ok(Json(CampaignSummary::from_records(&events)))
}
