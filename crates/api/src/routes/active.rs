//! Active-session query endpoint handler.

use axum::{
    extract::{Path, State},
    Json,
};
use std::time::Instant;
use telemetry::metrics;
use tracing::{debug, error};

use crate::response::{ActiveSessionsResponse, ApiError};
use crate::state::AppState;

/// GET /active-users/:sellerId - Sessions active in the last 30 minutes.
///
/// Triggers the lazy expiry sweep as a side effect; a seller nobody has
/// ever heartbeated for yields an empty list, not an error.
pub async fn active_handler(
    State(state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<ActiveSessionsResponse>, ApiError> {
    let start = Instant::now();

    metrics().queries_received.inc();

    if seller_id.trim().is_empty() {
        metrics().queries_rejected.inc();
        return Err(ApiError::bad_request("Missing sellerId"));
    }

    let active = state.tracker.active_sessions(&seller_id).await.map_err(|e| {
        metrics().store_errors.inc();
        error!(seller_id = %seller_id, error = %e, "Failed to fetch active sessions");
        ApiError::from(e)
    })?;

    metrics()
        .query_latency_ms
        .observe(start.elapsed().as_millis() as u64);

    debug!(
        seller_id = %seller_id,
        count = active.count(),
        "Active sessions fetched"
    );

    Ok(Json(active.into()))
}
