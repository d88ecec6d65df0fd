//! Heartbeat endpoint handler.

use axum::{body::Bytes, extract::State, Json};
use presence_core::Heartbeat;
use std::time::Instant;
use telemetry::metrics;
use tracing::{debug, error};

use crate::response::{ApiError, TrackResponse};
use crate::state::AppState;

/// POST /track-active-users - Record a session heartbeat.
///
/// The raw body is parsed rather than extracted as typed JSON so that
/// every malformed payload gets the same 400 with the stable error
/// message, and no store call is made for invalid input.
pub async fn track_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TrackResponse>, ApiError> {
    let start = Instant::now();

    metrics().heartbeats_received.inc();

    let heartbeat = Heartbeat::parse(&body).map_err(|e| {
        metrics().heartbeats_rejected.inc();
        debug!(error = %e, "Rejected heartbeat payload");
        ApiError::from(e)
    })?;

    state.tracker.record_heartbeat(&heartbeat).await.map_err(|e| {
        metrics().store_errors.inc();
        error!(
            seller_id = %heartbeat.seller_id,
            error = %e,
            "Failed to record heartbeat"
        );
        ApiError::from(e)
    })?;

    metrics()
        .track_latency_ms
        .observe(start.elapsed().as_millis() as u64);

    Ok(Json(TrackResponse::tracked()))
}
