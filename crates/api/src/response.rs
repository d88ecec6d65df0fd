//! Standardized API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use presence_core::ActiveSessions;
use serde::{Deserialize, Serialize};

/// Success response for a recorded heartbeat.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrackResponse {
    pub message: String,
}

impl TrackResponse {
    pub fn tracked() -> Self {
        Self {
            message: "User tracked successfully".to_string(),
        }
    }
}

/// Active sessions for a seller.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSessionsResponse {
    pub seller_id: String,
    pub active_users: Vec<String>,
    pub count: usize,
}

impl From<ActiveSessions> for ActiveSessionsResponse {
    fn from(active: ActiveSessions) -> Self {
        let count = active.count();
        Self {
            seller_id: active.seller_id,
            active_users: active.sessions,
            count,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store_connected: bool,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API error: a status code plus the `{"error": …}` body.
pub struct ApiError {
    pub status: StatusCode,
    pub response: ErrorResponse,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            response: ErrorResponse::new(msg),
        }
    }

    /// Generic 500. Internal detail stays in the server logs.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            response: ErrorResponse::new("Internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<presence_core::Error> for ApiError {
    fn from(err: presence_core::Error) -> Self {
        match err {
            presence_core::Error::Validation(msg) => ApiError::bad_request(msg),
            presence_core::Error::Serialization(e) => ApiError::bad_request(e.to_string()),
            presence_core::Error::Store(_) | presence_core::Error::Internal(_) => {
                ApiError::internal()
            }
        }
    }
}
