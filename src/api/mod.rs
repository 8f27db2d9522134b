//! HTTP API endpoints.

pub mod emergency;
pub mod health;
pub mod voice;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;

/// Create the API router.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(emergency::router())
        .merge(voice::router())
}

/// Errors surfaced at the handler boundary.
///
/// Only two kinds exist: requests that fail input validation, and storage
/// failures during insert/commit. Neither is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request failed input validation before any row was written.
    #[error("{0}")]
    Validation(String),
    /// The persistent store rejected an insert or commit.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": detail })),
            )
                .into_response(),
            Self::Storage(err) => {
                // Full detail stays server-side; the caller gets a generic body.
                tracing::error!("Storage failure: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "internal storage error" })),
                )
                    .into_response()
            }
        }
    }
}
