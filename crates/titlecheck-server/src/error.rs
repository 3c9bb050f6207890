use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use titlecheck::StoreError;
use tracing::error;

/// Faults surfaced at the HTTP boundary.
///
/// Rejections are not errors; they are returned as a normal
/// `VerificationResult`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Reading the title store failed.
    #[error("title store failure: {0}")]
    Store(#[from] StoreError),

    /// The blocking verification task panicked or was cancelled.
    #[error("verification task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal server error" })),
        )
            .into_response()
    }
}
