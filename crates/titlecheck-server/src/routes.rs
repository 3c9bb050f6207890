use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};
use titlecheck::VerificationResult;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `GET /verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    pub title: String,
}

/// `GET /verify?title=<string>`
pub async fn verify(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<Json<VerificationResult>, ApiError> {
    let title = params.title;
    let result = tokio::task::spawn_blocking(move || state.verify(&title)).await??;

    info!(
        status = %result.status,
        probability = result.probability,
        similarity = result.similarity,
        "verification served"
    );
    Ok(Json(result))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
