//! # titlecheck Server
//!
//! Exposes title verification over HTTP:
//!
//! - `GET /verify?title=<string>` returns a `VerificationResult` as JSON.
//! - `GET /health` reports that the server is up.
//!
//! Cross-origin requests are allowed from any origin, with any method and
//! any header.
pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/verify", get(routes::verify))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Binds `host:port` and serves the router until the process exits.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    info!(addr = %listener.local_addr()?, "title verification service listening");
    axum::serve(listener, router(state)).await
}
