//! Health check endpoint
//!
//! Reports the crate version and whether storage answers a ping. A failed
//! ping turns the response into 503 so load balancers stop routing here.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    let body = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" },
        database,
        version: env!("CARGO_PKG_VERSION"),
    };
    (status, Json(body))
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
