//! HTTP server layer
//!
//! Axum server with:
//! - Ten CRUD endpoints (five per resource) plus `/health`
//! - Plain-text error bodies with status mapping
//! - Request tracing
//! - Graceful shutdown

pub mod body;
pub mod error;
pub mod routes;
pub mod server;

pub use error::{Action, ApiError};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
