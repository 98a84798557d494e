//! API error type with IntoResponse
//!
//! Errors become plain-text responses:
//! - NotFound → 404 `User not found`
//! - Decode → 400 with the parser message
//! - Storage → 500 with a fixed `Could not <action> <resource>` message; the
//!   underlying database error is logged, never returned

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::error::Resource;
use crate::db::DbError;

/// What the handler was doing when storage failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Fetch,
    Create,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No live row with that id (404)
    NotFound(Resource),

    /// Request body failed to decode (400)
    Decode(String),

    /// Database rejected the operation (500, logged)
    Storage {
        resource: Resource,
        action: Action,
        source: DbError,
    },
}

impl ApiError {
    /// Classify a database error raised while performing `action`.
    pub fn from_db(resource: Resource, action: Action, err: DbError) -> Self {
        match err {
            DbError::NotFound { resource, .. } => Self::NotFound(resource),
            source => Self::Storage {
                resource,
                action,
                source,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body text
    pub fn message(&self) -> String {
        match self {
            Self::NotFound(resource) => format!("{} not found", resource.title()),
            Self::Decode(message) => message.clone(),
            Self::Storage {
                resource,
                action: Action::List,
                ..
            } => format!("Could not list {}", resource.plural()),
            Self::Storage {
                resource, action, ..
            } => format!("Could not {} {}", action.verb(), resource.name()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storage {
            resource,
            action,
            source,
        } = &self
        {
            tracing::error!(%resource, ?action, error = %source, "Storage error");
        }

        (self.status(), self.message()).into_response()
    }
}

/// Attach handler context to gateway results
pub trait DbResultExt<T> {
    fn or_api(self, resource: Resource, action: Action) -> Result<T, ApiError>;
}

impl<T> DbResultExt<T> for Result<T, DbError> {
    fn or_api(self, resource: Resource, action: Action) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_db(resource, action, e))
    }
}
