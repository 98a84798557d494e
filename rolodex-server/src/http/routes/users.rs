//! User endpoints
//!
//! - `GET    /users`       list, addresses attached
//! - `GET    /users/{id}`  one user, address attached
//! - `POST   /users`       create (200, not 201)
//! - `PUT    /users/{id}`  overlay the body onto the stored user
//! - `DELETE /users/{id}`  soft delete

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::db::error::Resource;
use crate::http::body::{decode_json, parse_id};
use crate::http::error::{Action, ApiError, DbResultExt};
use crate::http::server::AppState;
use crate::models::{User, UserPayload};

const RESOURCE: Resource = Resource::User;

/// GET /users
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store().list_users().await.or_api(RESOURCE, Action::List)?;
    Ok(Json(users))
}

/// GET /users/{id}
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id, RESOURCE)?;
    let user = state.store().get_user(id).await.or_api(RESOURCE, Action::Fetch)?;
    Ok(Json(user))
}

/// POST /users
async fn create_user(State(state): State<AppState>, body: Bytes) -> Result<Json<User>, ApiError> {
    let payload: UserPayload = decode_json(&body)?;
    let user = state
        .store()
        .create_user(payload.into_draft())
        .await
        .or_api(RESOURCE, Action::Create)?;

    tracing::debug!(id = user.id(), "Created user");
    Ok(Json(user))
}

/// PUT /users/{id}
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id, RESOURCE)?;
    let mut user = state.store().get_user(id).await.or_api(RESOURCE, Action::Fetch)?;

    let payload: UserPayload = decode_json(&body)?;
    payload.overlay(&mut user);

    let user = state
        .store()
        .save_user(user)
        .await
        .or_api(RESOURCE, Action::Update)?;
    Ok(Json(user))
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_id(&id, RESOURCE)?;
    state
        .store()
        .delete_user(id)
        .await
        .or_api(RESOURCE, Action::Delete)?;

    tracing::debug!(id, "Deleted user");
    Ok("User deleted")
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
