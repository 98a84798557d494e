//! Address endpoints
//!
//! Same five shapes as users, without relation loading.

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
use crate::models::{Address, AddressPayload};

const RESOURCE: Resource = Resource::Address;

/// GET /addresses
async fn list_addresses(State(state): State<AppState>) -> Result<Json<Vec<Address>>, ApiError> {
    let addresses = state
        .store()
        .list_addresses()
        .await
        .or_api(RESOURCE, Action::List)?;
    Ok(Json(addresses))
}

/// GET /addresses/{id}
async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Address>, ApiError> {
    let id = parse_id(&id, RESOURCE)?;
    let address = state
        .store()
        .get_address(id)
        .await
        .or_api(RESOURCE, Action::Fetch)?;
    Ok(Json(address))
}

/// POST /addresses
async fn create_address(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Address>, ApiError> {
    let payload: AddressPayload = decode_json(&body)?;
    let address = state
        .store()
        .create_address(payload.into_draft())
        .await
        .or_api(RESOURCE, Action::Create)?;

    tracing::debug!(id = address.id(), "Created address");
    Ok(Json(address))
}

/// PUT /addresses/{id}
async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Address>, ApiError> {
    let id = parse_id(&id, RESOURCE)?;
    let mut address = state
        .store()
        .get_address(id)
        .await
        .or_api(RESOURCE, Action::Fetch)?;

    let payload: AddressPayload = decode_json(&body)?;
    payload.overlay(&mut address);

    let address = state
        .store()
        .save_address(address)
        .await
        .or_api(RESOURCE, Action::Update)?;
    Ok(Json(address))
}

/// DELETE /addresses/{id}
async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = parse_id(&id, RESOURCE)?;
    state
        .store()
        .delete_address(id)
        .await
        .or_api(RESOURCE, Action::Delete)?;

    tracing::debug!(id, "Deleted address");
    Ok("Address deleted")
}

/// Address routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/addresses", get(list_addresses).post(create_address))
        .route(
            "/addresses/{id}",
            get(get_address).put(update_address).delete(delete_address),
        )
}
