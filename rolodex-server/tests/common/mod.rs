//! Shared fixtures: an in-memory `Store` and request helpers

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use rolodex_server::db::error::Resource;
use rolodex_server::db::{DbError, Store};
use rolodex_server::http::{build_router, AppState};
use rolodex_server::models::{Address, User};

#[derive(Default)]
struct Tables {
    next_user_id: u64,
    next_address_id: u64,
    users: BTreeMap<u64, User>,
    addresses: BTreeMap<u64, Address>,
}

impl Tables {
    fn live_address(&self, id: u64) -> Option<&Address> {
        self.addresses.get(&id).filter(|a| !a.meta.is_deleted())
    }

    fn live_user(&self, id: u64) -> Result<User, DbError> {
        let mut user = self
            .users
            .get(&id)
            .filter(|u| !u.meta.is_deleted())
            .cloned()
            .ok_or(DbError::not_found(Resource::User, id))?;
        user.address = self
            .live_address(user.address_id)
            .cloned()
            .unwrap_or_default();
        Ok(user)
    }
}

/// Store double with the same soft-delete and join semantics as MySQL
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_writes: AtomicBool,
    ping_down: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every create/save/delete fail with a storage error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make `ping` report storage as unreachable
    pub fn fail_ping(&self, fail: bool) {
        self.ping_down.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), DbError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    /// Raw row regardless of deletion, for asserting soft delete
    pub fn raw_user(&self, id: u64) -> Option<User> {
        self.tables.lock().unwrap().users.get(&id).cloned()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        if self.ping_down.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .keys()
            .filter_map(|id| tables.live_user(*id).ok())
            .collect())
    }

    async fn get_user(&self, id: u64) -> Result<User, DbError> {
        self.tables.lock().unwrap().live_user(id)
    }

    async fn create_user(&self, mut draft: User) -> Result<User, DbError> {
        self.check_writable()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_user_id += 1;
        let now = Utc::now();
        draft.meta.id = tables.next_user_id;
        draft.meta.created_at = now;
        draft.meta.updated_at = now;
        draft.meta.deleted_at = None;
        draft.address = Address::default();
        tables.users.insert(draft.meta.id, draft.clone());
        tables.live_user(draft.meta.id)
    }

    async fn save_user(&self, mut user: User) -> Result<User, DbError> {
        self.check_writable()?;
        let mut tables = self.tables.lock().unwrap();
        let id = user.meta.id;
        tables.live_user(id)?;
        user.meta.updated_at = Utc::now();
        user.address = Address::default();
        tables.users.insert(id, user);
        tables.live_user(id)
    }

    async fn delete_user(&self, id: u64) -> Result<(), DbError> {
        self.check_writable()?;
        let mut tables = self.tables.lock().unwrap();
        match tables.users.get_mut(&id) {
            Some(user) if !user.meta.is_deleted() => {
                user.meta.deleted_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(DbError::not_found(Resource::User, id)),
        }
    }

    async fn list_addresses(&self) -> Result<Vec<Address>, DbError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .addresses
            .values()
            .filter(|a| !a.meta.is_deleted())
            .cloned()
            .collect())
    }

    async fn get_address(&self, id: u64) -> Result<Address, DbError> {
        self.tables
            .lock()
            .unwrap()
            .live_address(id)
            .cloned()
            .ok_or(DbError::not_found(Resource::Address, id))
    }

    async fn create_address(&self, mut draft: Address) -> Result<Address, DbError> {
        self.check_writable()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_address_id += 1;
        let now = Utc::now();
        draft.meta.id = tables.next_address_id;
        draft.meta.created_at = now;
        draft.meta.updated_at = now;
        draft.meta.deleted_at = None;
        tables.addresses.insert(draft.meta.id, draft.clone());
        Ok(draft)
    }

    async fn save_address(&self, mut address: Address) -> Result<Address, DbError> {
        self.check_writable()?;
        let mut tables = self.tables.lock().unwrap();
        let id = address.meta.id;
        if tables.live_address(id).is_none() {
            return Err(DbError::not_found(Resource::Address, id));
        }
        address.meta.updated_at = Utc::now();
        tables.addresses.insert(id, address.clone());
        Ok(address)
    }

    async fn delete_address(&self, id: u64) -> Result<(), DbError> {
        self.check_writable()?;
        let mut tables = self.tables.lock().unwrap();
        match tables.addresses.get_mut(&id) {
            Some(address) if !address.meta.is_deleted() => {
                address.meta.deleted_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(DbError::not_found(Resource::Address, id)),
        }
    }
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    build_router(AppState::new(store))
}

/// Send one request, returning status and body text
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Send one request and parse a 200 JSON body
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Value {
    let (status, text) = send(app, method, uri, body).await;
    assert_eq!(status, StatusCode::OK, "{method} {uri}: {text}");
    serde_json::from_str(&text).unwrap()
}
