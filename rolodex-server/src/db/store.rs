//! Storage seam between the HTTP layer and the database
//!
//! Handlers only ever see `Arc<dyn Store>`; the MySQL implementation lives in
//! [`MySqlStore`](super::MySqlStore). An update is composed by the caller as
//! `get_*`, payload overlay, then `save_*`.

use async_trait::async_trait;

use super::DbError;
use crate::models::{Address, User};

#[async_trait]
pub trait Store: Send + Sync {
    /// Round trip to storage without touching any table
    async fn ping(&self) -> Result<(), DbError>;

    /// All live users, each with its live address attached
    async fn list_users(&self) -> Result<Vec<User>, DbError>;

    /// One live user with its address, or `DbError::NotFound`
    async fn get_user(&self, id: u64) -> Result<User, DbError>;

    /// Persist a new user from the draft's writable fields
    async fn create_user(&self, draft: User) -> Result<User, DbError>;

    /// Write back every writable field of an existing user
    async fn save_user(&self, user: User) -> Result<User, DbError>;

    /// Soft-delete a live user, or `DbError::NotFound`
    async fn delete_user(&self, id: u64) -> Result<(), DbError>;

    async fn list_addresses(&self) -> Result<Vec<Address>, DbError>;

    async fn get_address(&self, id: u64) -> Result<Address, DbError>;

    async fn create_address(&self, draft: Address) -> Result<Address, DbError>;

    async fn save_address(&self, address: Address) -> Result<Address, DbError>;

    async fn delete_address(&self, id: u64) -> Result<(), DbError>;
}
