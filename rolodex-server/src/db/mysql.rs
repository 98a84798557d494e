//! MySQL-backed [`Store`]

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::repos::{AddressRepo, UserRepo};
use super::{DbError, Store};
use crate::models::{Address, User};

/// Gateway over a shared MySQL pool
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    fn addresses(&self) -> AddressRepo<'_> {
        AddressRepo::new(&self.pool)
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        self.users().list().await
    }

    async fn get_user(&self, id: u64) -> Result<User, DbError> {
        self.users().get(id).await
    }

    async fn create_user(&self, draft: User) -> Result<User, DbError> {
        self.users().create(&draft).await
    }

    async fn save_user(&self, user: User) -> Result<User, DbError> {
        self.users().save(&user).await
    }

    async fn delete_user(&self, id: u64) -> Result<(), DbError> {
        self.users().soft_delete(id).await
    }

    async fn list_addresses(&self) -> Result<Vec<Address>, DbError> {
        self.addresses().list().await
    }

    async fn get_address(&self, id: u64) -> Result<Address, DbError> {
        self.addresses().get(id).await
    }

    async fn create_address(&self, draft: Address) -> Result<Address, DbError> {
        self.addresses().create(&draft).await
    }

    async fn save_address(&self, address: Address) -> Result<Address, DbError> {
        self.addresses().save(&address).await
    }

    async fn delete_address(&self, id: u64) -> Result<(), DbError> {
        self.addresses().soft_delete(id).await
    }
}
