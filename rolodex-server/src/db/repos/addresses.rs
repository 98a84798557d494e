//! Address repository
//!
//! Plain single-table CRUD; no relation loading.

use chrono::Utc;
use sqlx::MySqlPool;

use crate::db::error::{DbError, Resource};
use crate::models::Address;

/// Address repository
pub struct AddressRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AddressRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List all live addresses in id order.
    pub async fn list(&self) -> Result<Vec<Address>, DbError> {
        let addresses: Vec<Address> = sqlx::query_as(
            r#"
            SELECT id, created_at, updated_at, deleted_at, street, city, state, zip_code
            FROM addresses
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(addresses)
    }

    /// Get a single live address by id.
    pub async fn get(&self, id: u64) -> Result<Address, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, created_at, updated_at, deleted_at, street, city, state, zip_code
            FROM addresses
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(Resource::Address, id))
    }

    /// Insert the draft's fields as a new row and return the stored record.
    ///
    /// The draft's id and timestamps are ignored.
    pub async fn create(&self, draft: &Address) -> Result<Address, DbError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO addresses (created_at, updated_at, street, city, state, zip_code)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(&draft.street)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.zip_code)
        .execute(self.pool)
        .await?;

        self.get(result.last_insert_id()).await
    }

    /// Overwrite every writable field of a live row and bump `updated_at`.
    ///
    /// Returns NotFound if the row was deleted in the meantime.
    pub async fn save(&self, address: &Address) -> Result<Address, DbError> {
        let id = address.id();
        sqlx::query(
            r#"
            UPDATE addresses
            SET updated_at = ?, street = ?, city = ?, state = ?, zip_code = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(Utc::now())
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip_code)
        .bind(id)
        .execute(self.pool)
        .await?;

        self.get(id).await
    }

    /// Mark a live row deleted.
    pub async fn soft_delete(&self, id: u64) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE addresses SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Resource::Address, id));
        }
        Ok(())
    }
}
