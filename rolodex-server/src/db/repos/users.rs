//! User repository
//!
//! Reads attach the referenced address in the same query:
//! `LEFT JOIN addresses` on `address_id`, skipping soft-deleted addresses.
//! A dangling or zero `address_id` yields the zero-valued `Address`.

use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use crate::db::error::{DbError, Resource};
use crate::models::{Address, RecordMeta, User};

/// Columns and join shared by every user read; callers append WHERE/ORDER.
const SELECT_USERS: &str = r#"
    SELECT
        u.id, u.created_at, u.updated_at, u.deleted_at,
        u.name, u.email, u.address_id,
        a.id AS a_id, a.created_at AS a_created_at, a.updated_at AS a_updated_at,
        a.deleted_at AS a_deleted_at, a.street AS a_street, a.city AS a_city,
        a.state AS a_state, a.zip_code AS a_zip_code
    FROM users u
    LEFT JOIN addresses a ON a.id = u.address_id AND a.deleted_at IS NULL
"#;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List all live users with their addresses, in id order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let sql = format!("{SELECT_USERS} WHERE u.deleted_at IS NULL ORDER BY u.id");
        let rows = sqlx::query(&sql).fetch_all(self.pool).await?;

        rows.iter().map(user_from_row).collect()
    }

    /// Get a single live user by id, address attached.
    pub async fn get(&self, id: u64) -> Result<User, DbError> {
        let sql = format!("{SELECT_USERS} WHERE u.id = ? AND u.deleted_at IS NULL");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(Resource::User, id))?;

        user_from_row(&row)
    }

    /// Insert the draft's fields as a new row and return the stored record.
    ///
    /// The draft's id, timestamps and nested address are ignored.
    pub async fn create(&self, draft: &User) -> Result<User, DbError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO users (created_at, updated_at, name, email, address_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(draft.address_id)
        .execute(self.pool)
        .await?;

        self.get(result.last_insert_id()).await
    }

    /// Overwrite every writable field of a live row and bump `updated_at`.
    ///
    /// The returned user carries the address its (possibly new) `address_id`
    /// points at.
    pub async fn save(&self, user: &User) -> Result<User, DbError> {
        let id = user.id();
        sqlx::query(
            r#"
            UPDATE users
            SET updated_at = ?, name = ?, email = ?, address_id = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(Utc::now())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.address_id)
        .bind(id)
        .execute(self.pool)
        .await?;

        self.get(id).await
    }

    /// Mark a live row deleted.
    pub async fn soft_delete(&self, id: u64) -> Result<(), DbError> {
        let result =
            sqlx::query("UPDATE users SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
                .bind(Utc::now())
                .bind(id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(Resource::User, id));
        }
        Ok(())
    }
}

fn user_from_row(row: &MySqlRow) -> Result<User, DbError> {
    let address = match row.try_get::<Option<u64>, _>("a_id")? {
        Some(address_id) => Address {
            meta: RecordMeta {
                id: address_id,
                created_at: row.try_get("a_created_at")?,
                updated_at: row.try_get("a_updated_at")?,
                deleted_at: row.try_get("a_deleted_at")?,
            },
            street: row.try_get("a_street")?,
            city: row.try_get("a_city")?,
            state: row.try_get("a_state")?,
            zip_code: row.try_get("a_zip_code")?,
        },
        None => Address::default(),
    };

    Ok(User {
        meta: RecordMeta {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        },
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        address_id: row.try_get("address_id")?,
        address,
    })
}
