//! Schema sync - creates the tables when missing
//!
//! There is no versioning: each statement is `CREATE TABLE IF NOT EXISTS`,
//! so running it against an existing schema is a no-op. `users.address_id`
//! is indexed but carries no foreign key; 0 means "no address".

use sqlx::MySqlPool;

/// Create the `addresses` and `users` tables if they do not exist
pub async fn run(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS addresses (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
            created_at DATETIME(3) NOT NULL,
            updated_at DATETIME(3) NOT NULL,
            deleted_at DATETIME(3) NULL,
            street LONGTEXT NOT NULL,
            city LONGTEXT NOT NULL,
            state LONGTEXT NOT NULL,
            zip_code LONGTEXT NOT NULL,
            PRIMARY KEY (id),
            INDEX idx_addresses_deleted_at (deleted_at)
        ) DEFAULT CHARSET = utf8mb4
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
            created_at DATETIME(3) NOT NULL,
            updated_at DATETIME(3) NOT NULL,
            deleted_at DATETIME(3) NULL,
            name LONGTEXT NOT NULL,
            email LONGTEXT NOT NULL,
            address_id BIGINT UNSIGNED NOT NULL DEFAULT 0,
            PRIMARY KEY (id),
            INDEX idx_users_deleted_at (deleted_at),
            INDEX idx_users_address_id (address_id)
        ) DEFAULT CHARSET = utf8mb4
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema ready");
    Ok(())
}
