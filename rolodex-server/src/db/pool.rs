//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::DatabaseConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a MySQL connection pool.
///
/// Connects eagerly, so an unreachable server fails here rather than on the
/// first request.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(config.connect_options())
        .await
}
