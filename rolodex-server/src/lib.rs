//! rolodex-server: users and addresses over HTTP
//!
//! CRUD for two resources backed by MySQL. A `User` may point at one
//! `Address`; reads attach it, deletes are soft.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

use std::sync::Arc;

pub use config::DatabaseConfig;
pub use error::{Error, Result};
pub use http::ServerConfig;

/// Connect, sync the schema, and serve until shutdown
pub async fn serve(database: &DatabaseConfig, config: ServerConfig) -> Result<()> {
    tracing::info!(dsn = %database.redacted_dsn(), "Connecting to database");
    let pool = db::create_pool(database).await?;

    db::migrations::run(&pool).await?;

    let store = Arc::new(db::MySqlStore::new(pool));
    http::run_server(store.clone(), config).await?;

    store.pool().close().await;
    tracing::info!("Database pool closed");

    Ok(())
}
