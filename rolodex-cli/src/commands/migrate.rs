//! Schema sync command

use anyhow::{Context, Result};

use rolodex_server::db::{create_pool, migrations};
use rolodex_server::DatabaseConfig;

/// Create missing tables and exit
pub async fn run_migrate() -> Result<()> {
    let database = DatabaseConfig::from_env().context("Invalid DB_* environment")?;
    tracing::info!(dsn = %database.redacted_dsn(), "Connecting to database");

    let pool = create_pool(&database)
        .await
        .context("Failed to connect to the database")?;

    migrations::run(&pool)
        .await
        .context("Failed to create tables")?;

    pool.close().await;
    Ok(())
}
