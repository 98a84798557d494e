//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use rolodex_server::{DatabaseConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            bind: ServerConfig::default().bind_addr,
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database = DatabaseConfig::from_env().context("Invalid DB_* environment")?;

    tracing::info!("Starting rolodex server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    rolodex_server::serve(&database, config)
        .await
        .context("Failed to run server")?;

    Ok(())
}
