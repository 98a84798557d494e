//! rolodex - users and addresses CRUD service
//!
//! `rolodex` (or `rolodex serve`) connects to MySQL using the `DB_*`
//! environment variables, ensures the schema exists, and serves HTTP on
//! port 3000. `rolodex migrate` only ensures the schema.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    author,
    version,
    about = "CRUD HTTP service for users and their addresses"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Create the users and addresses tables if missing, then exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; DB_* may come from the real environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate => commands::migrate::run_migrate().await,
    }
}
