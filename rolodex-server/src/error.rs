//! Error types for rolodex-server startup

use thiserror::Error;

use crate::config::ConfigError;
use crate::http::ServerError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}
