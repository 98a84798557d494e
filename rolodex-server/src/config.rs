//! Database configuration - environment loading
//!
//! Connection parameters are read once at startup from:
//! - `DB_USER`, `DB_PASS`: credentials
//! - `DB_HOST`, `DB_PORT`: server address (port defaults to 3306 when unset)
//! - `DB_NAME`: database (schema) name
//!
//! Unset variables become empty strings.

use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

/// Port used when `DB_PORT` is unset or empty
const DEFAULT_PORT: u16 = 3306;

/// Connection character set
const CHARSET: &str = "utf8mb4";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid DB_PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// MySQL connection parameters
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();

        let raw_port = var("DB_PORT");
        let port = match raw_port.trim() {
            "" => DEFAULT_PORT,
            p => p.parse::<u16>().map_err(|source| ConfigError::InvalidPort {
                value: raw_port.clone(),
                source,
            })?,
        };

        Ok(Self {
            user: var("DB_USER"),
            password: var("DB_PASS"),
            host: var("DB_HOST"),
            port,
            name: var("DB_NAME"),
        })
    }

    /// Connection string in `user:pass@tcp(host:port)/dbname?...` form
    pub fn dsn(&self) -> String {
        self.render_dsn(&self.password)
    }

    /// Same as [`dsn`](Self::dsn) with the password masked, for logs
    pub fn redacted_dsn(&self) -> String {
        self.render_dsn("***")
    }

    fn render_dsn(&self, password: &str) -> String {
        format!(
            "{}:{}@tcp({}:{})/{}?charset={}&parseTime=True&loc=Local",
            self.user, password, self.host, self.port, self.name, CHARSET
        )
    }

    /// sqlx connect options for the same parameters
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .charset(CHARSET);

        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        if !self.name.is_empty() {
            options = options.database(&self.name);
        }
        options
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn dsn_matches_expected_form() {
        let config = DatabaseConfig::from_lookup(lookup(&[
            ("DB_USER", "app"),
            ("DB_PASS", "secret"),
            ("DB_HOST", "db.local"),
            ("DB_PORT", "3307"),
            ("DB_NAME", "rolodex"),
        ]))
        .unwrap();

        assert_eq!(
            config.dsn(),
            "app:secret@tcp(db.local:3307)/rolodex?charset=utf8mb4&parseTime=True&loc=Local"
        );
    }

    #[test]
    fn redacted_dsn_hides_password() {
        let config =
            DatabaseConfig::from_lookup(lookup(&[("DB_USER", "app"), ("DB_PASS", "secret")])).unwrap();

        assert!(!config.redacted_dsn().contains("secret"));
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn missing_port_defaults() {
        let config = DatabaseConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "");
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = DatabaseConfig::from_lookup(lookup(&[("DB_PORT", "mysql")])).unwrap_err();
        assert!(err.to_string().contains("mysql"));
    }
}
