//! Environment-based configuration.

use crate::error::config::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Whether sqlx should log every statement it executes.
    pub sqlx_logging: bool,
    pub db_max_connections: u32,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `SQLX_LOGGING` (bool, default `false`) and
    /// `DB_MAX_CONNECTIONS` (default 10) are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let sqlx_logging = match lookup("SQLX_LOGGING") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "SQLX_LOGGING".to_string(),
                    reason: e.to_string(),
                })?,
            None => false,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DB_MAX_CONNECTIONS".to_string(),
                        reason: "must be at least 1".to_string(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DB_MAX_CONNECTIONS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            sqlx_logging,
            db_max_connections,
        })
    }
}
