//! Application configuration loaded from environment variables.

use std::env;

use crate::config::db::DbKind;
use crate::error::AppError;

/// Process-wide configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    /// Create missing tables at startup
    pub create_schema: bool,
}

impl Config {
    /// Load and validate configuration from the environment
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("LIBRARY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("LIBRARY_PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "LIBRARY_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let db_kind = DbKind::from_env()?;

        let create_schema = match env::var("LIBRARY_CREATE_SCHEMA") {
            Ok(value) => parse_bool("LIBRARY_CREATE_SCHEMA", &value)?,
            Err(_) => db_kind.is_sqlite(),
        };

        Ok(Self {
            host,
            port,
            db_kind,
            create_schema,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}
