//! Server settings loaded from environment variables.

use std::env;

use crate::config::db::DbKind;
use crate::error::AppError;

pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

/// Everything the binary needs before it can bind.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        Ok(Self {
            host,
            port,
            db_kind: DbKind::from_env()?,
            cors_origins: cors_origins_from_env(),
        })
    }
}

/// Comma-separated `CORS_ALLOWED_ORIGINS`, blank entries dropped.
pub fn cors_origins_from_env() -> Vec<String> {
    let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_CORS_ORIGIN.to_string()]
    } else {
        origins
    }
}
