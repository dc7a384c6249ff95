// src/config.rs

use std::env;
use dotenvy::dotenv;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub max_connections: u32,
    /// Directory for the rolling log file.
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://social.db?mode=rwc".to_string(),
            rust_log: "info".to_string(),
            max_connections: 5,
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => parse_max_connections(&raw)?,
            Err(_) => defaults.max_connections,
        };

        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        Ok(Self {
            database_url,
            rust_log,
            max_connections,
            log_dir,
        })
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(AppError::Config(format!(
            "DB_MAX_CONNECTIONS must be a positive integer, got '{}'",
            raw
        ))),
        Ok(n) => Ok(n),
    }
}
