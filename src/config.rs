use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_host: String,
    pub database_port: u16,
    pub database_user: String,
    pub database_pass: String,
    pub database_name: String,
    pub default_car_id: i64,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub db_query_timeout_secs: u64,
    pub frontend_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from a variable lookup. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, fallback: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        let port = var_or("PORT", "8080")
            .parse()
            .context("PORT must be a valid port number")?;

        let database_host = var_or("DATABASE_HOST", "teslamate-cnpg-rw");
        let database_port = var_or("DATABASE_PORT", "5432")
            .parse()
            .context("DATABASE_PORT must be a valid port number")?;
        let database_user = var_or("DATABASE_USER", "teslamate");
        let database_pass = var_or("DATABASE_PASS", "");
        let database_name = var_or("DATABASE_NAME", "teslamate");

        let default_car_id = var_or("DEFAULT_CAR_ID", "1").parse().unwrap_or(1);

        let db_max_connections = var_or("DB_MAX_CONNECTIONS", "5").parse().unwrap_or(5);
        let db_acquire_timeout_secs = var_or("DB_ACQUIRE_TIMEOUT_SECS", "3")
            .parse()
            .unwrap_or(3);
        let db_query_timeout_secs = var_or("DB_QUERY_TIMEOUT_SECS", "5").parse().unwrap_or(5);

        let frontend_dir = PathBuf::from(var_or("FRONTEND_DIR", "frontend/dist"));
        let log_level = var_or("LOG_LEVEL", "info");

        Ok(Self {
            port,
            database_host,
            database_port,
            database_user,
            database_pass,
            database_name,
            default_car_id,
            db_max_connections,
            db_acquire_timeout_secs,
            db_query_timeout_secs,
            frontend_dir,
            log_level,
        })
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.db_query_timeout_secs)
    }
}
