//! Database configuration loaded from environment variables.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use crate::DbPool;

/// Connection settings for the expense store.
///
/// Loaded from the environment (a `.env` file is honoured if present):
///
/// | Env Var                   | Default    |
/// |---------------------------|------------|
/// | `DATABASE_URL`            | (required) |
/// | `DB_MAX_CONNECTIONS`      | `20`       |
/// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`       |
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")?;

        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let acquire_timeout_secs = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout_secs,
        })
    }

    /// Open a connection pool with these settings.
    pub async fn connect(&self) -> Result<DbPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .connect(&self.database_url)
            .await
    }
}
