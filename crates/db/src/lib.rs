//! Persistence layer for the expense claim workflow.
//!
//! Every store operation maps to exactly one named server-side procedure;
//! the [`gateway::ExpenseGateway`] facade wraps reads in the
//! fallback-snapshot policy and classifies write failures.

use sqlx::postgres::PgPoolOptions;

pub mod classify;
pub mod config;
pub mod fallback;
pub mod gateway;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}
