use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Opens the process-wide connection pool. Built once at startup and handed
/// to the repositories; clones share the same pool.
pub async fn connect_pool(cfg: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&cfg.url)
        .with_context(|| format!("invalid database url {:?}", cfg.url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout)
        .connect_with(options)
        .await
        .context("failed to connect to database")?;

    info!(
        max_connections = cfg.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Private in-memory database on a single long-lived connection. Every new
/// connection to `sqlite::memory:` would see an empty database, so the pool
/// never grows or recycles.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}
