//! Runtime configuration read from the environment (optionally seeded by `.env`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Deadline applied to every page lookup, including its store query.
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests need not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig {
            url: lookup("BANKPAGE_DATABASE_URL").unwrap_or_else(|| "sqlite://bank.db".into()),
            max_connections: parse_or(&lookup, "BANKPAGE_DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "BANKPAGE_DB_ACQUIRE_TIMEOUT_SECS",
                5,
            )?),
        };

        let server = ServerConfig {
            bind_addr: parse_or(
                &lookup,
                "BANKPAGE_BIND_ADDR",
                SocketAddr::from(([0, 0, 0, 0], 8080)),
            )?,
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "BANKPAGE_REQUEST_TIMEOUT_SECS",
                30,
            )?),
        };

        let log = LogConfig {
            dir: lookup("BANKPAGE_LOG_DIR").map(PathBuf::from).unwrap_or_else(|| "logs".into()),
            level: lookup("BANKPAGE_LOG_LEVEL").unwrap_or_else(|| "info".into()),
        };

        Ok(Self { database, server, log })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
