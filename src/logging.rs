use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

pub const LOG_FILE_PREFIX: &str = "bankpage.log";

/// Installs console and daily-rolling file output. `RUST_LOG` wins over the
/// configured level. Keep the guard alive or buffered file lines are lost.
pub fn init_tracing(cfg: &LogConfig) -> Result<WorkerGuard> {
    fs::create_dir_all(&cfg.dir)
        .with_context(|| format!("failed to create log dir {}", cfg.dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&cfg.dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .with_context(|| format!("invalid log level {:?}", cfg.level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .context("tracing subscriber already installed")?;

    Ok(guard)
}
