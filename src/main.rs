use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use bankpage_core::app_state::build_app_state;
use bankpage_core::config::AppConfig;
use bankpage_core::core::persistence::bank::bank_schema::ensure_schema;
use bankpage_core::core::persistence::db::connect_pool;
use bankpage_core::logging::init_tracing;
use bankpage_core::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = init_tracing(&config.log)?;

    info!("🚀 Starting bank pagination service");

    let pool = connect_pool(&config.database).await?;
    ensure_schema(&pool)
        .await
        .context("failed to prepare bank schema")?;

    let app = app_router(build_app_state(pool.clone(), config.server.request_timeout));

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    info!("Listening on {}", config.server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
