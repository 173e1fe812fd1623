use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::routes::bank_routes::bank_routes;
use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        .nest("/banks", bank_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        // Attach shared application state ONCE here
        .with_state(state)
}

async fn root() -> &'static str {
    "Bank pagination service is running!"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404() -> AppError {
    AppError::NotFound("the requested resource was not found".into())
}
