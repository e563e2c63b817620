pub mod items;
pub mod models;
pub mod search;
pub mod tips;

// Re-exports
pub use models::*;

use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

// Health handler (shared by both servers, keep here)
pub async fn health_handler() -> Json<models::HealthResponse> {
    Json(models::HealthResponse { status: "ok" })
}

/// Router for the items server.
pub fn items_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(items::handlers::home_handler))
        .route("/healthz", get(health_handler))
        .merge(items::routes())
        .merge(search::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Router for the tips server.
pub fn tips_app(state: TipState) -> Router {
    Router::new()
        .route("/", get(tips::handlers::home_handler))
        .route("/healthz", get(health_handler))
        .merge(tips::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Graceful shutdown handler
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
