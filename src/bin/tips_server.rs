use anyhow::Context;
use static_json_api::api::{self, TipState};
use static_json_api::config::AppConfig;
use static_json_api::store::TipStore;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Tips API Server");

    // Load configuration
    let config = AppConfig::tips_from_env();
    info!("📋 Configuration loaded");
    info!("   - Tips file: {}", config.data_path.display());
    info!("   - Port: {}", config.port);

    // Load the dataset once; a missing, malformed or empty file is fatal
    let store = TipStore::load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    info!("✅ Tips loaded ({} tips)", store.len());

    // Build router with modular routes
    let state = TipState {
        tips: Arc::new(store),
    };
    let app = api::tips_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /          - Landing page with a random tip");
    info!("   GET  /healthz   - Health check");
    info!("   GET  /api/tip   - One random tip as JSON");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(api::shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}
