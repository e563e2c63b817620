use anyhow::Context;
use static_json_api::api::{self, AppState};
use static_json_api::config::AppConfig;
use static_json_api::store::ItemStore;
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

    info!("🚀 Starting Items API Server");

    // Load configuration
    let config = AppConfig::items_from_env();
    info!("📋 Configuration loaded");
    info!("   - Data file: {}", config.data_path.display());
    info!("   - Port: {}", config.port);

    // Load the dataset once; a missing or malformed file is fatal
    let store = ItemStore::load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    info!("✅ Data loaded ({} items)", store.len());

    // Build router with modular routes
    let state = AppState {
        items: Arc::new(store),
    };
    let app = api::items_app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                - Landing page");
    info!("   GET  /healthz         - Health check");
    info!("   GET  /api/items       - List items (limit/offset)");
    info!("   GET  /api/random      - Random items (n)");
    info!("   GET  /api/categories  - Category counts");
    info!("   GET  /api/search      - Search items (q)");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(api::shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}
