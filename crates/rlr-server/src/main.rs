//! Request Logger Remote server entry point.

use rlr_db::DbManager;
use rlr_server::{AppState, ServerConfig, routes};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rlr=info")),
        )
        .json()
        .init();

    info!("Starting Request Logger Remote server...");

    let config = ServerConfig::from_env()?;
    if config.admin_api_key.is_none() {
        info!("RLR_ADMIN_API_KEY not set, admin access disabled");
    }

    let db = DbManager::connect(&config.db).await?;
    let applied = rlr_db::run_migrations(db.client()).await?;
    info!(applied = ?applied, "Migrations complete");

    let state = AppState::new(db.client().clone(), &config);
    state.services().install().await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Listening");
    axum::serve(listener, routes::router(state)).await?;

    info!("Request Logger Remote server stopped.");
    Ok(())
}
