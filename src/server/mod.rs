pub mod app;
pub mod handlers;

use anyhow::Result;
use tracing::info;

use crate::storage::ArtifactStore;

pub async fn start_server(port: u16, cors_origin: Option<&str>) -> Result<()> {
    let store = ArtifactStore::with_default_ttl();
    let app = app::create_app(store, cors_origin).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health               - Health check");
    info!("  /api/v1/reports       - Generate a report from a state document (POST)");
    info!("  /downloads/:token     - Download a generated report");
}
