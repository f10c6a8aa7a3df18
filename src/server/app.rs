use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use anyhow::Result;

use super::handlers::{downloads, health, reports};
use crate::storage::ArtifactStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ArtifactStore,
}

pub async fn create_app(store: ArtifactStore, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState { store };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        // Download links issued by report generation
        .route("/downloads/:token", get(downloads::download_artifact))
        // Add middleware
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new().route("/reports", post(reports::create_report))
}
