//! API Routes
//!
//! Configures the Axum router with all lookup server endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, component_detail_handler, health_handler, list_components_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /components` - List component metadata
/// - `GET /components/:name` - Fetch one component's documentation
/// - `GET /stats` - Cache statistics
/// - `POST /cache/clear` - Drop cached listings and content
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/components", get(list_components_handler))
        .route("/components/:name", get(component_detail_handler))
        .route("/stats", get(stats_handler))
        .route("/cache/clear", post(clear_cache_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
