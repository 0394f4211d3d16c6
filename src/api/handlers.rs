//! API Handlers
//!
//! HTTP request handlers for each lookup server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::models::{
    ClearResponse, ComponentDetailResponse, ComponentListResponse, HealthResponse, StatsResponse,
};
use crate::service::ComponentService;

/// Application state shared across all handlers.
///
/// The service synchronizes its own caches, so it is shared through a plain
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ComponentService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: ComponentService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration and a resolved directory.
    pub fn from_config(components_dir: impl Into<std::path::PathBuf>, config: &Config) -> Self {
        Self::new(ComponentService::from_config(components_dir, config))
    }
}

/// Handler for GET /components
///
/// Lists metadata for every documentation unit that parses cleanly.
pub async fn list_components_handler(
    State(state): State<AppState>,
) -> Result<Json<ComponentListResponse>> {
    let components = state.service.get_components_list().await?;
    Ok(Json(ComponentListResponse::new(components)))
}

/// Handler for GET /components/:name
///
/// Returns the raw documentation of one component; the name is matched
/// case-insensitively.
pub async fn component_detail_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ComponentDetailResponse>> {
    let content = state.service.get_component_detail(&name).await?;
    Ok(Json(ComponentDetailResponse::new(name, content)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.cache_stats().await.into())
}

/// Handler for POST /cache/clear
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.service.clear_caches().await;
    Json(ClearResponse::cleared())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
