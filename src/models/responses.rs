//! Response DTOs for the lookup server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::docs::ComponentMeta;
use crate::service::{format_component_list, ServiceCacheStats};

/// Response body for the component listing (GET /components)
#[derive(Debug, Clone, Serialize)]
pub struct ComponentListResponse {
    /// Number of components listed
    pub count: usize,
    /// Metadata of every parsable component
    pub components: Vec<ComponentMeta>,
    /// The listing rendered as prompt text
    pub summary: String,
}

impl ComponentListResponse {
    pub fn new(components: Vec<ComponentMeta>) -> Self {
        Self {
            count: components.len(),
            summary: format_component_list(&components),
            components,
        }
    }
}

/// Response body for a single component (GET /components/:name)
#[derive(Debug, Clone, Serialize)]
pub struct ComponentDetailResponse {
    /// The requested name, as given
    pub name: String,
    /// Raw documentation text
    pub content: String,
}

impl ComponentDetailResponse {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Statistics of one cache, with the derived hit rate
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Component list cache
    pub metadata: CacheStatsResponse,
    /// Component content cache
    pub content: CacheStatsResponse,
}

impl From<ServiceCacheStats> for StatsResponse {
    fn from(stats: ServiceCacheStats) -> Self {
        Self {
            metadata: stats.metadata.into(),
            content: stats.content.into(),
        }
    }
}

/// Response body for the cache reset (POST /cache/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

impl ClearResponse {
    pub fn cleared() -> Self {
        Self {
            message: "Component caches cleared".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
