//! Response models for the lookup server API
//!
//! This module defines the DTOs (Data Transfer Objects) serialized into
//! HTTP response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    CacheStatsResponse, ClearResponse, ComponentDetailResponse, ComponentListResponse,
    ErrorResponse, HealthResponse, StatsResponse,
};
