//! MDC Server - component documentation lookup
//!
//! Serves metadata and content of MDX component documentation, cached in
//! memory with TTL-based expiration.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use error::{ParseError, ServiceError};
pub use service::ComponentService;
