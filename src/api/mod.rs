//! API Module
//!
//! HTTP handlers and routing for the component lookup REST API.
//!
//! # Endpoints
//! - `GET /components` - List component metadata
//! - `GET /components/:name` - Fetch one component's documentation
//! - `GET /stats` - Cache statistics
//! - `POST /cache/clear` - Drop cached listings and content
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
