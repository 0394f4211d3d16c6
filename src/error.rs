//! Error types for the lookup service
//!
//! Provides unified error handling using thiserror.

use std::io;
use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Parse Error Enum ==
/// Failure to read or validate a single documentation unit.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The file could not be read as UTF-8 text
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The file does not start with a `---` fenced block
    #[error("Missing front-matter in {}", path.display())]
    MissingFrontMatter { path: PathBuf },

    /// The front-matter is not valid YAML or lacks required fields
    #[error("Invalid front-matter in {}: {source}", path.display())]
    InvalidFrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The front-matter declares an empty `name`
    #[error("Empty component name in {}", path.display())]
    EmptyName { path: PathBuf },
}

// == Service Error Enum ==
/// Unified error type for the component lookup service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The components directory could not be listed
    #[error("Cannot access components directory {}: {source}", path.display())]
    DirectoryAccess { path: PathBuf, source: io::Error },

    /// No documentation unit matches the requested name
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// The matched documentation unit could not be read
    #[error(transparent)]
    Parse(#[from] ParseError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::ComponentNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::DirectoryAccess { .. } | ServiceError::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, ServiceError>;
