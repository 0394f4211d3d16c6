//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::docs::DEFAULT_DOC_EXTENSION;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the documentation units
    pub components_dir: Option<PathBuf>,
    /// TTL in seconds for cached metadata and content
    pub cache_ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Extension of documentation units, without the dot
    pub doc_extension: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `COMPONENTS_DIR` - Components directory, falling back to `DEFAULT_DOCS_DIR`
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DOC_EXTENSION` - Documentation extension (default: mdx)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            components_dir: env::var_os("COMPONENTS_DIR")
                .or_else(|| env::var_os("DEFAULT_DOCS_DIR"))
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            cache_ttl_secs: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_secs),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            doc_extension: env::var("DOC_EXTENSION")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.doc_extension),
        }
    }

    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components_dir: None,
            cache_ttl_secs: DEFAULT_TTL_SECS,
            server_port: 3000,
            doc_extension: DEFAULT_DOC_EXTENSION.to_string(),
        }
    }
}
