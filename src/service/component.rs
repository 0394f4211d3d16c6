//! Component Lookup Service
//!
//! Turns a directory of documentation units into a metadata listing and
//! per-component content, caching both for a fixed TTL.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::cache::{CacheStats, Clock, SystemClock, TtlCache, DEFAULT_TTL_SECS};
use crate::config::Config;
use crate::docs::{ComponentMeta, DocumentSource, FsDocumentSource, DEFAULT_DOC_EXTENSION};
use crate::error::{Result, ServiceError};

/// Statistics for both caches owned by a service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCacheStats {
    pub metadata: CacheStats,
    pub content: CacheStats,
}

// == Component Service ==
/// Lookup service over one components directory.
///
/// Each instance owns its caches. Nothing is read from disk until the first
/// lookup; the directory is not watched, so new files become visible once
/// the cached listing expires or the caches are cleared.
#[derive(Debug)]
pub struct ComponentService<S = FsDocumentSource> {
    /// Directory holding the documentation units
    components_dir: PathBuf,
    /// Extension of documentation units, without the dot
    extension: String,
    /// Filesystem and parsing collaborator
    source: S,
    /// Metadata listings keyed by directory
    meta_cache: Mutex<TtlCache<Vec<ComponentMeta>>>,
    /// Component content keyed by directory and component name
    content_cache: Mutex<TtlCache<String>>,
}

impl ComponentService<FsDocumentSource> {
    // == Constructors ==
    /// Creates a service over `components_dir` with the default TTL.
    pub fn new(components_dir: impl Into<PathBuf>) -> Self {
        Self::with_source(
            components_dir,
            FsDocumentSource,
            Duration::from_secs(DEFAULT_TTL_SECS),
            Arc::new(SystemClock),
        )
    }

    /// Creates a service from configuration.
    ///
    /// The components directory must already be resolved.
    pub fn from_config(components_dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self::with_source(
            components_dir,
            FsDocumentSource,
            config.cache_ttl(),
            Arc::new(SystemClock),
        )
        .with_extension(&config.doc_extension)
    }
}

impl<S: DocumentSource> ComponentService<S> {
    /// Creates a service with explicit collaborators.
    ///
    /// Both caches share `ttl` and `clock` but are independent instances.
    pub fn with_source(
        components_dir: impl Into<PathBuf>,
        source: S,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let components_dir = components_dir.into();
        debug!(dir = %components_dir.display(), ttl_ms = ttl.as_millis() as u64, "ComponentService initialized");

        Self {
            components_dir,
            extension: DEFAULT_DOC_EXTENSION.to_string(),
            source,
            meta_cache: Mutex::new(TtlCache::with_clock(ttl, clock.clone())),
            content_cache: Mutex::new(TtlCache::with_clock(ttl, clock)),
        }
    }

    /// Overrides the documentation extension (a leading dot is ignored).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn components_dir(&self) -> &Path {
        &self.components_dir
    }

    // == List ==
    /// Returns metadata for every documentation unit in the directory.
    ///
    /// Units whose front-matter fails to parse are logged and left out; they
    /// never fail the listing. A directory that cannot be read does.
    pub async fn get_components_list(&self) -> Result<Vec<ComponentMeta>> {
        let cache_key = self.list_cache_key();
        let cached = self.meta_cache.lock().await.get(&cache_key);
        if let Some(metas) = cached {
            debug!(count = metas.len(), "Component list served from cache");
            return Ok(metas);
        }

        info!(dir = %self.components_dir.display(), "Reading components directory");
        let files = self.list_files().await?;
        let doc_files: Vec<&String> = files.iter().filter(|f| self.is_doc_file(f)).collect();
        debug!(count = doc_files.len(), extension = %self.extension, "Found documentation units");

        let mut metas = Vec::with_capacity(doc_files.len());
        for file in doc_files {
            let path = self.components_dir.join(file);
            match self.source.parse_meta(&path).await {
                Ok(meta) => metas.push(meta),
                Err(err) => error!(file = %file, error = %err, "Skipping component with invalid metadata"),
            }
        }

        debug!(count = metas.len(), "Caching component list");
        self.meta_cache.lock().await.set(cache_key, metas.clone());

        Ok(metas)
    }

    // == Detail ==
    /// Returns the full content of the unit whose file stem matches
    /// `component_name`, ignoring case.
    ///
    /// When several files match, one with the documentation extension is
    /// preferred, then the lexicographically first name.
    ///
    /// A miss is reported as `ComponentNotFound` and is not cached, so a
    /// file added later is found on the next call.
    pub async fn get_component_detail(&self, component_name: &str) -> Result<String> {
        let cache_key = self.detail_cache_key(component_name);
        let cached = self.content_cache.lock().await.get(&cache_key);
        if let Some(content) = cached {
            debug!(component = component_name, "Component detail served from cache");
            return Ok(content);
        }

        info!(component = component_name, "Looking up component");
        let files = self.list_files().await?;
        let wanted = component_name.to_lowercase();
        // Documentation units win over other files with the same stem
        let Some(file) = files
            .iter()
            .filter(|f| file_stem(f).to_lowercase() == wanted)
            .min_by_key(|f| !self.is_doc_file(f))
        else {
            error!(component = component_name, "Component not found");
            return Err(ServiceError::ComponentNotFound(component_name.to_string()));
        };

        debug!(file = %file, "Reading component content");
        let content = self
            .source
            .parse_content(&self.components_dir.join(file))
            .await?;

        self.content_cache
            .lock()
            .await
            .set(cache_key, content.clone());

        Ok(content)
    }

    // == Administration ==
    /// Drops every cached listing and content entry.
    pub async fn clear_caches(&self) {
        self.meta_cache.lock().await.clear();
        self.content_cache.lock().await.clear();
        info!(dir = %self.components_dir.display(), "Component caches cleared");
    }

    pub async fn cache_stats(&self) -> ServiceCacheStats {
        ServiceCacheStats {
            metadata: self.meta_cache.lock().await.stats(),
            content: self.content_cache.lock().await.stats(),
        }
    }

    // == Helpers ==
    fn list_cache_key(&self) -> String {
        format!("components:{}", self.components_dir.display())
    }

    fn detail_cache_key(&self, component_name: &str) -> String {
        format!("component:{}:{}", self.components_dir.display(), component_name)
    }

    /// Lists the directory in lexicographic order so lookups that match
    /// several files always pick the same one.
    async fn list_files(&self) -> Result<Vec<String>> {
        let mut files = self
            .source
            .list_dir(&self.components_dir)
            .await
            .map_err(|source| {
                error!(dir = %self.components_dir.display(), error = %source, "Cannot read components directory");
                ServiceError::DirectoryAccess {
                    path: self.components_dir.clone(),
                    source,
                }
            })?;
        files.sort();
        Ok(files)
    }

    fn is_doc_file(&self, file: &str) -> bool {
        Path::new(file)
            .extension()
            .is_some_and(|ext| ext == self.extension.as_str())
    }
}

/// File name without its final extension.
fn file_stem(file: &str) -> &str {
    Path::new(file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file)
}
