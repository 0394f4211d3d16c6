//! Document Source Module
//!
//! The filesystem and parsing collaborators the lookup service depends on,
//! behind one trait so the service can be driven by other backends in tests.

use std::fs::FileType;
use std::future::Future;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::docs::{parser, ComponentMeta};
use crate::error::ParseError;

// == Document Source ==
/// Lists documentation directories and parses documentation units.
pub trait DocumentSource: Send + Sync {
    /// Returns the names of the immediate entries of `dir`.
    ///
    /// Fails when `dir` does not exist or cannot be read.
    fn list_dir(&self, dir: &Path) -> impl Future<Output = io::Result<Vec<String>>> + Send;

    /// Reads `path` and validates its front-matter.
    fn parse_meta(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<ComponentMeta, ParseError>> + Send;

    /// Reads the full text of `path`.
    fn parse_content(&self, path: &Path) -> impl Future<Output = Result<String, ParseError>> + Send;
}

// == Filesystem Source ==
/// `DocumentSource` over the local filesystem via `tokio::fs`.
///
/// Only regular files and symlinks are listed. Names that are not valid
/// UTF-8, and entries whose type cannot be read, are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentSource;

impl DocumentSource for FsDocumentSource {
    async fn list_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut read_dir = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            if !is_listable(&entry.path(), entry.file_type().await) {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }

        Ok(names)
    }

    async fn parse_meta(&self, path: &Path) -> Result<ComponentMeta, ParseError> {
        parser::parse_meta(path).await
    }

    async fn parse_content(&self, path: &Path) -> Result<String, ParseError> {
        parser::parse_content(path).await
    }
}

/// Whether a directory entry can be a documentation unit.
///
/// An entry whose type cannot be read is logged and skipped instead of
/// failing the whole listing.
fn is_listable(path: &Path, file_type: io::Result<FileType>) -> bool {
    match file_type {
        Ok(file_type) => file_type.is_file() || file_type.is_symlink(),
        Err(err) => {
            warn!(entry = %path.display(), error = %err, "Skipping unreadable directory entry");
            false
        }
    }
}
