//! Front-matter Parser
//!
//! Reads documentation units and extracts their YAML front-matter. A unit
//! looks like:
//!
//! ```text
//! ---
//! name: Button
//! description: A clickable button
//! props:
//!   size: Button size
//! ---
//!
//! # Button
//! ...
//! ```

use std::path::Path;

use tracing::debug;

use crate::docs::ComponentMeta;
use crate::error::ParseError;

const FENCE: &str = "---";

// == Front-matter Split ==
/// Splits `text` into its YAML front-matter and the remaining body.
///
/// The first line must be `---`; the block runs until the next line that is
/// exactly `---`. Returns `None` when either fence is missing.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Some((&text[yaml_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

// == Metadata ==
/// Parses component metadata out of a unit's text.
///
/// `path` is only used to label errors.
pub fn parse_meta_str(text: &str, path: &Path) -> Result<ComponentMeta, ParseError> {
    let (yaml, _body) =
        split_front_matter(text).ok_or_else(|| ParseError::MissingFrontMatter {
            path: path.to_path_buf(),
        })?;

    let meta: ComponentMeta =
        serde_yaml::from_str(yaml).map_err(|source| ParseError::InvalidFrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

    if meta.name.trim().is_empty() {
        return Err(ParseError::EmptyName {
            path: path.to_path_buf(),
        });
    }

    Ok(meta)
}

/// Reads a documentation unit as UTF-8 text.
pub async fn read_content(path: &Path) -> Result<String, ParseError> {
    debug!(path = %path.display(), "Reading documentation unit");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads a documentation unit and validates its front-matter.
pub async fn parse_meta(path: &Path) -> Result<ComponentMeta, ParseError> {
    let text = read_content(path).await?;
    let meta = parse_meta_str(&text, path)?;
    debug!(path = %path.display(), name = %meta.name, "Parsed component metadata");
    Ok(meta)
}

/// Returns the raw text of a documentation unit, front-matter included.
pub async fn parse_content(path: &Path) -> Result<String, ParseError> {
    read_content(path).await
}
