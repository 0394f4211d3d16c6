//! Documentation Module
//!
//! Component metadata, the front-matter parser, and the document source
//! abstraction consumed by the lookup service.

mod meta;
pub mod parser;
mod source;

pub use meta::ComponentMeta;
pub use source::{DocumentSource, FsDocumentSource};

// == Public Constants ==
/// Extension of documentation units, without the dot
pub const DEFAULT_DOC_EXTENSION: &str = "mdx";
