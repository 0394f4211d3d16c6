//! Service Module
//!
//! The component lookup service and its output formatting.

mod component;
mod format;

pub use component::{ComponentService, ServiceCacheStats};
pub use format::format_component_list;
