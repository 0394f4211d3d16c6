//! Component metadata carried in a documentation unit's front-matter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lightweight description of one UI component.
///
/// Deserialized from YAML front-matter. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Component name, never empty
    pub name: String,
    /// Human-readable summary
    pub description: String,
    /// Property name to property description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<BTreeMap<String, String>>,
}

impl ComponentMeta {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            props: None,
        }
    }

    /// Adds a property description, creating the map on first use.
    pub fn with_prop(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.props
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), description.into());
        self
    }
}
