//! Technology metadata and the references projects hold to it.

use folio_tags::TechCategory;
use serde::{Deserialize, Serialize};

/// A technology descriptor, shared by every locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// CSS color of the badge, e.g. `#DD0031`
    #[serde(default)]
    pub color: String,
    pub category: TechCategory,
    #[serde(default)]
    pub is_custom_icon: bool,
}

impl Technology {
    pub fn new(name: &str, category: TechCategory) -> Self {
        Self {
            name: name.to_string(),
            icon: String::new(),
            color: String::new(),
            category,
            is_custom_icon: false,
        }
    }
}

/// How a project names a technology in its JSON resource.
///
/// Only `RawProject` carries these. Resolution turns every reference into a
/// `Technology` or drops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechnologyRef {
    Name(String),
    Inline(Technology),
}
