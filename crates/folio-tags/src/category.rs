//! Fixed category enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Error returned when a slug names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {slug}")]
pub struct UnknownCategory {
    pub kind: &'static str,
    pub slug: String,
}

/// Behaviour shared by every label enumeration.
///
/// `slug` is the wire string used in the JSON resources and must agree with
/// the serde representation of the enum.
pub trait Category: Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Prefix for translation keys (e.g. `projectsGallery.categories`).
    const LABEL_PREFIX: &'static str;

    /// Wire string.
    fn slug(&self) -> &'static str;

    /// Case-insensitive lookup by wire string.
    fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
    }

    /// Translation key for UI labels.
    fn label_key(&self) -> String {
        format!("{}.{}", Self::LABEL_PREFIX, self.slug())
    }
}

/// What kind of work a project is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Web,
    Ai,
    Mobile,
    Desktop,
    Data,
    Game,
}

impl Category for ProjectCategory {
    const ALL: &'static [Self] = &[
        Self::Web,
        Self::Ai,
        Self::Mobile,
        Self::Desktop,
        Self::Data,
        Self::Game,
    ];
    const LABEL_PREFIX: &'static str = "projectsGallery.categories";

    fn slug(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Ai => "ai",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Data => "data",
            Self::Game => "game",
        }
    }
}

/// Classification of a technology (the metadata category of a project).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    AiMl,
    Devops,
    Language,
    Tools,
}

impl Category for TechCategory {
    const ALL: &'static [Self] = &[
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::AiMl,
        Self::Devops,
        Self::Language,
        Self::Tools,
    ];
    const LABEL_PREFIX: &'static str = "projectsGallery.techCategories";

    fn slug(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::AiMl => "ai_ml",
            Self::Devops => "devops",
            Self::Language => "language",
            Self::Tools => "tools",
        }
    }
}

/// Topic label on a certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationTag {
    // Programming & development
    Python,
    Javascript,
    WebDevelopment,

    // Data & AI
    DataScience,
    MachineLearning,
    DeepLearning,
    BigData,

    // Networking
    Networking,
    Cisco,

    // Frameworks
    Tensorflow,
    Pytorch,

    // Databases
    Sql,
    Nosql,
}

impl Category for CertificationTag {
    const ALL: &'static [Self] = &[
        Self::Python,
        Self::Javascript,
        Self::WebDevelopment,
        Self::DataScience,
        Self::MachineLearning,
        Self::DeepLearning,
        Self::BigData,
        Self::Networking,
        Self::Cisco,
        Self::Tensorflow,
        Self::Pytorch,
        Self::Sql,
        Self::Nosql,
    ];
    const LABEL_PREFIX: &'static str = "certificationsGallery.tags";

    fn slug(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Javascript => "javascript",
            Self::WebDevelopment => "web_development",
            Self::DataScience => "data_science",
            Self::MachineLearning => "machine_learning",
            Self::DeepLearning => "deep_learning",
            Self::BigData => "big_data",
            Self::Networking => "networking",
            Self::Cisco => "cisco",
            Self::Tensorflow => "tensorflow",
            Self::Pytorch => "pytorch",
            Self::Sql => "sql",
            Self::Nosql => "nosql",
        }
    }
}

macro_rules! slug_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.slug())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::from_slug(s).ok_or_else(|| UnknownCategory {
                    kind: $kind,
                    slug: s.to_string(),
                })
            }
        }
    };
}

slug_traits!(ProjectCategory, "project category");
slug_traits!(TechCategory, "technology category");
slug_traits!(CertificationTag, "certification tag");

/// `deserialize_with` helper for label lists that skips unknown labels.
///
/// Content files are edited by hand; one misspelled label should cost that
/// label, not the record carrying it.
pub fn known_labels<'de, D, C>(deserializer: D) -> Result<Vec<C>, D::Error>
where
    D: serde::Deserializer<'de>,
    C: Category,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut labels = Vec::with_capacity(raw.len());
    for slug in &raw {
        match C::from_slug(slug) {
            Some(label) => labels.push(label),
            None => tracing::debug!("Skipping unknown label {:?}", slug),
        }
    }
    Ok(labels)
}
