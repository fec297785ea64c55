//! Certification domain model

use folio_tags::{known_labels, CertificationTag};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Whether a certification stands alone or groups several courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationKind {
    Standalone,
    SkillTrack,
}

impl CertificationKind {
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Standalone => "certificationsGallery.type.standalone",
            Self::SkillTrack => "certificationsGallery.type.skillTrack",
        }
    }
}

impl std::str::FromStr for CertificationKind {
    type Err = crate::error::FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standalone" => Ok(Self::Standalone),
            "skill-track" | "skill_track" | "skilltrack" => Ok(Self::SkillTrack),
            other => Err(crate::error::FolioError::InvalidArgument(format!(
                "unknown certification type: {other}"
            ))),
        }
    }
}

/// A course completed as part of a skill track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCertification {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,
}

/// A certification earned from a training provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: CertificationKind,
    pub title: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub credential_url: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "known_labels")]
    pub tags: Vec<CertificationTag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_certifications: Vec<SubCertification>,
}

impl Certification {
    pub fn new(id: u32, kind: CertificationKind, title: &str, provider: &str) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            provider: provider.to_string(),
            description: String::new(),
            credential_url: String::new(),
            skills: Vec::new(),
            tags: Vec::new(),
            sub_certifications: Vec::new(),
        }
    }

    /// Provider name as a CSS-friendly class, e.g. `"Google Cloud"` → `"google-cloud"`.
    pub fn provider_slug(&self) -> String {
        WHITESPACE
            .replace_all(&self.provider.trim().to_lowercase(), "-")
            .into_owned()
    }
}
