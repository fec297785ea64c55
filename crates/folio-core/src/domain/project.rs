//! Project domain model

use folio_tags::{known_labels, ProjectCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::technology::{Technology, TechnologyRef};

/// One logo path or several (projects built on multiple stacks show a row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Logo {
    Single(String),
    Many(Vec<String>),
}

impl Logo {
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Logo::Single(path) => vec![path.as_str()],
            Logo::Many(paths) => paths.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for Logo {
    fn default() -> Self {
        Logo::Many(Vec::new())
    }
}

/// A portfolio project, generic over how technologies are held.
///
/// `RawProject` is the wire shape; `Project` is what the loader hands out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord<T> {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    // Visual assets
    #[serde(default)]
    pub logo: Logo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_tuto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_gif: Option<String>,

    // Classification
    #[serde(default = "Vec::new")]
    pub technologies: Vec<T>,
    #[serde(default, deserialize_with = "known_labels")]
    pub categories: Vec<ProjectCategory>,

    // Links
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub go_to_page: String,
}

/// A project as decoded from its JSON resource.
pub type RawProject = ProjectRecord<TechnologyRef>;

/// A project whose technology references have all been resolved.
pub type Project = ProjectRecord<Technology>;

impl RawProject {
    /// Resolve technology names against `by_name`.
    ///
    /// Inline records are kept as-is; names with no entry are dropped and
    /// returned alongside the project so the caller can log them.
    pub fn resolve(self, by_name: &HashMap<&str, &Technology>) -> (Project, Vec<String>) {
        let mut unresolved = Vec::new();
        let mut technologies = Vec::with_capacity(self.technologies.len());
        for reference in self.technologies {
            match reference {
                TechnologyRef::Inline(tech) => technologies.push(tech),
                TechnologyRef::Name(name) => match by_name.get(name.as_str()) {
                    Some(tech) => technologies.push((*tech).clone()),
                    None => unresolved.push(name),
                },
            }
        }

        let project = Project {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            long_description: self.long_description,
            logo: self.logo,
            thumbnail: self.thumbnail,
            images: self.images,
            video_tuto: self.video_tuto,
            demo_gif: self.demo_gif,
            technologies,
            categories: self.categories,
            github: self.github,
            go_to_page: self.go_to_page,
        };
        (project, unresolved)
    }
}

impl Project {
    /// Minimal project, mostly for tests and fixtures.
    pub fn new(id: u32, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            subtitle: String::new(),
            description: String::new(),
            long_description: None,
            logo: Logo::default(),
            thumbnail: None,
            images: Vec::new(),
            video_tuto: None,
            demo_gif: None,
            technologies: Vec::new(),
            categories: Vec::new(),
            github: String::new(),
            go_to_page: String::new(),
        }
    }

    pub fn has_video(&self) -> bool {
        self.video_tuto.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}
