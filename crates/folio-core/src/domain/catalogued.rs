//! The seam between gallery items and the filter/sort engine.

use folio_tags::{CertificationTag, ProjectCategory, TechCategory};
use std::convert::Infallible;
use std::fmt::Debug;

use super::certification::{Certification, CertificationKind};
use super::project::Project;

/// An item a gallery can filter and sort.
pub trait Catalogued: Clone {
    /// Labels carried directly by the item.
    type Category: Copy + Eq + Debug;
    /// Labels carried by the item's resolved metadata.
    type MetaCategory: Copy + Eq + Debug;
    /// Discrete type attribute, for items that have one.
    type Kind: Copy + Eq + Debug;

    /// Translation key prefix of the gallery showing this item.
    const LABEL_PREFIX: &'static str;

    /// Identifier; higher means more recent.
    fn id(&self) -> u32;

    fn title(&self) -> &str;

    /// Fields the text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    fn categories(&self) -> &[Self::Category];

    fn metadata_categories(&self) -> Vec<Self::MetaCategory>;

    /// Names of the resolved metadata records (technology names).
    fn metadata_names(&self) -> Vec<&str>;

    fn kind(&self) -> Option<Self::Kind>;
}

impl Catalogued for Project {
    type Category = ProjectCategory;
    type MetaCategory = TechCategory;
    type Kind = Infallible;

    const LABEL_PREFIX: &'static str = "projectsGallery";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }

    fn categories(&self) -> &[ProjectCategory] {
        &self.categories
    }

    fn metadata_categories(&self) -> Vec<TechCategory> {
        self.technologies.iter().map(|t| t.category).collect()
    }

    fn metadata_names(&self) -> Vec<&str> {
        self.technologies.iter().map(|t| t.name.as_str()).collect()
    }

    fn kind(&self) -> Option<Infallible> {
        None
    }
}

impl Catalogued for Certification {
    type Category = CertificationTag;
    type MetaCategory = Infallible;
    type Kind = CertificationKind;

    const LABEL_PREFIX: &'static str = "certificationsGallery";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.provider.as_str(),
        ]
    }

    fn categories(&self) -> &[CertificationTag] {
        &self.tags
    }

    fn metadata_categories(&self) -> Vec<Infallible> {
        Vec::new()
    }

    fn metadata_names(&self) -> Vec<&str> {
        Vec::new()
    }

    fn kind(&self) -> Option<CertificationKind> {
        Some(self.kind)
    }
}
