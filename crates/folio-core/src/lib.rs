//! folio-core: Data layer for the portfolio galleries
//!
//! This library provides:
//! - Domain models for projects, technologies, and certifications
//! - A per-locale caching loader over pluggable transports (HTTP, directory, memory)
//! - The filter/sort engine shared by both galleries
//! - Gallery presenter state that keeps the visible list in step with filters
//!
//! Resource failures degrade to empty collections and are logged through
//! `tracing`; they are never returned to the caller.

pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod http;
pub mod loader;

pub use config::{ConfigError, FolioConfig, ResourcePaths};
pub use domain::{
    Catalogued, Certification, CertificationKind, Locale, LocaleChange, Logo, Project,
    RawProject, SubCertification, Technology, TechnologyRef,
};
pub use error::{FolioError, Result};
pub use filter::{FilterSpec, SortOrder};
pub use gallery::{CertificationGallery, Gallery, ProjectGallery};
pub use http::{DirTransport, HttpError, MemoryTransport, Transport};
#[cfg(feature = "native")]
pub use http::HttpTransport;
pub use loader::{Catalog, ProjectData};

pub use folio_tags::{CertificationTag, MatchMode, ProjectCategory, Selection, TechCategory};
