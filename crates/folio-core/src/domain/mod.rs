//! Domain models for the portfolio galleries.
//!
//! Items (projects, certifications) are what galleries display. Technologies
//! are the metadata records projects reference by name; those references are
//! resolved once, at load time, so nothing past the loader sees a bare name.

pub mod catalogued;
pub mod certification;
pub mod locale;
pub mod project;
pub mod technology;

pub use catalogued::Catalogued;
pub use certification::{Certification, CertificationKind, SubCertification};
pub use locale::{Locale, LocaleChange};
pub use project::{Logo, Project, ProjectRecord, RawProject};
pub use technology::{Technology, TechnologyRef};
