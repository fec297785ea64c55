//! Test fixture loading utilities

use std::path::PathBuf;

use folio_core::http::{DirTransport, MemoryTransport};

/// Root of the fixture site; resource paths resolve under it.
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_root().join(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Transport serving the fixture site from disk
#[allow(dead_code)]
pub fn dir_transport() -> DirTransport {
    DirTransport::new(fixture_root())
}

/// Transport serving the named fixture resources from memory
#[allow(dead_code)]
pub fn memory_transport(names: &[&str]) -> MemoryTransport {
    let transport = MemoryTransport::new();
    for name in names {
        transport.insert(name, load_fixture(name));
    }
    transport
}

/// Every resource in the fixture site
#[allow(dead_code)]
pub const ALL_RESOURCES: &[&str] = &[
    "assets/data/technologies.json",
    "assets/data/projects.en.json",
    "assets/data/projects.fr.json",
    "assets/data/certifications.en.json",
    "assets/data/certifications.fr.json",
];
