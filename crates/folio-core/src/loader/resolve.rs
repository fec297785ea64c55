//! Metadata resolution: technology names to technology records.

use std::collections::HashMap;

use crate::domain::{Project, RawProject, Technology};

/// Resolve every project's technology references against `technologies`.
///
/// When two records share a name the later one wins. Names with no record
/// are dropped; the result never holds a placeholder.
pub fn resolve_technologies(raw: Vec<RawProject>, technologies: &[Technology]) -> Vec<Project> {
    let by_name: HashMap<&str, &Technology> = technologies
        .iter()
        .map(|tech| (tech.name.as_str(), tech))
        .collect();

    raw.into_iter()
        .map(|project| {
            let id = project.id;
            let (resolved, unresolved) = project.resolve(&by_name);
            if !unresolved.is_empty() {
                tracing::debug!(
                    "Project {} references unknown technologies: {}",
                    id,
                    unresolved.join(", ")
                );
            }
            resolved
        })
        .collect()
}
