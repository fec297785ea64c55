//! Data loader: fetches localized item lists and shared metadata, resolves
//! references, and caches the result per locale.
//!
//! Resource failures never reach the caller. A resource that cannot be
//! fetched, or is not a JSON array, is logged and treated as an empty list,
//! and a collection built from a degraded resource is not cached, so the next
//! call fetches again. Inside a good array, records that do not decode are
//! skipped one by one; unknown labels are skipped without losing the record.

pub mod cache;
pub mod observer;
pub mod resolve;

pub use cache::{CacheEntry, LocaleCache};
pub use observer::{LocaleObservers, SubscriptionId};
pub use resolve::resolve_technologies;

use folio_tags::{tally, CertificationTag};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::config::{FolioConfig, ResourcePaths};
use crate::domain::{Certification, Locale, LocaleChange, Project, RawProject, Technology};
use crate::error::Result;
use crate::filter;
use crate::http::Transport;

/// Resolved projects together with the metadata they were resolved against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectData {
    pub projects: Vec<Project>,
    pub technologies: Vec<Technology>,
}

/// Loads gallery collections through a `Transport`.
#[derive(Debug)]
pub struct Catalog<T: Transport> {
    transport: T,
    paths: ResourcePaths,
    projects: LocaleCache<ProjectData>,
    certifications: LocaleCache<Vec<Certification>>,
    locale: RwLock<Locale>,
    // Bumped on every invalidation; fetches started under an older
    // generation do not populate the cache.
    generation: AtomicU64,
    observers: LocaleObservers,
}

impl<T: Transport> Catalog<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &FolioConfig::default())
    }

    pub fn with_config(transport: T, config: &FolioConfig) -> Self {
        Self {
            transport,
            paths: config.paths.clone(),
            projects: LocaleCache::new(config.cache_max_age()),
            certifications: LocaleCache::new(config.cache_max_age()),
            locale: RwLock::new(config.default_locale),
            generation: AtomicU64::new(0),
            observers: LocaleObservers::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn paths(&self) -> &ResourcePaths {
        &self.paths
    }

    // ===== Locale =====

    pub fn locale(&self) -> Locale {
        self.locale.read().map(|l| *l).unwrap_or_default()
    }

    /// Switch the active locale.
    ///
    /// Clears every cache, then notifies observers synchronously. Returns
    /// `false` (and does nothing) when `locale` is already active.
    pub fn set_locale(&self, locale: Locale) -> bool {
        let previous = {
            let Ok(mut current) = self.locale.write() else {
                return false;
            };
            if *current == locale {
                return false;
            }
            std::mem::replace(&mut *current, locale)
        };

        self.clear_cache();
        tracing::info!("Locale changed from {} to {}", previous, locale);
        self.observers.notify(&LocaleChange {
            previous,
            current: locale,
        });
        true
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LocaleChange) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Drop every cached collection.
    pub fn clear_cache(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.projects.clear();
        self.certifications.clear();
    }

    pub fn is_cached(&self, locale: Locale) -> (bool, bool) {
        (
            self.projects.get(locale).is_some(),
            self.certifications.get(locale).is_some(),
        )
    }

    // ===== Projects =====

    /// Projects for `locale` with technologies resolved, in resource order.
    pub async fn load_projects(&self, locale: Locale) -> Vec<Project> {
        self.project_data(locale).await.projects
    }

    /// Technology list as loaded alongside the projects for `locale`.
    pub async fn technologies(&self, locale: Locale) -> Vec<Technology> {
        self.project_data(locale).await.technologies
    }

    pub async fn project_data(&self, locale: Locale) -> ProjectData {
        if let Some(data) = self.projects.get(locale) {
            tracing::debug!("Projects cache hit for {}", locale);
            return data;
        }
        tracing::debug!("Projects cache miss for {}", locale);

        let generation = self.generation.load(Ordering::SeqCst);
        let projects_path = self.paths.projects_for(locale);
        let technologies_path = self.paths.technologies_path();

        let (raw, technologies) = tokio::join!(
            self.fetch_list::<RawProject>(&projects_path),
            self.fetch_list::<Technology>(technologies_path),
        );
        let degraded = raw.is_err() || technologies.is_err();
        let raw = degrade(raw, "projects", &projects_path);
        let technologies = degrade(technologies, "technologies", technologies_path);

        let data = ProjectData {
            projects: resolve_technologies(raw, &technologies),
            technologies,
        };
        if !degraded {
            self.store(&self.projects, generation, locale, data.clone());
        }
        data
    }

    /// The `count` most recent projects (main page preview).
    pub async fn latest_projects(&self, locale: Locale, count: usize) -> Vec<Project> {
        filter::latest(&self.load_projects(locale).await, count)
    }

    pub async fn project_by_id(&self, locale: Locale, id: u32) -> Option<Project> {
        self.load_projects(locale)
            .await
            .into_iter()
            .find(|p| p.id == id)
    }

    // ===== Certifications =====

    /// Certifications for `locale`, in resource order.
    pub async fn load_certifications(&self, locale: Locale) -> Vec<Certification> {
        if let Some(certifications) = self.certifications.get(locale) {
            tracing::debug!("Certifications cache hit for {}", locale);
            return certifications;
        }
        tracing::debug!("Certifications cache miss for {}", locale);

        let generation = self.generation.load(Ordering::SeqCst);
        let path = self.paths.certifications_for(locale);
        let fetched = self.fetch_list::<Certification>(&path).await;
        let degraded = fetched.is_err();
        let certifications = degrade(fetched, "certifications", &path);

        if !degraded {
            self.store(&self.certifications, generation, locale, certifications.clone());
        }
        certifications
    }

    /// The `count` most recent certifications (main page preview).
    pub async fn latest_certifications(&self, locale: Locale, count: usize) -> Vec<Certification> {
        filter::latest(&self.load_certifications(locale).await, count)
    }

    pub async fn certification_by_id(&self, locale: Locale, id: u32) -> Option<Certification> {
        self.load_certifications(locale)
            .await
            .into_iter()
            .find(|c| c.id == id)
    }

    /// Every tag used by some certification, sorted.
    pub async fn certification_tags(&self, locale: Locale) -> Vec<CertificationTag> {
        let certifications = self.load_certifications(locale).await;
        tally::distinct(certifications.iter().map(|c| c.tags.as_slice()))
    }

    /// Number of certifications carrying each tag.
    pub async fn certification_tag_counts(
        &self,
        locale: Locale,
    ) -> BTreeMap<CertificationTag, usize> {
        let certifications = self.load_certifications(locale).await;
        tally::counts(certifications.iter().map(|c| c.tags.as_slice()))
    }

    // ===== Internals =====

    async fn fetch_list<D: DeserializeOwned>(&self, path: &str) -> Result<Vec<D>> {
        let body = self.transport.get(path).await?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(decode_records(records, path))
    }

    fn store<V: Clone>(&self, cache: &LocaleCache<V>, generation: u64, locale: Locale, value: V) {
        if self.generation.load(Ordering::SeqCst) == generation {
            cache.insert(locale, value);
        } else {
            tracing::debug!("Discarding superseded {} load", locale);
        }
    }
}

/// Decode each record on its own; a record that does not fit the model is
/// dropped without taking the rest of the list with it.
fn decode_records<D: DeserializeOwned>(records: Vec<serde_json::Value>, path: &str) -> Vec<D> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::debug!("Skipping record {} of {}: {}", index, path, e);
                None
            }
        })
        .collect()
}

fn degrade<D>(fetched: Result<Vec<D>>, what: &str, path: &str) -> Vec<D> {
    fetched.unwrap_or_else(|e| {
        tracing::warn!("Error loading {} from {}: {}", what, path, e);
        Vec::new()
    })
}
