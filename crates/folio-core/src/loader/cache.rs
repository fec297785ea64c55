//! Per-locale cache of resolved collections.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::Locale;

/// A cached value and when it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub stored_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, max_age: Option<Duration>, now: DateTime<Utc>) -> bool {
        match max_age {
            Some(max_age) => now - self.stored_at < max_age,
            None => true,
        }
    }
}

/// Cache keyed by locale, owned by the loader.
///
/// Entries older than `max_age` (when set) read as misses.
#[derive(Debug)]
pub struct LocaleCache<V> {
    entries: RwLock<HashMap<Locale, CacheEntry<V>>>,
    max_age: Option<Duration>,
}

impl<V: Clone> Default for LocaleCache<V> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<V: Clone> LocaleCache<V> {
    pub fn new(max_age: Option<Duration>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_age,
        }
    }

    /// Fresh value for `locale`, if any.
    pub fn get(&self, locale: Locale) -> Option<V> {
        self.get_at(locale, Utc::now())
    }

    fn get_at(&self, locale: Locale, now: DateTime<Utc>) -> Option<V> {
        let entries = self.entries.read().ok()?;
        entries
            .get(&locale)
            .filter(|entry| entry.is_fresh(self.max_age, now))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` for `locale`, replacing any earlier entry.
    pub fn insert(&self, locale: Locale, value: V) {
        self.insert_at(locale, value, Utc::now());
    }

    fn insert_at(&self, locale: Locale, value: V, stored_at: DateTime<Utc>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(locale, CacheEntry { value, stored_at });
        }
    }

    /// When the entry for `locale` was stored.
    pub fn stored_at(&self, locale: Locale) -> Option<DateTime<Utc>> {
        let entries = self.entries.read().ok()?;
        entries.get(&locale).map(|entry| entry.stored_at)
    }

    pub fn invalidate(&self, locale: Locale) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(&locale);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_invalidate() {
        let cache: LocaleCache<Vec<u32>> = LocaleCache::default();
        assert!(cache.get(Locale::En).is_none());

        cache.insert(Locale::En, vec![1, 2]);
        cache.insert(Locale::Fr, vec![3]);
        assert_eq!(cache.get(Locale::En), Some(vec![1, 2]));
        assert_eq!(cache.len(), 2);

        cache.invalidate(Locale::En);
        assert!(cache.get(Locale::En).is_none());
        assert_eq!(cache.get(Locale::Fr), Some(vec![3]));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn later_insert_wins() {
        let cache: LocaleCache<&str> = LocaleCache::default();
        cache.insert(Locale::Fr, "first");
        cache.insert(Locale::Fr, "second");
        assert_eq!(cache.get(Locale::Fr), Some("second"));
    }

    #[test]
    fn expired_entries_are_misses() {
        let cache: LocaleCache<u8> = LocaleCache::new(Some(Duration::seconds(60)));
        let now = Utc::now();
        cache.insert_at(Locale::En, 1, now - Duration::seconds(120));
        cache.insert_at(Locale::Fr, 2, now - Duration::seconds(10));

        assert_eq!(cache.get_at(Locale::En, now), None);
        assert_eq!(cache.get_at(Locale::Fr, now), Some(2));
        assert!(cache.stored_at(Locale::En).is_some());
    }
}
