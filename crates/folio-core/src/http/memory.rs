//! In-memory transport (embedded assets, tests)

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use super::{HttpError, Transport};

/// Serves resource bodies from a map keyed by path.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    resources: RwLock<HashMap<String, String>>,
    requests: AtomicUsize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, path: &str, body: impl Into<String>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&self, path: &str, body: impl Into<String>) {
        if let Ok(mut resources) = self.resources.write() {
            resources.insert(path.to_string(), body.into());
        }
    }

    pub fn remove(&self, path: &str) {
        if let Ok(mut resources) = self.resources.write() {
            resources.remove(path);
        }
    }

    /// Number of `get` calls served so far, hits and misses alike.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Transport for MemoryTransport {
    async fn get(&self, path: &str) -> Result<String, HttpError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let resources = self.resources.read().map_err(|e| HttpError::Io {
            message: e.to_string(),
        })?;
        resources
            .get(path.trim_start_matches('/'))
            .cloned()
            .ok_or_else(|| HttpError::NotFound {
                path: path.to_string(),
            })
    }
}
