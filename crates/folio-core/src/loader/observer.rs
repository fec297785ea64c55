//! Registry of callbacks interested in locale changes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::LocaleChange;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(&LocaleChange) + Send + Sync>;

#[derive(Default)]
pub struct LocaleObservers {
    next_id: AtomicU64,
    callbacks: RwLock<Vec<(SubscriptionId, Callback)>>,
}

impl LocaleObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LocaleChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        if let Ok(mut callbacks) = self.callbacks.write() {
            callbacks.push((id, Arc::new(callback)));
        }
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let Ok(mut callbacks) = self.callbacks.write() else {
            return false;
        };
        let before = callbacks.len();
        callbacks.retain(|(sub, _)| *sub != id);
        callbacks.len() != before
    }

    /// Call every observer, in subscription order, on the calling thread.
    ///
    /// Runs over a snapshot taken before the first call, so callbacks may
    /// subscribe or unsubscribe; changes apply from the next notification.
    pub fn notify(&self, change: &LocaleChange) {
        let snapshot: Vec<Callback> = match self.callbacks.read() {
            Ok(callbacks) => callbacks.iter().map(|(_, cb)| Arc::clone(cb)).collect(),
            Err(_) => return,
        };
        for callback in snapshot {
            callback(change);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for LocaleObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleObservers")
            .field("subscribers", &self.len())
            .finish()
    }
}
