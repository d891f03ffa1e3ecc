//! Per-requester cache of the last drawn selection.

use shelf_proto::{CollectionId, RequesterId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

type Entries = HashMap<RequesterId, Vec<CollectionId>>;

/// Requester id to the ids of its last fresh draw, in draw order.
///
/// Entries never expire on their own. They are overwritten by the next
/// fresh draw and dropped only by [`clear`](Self::clear).
///
/// The cache holds nothing that cannot be redrawn, so a lock poisoned by a
/// panicking thread is recovered by emptying the map rather than failing
/// every later call.
pub struct SelectionCache {
    entries: Mutex<Entries>,
}

impl SelectionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("selection cache lock poisoned, dropping cached selections");
            self.entries.clear_poison();
            let mut entries = poisoned.into_inner();
            entries.clear();
            entries
        })
    }

    /// Copy of the requester's entry, if any.
    pub fn entry(&self, requester: &RequesterId) -> Option<Vec<CollectionId>> {
        self.lock().get(requester).cloned()
    }

    /// Create or overwrite the requester's entry.
    pub fn store(&self, requester: RequesterId, ids: Vec<CollectionId>) {
        self.lock().insert(requester, ids);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of requesters with an entry.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no requester has an entry.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for SelectionCache {
    fn default() -> Self {
        Self::new()
    }
}
