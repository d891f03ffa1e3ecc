//! InMemoryLibrary: Vec-backed library and item counter.

use crate::collection::{Collection, Item};
use crate::error::LibraryError;
use crate::id::CollectionId;
use crate::library::{ItemCounter, LibraryCollectionSource};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// A library held in memory, in insertion order.
pub struct InMemoryLibrary {
    entries: Mutex<Vec<(Collection, Vec<Item>)>>,
    unavailable: AtomicBool,
    broken_counts: Mutex<HashSet<CollectionId>>,
}

impl InMemoryLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
            broken_counts: Mutex::new(HashSet::new()),
        }
    }

    /// A library of `n` collections `c0..c{n-1}`, collection `ci` holding
    /// `i + 1` items.
    pub fn with_collections(n: usize) -> Self {
        let library = Self::new();
        for i in 0..n {
            let items = (0..=i)
                .map(|j| Item::new(format!("c{i}-i{j}"), format!("Item {j}")))
                .collect();
            library.add(
                Collection::new(format!("c{i}"), format!("Collection {i}")),
                items,
            );
        }
        library
    }

    /// Append a collection with its items.
    pub fn add(&self, collection: Collection, items: Vec<Item>) {
        self.entries.lock().unwrap().push((collection, items));
    }

    /// Remove a collection, as if the user deleted it.
    pub fn remove(&self, id: &CollectionId) {
        self.entries.lock().unwrap().retain(|(c, _)| &c.id != id);
    }

    /// Make every library call fail with [`LibraryError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make counting fail for one collection.
    pub fn break_count(&self, id: &CollectionId) {
        self.broken_counts.lock().unwrap().insert(id.clone());
    }

    fn check(&self) -> Result<(), LibraryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LibraryError::Unavailable("in-memory library offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryCollectionSource for InMemoryLibrary {
    async fn list_collections(&self) -> Result<Vec<Collection>, LibraryError> {
        self.check()?;
        let entries = self.entries.lock().unwrap();
        Ok(entries.iter().map(|(c, _)| c.clone()).collect())
    }

    async fn collection_items(&self, id: &CollectionId) -> Result<Vec<Item>, LibraryError> {
        self.check()?;
        let entries = self.entries.lock().unwrap();
        entries
            .iter()
            .find(|(c, _)| &c.id == id)
            .map(|(_, items)| items.clone())
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ItemCounter for InMemoryLibrary {
    async fn count_descendants(&self, id: &CollectionId) -> Result<usize, LibraryError> {
        self.check()?;
        if self.broken_counts.lock().unwrap().contains(id) {
            return Err(LibraryError::Other(format!("cannot walk {id}").into()));
        }
        let entries = self.entries.lock().unwrap();
        entries
            .iter()
            .find(|(c, _)| &c.id == id)
            .map(|(_, items)| items.len())
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }
}
