//! Library entities the core reads: collections and their items.

use crate::id::{CollectionId, ItemId};
use serde::{Deserialize, Serialize};

/// A named grouping of media items ("box set") owned by the host library.
///
/// The item count is not stored here. It is derived on demand through
/// [`ItemCounter`](crate::library::ItemCounter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Stable, unique identifier.
    pub id: CollectionId,
    /// Display name.
    pub name: String,
}

impl Collection {
    /// Create a new collection.
    pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A media item inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
}

impl Item {
    /// Create a new item.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Id, name and item count of a selected collection, as returned to
/// API callers that do not need a full section descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Collection identifier.
    pub id: CollectionId,
    /// Display name.
    pub name: String,
    /// Number of descendant items, 0 if counting failed.
    pub item_count: usize,
}
