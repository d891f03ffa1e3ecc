//! The Library boundary: where collections and their items come from.

use crate::collection::{Collection, Item};
use crate::error::LibraryError;
use crate::id::CollectionId;
use async_trait::async_trait;

/// Read access to the host library's grouped collections.
///
/// Implementations wrap whatever the host offers (a recursive box set
/// query, a database, a fixture). The core never writes through it.
#[async_trait]
pub trait LibraryCollectionSource: Send + Sync {
    /// Every collection in the library, discovered recursively. Order is
    /// whatever the host returns; the selector preserves it on reuse.
    async fn list_collections(&self) -> Result<Vec<Collection>, LibraryError>;

    /// All descendant items of one collection.
    /// Returns [`LibraryError::NotFound`] for an unknown id.
    async fn collection_items(&self, id: &CollectionId) -> Result<Vec<Item>, LibraryError>;
}

/// Counts the items below a collection.
///
/// Errors are allowed here; the presenter turns them into a count of 0 so a
/// broken collection never fails a page load.
#[async_trait]
pub trait ItemCounter: Send + Sync {
    /// Number of descendant items of the collection.
    async fn count_descendants(&self, id: &CollectionId) -> Result<usize, LibraryError>;
}
