#![deny(missing_docs)]
//! Sticky random selection of collections.
//!
//! A [`CollectionSelector`] picks a bounded random subset of the library's
//! collections for a requester and remembers it in a [`SelectionCache`].
//! Later calls reuse the remembered subset with probability
//! [`REUSE_PROBABILITY`] and draw a new one otherwise, so the home screen
//! changes now and then instead of on every page load.
//!
//! The cache is one `HashMap` behind one `Mutex`. Lookups and overwrites are
//! each a single critical section; random draws and filtering run outside
//! the lock.

mod cache;

pub use cache::SelectionCache;

use rand::Rng;
use rand::seq::SliceRandom;
use shelf_proto::{Collection, CollectionId, RequesterId};
use std::collections::HashSet;

/// Chance that a usable cache entry is reused instead of reshuffled.
pub const REUSE_PROBABILITY: f64 = 0.7;

/// Where a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    /// The requester's cached subset was reused.
    Cached,
    /// A new subset was drawn and cached.
    Fresh,
}

/// Result of one selection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected collections. On reuse, in library order; on a fresh draw,
    /// in draw order.
    pub collections: Vec<Collection>,
    /// Whether the cache was reused.
    pub origin: SelectionOrigin,
}

impl Selection {
    fn empty() -> Self {
        Self {
            collections: Vec::new(),
            origin: SelectionOrigin::Fresh,
        }
    }

    /// Ids of the selected collections, in order.
    pub fn ids(&self) -> Vec<CollectionId> {
        self.collections.iter().map(|c| c.id.clone()).collect()
    }
}

/// Picks collections for requesters and keeps their picks sticky.
///
/// Meant to live inside a long-lived service object and be shared across
/// request handlers; all methods take `&self`.
pub struct CollectionSelector {
    cache: SelectionCache,
}

impl CollectionSelector {
    /// Create a selector with an empty cache.
    pub fn new() -> Self {
        Self {
            cache: SelectionCache::new(),
        }
    }

    /// The underlying cache, for clearing and diagnostics.
    pub fn cache(&self) -> &SelectionCache {
        &self.cache
    }

    /// Select up to `configured_count` collections for `requester` using the
    /// thread-local rng.
    pub fn select(
        &self,
        requester: &RequesterId,
        all_collections: &[Collection],
        configured_count: usize,
    ) -> Selection {
        self.select_with_rng(
            requester,
            all_collections,
            configured_count,
            &mut rand::thread_rng(),
        )
    }

    /// Select with an explicit rng. The rng drives both the reuse coin flip
    /// and the draw.
    ///
    /// The target size is `min(configured_count, all_collections.len())`.
    /// A cache entry is usable only when its length equals the target, so a
    /// configuration change to the count forces a fresh draw. A reused entry
    /// is filtered against `all_collections`; collections deleted since the
    /// draw are dropped and the result shrinks.
    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        requester: &RequesterId,
        all_collections: &[Collection],
        configured_count: usize,
        rng: &mut R,
    ) -> Selection {
        if all_collections.is_empty() {
            tracing::debug!(requester = %requester, "no collections to select from");
            return Selection::empty();
        }

        let target = configured_count.min(all_collections.len());
        tracing::debug!(
            requester = %requester,
            count = target,
            total = all_collections.len(),
            "selecting random collections"
        );

        let usable = self
            .cache
            .entry(requester)
            .filter(|ids| ids.len() == target);

        if let Some(cached) = usable {
            if rng.gen_bool(REUSE_PROBABILITY) {
                let keep: HashSet<&CollectionId> = cached.iter().collect();
                let collections: Vec<Collection> = all_collections
                    .iter()
                    .filter(|c| keep.contains(&c.id))
                    .cloned()
                    .collect();
                tracing::debug!(
                    requester = %requester,
                    count = collections.len(),
                    "using cached collections"
                );
                return Selection {
                    collections,
                    origin: SelectionOrigin::Cached,
                };
            }
        }

        let picked: Vec<Collection> = all_collections
            .choose_multiple(rng, target)
            .cloned()
            .collect();
        self.cache
            .store(requester.clone(), picked.iter().map(|c| c.id.clone()).collect());

        tracing::info!(
            requester = %requester,
            count = picked.len(),
            "selected new random collections"
        );
        Selection {
            collections: picked,
            origin: SelectionOrigin::Fresh,
        }
    }
}

impl Default for CollectionSelector {
    fn default() -> Self {
        Self::new()
    }
}
