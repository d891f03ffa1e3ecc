//! # shelf-proto: shared types and collaborator traits
//!
//! This crate defines the boundaries between the random collection core
//! and the media server it runs inside.
//!
//! ## The Boundaries
//!
//! | Boundary | Trait | What it does |
//! |----------|-------|-------------|
//! | Library | [`LibraryCollectionSource`] | Lists collections and their items |
//! | Counting | [`ItemCounter`] | Counts descendant items of a collection |
//! | Host | [`SectionHost`] | Accepts section registrations |
//! | Settings | [`SectionSettingsStore`] | Persists the batch of section settings |
//!
//! Configuration is a plain value ([`ShelfConfig`]) owned by the service;
//! a change is announced by handing the new value to the service, which
//! clears its selection cache.
//!
//! ## Async Traits
//!
//! The traits use `async-trait` so they can be held as `Arc<dyn Trait>`
//! and swapped between the real host adapter and in-memory fixtures.

#![deny(missing_docs)]

pub mod collection;
pub mod config;
pub mod duration;
pub mod error;
pub mod host;
pub mod id;
pub mod library;
pub mod section;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use collection::{Collection, CollectionSummary, Item};
pub use config::{ShelfConfig, item_bound};
pub use duration::DurationMs;
pub use error::{ConfigError, HostError, LibraryError};
pub use host::{SectionHost, SectionSettingsStore};
pub use id::{CollectionId, ItemId, RequesterId, SectionId};
pub use library::{ItemCounter, LibraryCollectionSource};
pub use section::{
    SECTION_PREFIX, SectionDescriptor, SectionRegistration, SectionSettings, ViewMode,
};
