#![deny(missing_docs)]
//! # shelf: umbrella crate
//!
//! One import surface for the random collections add-on. Re-exports the
//! protocol crate and the implementations behind feature flags, plus a
//! `prelude` for wiring the service into a host.

#[cfg(feature = "present")]
pub use shelf_present;
#[cfg(feature = "core")]
pub use shelf_proto;
#[cfg(feature = "runtime")]
pub use shelf_runtime;
#[cfg(feature = "select")]
pub use shelf_select;

/// Happy-path imports for embedding the service.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use shelf_proto::{
        Collection, CollectionId, CollectionSummary, Item, ItemCounter, LibraryCollectionSource,
        RequesterId, SectionDescriptor, SectionHost, SectionSettingsStore, ShelfConfig, ViewMode,
    };

    #[cfg(feature = "select")]
    pub use shelf_select::{CollectionSelector, Selection, SelectionOrigin};

    #[cfg(feature = "present")]
    pub use shelf_present::SectionPresenter;

    #[cfg(feature = "runtime")]
    pub use shelf_runtime::{RandomCollections, RegistrationOutcome, RegistrationPolicy};
}
