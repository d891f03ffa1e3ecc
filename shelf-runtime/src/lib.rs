#![deny(missing_docs)]
//! Random collections service for a media server home screen.
//!
//! [`RandomCollections`] ties the library, the sticky
//! [`CollectionSelector`](shelf_select::CollectionSelector) and the
//! [`SectionPresenter`](shelf_present::SectionPresenter) together behind a
//! small API for the HTTP layer, and pushes the current sections into the
//! home screen host with bounded, fixed-delay retries.
//!
//! The service is an ordinary value built at startup and shared as
//! `Arc<RandomCollections>`; there is no global instance.

mod error;
mod policy;
mod registration;
mod service;

pub use error::ShelfError;
pub use policy::RegistrationPolicy;
pub use registration::RegistrationOutcome;
pub use service::RandomCollections;
