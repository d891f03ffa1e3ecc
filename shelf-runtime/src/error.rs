//! Internal fault type. It never leaves the service: public operations log
//! it and fall back to an empty result.

use shelf_proto::{HostError, LibraryError};
use thiserror::Error;

/// Anything that can go wrong inside a selection, presentation or
/// registration pass.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShelfError {
    /// No home screen host was configured.
    #[error("home screen host not configured")]
    HostMissing,

    /// The library could not list or resolve collections.
    #[error("library error: {0}")]
    Library(#[from] LibraryError),

    /// The host refused a registration.
    #[error("host error: {0}")]
    Host(#[from] HostError),
}
