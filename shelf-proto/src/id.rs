//! Typed ID wrappers for requesters, collections, items and sections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed ID wrappers keep a collection id from being passed where a
/// requester id is expected. They are plain strings underneath; the host
/// hands out GUIDs, but nothing here parses or validates them.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new typed ID from anything that converts to String.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

typed_id!(RequesterId, "Identity a selection is computed for; the cache key.");
typed_id!(CollectionId, "Stable identifier of a collection in the host library.");
typed_id!(ItemId, "Identifier of a media item inside a collection.");
typed_id!(SectionId, "Identifier of a home screen section (`RANDOMONE`, `RANDOM21`, ...).");

impl RequesterId {
    /// The empty GUID the host uses for unauthenticated calls.
    pub const ANONYMOUS: &'static str = "00000000-0000-0000-0000-000000000000";

    /// Requester used for anonymous requests and for the background
    /// registration pass.
    pub fn anonymous() -> Self {
        Self::new(Self::ANONYMOUS)
    }

    /// Whether this is the anonymous requester.
    pub fn is_anonymous(&self) -> bool {
        self.0 == Self::ANONYMOUS
    }
}
