//! The presentation host boundary.
//!
//! The home screen extension that renders sections is a separate plugin.
//! Instead of discovering it at runtime, it is handed to the service as a
//! typed capability at startup.

use crate::error::HostError;
use crate::section::{SectionRegistration, SectionSettings};
use async_trait::async_trait;

/// The home screen host that renders registered sections.
#[async_trait]
pub trait SectionHost: Send + Sync {
    /// Whether the host has finished its own startup and accepts sections.
    async fn is_ready(&self) -> bool;

    /// Register or replace one section.
    async fn register_section(&self, registration: SectionRegistration) -> Result<(), HostError>;
}

/// Persisted section settings the host reads on start.
#[async_trait]
pub trait SectionSettingsStore: Send + Sync {
    /// Drop every stored section whose id starts with `prefix`, then store
    /// `sections`. Applied as one batch.
    async fn replace_sections(
        &self,
        prefix: &str,
        sections: &[SectionSettings],
    ) -> Result<(), HostError>;
}
