//! MemorySettingsStore: Vec-backed SectionSettingsStore.

use crate::error::HostError;
use crate::host::SectionSettingsStore;
use crate::section::SectionSettings;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Section settings kept in a list, in the order they were stored.
pub struct MemorySettingsStore {
    sections: Mutex<Vec<SectionSettings>>,
    failing: AtomicBool,
}

impl MemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            sections: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// Pre-populate with settings the host already had, e.g. its own
    /// built-in sections.
    pub fn seed(&self, sections: Vec<SectionSettings>) {
        self.sections.lock().unwrap().extend(sections);
    }

    /// Make every write fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of stored settings.
    pub fn sections(&self) -> Vec<SectionSettings> {
        self.sections.lock().unwrap().clone()
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SectionSettingsStore for MemorySettingsStore {
    async fn replace_sections(
        &self,
        prefix: &str,
        sections: &[SectionSettings],
    ) -> Result<(), HostError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(HostError::SettingsWrite("memory store read-only".into()));
        }
        let mut stored = self.sections.lock().unwrap();
        stored.retain(|s| !s.section_id.as_str().starts_with(prefix));
        stored.extend_from_slice(sections);
        Ok(())
    }
}
