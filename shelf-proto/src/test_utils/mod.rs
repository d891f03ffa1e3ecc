//! In-memory collaborators for testing.
//!
//! Available behind the `test-utils` feature flag. They hold everything in
//! a `Mutex` and expose knobs to make calls fail, so tests can drive the
//! degraded paths.

mod in_memory_library;
mod memory_settings_store;
mod recording_host;

pub use in_memory_library::InMemoryLibrary;
pub use memory_settings_store::MemorySettingsStore;
pub use recording_host::RecordingHost;
