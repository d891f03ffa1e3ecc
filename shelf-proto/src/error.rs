//! Error types for each collaborator boundary.

use thiserror::Error;

/// Host library errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The requested collection does not exist.
    #[error("collection not found: {0}")]
    NotFound(String),

    /// The backing store could not be reached.
    #[error("library unavailable: {0}")]
    Unavailable(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Presentation host errors. These are logged by the registration pass
/// and never reach the selection or presentation API.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HostError {
    /// The host extension is not loaded or not initialized yet.
    #[error("host unavailable: {0}")]
    Unavailable(String),

    /// The host refused a section.
    #[error("section rejected: {0}")]
    Rejected(String),

    /// Writing persisted section settings failed.
    #[error("settings write failed: {0}")]
    SettingsWrite(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Configuration loading errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has unknown keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
