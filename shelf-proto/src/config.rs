//! Add-on configuration, edited by the host's admin page.

use crate::error::ConfigError;
use crate::section::ViewMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration read by the selector, presenter and item listing.
///
/// Every field has a default, so a partial file is valid:
///
/// ```
/// use shelf_proto::ShelfConfig;
///
/// let config = ShelfConfig::from_toml_str("random_count = 5").unwrap();
/// assert_eq!(config.random_count, 5);
/// assert_eq!(config.collection_limit, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// How many collections to show.
    pub random_count: usize,
    /// Maximum items returned per collection. Zero or negative is unbounded.
    pub collection_limit: i64,
    /// Allow poster-shaped sections.
    pub use_portrait: bool,
    /// Allow square sections.
    pub use_square: bool,
    /// Allow wide sections.
    pub use_landscape: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            random_count: 3,
            collection_limit: 20,
            use_portrait: true,
            use_square: true,
            use_landscape: true,
        }
    }
}

impl ShelfConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Modes whose flag is set, in [`ViewMode::ALL`] order. May be empty;
    /// the presenter decides what that means.
    pub fn enabled_view_modes(&self) -> Vec<ViewMode> {
        ViewMode::ALL
            .into_iter()
            .filter(|mode| match mode {
                ViewMode::Portrait => self.use_portrait,
                ViewMode::Square => self.use_square,
                ViewMode::Landscape => self.use_landscape,
            })
            .collect()
    }

    /// Item limit as an optional bound; `None` when unbounded.
    pub fn item_limit(&self) -> Option<usize> {
        item_bound(self.collection_limit)
    }
}

/// Interpret a host-style limit: zero or negative means no limit.
pub fn item_bound(limit: i64) -> Option<usize> {
    if limit > 0 {
        Some(usize::try_from(limit).unwrap_or(usize::MAX))
    } else {
        None
    }
}
