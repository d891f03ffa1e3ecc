//! Display-ready sections and the payloads handed to the presentation host.

use crate::id::{CollectionId, SectionId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every section this add-on owns. The settings store
/// uses it to find and drop the previous batch.
pub const SECTION_PREFIX: &str = "RANDOM";

/// How the host renders a section's cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// Poster-shaped cards.
    Portrait,
    /// Square cards.
    Square,
    /// Wide thumbnail cards.
    Landscape,
}

impl ViewMode {
    /// Every mode, in the order the configuration flags are read.
    pub const ALL: [ViewMode; 3] = [ViewMode::Portrait, ViewMode::Square, ViewMode::Landscape];

    /// Name the host expects on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Portrait => "Portrait",
            ViewMode::Square => "Square",
            ViewMode::Landscape => "Landscape",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selected collection, positioned and ready to display.
///
/// Built fresh on every presentation call and never persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectionDescriptor {
    /// `RANDOMONE`, `RANDOMTWO`, ... derived from the 1-based position.
    pub section_id: SectionId,
    /// Name of the source collection.
    pub collection_name: String,
    /// Identifier of the source collection.
    pub collection_id: CollectionId,
    /// Display mode picked for this pass.
    pub view_mode: ViewMode,
    /// Descendant item count, 0 when counting failed.
    pub item_count: usize,
}

/// Payload registered with the home screen host for one section.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRegistration {
    /// Section identifier.
    pub id: SectionId,
    /// Heading shown above the section.
    pub display_text: String,
    /// Number of rows the host asks for.
    pub limit: u32,
    /// Where clicking the heading navigates.
    pub route: String,
    /// Collection id, echoed back by the host when it asks for items.
    pub additional_data: CollectionId,
    /// Endpoint label the host uses for results.
    pub results_endpoint: String,
    /// Display mode for this section.
    #[serde(rename = "SectionViewMode")]
    pub view_mode: ViewMode,
}

impl SectionRegistration {
    /// Create a registration with an explicit route.
    pub fn new(
        id: SectionId,
        display_text: impl Into<String>,
        route: impl Into<String>,
        collection_id: CollectionId,
        view_mode: ViewMode,
    ) -> Self {
        let display_text = display_text.into();
        Self {
            id,
            results_endpoint: display_text.clone(),
            display_text,
            limit: 1,
            route: route.into(),
            additional_data: collection_id,
            view_mode,
        }
    }
}

/// Persisted per-section settings the host reads on start.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectionSettings {
    /// Section identifier.
    pub section_id: SectionId,
    /// Whether the host shows the section.
    pub enabled: bool,
    /// Whether users may hide or reorder it.
    pub allow_user_override: bool,
    /// Minimum rows.
    pub lower_limit: u32,
    /// Maximum rows.
    pub upper_limit: u32,
    /// Position among all home screen sections.
    pub order_index: u32,
    /// Display mode.
    pub view_mode: ViewMode,
    /// Whether watched items are filtered out.
    pub hide_watched_items: bool,
}

impl SectionSettings {
    /// Settings for a random section: enabled, locked, one row, placed last.
    pub fn new(section_id: SectionId, view_mode: ViewMode) -> Self {
        Self {
            section_id,
            enabled: true,
            allow_user_override: false,
            lower_limit: 1,
            upper_limit: 1,
            order_index: 999,
            view_mode,
            hide_watched_items: false,
        }
    }
}
