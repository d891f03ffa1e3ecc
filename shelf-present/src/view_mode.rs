//! View mode choice per section.

use rand::Rng;
use rand::seq::SliceRandom;
use shelf_proto::{ShelfConfig, ViewMode};

/// Candidate view modes for one presentation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModePicker {
    modes: Vec<ViewMode>,
}

impl ViewModePicker {
    /// Candidates from the configuration flags. With every flag off the
    /// configuration is inconsistent; all three modes are used instead.
    pub fn from_config(config: &ShelfConfig) -> Self {
        let mut modes = config.enabled_view_modes();
        if modes.is_empty() {
            tracing::warn!("no view modes enabled in configuration, using all modes");
            modes = ViewMode::ALL.to_vec();
        }
        Self { modes }
    }

    /// The candidates, never empty.
    pub fn modes(&self) -> &[ViewMode] {
        &self.modes
    }

    /// The only candidate, or a uniform pick among several.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> ViewMode {
        match self.modes.as_slice() {
            [only] => *only,
            modes => modes.choose(rng).copied().unwrap_or(ViewMode::Portrait),
        }
    }
}
