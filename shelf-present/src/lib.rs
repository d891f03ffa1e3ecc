#![deny(missing_docs)]
//! Section presentation for selected collections.
//!
//! Maps a selection to [`SectionDescriptor`]s: a positional id
//! (`RANDOMONE`, `RANDOMTWO`, ...), a view mode drawn from the enabled
//! modes, and a descendant item count. Also builds the registration and
//! settings payloads the home screen host consumes.
//!
//! Presentation never touches the selection cache.

mod payload;
mod section_id;
mod view_mode;

pub use payload::{details_route, registration_for, settings_for};
pub use section_id::{ordinal_word, section_id};
pub use view_mode::ViewModePicker;

use rand::Rng;
use shelf_proto::{Collection, CollectionId, ItemCounter, SectionDescriptor, ShelfConfig};
use std::sync::Arc;

/// Builds descriptors, counting items through an [`ItemCounter`].
pub struct SectionPresenter {
    counter: Arc<dyn ItemCounter>,
}

impl SectionPresenter {
    /// Create a presenter over the given counter.
    pub fn new(counter: Arc<dyn ItemCounter>) -> Self {
        Self { counter }
    }

    /// Descendant count of one collection; 0 when counting fails.
    pub async fn item_count(&self, id: &CollectionId) -> usize {
        match self.counter.count_descendants(id).await {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!(collection = %id, error = %e, "item count failed, reporting 0");
                0
            }
        }
    }

    /// Descriptors for `selection`, in selection order.
    ///
    /// View modes are drawn independently per collection on every call, so
    /// an unchanged selection may render differently on the next pass.
    pub async fn present(
        &self,
        selection: &[Collection],
        config: &ShelfConfig,
    ) -> Vec<SectionDescriptor> {
        let mut counts = Vec::with_capacity(selection.len());
        for collection in selection {
            counts.push(self.item_count(&collection.id).await);
        }
        describe_with_rng(selection, &counts, config, &mut rand::thread_rng())
    }
}

/// Synchronous core of [`SectionPresenter::present`], with counts already
/// gathered. A missing count is treated as 0.
pub fn describe_with_rng<R: Rng + ?Sized>(
    selection: &[Collection],
    counts: &[usize],
    config: &ShelfConfig,
    rng: &mut R,
) -> Vec<SectionDescriptor> {
    let picker = ViewModePicker::from_config(config);
    selection
        .iter()
        .enumerate()
        .map(|(index, collection)| SectionDescriptor {
            section_id: section_id(index + 1),
            collection_name: collection.name.clone(),
            collection_id: collection.id.clone(),
            view_mode: picker.pick(rng),
            item_count: counts.get(index).copied().unwrap_or(0),
        })
        .collect()
}
