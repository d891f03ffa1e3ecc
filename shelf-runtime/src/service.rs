//! The random collections service object.

use crate::error::ShelfError;
use crate::policy::RegistrationPolicy;
use shelf_present::SectionPresenter;
use shelf_proto::{
    Collection, CollectionId, CollectionSummary, Item, ItemCounter, LibraryCollectionSource,
    RequesterId, SectionDescriptor, SectionHost, SectionSettingsStore, ShelfConfig, item_bound,
};
use shelf_select::{CollectionSelector, Selection};
use std::sync::{Arc, RwLock};

/// Sticky random collections for a media server home screen.
///
/// Construct once at startup, wrap in an `Arc`, and hand it to the HTTP
/// and registration layers. Every public operation returns a plain value:
/// faults are logged and degrade to an empty list or a zero count, so a
/// page load never fails because of this service.
pub struct RandomCollections {
    pub(crate) library: Arc<dyn LibraryCollectionSource>,
    pub(crate) presenter: SectionPresenter,
    pub(crate) selector: CollectionSelector,
    config: RwLock<ShelfConfig>,
    pub(crate) host: Option<Arc<dyn SectionHost>>,
    pub(crate) settings: Option<Arc<dyn SectionSettingsStore>>,
    pub(crate) policy: RegistrationPolicy,
}

impl RandomCollections {
    /// Create a service over the host library. Without a host (see
    /// [`with_host`](Self::with_host)) the API still works; sections are
    /// just never registered.
    pub fn new(
        library: Arc<dyn LibraryCollectionSource>,
        counter: Arc<dyn ItemCounter>,
        config: ShelfConfig,
    ) -> Self {
        Self {
            library,
            presenter: SectionPresenter::new(counter),
            selector: CollectionSelector::new(),
            config: RwLock::new(config),
            host: None,
            settings: None,
            policy: RegistrationPolicy::default(),
        }
    }

    /// Attach the home screen host.
    pub fn with_host(mut self, host: Arc<dyn SectionHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Attach the store for persisted section settings.
    pub fn with_settings_store(mut self, store: Arc<dyn SectionSettingsStore>) -> Self {
        self.settings = Some(store);
        self
    }

    /// Override registration timing.
    pub fn with_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ShelfConfig {
        match self.config.read() {
            Ok(config) => config.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub(crate) fn replace_config(&self, config: ShelfConfig) {
        match self.config.write() {
            Ok(mut current) => *current = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }
    }

    /// Number of requesters with a cached selection.
    pub fn cache_len(&self) -> usize {
        self.selector.cache().len()
    }

    pub(crate) fn clear_cache(&self) {
        self.selector.cache().clear();
    }

    pub(crate) async fn select(
        &self,
        requester: &RequesterId,
        config: &ShelfConfig,
    ) -> Result<Selection, ShelfError> {
        let all = self.library.list_collections().await?;
        if all.is_empty() {
            tracing::warn!("no collections found in library");
        }
        Ok(self.selector.select(requester, &all, config.random_count))
    }

    /// Collections to show for `requester`.
    pub async fn get_selection(&self, requester: &RequesterId) -> Vec<Collection> {
        let config = self.config();
        match self.select(requester, &config).await {
            Ok(selection) => selection.collections,
            Err(e) => {
                tracing::error!(requester = %requester, error = %e, "error getting random collections");
                Vec::new()
            }
        }
    }

    /// Section descriptors for `requester`'s selection.
    pub async fn get_presentation(&self, requester: &RequesterId) -> Vec<SectionDescriptor> {
        let config = self.config();
        let selection = match self.select(requester, &config).await {
            Ok(selection) => selection,
            Err(e) => {
                tracing::error!(requester = %requester, error = %e, "error presenting random collections");
                return Vec::new();
            }
        };
        self.presenter.present(&selection.collections, &config).await
    }

    /// Id, name and item count of each selected collection.
    pub async fn get_collection_summaries(&self, requester: &RequesterId) -> Vec<CollectionSummary> {
        let selection = self.get_selection(requester).await;
        let mut summaries = Vec::with_capacity(selection.len());
        for collection in selection {
            let item_count = self.presenter.item_count(&collection.id).await;
            summaries.push(CollectionSummary {
                id: collection.id,
                name: collection.name,
                item_count,
            });
        }
        tracing::debug!(requester = %requester, count = summaries.len(), "returning random collections");
        summaries
    }

    /// Items of one collection, at most `limit` of them. Zero or negative
    /// means no limit. Unknown collections and faults yield an empty list.
    pub async fn get_items_for_collection(&self, id: &CollectionId, limit: i64) -> Vec<Item> {
        match self.library.collection_items(id).await {
            Ok(mut items) => {
                if let Some(bound) = item_bound(limit) {
                    items.truncate(bound);
                }
                tracing::debug!(collection = %id, count = items.len(), "returning collection items");
                items
            }
            Err(e) => {
                tracing::error!(collection = %id, error = %e, "error getting collection items");
                Vec::new()
            }
        }
    }

    /// [`get_items_for_collection`](Self::get_items_for_collection) bounded
    /// by the configured collection limit.
    pub async fn get_configured_items(&self, id: &CollectionId) -> Vec<Item> {
        let limit = self.config().collection_limit;
        self.get_items_for_collection(id, limit).await
    }
}
