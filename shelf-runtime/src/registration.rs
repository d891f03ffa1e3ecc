//! Pushing the current selection into the home screen host.
//!
//! A pass selects for a requester, presents, registers every section with
//! the host, then replaces the persisted `RANDOM*` settings batch. Passes
//! are retried with a fixed delay; nothing here surfaces an error to the
//! caller.

use crate::error::ShelfError;
use crate::service::RandomCollections;
use shelf_present::{registration_for, settings_for};
use shelf_proto::{RequesterId, SECTION_PREFIX, ShelfConfig};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// How a registration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Sections were registered on the given attempt.
    Registered {
        /// Number of sections registered.
        sections: usize,
        /// Attempt that succeeded, 1-based.
        attempts: u32,
    },
    /// The selection was empty; nothing was sent to the host.
    NothingToRegister,
    /// No host is configured.
    HostUnavailable,
    /// Every attempt failed.
    Failed {
        /// Attempts made.
        attempts: u32,
    },
}

impl RandomCollections {
    /// Poll the host until it reports ready or the readiness timeout runs
    /// out. Returns whether it became ready; callers register either way.
    pub async fn wait_for_host(&self) -> bool {
        let Some(host) = &self.host else {
            return false;
        };
        let polls = self.policy.readiness_polls();
        let interval = self.policy.readiness_poll.to_std();
        tracing::info!("waiting for home screen host to be ready");

        for poll in 1..=polls {
            if host.is_ready().await {
                tracing::info!(polls = poll, "home screen host is ready");
                return true;
            }
            if poll % 5 == 0 {
                tracing::debug!(polls = poll, "still waiting for home screen host");
            }
            if poll < polls {
                tokio::time::sleep(interval).await;
            }
        }

        tracing::warn!(
            timeout = %self.policy.readiness_timeout,
            "timed out waiting for home screen host, registering anyway"
        );
        false
    }

    /// One registration pass. Returns the number of sections registered.
    pub async fn register_sections(&self, requester: &RequesterId) -> Result<usize, ShelfError> {
        let host = self.host.as_ref().ok_or(ShelfError::HostMissing)?;
        let config = self.config();
        let selection = self.select(requester, &config).await?;

        if selection.collections.is_empty() {
            tracing::warn!("no collections available to register as home screen sections");
            return Ok(0);
        }

        let descriptors = self.presenter.present(&selection.collections, &config).await;
        tracing::info!(count = descriptors.len(), requester = %requester, "registering home screen sections");

        for descriptor in &descriptors {
            host.register_section(registration_for(descriptor)).await?;
            tracing::info!(
                section = %descriptor.section_id,
                collection = %descriptor.collection_name,
                view_mode = %descriptor.view_mode,
                "registered section"
            );
        }

        if let Some(store) = &self.settings {
            let batch: Vec<_> = descriptors.iter().map(settings_for).collect();
            match store.replace_sections(SECTION_PREFIX, &batch).await {
                Ok(()) => tracing::info!(created = batch.len(), "saved section settings"),
                Err(e) => tracing::error!(error = %e, "error updating section settings"),
            }
        }

        Ok(descriptors.len())
    }

    /// Run [`register_sections`](Self::register_sections) up to the
    /// policy's attempt count, pausing a fixed delay between failures.
    pub async fn register_with_retry(&self, requester: &RequesterId) -> RegistrationOutcome {
        if self.host.is_none() {
            tracing::warn!("home screen host not configured, sections not registered");
            return RegistrationOutcome::HostUnavailable;
        }

        let max = self.policy.attempts();
        for attempt in 1..=max {
            tracing::debug!(attempt, max, "attempting to register home screen sections");
            match self.register_sections(requester).await {
                Ok(0) => return RegistrationOutcome::NothingToRegister,
                Ok(sections) => {
                    return RegistrationOutcome::Registered {
                        sections,
                        attempts: attempt,
                    };
                }
                Err(e) if attempt < max => {
                    tracing::warn!(
                        attempt,
                        error = %e,
                        delay = %self.policy.retry_delay,
                        "failed to register sections, retrying"
                    );
                    tokio::time::sleep(self.policy.retry_delay.to_std()).await;
                }
                Err(e) => {
                    tracing::error!(attempts = max, error = %e, "failed to register sections");
                }
            }
        }

        RegistrationOutcome::Failed { attempts: max }
    }

    /// Clear every requester's cached selection, then re-register sections
    /// for `requester` with a fresh draw on a background task.
    ///
    /// The cache is empty when this returns; the caller is not held through
    /// the registration retries. Must be called within a Tokio runtime.
    pub fn clear_cache_and_reselect(
        self: Arc<Self>,
        requester: RequesterId,
    ) -> JoinHandle<RegistrationOutcome> {
        tracing::info!(requester = %requester, "clearing cache and re-registering sections");
        self.clear_cache();
        tokio::spawn(async move { self.register_with_retry(&requester).await })
    }

    /// Configuration-changed notification: store the new configuration and
    /// drop every cached selection (their sizes may no longer match), then
    /// re-register for the anonymous requester on a background task.
    ///
    /// The new configuration is in effect when this returns. Must be called
    /// within a Tokio runtime.
    pub fn update_config(self: Arc<Self>, config: ShelfConfig) -> JoinHandle<RegistrationOutcome> {
        tracing::info!(
            random_count = config.random_count,
            collection_limit = config.collection_limit,
            "configuration updated"
        );
        self.replace_config(config);
        self.clear_cache();
        tokio::spawn(async move { self.register_with_retry(&RequesterId::anonymous()).await })
    }

    /// Startup pass on a background task: log what the library holds, wait
    /// for the host, then register for the anonymous requester.
    pub fn spawn_startup_registration(self: Arc<Self>) -> JoinHandle<RegistrationOutcome> {
        tokio::spawn(async move {
            self.log_library_summary().await;
            self.wait_for_host().await;
            self.register_with_retry(&RequesterId::anonymous()).await
        })
    }

    async fn log_library_summary(&self) {
        match self.library.list_collections().await {
            Ok(collections) => {
                tracing::info!(count = collections.len(), "found collections in library");
                for collection in collections.iter().take(5) {
                    tracing::info!(name = %collection.name, id = %collection.id, "available collection");
                }
                if collections.len() > 5 {
                    tracing::info!(more = collections.len() - 5, "more collections available");
                }
            }
            Err(e) => tracing::error!(error = %e, "error listing collections at startup"),
        }
    }
}
