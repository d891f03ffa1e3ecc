//! Composition tests: wiring the service to hand-written collaborators
//! through the prelude alone.

use async_trait::async_trait;
use shelf::prelude::*;
use shelf::shelf_proto::{HostError, LibraryError, SectionRegistration};
use std::sync::{Arc, Mutex};

// --- Collaborators ---

struct FixedLibrary {
    collections: Vec<(Collection, usize)>,
}

impl FixedLibrary {
    fn new(names: &[&str]) -> Self {
        Self {
            collections: names
                .iter()
                .enumerate()
                .map(|(i, name)| (Collection::new(format!("id-{i}"), *name), i * 10))
                .collect(),
        }
    }
}

#[async_trait]
impl LibraryCollectionSource for FixedLibrary {
    async fn list_collections(&self) -> Result<Vec<Collection>, LibraryError> {
        Ok(self.collections.iter().map(|(c, _)| c.clone()).collect())
    }

    async fn collection_items(&self, id: &CollectionId) -> Result<Vec<Item>, LibraryError> {
        let (_, count) = self
            .collections
            .iter()
            .find(|(c, _)| &c.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        Ok((0..*count)
            .map(|n| Item::new(format!("{id}-{n}"), format!("Episode {n}")))
            .collect())
    }
}

#[async_trait]
impl ItemCounter for FixedLibrary {
    async fn count_descendants(&self, id: &CollectionId) -> Result<usize, LibraryError> {
        Ok(self.collection_items(id).await?.len())
    }
}

#[derive(Default)]
struct ListHost {
    sections: Mutex<Vec<SectionRegistration>>,
}

#[async_trait]
impl SectionHost for ListHost {
    async fn is_ready(&self) -> bool {
        true
    }

    async fn register_section(&self, registration: SectionRegistration) -> Result<(), HostError> {
        self.sections.lock().unwrap().push(registration);
        Ok(())
    }
}

fn library() -> Arc<FixedLibrary> {
    Arc::new(FixedLibrary::new(&[
        "Marvel", "Pixar", "Ghibli", "Bond", "Star Trek", "Alien",
    ]))
}

// --- Tests ---

#[tokio::test]
async fn service_from_prelude_serves_a_page() {
    let library = library();
    let service = RandomCollections::new(library.clone(), library, ShelfConfig::default());
    let requester = RequesterId::new("viewer");

    let summaries = service.get_collection_summaries(&requester).await;
    assert_eq!(summaries.len(), 3);
    for summary in &summaries {
        let items = service.get_items_for_collection(&summary.id, 0).await;
        assert_eq!(items.len(), summary.item_count);
    }
}

#[tokio::test]
async fn registered_sections_follow_the_presentation() {
    let library = library();
    let host = Arc::new(ListHost::default());
    let service = Arc::new(
        RandomCollections::new(library.clone(), library, ShelfConfig::default())
            .with_host(host.clone()),
    );

    let outcome = service
        .clone()
        .spawn_startup_registration()
        .await
        .unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::Registered {
            sections: 3,
            attempts: 1
        }
    );

    let registered: Vec<_> = host
        .sections
        .lock()
        .unwrap()
        .iter()
        .map(|r| r.additional_data.clone())
        .collect();
    let presented: Vec<_> = service
        .get_presentation(&RequesterId::anonymous())
        .await
        .into_iter()
        .map(|d| d.collection_id)
        .collect();
    // Reuse is a coin flip, so only the size is stable across calls.
    assert_eq!(registered.len(), presented.len());
}

#[test]
fn selector_and_presenter_are_usable_directly() {
    let selector = CollectionSelector::new();
    let all: Vec<_> = (0..4)
        .map(|i| Collection::new(format!("c{i}"), format!("C{i}")))
        .collect();
    let selection = selector.select(&RequesterId::new("u"), &all, 2);
    assert_eq!(selection.collections.len(), 2);
    assert_eq!(selection.origin, SelectionOrigin::Fresh);
}
