//! Selection cache behavior: bounds, stickiness, invalidation, concurrency.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::mock::StepRng;
use shelf_proto::{Collection, CollectionId, RequesterId};
use shelf_select::{CollectionSelector, REUSE_PROBABILITY, SelectionOrigin};
use std::collections::HashSet;
use std::sync::Arc;

fn library(n: usize) -> Vec<Collection> {
    (0..n)
        .map(|i| Collection::new(format!("c{i}"), format!("Collection {i}")))
        .collect()
}

fn user(id: &str) -> RequesterId {
    RequesterId::new(id)
}

/// Always lands on the reuse side of the coin flip.
fn always_reuse() -> StepRng {
    StepRng::new(0, 0)
}

fn distinct(ids: &[CollectionId]) -> bool {
    ids.iter().collect::<HashSet<_>>().len() == ids.len()
}

// --- Bounds ---

#[test]
fn empty_library_yields_empty_selection() {
    let selector = CollectionSelector::new();
    let selection = selector.select(&user("u"), &[], 3);
    assert!(selection.collections.is_empty());
    assert!(selector.cache().is_empty());
}

#[test]
fn count_is_clamped_to_library_size() {
    let selector = CollectionSelector::new();
    let all = library(2);
    let selection = selector.select(&user("u"), &all, 5);
    assert_eq!(selection.collections.len(), 2);
    assert_eq!(selector.cache().entry(&user("u")).unwrap().len(), 2);
}

#[test]
fn zero_count_selects_nothing() {
    let selector = CollectionSelector::new();
    let selection = selector.select(&user("u"), &library(4), 0);
    assert!(selection.collections.is_empty());
}

#[test]
fn ten_collections_three_shown() {
    let selector = CollectionSelector::new();
    let all = library(10);
    let valid: HashSet<_> = all.iter().map(|c| c.id.clone()).collect();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let ids = selector
            .select_with_rng(&user("U"), &all, 3, &mut rng)
            .ids();
        assert!(ids.len() <= 3);
        assert!(distinct(&ids));
        assert!(ids.iter().all(|id| valid.contains(id)));
    }
}

// --- Stickiness ---

#[test]
fn first_call_is_fresh_and_cached() {
    let selector = CollectionSelector::new();
    let all = library(10);
    let selection = selector
        .select_with_rng(&user("u"), &all, 3, &mut always_reuse());
    assert_eq!(selection.origin, SelectionOrigin::Fresh);
    assert_eq!(
        selector.cache().entry(&user("u")),
        Some(selection.ids())
    );
}

#[test]
fn reuse_follows_library_order() {
    let selector = CollectionSelector::new();
    let all = library(10);
    let fresh = selector
        .select_with_rng(&user("u"), &all, 4, &mut StdRng::seed_from_u64(3));

    let reused = selector
        .select_with_rng(&user("u"), &all, 4, &mut always_reuse());
    assert_eq!(reused.origin, SelectionOrigin::Cached);

    let cached: HashSet<_> = fresh.ids().into_iter().collect();
    let expected: Vec<_> = all
        .iter()
        .filter(|c| cached.contains(&c.id))
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(reused.ids(), expected);
}

#[test]
fn deleted_collections_shrink_a_reused_selection() {
    let selector = CollectionSelector::new();
    let mut all = library(10);
    let fresh = selector
        .select_with_rng(&user("u"), &all, 3, &mut StdRng::seed_from_u64(11));

    let gone = fresh.collections[0].id.clone();
    all.retain(|c| c.id != gone);

    let reused = selector
        .select_with_rng(&user("u"), &all, 3, &mut always_reuse());
    assert_eq!(reused.origin, SelectionOrigin::Cached);
    assert_eq!(reused.collections.len(), 2);
    assert!(!reused.ids().contains(&gone));
}

#[test]
fn reuse_rate_is_seventy_percent() {
    let selector = CollectionSelector::new();
    let all = library(10);
    let mut rng = StdRng::seed_from_u64(0x5e1ec7);
    selector.select_with_rng(&user("u"), &all, 3, &mut rng);

    let trials = 10_000;
    let reused = (0..trials)
        .filter(|_| {
            selector
                .select_with_rng(&user("u"), &all, 3, &mut rng)
                .origin
                == SelectionOrigin::Cached
        })
        .count();

    let rate = reused as f64 / trials as f64;
    assert!(
        (rate - REUSE_PROBABILITY).abs() <= 0.03,
        "reuse rate {rate} outside 0.7 ± 0.03"
    );
}

#[test]
fn reshuffle_overwrites_the_entry_with_the_new_draw() {
    let selector = CollectionSelector::new();
    let all = library(10);
    let mut rng = StdRng::seed_from_u64(42);
    let mut previous = selector.select_with_rng(&user("u"), &all, 3, &mut rng).ids();

    let mut reshuffles = 0;
    for _ in 0..200 {
        let selection = selector.select_with_rng(&user("u"), &all, 3, &mut rng);
        let entry = selector.cache().entry(&user("u"));
        match selection.origin {
            SelectionOrigin::Fresh => {
                reshuffles += 1;
                assert_eq!(entry, Some(selection.ids()));
                if selection.ids() != previous {
                    assert_ne!(entry, Some(previous.clone()));
                }
                previous = selection.ids();
            }
            SelectionOrigin::Cached => assert_eq!(entry, Some(previous.clone())),
        }
    }
    assert!(reshuffles > 0);
}

// --- Invalidation ---

#[test]
fn count_change_forces_fresh_draw() {
    let selector = CollectionSelector::new();
    let all = library(10);
    selector
        .select_with_rng(&user("u"), &all, 3, &mut always_reuse());

    let selection = selector
        .select_with_rng(&user("u"), &all, 4, &mut always_reuse());
    assert_eq!(selection.origin, SelectionOrigin::Fresh);
    assert_eq!(selection.collections.len(), 4);
    assert_eq!(selector.cache().entry(&user("u")).unwrap().len(), 4);
}

#[test]
fn shrinking_library_changes_target_and_forces_fresh_draw() {
    let selector = CollectionSelector::new();
    selector
        .select_with_rng(&user("u"), &library(10), 5, &mut always_reuse());

    let selection = selector
        .select_with_rng(&user("u"), &library(4), 5, &mut always_reuse());
    assert_eq!(selection.origin, SelectionOrigin::Fresh);
    assert_eq!(selection.collections.len(), 4);
}

#[test]
fn clear_drops_every_entry() {
    let selector = CollectionSelector::new();
    let all = library(10);
    selector.select(&user("a"), &all, 3);
    selector.select(&user("b"), &all, 3);
    assert_eq!(selector.cache().len(), 2);

    selector.cache().clear();
    assert!(selector.cache().is_empty());

    let selection = selector
        .select_with_rng(&user("a"), &all, 3, &mut always_reuse());
    assert_eq!(selection.origin, SelectionOrigin::Fresh);
}

#[test]
fn requesters_are_isolated() {
    let selector = CollectionSelector::new();
    let all = library(10);
    selector.select(&user("a"), &all, 3);

    let selection = selector
        .select_with_rng(&user("b"), &all, 3, &mut always_reuse());
    assert_eq!(selection.origin, SelectionOrigin::Fresh);
    assert_eq!(selector.cache().len(), 2);
}

// --- Concurrency ---

#[test]
fn concurrent_selection_never_corrupts_an_entry() {
    let selector = Arc::new(CollectionSelector::new());
    let all = Arc::new(library(12));
    let valid: Arc<HashSet<_>> = Arc::new(all.iter().map(|c| c.id.clone()).collect());

    std::thread::scope(|scope| {
        for t in 0..16 {
            let selector = Arc::clone(&selector);
            let all = Arc::clone(&all);
            let valid = Arc::clone(&valid);
            scope.spawn(move || {
                let requester = if t % 2 == 0 { user("shared") } else { user(&format!("u{t}")) };
                for _ in 0..500 {
                    let ids = selector.select(&requester, &all, 5).ids();
                    assert_eq!(ids.len(), 5);
                    assert!(distinct(&ids));

                    let entry = selector.cache().entry(&user("shared"));
                    if let Some(entry) = entry {
                        assert_eq!(entry.len(), 5);
                        assert!(distinct(&entry));
                        assert!(entry.iter().all(|id| valid.contains(id)));
                    }
                }
            });
        }
    });

    assert_eq!(selector.cache().len(), 9);
}

// --- Properties ---

proptest! {
    #[test]
    fn selection_is_bounded_and_distinct(
        n in 0usize..40,
        count in 0usize..50,
        seed in any::<u64>(),
        calls in 1usize..6,
    ) {
        let selector = CollectionSelector::new();
        let all = library(n);
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..calls {
            let selection = selector
                .select_with_rng(&user("p"), &all, count, &mut rng);
            let ids = selection.ids();
            prop_assert!(ids.len() <= count.min(n));
            prop_assert!(distinct(&ids));
            if selection.origin == SelectionOrigin::Fresh {
                prop_assert_eq!(ids.len(), count.min(n));
            }
        }
    }
}
