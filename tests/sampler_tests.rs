//! Tests for random sampling.
//!
//! Both slot-selection strategies are forced by choosing collection sizes
//! and amounts on either side of the density threshold, and every test
//! draws from a seeded `StdRng` so failures are reproducible.

#![cfg(feature = "collection")]

use ordered_collection::collection::sampler::{normalize_amount, select_slots};
use ordered_collection::collection::{
    Collection, CollectionError, EmptyCollectionError, RandomOptions, Sample, SamplingStrategy,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use std::collections::HashSet;

fn numbered(size: usize) -> Collection<usize, usize> {
    (0..size).map(|key| (key, key)).collect()
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
fn test_random_on_empty_collection_fails() {
    let collection: Collection<usize, usize> = Collection::new();

    assert_eq!(
        collection.random(),
        Err(CollectionError::EmptyCollection(EmptyCollectionError {
            operation: "random"
        }))
    );
    assert!(matches!(
        collection.sample(Some(3), RandomOptions::unique()),
        Err(CollectionError::EmptyCollection(_))
    ));
}

// =============================================================================
// Amounts
// =============================================================================

#[rstest]
#[case(10, None, 1)]
#[case(10, Some(0), 1)]
#[case(10, Some(1), 1)]
#[case(10, Some(7), 7)]
#[case(10, Some(25), 10)]
#[case(1, Some(25), 1)]
fn test_sample_returns_min_of_amount_and_size(
    #[case] size: usize,
    #[case] amount: Option<usize>,
    #[case] expected: usize,
    #[values(false, true)] unique: bool,
) {
    let collection = numbered(size);
    let mut rng = StdRng::seed_from_u64(42);
    let sample = collection
        .sample_with_rng(amount, RandomOptions { unique }, &mut rng)
        .unwrap();

    assert_eq!(sample.len(), expected);
    assert_eq!(matches!(sample, Sample::One(_)), expected == 1);
}

#[rstest]
fn test_random_returns_a_member() {
    let collection = numbered(5);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let value = collection.random_with_rng(&mut rng).unwrap();
        assert!(*value < 5);
    }
}

#[rstest]
#[case(0, 5)]
#[case(3, 5)]
#[case(8, 5)]
fn test_normalize_amount(#[case] requested: usize, #[case] size: usize) {
    let normalized = normalize_amount(Some(requested), size);
    assert!((1..=size).contains(&normalized));
}

// =============================================================================
// Uniqueness Across Strategies
// =============================================================================

#[rstest]
#[case(100, 10, SamplingStrategy::Rejection)]
#[case(100, 80, SamplingStrategy::Rejection)]
#[case(100, 81, SamplingStrategy::PartialShuffle)]
#[case(100, 100, SamplingStrategy::PartialShuffle)]
#[case(800, 400, SamplingStrategy::Rejection)]
#[case(800, 700, SamplingStrategy::PartialShuffle)]
#[case(3000, 300, SamplingStrategy::Rejection)]
#[case(3000, 2999, SamplingStrategy::PartialShuffle)]
fn test_unique_slots_are_distinct(
    #[case] size: usize,
    #[case] amount: usize,
    #[case] strategy: SamplingStrategy,
) {
    assert_eq!(SamplingStrategy::select(size, amount, true), strategy);

    let mut rng = StdRng::seed_from_u64(size as u64 ^ amount as u64);
    let slots = select_slots(size, amount, true, &mut rng);

    assert_eq!(slots.len(), amount);
    assert!(slots.iter().all(|&slot| slot < size));
    let distinct: HashSet<usize> = slots.iter().copied().collect();
    assert_eq!(distinct.len(), amount);
}

#[rstest]
#[case(50, 10)]
#[case(50, 50)]
#[case(2000, 100)]
#[case(2000, 1500)]
fn test_unique_sample_values_are_distinct(#[case] size: usize, #[case] amount: usize) {
    let collection = numbered(size);
    let mut rng = StdRng::seed_from_u64(9);
    let values = collection
        .sample_with_rng(Some(amount), RandomOptions::unique(), &mut rng)
        .unwrap()
        .into_vec();

    let distinct: HashSet<usize> = values.iter().map(|value| **value).collect();
    assert_eq!(distinct.len(), amount);
}

#[rstest]
fn test_uniqueness_is_per_slot_not_per_value() {
    let collection: Collection<i32, &str> = [(1, "same"), (2, "same"), (3, "other")].into();
    let mut rng = StdRng::seed_from_u64(17);

    let keys = collection
        .sample_keys_with_rng(Some(3), RandomOptions::unique(), &mut rng)
        .unwrap()
        .into_vec();
    let mut keys: Vec<i32> = keys.into_iter().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![1, 2, 3]);

    let values = collection
        .sample_with_rng(Some(3), RandomOptions::unique(), &mut rng)
        .unwrap()
        .into_vec();
    assert_eq!(values.iter().filter(|value| ***value == "same").count(), 2);
}

// =============================================================================
// Determinism and Distribution
// =============================================================================

#[rstest]
fn test_seeded_sampling_is_reproducible() {
    let collection = numbered(1000);
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        collection
            .sample_with_rng(Some(20), RandomOptions::unique(), &mut rng)
            .unwrap()
    };
    assert_eq!(draw(123), draw(123));
}

#[rstest]
fn test_non_unique_sampling_returns_requested_amount() {
    let collection = numbered(2);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let sample = collection
            .sample_with_rng(Some(2), RandomOptions::default(), &mut rng)
            .unwrap();
        assert_eq!(sample.len(), 2);
    }
}

#[rstest]
fn test_every_slot_is_reachable() {
    let collection = numbered(8);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        seen.insert(*collection.random_with_rng(&mut rng).unwrap());
    }
    assert_eq!(seen.len(), 8);
}

#[rstest]
fn test_sampling_does_not_mutate() {
    let collection = numbered(30);
    let before = collection.clone();
    let mut rng = StdRng::seed_from_u64(4);
    let _ = collection.sample_with_rng(Some(30), RandomOptions::unique(), &mut rng);
    assert_eq!(collection, before);
    assert_eq!(collection.first_n(3), vec![&0, &1, &2]);
}

#[rstest]
fn test_random_key_matches_value_slot() {
    let collection: Collection<String, usize> =
        (0..10).map(|key| (format!("key-{key}"), key)).collect();
    let mut rng = StdRng::seed_from_u64(8);
    let key = collection.random_key_with_rng(&mut rng).unwrap();
    assert!(collection.has(key.as_str()));
}
