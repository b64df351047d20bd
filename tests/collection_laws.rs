#![cfg(feature = "collection")]
//! Property-based tests for Collection.
//!
//! This module verifies that Collection satisfies its ordering, sampling,
//! filtering, merging and chunking invariants using proptest.

use ordered_collection::collection::sampler::select_slots;
use ordered_collection::collection::{
    Collection, EqualOptions, FilterOptions, RandomOptions, ReturnShape,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}".prop_map(|s| s)
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), any::<i32>()), 0..60)
}

fn arbitrary_collection() -> impl Strategy<Value = Collection<String, i32>> {
    arbitrary_entries().prop_map(|entries| entries.into_iter().collect())
}

// =============================================================================
// Order Law: keys appear in first-insertion order
// =============================================================================

proptest! {
    #[test]
    fn prop_keys_follow_first_insertion(entries in arbitrary_entries()) {
        let collection: Collection<String, i32> = entries.iter().cloned().collect();

        let mut seen = HashSet::new();
        let expected: Vec<&String> = entries
            .iter()
            .map(|(key, _)| key)
            .filter(|key| seen.insert(*key))
            .collect();

        prop_assert_eq!(collection.keys().collect::<Vec<_>>(), expected);
    }
}

// =============================================================================
// Sampling Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_sample_size_is_min_of_amount_and_size(
        collection in arbitrary_collection(),
        amount in 0usize..80,
        unique in any::<bool>(),
        seed in any::<u64>()
    ) {
        prop_assume!(!collection.is_empty());
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = collection
            .sample_with_rng(Some(amount), RandomOptions { unique }, &mut rng)
            .unwrap();

        prop_assert_eq!(sample.len(), amount.clamp(1, collection.len()));
    }

    #[test]
    fn prop_unique_slots_are_pairwise_distinct(
        size in 1usize..3000,
        percent in 1usize..=100,
        seed in any::<u64>()
    ) {
        let amount = (size * percent / 100).max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let slots = select_slots(size, amount, true, &mut rng);

        prop_assert_eq!(slots.len(), amount);
        let distinct: HashSet<usize> = slots.iter().copied().collect();
        prop_assert_eq!(distinct.len(), amount);
        prop_assert!(slots.iter().all(|&slot| slot < size));
    }
}

// =============================================================================
// Filter Law: every result shape holds the same pairs
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_shapes_agree(collection in arbitrary_collection(), pivot in any::<i32>()) {
        let keep = |value: &i32, _: &String, _: &Collection<String, i32>| *value >= pivot;

        let array = collection.filter(keep, FilterOptions::returning(ReturnShape::Array));
        let map = collection.filter(keep, FilterOptions::returning(ReturnShape::Map));
        let nested = collection.filter(keep, FilterOptions::returning(ReturnShape::Collection));

        let array = array.into_pairs();
        prop_assert_eq!(&array, &map.into_pairs());
        prop_assert_eq!(&array, &nested.into_pairs());
        prop_assert!(array.iter().all(|(_, value)| *value >= pivot));
    }
}

// =============================================================================
// Structural Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_equal_to_clone(collection in arbitrary_collection()) {
        prop_assert_eq!(collection.equal(&collection.clone(), EqualOptions::default()), Ok(true));
    }

    #[test]
    fn prop_equal_false_on_size_mismatch(
        collection in arbitrary_collection(),
        key in arbitrary_key(),
        value in any::<i32>()
    ) {
        prop_assume!(!collection.has(key.as_str()));
        let mut larger = collection.clone();
        larger.set(key, value);

        prop_assert_eq!(collection.equal(&larger, EqualOptions::default()), Ok(false));
        prop_assert_eq!(larger.equal(&collection, EqualOptions::default()), Ok(false));
    }

    #[test]
    fn prop_concat_later_value_wins(
        left in arbitrary_collection(),
        right in arbitrary_collection()
    ) {
        let merged = left.concat([&right]);

        for (key, value) in &right {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &left {
            if !right.has(key.as_str()) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        prop_assert_eq!(merged.first_keys(left.len()), left.keys().collect::<Vec<_>>());
    }
}

// =============================================================================
// Chunk Law: chunks concatenate back to the source
// =============================================================================

proptest! {
    #[test]
    fn prop_chunks_reassemble(collection in arbitrary_collection(), size in 1usize..10) {
        let chunks = collection.clone().into_chunks(size);

        prop_assert!(chunks.iter().all(|chunk| (1..=size).contains(&chunk.len())));
        prop_assert!(chunks.iter().rev().skip(1).all(|chunk| chunk.len() == size));

        let reassembled: Vec<(String, i32)> = chunks.into_iter().flatten().collect();
        let original: Vec<(String, i32)> = collection.into_iter().collect();
        prop_assert_eq!(reassembled, original);
    }
}
