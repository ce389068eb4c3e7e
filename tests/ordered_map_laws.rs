//! Property-based tests for OrderedMap.
//!
//! Verifies the container's invariants and operation laws using proptest:
//! the bijection between storage and insertion order, set/get round-trips,
//! sweep/filter consistency, partition completeness, set algebra identities,
//! order-independent equality, and sort behavior.

use ordmap::OrderedMap;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn arbitrary_value() -> impl Strategy<Value = i32> {
    any::<i32>()
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), arbitrary_value()), 0..40)
}

fn arbitrary_map() -> impl Strategy<Value = OrderedMap<String, i32>> {
    arbitrary_entries().prop_map(|entries| entries.into_iter().collect())
}

/// Asserts that order and storage stay in bijection: keys in iteration order
/// are unique, and each resolves through `get`.
fn assert_bijection(map: &OrderedMap<String, i32>) {
    let keys: Vec<&String> = map.keys().collect();
    let unique: HashSet<&String> = keys.iter().copied().collect();
    assert_eq!(keys.len(), unique.len(), "duplicate key in iteration order");
    assert_eq!(keys.len(), map.len(), "order length diverged from size");
    for key in keys {
        assert!(map.get(key).is_some(), "ordered key missing from storage");
    }
}

// =============================================================================
// Bijection invariant across mutation sequences
// =============================================================================

proptest! {
    #[test]
    fn prop_bijection_holds_after_inserts_and_removes(
        entries in arbitrary_entries(),
        removals in prop::collection::vec(arbitrary_key(), 0..20)
    ) {
        let mut map: OrderedMap<String, i32> = entries.into_iter().collect();
        assert_bijection(&map);

        for key in &removals {
            map.remove(key);
            assert_bijection(&map);
        }
    }
}

// =============================================================================
// Set-Get Law: map.set(k, v) then map.get(&k) == Some(&v)
// =============================================================================

proptest! {
    #[test]
    fn prop_set_get_round_trip(
        mut map in arbitrary_map(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        map.set(key.clone(), value);
        prop_assert_eq!(map.get(&key), Some(&value));
    }
}

// =============================================================================
// Set keeps position: overwriting never moves a key
// =============================================================================

proptest! {
    #[test]
    fn prop_overwrite_preserves_key_positions(
        mut map in arbitrary_map(),
        value in arbitrary_value()
    ) {
        let before: Vec<String> = map.keys().cloned().collect();
        if let Some(key) = before.first().cloned() {
            map.set(key, value);
        }
        let after: Vec<String> = map.keys().cloned().collect();
        prop_assert_eq!(before, after);
    }
}

// =============================================================================
// Remove idempotence: removing twice equals removing once
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_is_idempotent(mut map in arbitrary_map(), key in arbitrary_key()) {
        map.remove(&key);
        let after_first: Vec<String> = map.keys().cloned().collect();
        let size_after_first = map.len();

        prop_assert_eq!(map.remove(&key), None);
        let after_second: Vec<String> = map.keys().cloned().collect();

        prop_assert_eq!(after_first, after_second);
        prop_assert_eq!(map.len(), size_after_first);
    }
}

// =============================================================================
// Ensure memoization: the first stored value wins, later factories never run
// =============================================================================

proptest! {
    #[test]
    fn prop_ensure_is_memoized(
        mut map in arbitrary_map(),
        key in arbitrary_key(),
        first in arbitrary_value(),
        second in arbitrary_value()
    ) {
        let expected = map.get(&key).copied().unwrap_or(first);

        let stored = *map.ensure(key.clone(), |_| first);
        prop_assert_eq!(stored, expected);

        let stored = *map.ensure(key.clone(), |_| second);
        prop_assert_eq!(stored, expected);
    }
}

// =============================================================================
// Sweep-Filter consistency: sweep(P) removes exactly what filter(!P) keeps out
// =============================================================================

proptest! {
    #[test]
    fn prop_sweep_filter_consistency(map in arbitrary_map(), pivot in arbitrary_value()) {
        let predicate = |value: &i32| *value < pivot;

        let kept = map.filter(|value, _| !predicate(value));
        let mut swept = map.clone();
        let removed = swept.sweep(|value, _| predicate(value));

        prop_assert_eq!(removed, map.len() - kept.len());
        prop_assert_eq!(swept, kept);
    }
}

// =============================================================================
// Partition completeness: every entry lands in exactly one side
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_is_exhaustive(map in arbitrary_map(), pivot in arbitrary_value()) {
        let (matched, unmatched) = map.partition(|value, _| *value < pivot);

        prop_assert_eq!(matched.len() + unmatched.len(), map.len());

        for (key, value) in map.iter() {
            let in_matched = matched.get(key) == Some(value);
            let in_unmatched = unmatched.get(key) == Some(value);
            prop_assert!(in_matched != in_unmatched, "entry must land in exactly one side");
        }
    }
}

// =============================================================================
// Equality is order-independent
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_insertion_order(entries in arbitrary_entries()) {
        // Canonicalize duplicates so both insert orders see the same content.
        let canonical: HashMap<String, i32> = entries.into_iter().collect();
        let pairs: Vec<(String, i32)> = canonical.into_iter().collect();

        let forward: OrderedMap<String, i32> = pairs.iter().cloned().collect();
        let backward: OrderedMap<String, i32> = pairs.iter().rev().cloned().collect();

        prop_assert_eq!(forward, backward);
    }
}

// =============================================================================
// Set algebra identities
// =============================================================================

proptest! {
    #[test]
    fn prop_union_size_identity(left in arbitrary_map(), right in arbitrary_map()) {
        let union = left.union(&right);
        let intersection = left.intersection(&right);

        prop_assert_eq!(union.len(), left.len() + right.len() - intersection.len());
    }
}

proptest! {
    #[test]
    fn prop_symmetric_difference_size_identity(
        left in arbitrary_map(),
        right in arbitrary_map()
    ) {
        let symmetric = left.symmetric_difference(&right);
        let left_only = left.difference(&right);
        let right_only = right.difference(&left);

        prop_assert_eq!(symmetric.len(), left_only.len() + right_only.len());
    }
}

proptest! {
    #[test]
    fn prop_union_is_left_biased(left in arbitrary_map(), right in arbitrary_map()) {
        let union = left.union(&right);

        for (key, value) in left.iter() {
            prop_assert_eq!(union.get(key), Some(value));
        }
        for (key, value) in right.iter() {
            if !left.contains_key(key) {
                prop_assert_eq!(union.get(key), Some(value));
            }
        }
    }
}

// =============================================================================
// Derived collections never alias the receiver
// =============================================================================

proptest! {
    #[test]
    fn prop_derived_maps_are_independent(
        map in arbitrary_map(),
        key in arbitrary_key(),
        value in arbitrary_value()
    ) {
        let expected: Vec<(String, i32)> = map
            .iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect();

        let snapshot = map.filter(|_, _| true);
        let mut source = map;
        source.set(key, value);
        source.sweep(|stored, _| *stored % 2 == 0);

        // The derived map still holds the original content, in order.
        assert_bijection(&snapshot);
        let actual: Vec<(String, i32)> = snapshot
            .iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect();
        prop_assert_eq!(actual, expected);
    }
}

// =============================================================================
// Sort: values end up non-decreasing, order stays a bijection
// =============================================================================

proptest! {
    #[test]
    fn prop_sort_by_value_is_sorted_and_bijective(mut map in arbitrary_map()) {
        map.sort_by(|left, right, _, _| left < right);

        assert_bijection(&map);
        let values: Vec<i32> = map.values().copied().collect();
        for window in values.windows(2) {
            prop_assert!(window[0] <= window[1]);
        }
    }
}

// =============================================================================
// Reversal is an involution on iteration order
// =============================================================================

proptest! {
    #[test]
    fn prop_to_reversed_twice_restores_order(map in arbitrary_map()) {
        let round_trip = map.to_reversed().to_reversed();

        let original: Vec<&String> = map.keys().collect();
        let restored: Vec<&String> = round_trip.keys().collect();
        prop_assert_eq!(original, restored);
    }
}

// =============================================================================
// Random sampling: size clamp and no repetition
// =============================================================================

proptest! {
    #[test]
    fn prop_random_samples_without_replacement(
        map in arbitrary_map(),
        n in 0usize..60,
        seed in any::<u64>()
    ) {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);

        let sampled = map.random_with(&mut rng, n);
        prop_assert_eq!(sampled.len(), n.min(map.len()));

        // Sampled references point at distinct entries.
        let distinct: HashSet<*const i32> =
            sampled.iter().map(|value| std::ptr::from_ref(*value)).collect();
        prop_assert_eq!(distinct.len(), sampled.len());
    }
}

// =============================================================================
// Iteration order is the insertion order of first occurrence
// =============================================================================

proptest! {
    #[test]
    fn prop_iteration_follows_first_insertion(entries in arbitrary_entries()) {
        let map: OrderedMap<String, i32> = entries.iter().cloned().collect();

        let mut expected = Vec::new();
        for (key, _) in &entries {
            if !expected.contains(key) {
                expected.push(key.clone());
            }
        }

        let actual: Vec<String> = map.keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }
}
