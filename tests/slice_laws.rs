#![cfg(feature = "slice")]
//! Property-based tests for the slice helpers.
//!
//! Verifies the set-algebra identities, chunking, and length invariants
//! using proptest.

use proptest::prelude::*;
use scalpel::slice::{
    chunk, difference, drop_n, filter, intersection, map, reduce, union, unique, unique_hashed,
};

// =============================================================================
// Set Algebra Laws
// =============================================================================

proptest! {
    /// Idempotence Law: unique(unique(s)) == unique(s)
    #[test]
    fn prop_unique_idempotent(elements in prop::collection::vec(0..20_i32, 0..60)) {
        let once = unique(&elements);
        prop_assert_eq!(unique(&once), once);
    }

    /// First Occurrence Law: unique keeps the first copy, in input order
    #[test]
    fn prop_unique_first_occurrence(elements in prop::collection::vec(0..20_i32, 0..60)) {
        let result = unique(&elements);
        let positions: Vec<usize> = result
            .iter()
            .map(|value| elements.iter().position(|element| element == value).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(unique_hashed(&elements), result);
    }

    /// Self Difference Law: difference(s, s) is empty
    #[test]
    fn prop_difference_self_is_empty(elements in prop::collection::vec(any::<i16>(), 0..60)) {
        prop_assert!(difference(&elements, &elements).is_empty());
    }

    /// Self Union Law: union(s, s) == unique(s)
    #[test]
    fn prop_union_self(elements in prop::collection::vec(0..20_i32, 0..60)) {
        prop_assert_eq!(union(&[&elements[..], &elements[..]]), unique(&elements));
    }

    /// Self Intersection Law: intersection(s, s) == unique(s)
    #[test]
    fn prop_intersection_self(elements in prop::collection::vec(0..20_i32, 0..60)) {
        prop_assert_eq!(intersection(&[&elements[..], &elements[..]]), unique(&elements));
    }
}

// =============================================================================
// Shape Laws
// =============================================================================

proptest! {
    /// Chunk Law: chunks concatenate back to the input and only the last is short
    #[test]
    fn prop_chunk_concat(
        elements in prop::collection::vec(any::<u8>(), 0..100),
        size in 1_usize..12
    ) {
        let chunks = chunk(&elements, size);
        prop_assert_eq!(chunks.concat(), elements);
        if let Some((last, init)) = chunks.split_last() {
            prop_assert!(init.iter().all(|piece| piece.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
    }

    /// Map Length Law: map preserves length
    #[test]
    fn prop_map_length(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        prop_assert_eq!(map(&elements, |index, _| index).len(), elements.len());
    }

    /// Filter Law: output is no longer than input and satisfies the predicate
    #[test]
    fn prop_filter_subset(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let kept = filter(&elements, |_, value| value % 3 == 0);
        prop_assert!(kept.len() <= elements.len());
        prop_assert!(kept.iter().all(|value| value % 3 == 0));
    }

    /// Reduce Law: sum via reduce equals the iterator sum
    #[test]
    fn prop_reduce_sum(elements in prop::collection::vec(-1000_i64..1000, 0..100)) {
        let total = reduce(&elements, |_, accumulator, value| accumulator + value, 0);
        prop_assert_eq!(total, elements.iter().sum::<i64>());
    }

    /// Drop Length Law: len(drop(s, n)) == max(0, len(s) - |n|)
    #[test]
    fn prop_drop_length(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in -60_isize..60
    ) {
        let expected = elements.len().saturating_sub(count.unsigned_abs());
        prop_assert_eq!(drop_n(&elements, count).len(), expected);
    }
}
