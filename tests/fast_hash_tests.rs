#![cfg(feature = "slice")]
//! Tests for the hash-based deduplication.
//!
//! `unique_hashed` must agree with the quadratic `unique` regardless of
//! which hasher the `fxhash` and `ahash` feature flags select.

use rstest::rstest;
use scalpel::slice::{unique, unique_hashed};

#[rstest]
fn test_unique_hashed_strings() {
    let words: Vec<String> = ["beta", "alpha", "beta", "gamma", "alpha"]
        .iter()
        .map(|word| (*word).to_string())
        .collect();

    assert_eq!(unique_hashed(&words), vec!["beta", "alpha", "gamma"]);
    assert_eq!(unique_hashed(&words), unique(&words));
}

#[rstest]
fn test_unique_hashed_is_deterministic() {
    let values: Vec<u64> = (0..1_000).map(|value| value % 37).collect();
    let first = unique_hashed(&values);
    let second = unique_hashed(&values);

    assert_eq!(first, second);
    assert_eq!(first, (0..37).collect::<Vec<u64>>());
}

#[rstest]
fn test_unique_hashed_tuples() {
    let pairs = [(1, 'a'), (1, 'b'), (1, 'a'), (2, 'a')];
    assert_eq!(unique_hashed(&pairs), vec![(1, 'a'), (1, 'b'), (2, 'a')]);
}
