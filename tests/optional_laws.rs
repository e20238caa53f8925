#![cfg(feature = "datastructure")]
//! Property-based tests for Optional accessors.

use proptest::prelude::*;
use scalpel::datastructure::Optional;
use std::cell::Cell;

proptest! {
    /// Get Law: a wrapped value is returned unchanged
    #[test]
    fn prop_of_get(value: i64) {
        let optional = Optional::of(value);
        prop_assert_eq!(optional.get(), Ok(&value));
    }

    /// Default Law: an empty Optional always yields the default
    #[test]
    fn prop_empty_or_else(default: i64) {
        prop_assert_eq!(Optional::<i64>::empty().or_else(default), default);
    }

    /// Laziness Law: the supplier runs only when the value is absent
    #[test]
    fn prop_or_else_get_laziness(value in proptest::option::of(any::<i32>())) {
        let calls = Cell::new(0);
        let result = Optional::from(value).or_else_get(|| {
            calls.set(calls.get() + 1);
            0
        });
        prop_assert_eq!(result, value.unwrap_or(0));
        prop_assert_eq!(calls.get(), usize::from(value.is_none()));
    }

    /// Functor Identity Law: map(id) == id
    #[test]
    fn prop_map_identity(value in proptest::option::of(any::<i32>())) {
        let optional = Optional::from(value);
        prop_assert_eq!(optional.map(|x| x), optional);
    }

    /// Functor Composition Law: map(f).map(g) == map(g . f)
    #[test]
    fn prop_map_composition(value in proptest::option::of(any::<i32>())) {
        let function = |x: i32| x.wrapping_mul(3);
        let other = |x: i32| x.wrapping_sub(7);
        let optional = Optional::from(value);
        prop_assert_eq!(
            optional.map(function).map(other),
            optional.map(|x| other(function(x)))
        );
    }
}
