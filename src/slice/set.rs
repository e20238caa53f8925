//! Set algebra over ordered sequences.
//!
//! These helpers treat slices as ordered sets: results keep the order in
//! which elements first appear, and duplicates are resolved in favour of
//! the first occurrence.
//!
//! Equality comes from `PartialEq` by default. The `_by` variants take an
//! explicit equality predicate, and [`unique_hashed`] trades the quadratic
//! scan for a hash set when the element type is `Eq + Hash`.

use std::hash::Hash;

#[cfg(feature = "fxhash")]
type SeenSet<'a, T> = rustc_hash::FxHashSet<&'a T>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SeenSet<'a, T> = ahash::AHashSet<&'a T>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SeenSet<'a, T> = std::collections::HashSet<&'a T>;

/// Returns the elements of `slice` that do not appear in `other`.
///
/// Order follows `slice`, and duplicates in `slice` are kept.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
/// assert!(difference(&[1, 2], &[1, 2]).is_empty());
/// ```
pub fn difference<T>(slice: &[T], other: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    difference_by(slice, other, |left, right| left == right)
}

/// Like [`difference`], comparing elements with `equals`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::difference_by;
///
/// let words = ["Apple", "banana", "Cherry"];
/// let removed = ["apple", "cherry"];
/// let kept = difference_by(&words, &removed, |left, right| left.eq_ignore_ascii_case(right));
/// assert_eq!(kept, vec!["banana"]);
/// ```
pub fn difference_by<T, F>(slice: &[T], other: &[T], equals: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    slice
        .iter()
        .filter(|element| !other.iter().any(|candidate| equals(*element, candidate)))
        .cloned()
        .collect()
}

/// Returns the distinct elements of all `slices`, in order of first appearance.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::union;
///
/// let merged = union(&[&[1, 3, 4, 6][..], &[1, 2, 5, 6][..]]);
/// assert_eq!(merged, vec![1, 3, 4, 6, 2, 5]);
/// ```
pub fn union<T>(slices: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut result: Vec<T> = Vec::new();
    for element in slices.iter().flat_map(|slice| slice.iter()) {
        if !result.contains(element) {
            result.push(element.clone());
        }
    }
    result
}

/// Returns the distinct elements present in every one of `slices`.
///
/// Order follows the first slice. An empty list of slices yields an empty
/// result.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::intersection;
///
/// let common = intersection(&[&[1, 2, 2, 3][..], &[3, 2][..], &[2, 3, 4][..]]);
/// assert_eq!(common, vec![2, 3]);
/// ```
pub fn intersection<T>(slices: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let Some((first, rest)) = slices.split_first() else {
        return Vec::new();
    };

    let mut result: Vec<T> = Vec::new();
    for element in first.iter() {
        if rest.iter().all(|slice| slice.contains(element)) && !result.contains(element) {
            result.push(element.clone());
        }
    }
    result
}

/// Returns `slice` with every element equal to one of `excluded` removed.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::without;
///
/// assert_eq!(without(&[1, 2, 3, 4, 5], &[1, 2]), vec![3, 4, 5]);
/// ```
pub fn without<T>(slice: &[T], excluded: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    slice
        .iter()
        .filter(|element| !excluded.contains(*element))
        .cloned()
        .collect()
}

/// Removes duplicates, keeping the first occurrence of each element.
///
/// Runs in quadratic time and only requires `PartialEq`. Prefer
/// [`unique_hashed`] for large inputs of hashable elements.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::unique;
///
/// assert_eq!(unique(&["a", "a", "b", "c", "b"]), vec!["a", "b", "c"]);
/// ```
pub fn unique<T>(slice: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    unique_by(slice, |left, right| left == right)
}

/// Like [`unique`], comparing elements with `equals`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::unique_by;
///
/// let values = [1, -1, 2, -2, 3];
/// assert_eq!(unique_by(&values, |a: &i32, b: &i32| a.abs() == b.abs()), vec![1, 2, 3]);
/// ```
pub fn unique_by<T, F>(slice: &[T], equals: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut result: Vec<T> = Vec::with_capacity(slice.len());
    for element in slice {
        if !result.iter().any(|kept| equals(kept, element)) {
            result.push(element.clone());
        }
    }
    result
}

/// Removes duplicates in linear time using a hash set.
///
/// Produces exactly the same result as [`unique`]. The hasher is selected
/// by the `fxhash` and `ahash` features.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::unique_hashed;
///
/// assert_eq!(unique_hashed(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn unique_hashed<T>(slice: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: SeenSet<'_, T> = SeenSet::default();
    seen.reserve(slice.len());
    slice
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}
