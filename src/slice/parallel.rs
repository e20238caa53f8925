//! Parallel variants of the read-only scans, backed by rayon.
//!
//! Results are identical to the sequential helpers: [`par_map`] and
//! [`par_filter`] keep input order, and predicates see the same
//! `(index, element)` pairs. Only worthwhile when the closure is expensive.

use rayon::prelude::*;

/// Parallel [`every`](super::every).
pub fn par_every<T, P>(slice: &[T], predicate: P) -> bool
where
    T: Sync,
    P: Fn(usize, &T) -> bool + Sync + Send,
{
    slice
        .par_iter()
        .enumerate()
        .all(|(index, value)| predicate(index, value))
}

/// Parallel [`some`](super::some).
pub fn par_some<T, P>(slice: &[T], predicate: P) -> bool
where
    T: Sync,
    P: Fn(usize, &T) -> bool + Sync + Send,
{
    slice
        .par_iter()
        .enumerate()
        .any(|(index, value)| predicate(index, value))
}

/// Parallel [`none`](super::none).
pub fn par_none<T, P>(slice: &[T], predicate: P) -> bool
where
    T: Sync,
    P: Fn(usize, &T) -> bool + Sync + Send,
{
    !par_some(slice, predicate)
}

/// Parallel [`map`](super::map).
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::parallel::par_map;
///
/// let squares = par_map(&[1, 2, 3], |_, value| value * value);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn par_map<T, U, F>(slice: &[T], function: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(usize, &T) -> U + Sync + Send,
{
    slice
        .par_iter()
        .enumerate()
        .map(|(index, value)| function(index, value))
        .collect()
}

/// Parallel [`filter`](super::filter).
pub fn par_filter<T, P>(slice: &[T], predicate: P) -> Vec<T>
where
    T: Clone + Send + Sync,
    P: Fn(usize, &T) -> bool + Sync + Send,
{
    slice
        .par_iter()
        .enumerate()
        .filter(|&(index, value)| predicate(index, value))
        .map(|(_, value)| value.clone())
        .collect()
}
