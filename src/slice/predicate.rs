//! Quantifiers, filtering, partitioning, and searching.
//!
//! Every predicate receives the element's index and a reference to the
//! element, in that order.

/// Returns `true` if `predicate` holds for every element.
///
/// An empty slice satisfies every predicate.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::every;
///
/// assert!(every(&[2, 4, 6], |_, value| value % 2 == 0));
/// assert!(!every(&[2, 3], |_, value| value % 2 == 0));
/// ```
pub fn every<T, P>(slice: &[T], mut predicate: P) -> bool
where
    P: FnMut(usize, &T) -> bool,
{
    slice
        .iter()
        .enumerate()
        .all(|(index, value)| predicate(index, value))
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::some;
///
/// assert!(some(&[1, 2, 3], |_, value| *value == 2));
/// assert!(!some(&[] as &[i32], |_, _| true));
/// ```
pub fn some<T, P>(slice: &[T], mut predicate: P) -> bool
where
    P: FnMut(usize, &T) -> bool,
{
    slice
        .iter()
        .enumerate()
        .any(|(index, value)| predicate(index, value))
}

/// Returns `true` if `predicate` holds for no element.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::none;
///
/// assert!(none(&[1, 3, 5], |_, value| value % 2 == 0));
/// ```
pub fn none<T, P>(slice: &[T], predicate: P) -> bool
where
    P: FnMut(usize, &T) -> bool,
{
    !some(slice, predicate)
}

/// Returns the elements for which `predicate` holds, in order.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::filter;
///
/// let even = filter(&[1, 2, 3, 4, 5], |_, value| value % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// ```
pub fn filter<T, P>(slice: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(usize, &T) -> bool,
{
    slice
        .iter()
        .enumerate()
        .filter(|(index, value)| predicate(*index, value))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Partitions `slice` into the elements that satisfy `predicate` and those
/// that do not. Both groups keep their relative order.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::group_by;
///
/// let (even, odd) = group_by(&[1, 2, 3, 4], |_, value| value % 2 == 0);
/// assert_eq!(even, vec![2, 4]);
/// assert_eq!(odd, vec![1, 3]);
/// ```
pub fn group_by<T, P>(slice: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(usize, &T) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for (index, value) in slice.iter().enumerate() {
        if predicate(index, value) {
            matching.push(value.clone());
        } else {
            rest.push(value.clone());
        }
    }
    (matching, rest)
}

/// Returns the first element for which `predicate` holds.
///
/// Stops calling `predicate` at the first match.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::find;
///
/// assert_eq!(find(&[1, 2, 3, 4], |_, value| *value > 2), Some(&3));
/// assert_eq!(find(&[1, 2], |_, value| *value > 2), None);
/// ```
pub fn find<T, P>(slice: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(usize, &T) -> bool,
{
    slice
        .iter()
        .enumerate()
        .find(|(index, value)| predicate(*index, value))
        .map(|(_, value)| value)
}
