//! Membership tests across container kinds.
//!
//! [`Contain`] answers "is this value in here?" for sequences (element
//! equality), maps (key lookup), sets, and strings (substring search).
//! Sequences accept any value their elements compare equal to, so a
//! `Vec<String>` can be searched with a `&str` just like a `HashSet<String>`.
//! Asking with a value of the wrong type is a compile error.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// A container that can be searched for a value of type `Q`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::Contain;
/// use std::collections::HashMap;
///
/// assert!([1, 2, 3].contain(&2));
/// assert!("scalpel".contain("alp"));
///
/// let ages = HashMap::from([("alice".to_string(), 30)]);
/// assert!(ages.contain("alice"));
/// assert!(!ages.contain("bob"));
/// ```
pub trait Contain<Q: ?Sized> {
    /// Returns `true` if `value` is an element, key, or substring of `self`.
    fn contain(&self, value: &Q) -> bool;
}

impl<T, Q> Contain<Q> for [T]
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    fn contain(&self, value: &Q) -> bool {
        self.iter().any(|element| element == value)
    }
}

impl<T, Q, const N: usize> Contain<Q> for [T; N]
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    fn contain(&self, value: &Q) -> bool {
        self.as_slice().contain(value)
    }
}

impl<T, Q> Contain<Q> for Vec<T>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    fn contain(&self, value: &Q) -> bool {
        self.as_slice().contain(value)
    }
}

impl<K, V, S, Q> Contain<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contain(&self, value: &Q) -> bool {
        self.contains_key(value)
    }
}

impl<K, V, Q> Contain<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn contain(&self, value: &Q) -> bool {
        self.contains_key(value)
    }
}

impl<T, S, Q> Contain<Q> for HashSet<T, S>
where
    T: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contain(&self, value: &Q) -> bool {
        self.contains(value)
    }
}

impl<T, Q> Contain<Q> for BTreeSet<T>
where
    T: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn contain(&self, value: &Q) -> bool {
        self.contains(value)
    }
}

impl Contain<str> for str {
    fn contain(&self, value: &str) -> bool {
        self.contains(value)
    }
}

impl Contain<str> for String {
    fn contain(&self, value: &str) -> bool {
        self.as_str().contains(value)
    }
}

/// Returns `true` if `value` is contained in `container`.
///
/// Free-function form of [`Contain::contain`].
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::contain;
///
/// assert!(contain(&vec!["a", "b"], &"a"));
/// assert!(!contain(&[1, 2, 3], &4));
/// assert!(contain("hello world", "o w"));
/// ```
#[inline]
pub fn contain<C, Q>(container: &C, value: &Q) -> bool
where
    C: Contain<Q> + ?Sized,
    Q: ?Sized,
{
    container.contain(value)
}
