//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, a container that either
//! holds a value ("present") or holds nothing ("empty"). It mirrors the
//! accessor vocabulary common to optional types in other ecosystems
//! (`or_else`, `or_else_get`, `if_present`, ...) on top of Rust's `Option`.
//!
//! An `Optional` never changes state after construction. Every accessor
//! either borrows it or consumes it and returns a plain value or a new
//! `Optional`.
//!
//! # Examples
//!
//! ```rust
//! use scalpel::datastructure::Optional;
//!
//! let name = Optional::of("Alice".to_string());
//! assert!(name.is_present());
//!
//! let greeting = name
//!     .map(|name| format!("Hello, {name}"))
//!     .or_else("Hello, stranger".to_string());
//! assert_eq!(greeting, "Hello, Alice");
//! ```

use std::fmt;

/// The error returned when the value of an empty [`Optional`] is requested.
///
/// # Examples
///
/// ```rust
/// use scalpel::datastructure::{AbsentValueError, Optional};
///
/// let empty: Optional<i32> = Optional::empty();
/// assert_eq!(empty.get(), Err(AbsentValueError));
/// assert_eq!(AbsentValueError.to_string(), "Optional: value is absent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Optional: value is absent")]
pub struct AbsentValueError;

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use scalpel::datastructure::Optional;
///
/// let present = Optional::of(10);
/// let absent: Optional<i32> = Optional::empty();
///
/// assert_eq!(present.or_else(0), 10);
/// assert_eq!(absent.or_else(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// let empty: Optional<String> = Optional::empty();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// Creates an `Optional` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// let present = Optional::of(42);
    /// assert!(present.is_present());
    /// ```
    #[inline]
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an `Optional` from a reference that may be missing.
    ///
    /// The result is present, holding a clone of the referent, when
    /// `reference` is `Some`. Otherwise it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// let value = 42;
    /// assert_eq!(Optional::of_nullable(Some(&value)), Optional::of(42));
    /// assert!(Optional::<i32>::of_nullable(None).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn of_nullable(reference: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self {
            value: reference.cloned(),
        }
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] if the `Optional` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::{AbsentValueError, Optional};
    ///
    /// assert_eq!(Optional::of(42).get(), Ok(&42));
    /// assert_eq!(Optional::<i32>::empty().get(), Err(AbsentValueError));
    /// ```
    #[inline]
    pub fn get(&self) -> Result<&T, AbsentValueError> {
        self.value.as_ref().ok_or_else(|| {
            tracing::debug!("value requested from an empty Optional");
            AbsentValueError
        })
    }

    /// Consumes the `Optional` and returns the value.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] if the `Optional` is empty.
    #[inline]
    pub fn into_value(self) -> Result<T, AbsentValueError> {
        self.value.ok_or_else(|| {
            tracing::debug!("value requested from an empty Optional");
            AbsentValueError
        })
    }

    /// Returns the value if present, otherwise `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// assert_eq!(Optional::of(1).or_else(100), 1);
    /// assert_eq!(Optional::empty().or_else(100), 100);
    /// ```
    #[inline]
    pub fn or_else(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the value if present, otherwise the result of `supplier`.
    ///
    /// `supplier` is only called when the `Optional` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// assert_eq!(Optional::of(1).or_else_get(|| unreachable!()), 1);
    /// assert_eq!(Optional::empty().or_else_get(|| 100), 100);
    /// ```
    #[inline]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(supplier)
    }

    /// Returns the value if present, otherwise the error built by `error_supplier`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error_supplier())` if the `Optional` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// let present = Optional::of(42).or_else_throw(|| "no value");
    /// assert_eq!(present, Ok(42));
    ///
    /// let absent = Optional::<i32>::empty().or_else_throw(|| "no value");
    /// assert_eq!(absent, Err("no value"));
    /// ```
    #[inline]
    pub fn or_else_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.value.ok_or_else(error_supplier)
    }

    // =========================================================================
    // Conditional Actions
    // =========================================================================

    /// Calls `action` with the value if present. Does nothing otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// let mut seen = Vec::new();
    /// Optional::of(1).if_present(|value| seen.push(*value));
    /// Optional::<i32>::empty().if_present(|value| seen.push(*value));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
    }

    /// Calls `present_action` with the value if present, otherwise calls
    /// `absent_action`. Exactly one of the two runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// let log = std::cell::RefCell::new(Vec::new());
    /// Optional::<i32>::empty().if_present_or_else(
    ///     |value| log.borrow_mut().push(format!("value {value}")),
    ///     || log.borrow_mut().push("nothing".to_string()),
    /// );
    /// let log = log.into_inner();
    /// assert_eq!(log, vec!["nothing".to_string()]);
    /// ```
    #[inline]
    pub fn if_present_or_else<F, G>(&self, present_action: F, absent_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self.value {
            Some(value) => present_action(value),
            None => absent_action(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// assert_eq!(Optional::of(2).map(|x| x * 10), Optional::of(20));
    /// assert_eq!(Optional::<i32>::empty().map(|x| x * 10), Optional::empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional {
            value: self.value.map(function),
        }
    }

    /// Chains a computation that itself returns an `Optional`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.value {
            Some(value) => function(value),
            None => Optional::empty(),
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalpel::datastructure::Optional;
    ///
    /// assert_eq!(Optional::of(4).filter(|x| x % 2 == 0), Optional::of(4));
    /// assert_eq!(Optional::of(3).filter(|x| x % 2 == 0), Optional::empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        if self.is_present() { self } else { alternative }
    }

    /// Borrows the value, producing an `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    /// Returns an empty `Optional`.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Optional").field(value).finish(),
            None => formatter.write_str("Optional.empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Optional[{value}]"),
            None => formatter.write_str("Optional.empty"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Optional<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_empty_is_not_present() {
        let optional: Optional<i32> = Optional::empty();
        assert!(optional.is_empty());
        assert!(!optional.is_present());
    }

    #[rstest]
    fn test_of_is_present() {
        let optional = Optional::of(42);
        assert!(optional.is_present());
        assert!(!optional.is_empty());
        assert_eq!(optional.get(), Ok(&42));
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(&42), true)]
    fn test_of_nullable(#[case] reference: Option<&i32>, #[case] expected_present: bool) {
        assert_eq!(
            Optional::of_nullable(reference).is_present(),
            expected_present
        );
    }

    #[rstest]
    fn test_get_on_empty_fails() {
        let optional: Optional<String> = Optional::empty();
        assert_eq!(optional.get(), Err(AbsentValueError));
        assert_eq!(optional.into_value(), Err(AbsentValueError));
    }

    #[rstest]
    fn test_or_else_get_calls_supplier_once_when_empty() {
        let calls = Cell::new(0);
        let value = Optional::empty().or_else_get(|| {
            calls.set(calls.get() + 1);
            100
        });
        assert_eq!(value, 100);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_or_else_get_skips_supplier_when_present() {
        let calls = Cell::new(0);
        let value = Optional::of(42).or_else_get(|| {
            calls.set(calls.get() + 1);
            100
        });
        assert_eq!(value, 42);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_debug_and_display() {
        assert_eq!(format!("{:?}", Optional::of(1)), "Optional(1)");
        assert_eq!(format!("{:?}", Optional::<i32>::empty()), "Optional.empty");
        assert_eq!(Optional::of(1).to_string(), "Optional[1]");
        assert_eq!(Optional::<i32>::empty().to_string(), "Optional.empty");
    }

    #[rstest]
    fn test_default_is_empty() {
        assert!(Optional::<u8>::default().is_empty());
    }
}
