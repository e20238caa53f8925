//! Element type conversions.
//!
//! Generic code rarely needs to coerce slices, but these helpers cover the
//! cases where elements must be widened, narrowed, or erased.

use std::any::Any;

/// Converts every element with `From`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::convert;
///
/// let widened: Vec<i64> = convert(&[1_i32, 2, 3]);
/// assert_eq!(widened, vec![1_i64, 2, 3]);
/// ```
pub fn convert<T, U>(slice: &[T]) -> Vec<U>
where
    T: Clone,
    U: From<T>,
{
    slice.iter().cloned().map(U::from).collect()
}

/// Converts every element with `TryFrom`, failing on the first element that
/// does not convert.
///
/// # Errors
///
/// Returns the conversion error of the first failing element.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::try_convert;
///
/// let narrowed: Result<Vec<u8>, _> = try_convert(&[1_i32, 2, 3]);
/// assert_eq!(narrowed, Ok(vec![1_u8, 2, 3]));
///
/// let overflowed: Result<Vec<u8>, _> = try_convert(&[1_i32, 300]);
/// assert!(overflowed.is_err());
/// ```
pub fn try_convert<T, U>(slice: &[T]) -> Result<Vec<U>, U::Error>
where
    T: Clone,
    U: TryFrom<T>,
{
    slice.iter().cloned().map(U::try_from).collect()
}

/// Erases the element type, boxing each element as `dyn Any`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::to_boxed_any;
///
/// let erased = to_boxed_any(&["a", "b"]);
/// assert_eq!(erased[1].downcast_ref::<&str>(), Some(&"b"));
/// ```
pub fn to_boxed_any<T>(slice: &[T]) -> Vec<Box<dyn Any>>
where
    T: Any + Clone,
{
    slice
        .iter()
        .map(|element| Box::new(element.clone()) as Box<dyn Any>)
        .collect()
}
