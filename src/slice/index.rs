//! Position-based editing.
//!
//! These helpers never modify their input. Each returns a new vector, or a
//! [`SliceError`] when a position falls outside the slice.

use super::SliceError;

/// Returns `slice` without the element at `start`.
///
/// # Errors
///
/// Returns [`SliceError::InvalidStartIndex`] if `start` is not a valid
/// position in `slice` (which includes every position of an empty slice).
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::delete_by_index;
///
/// assert_eq!(delete_by_index(&["a", "b", "c"], 1), Ok(vec!["a", "c"]));
/// assert!(delete_by_index(&["a"], 1).is_err());
/// ```
pub fn delete_by_index<T>(slice: &[T], start: usize) -> Result<Vec<T>, SliceError>
where
    T: Clone,
{
    check_start(slice.len(), start)?;
    let mut result = Vec::with_capacity(slice.len() - 1);
    result.extend_from_slice(&slice[..start]);
    result.extend_from_slice(&slice[start + 1..]);
    Ok(result)
}

/// Returns `slice` without the elements in `start..end`.
///
/// # Errors
///
/// - [`SliceError::InvalidStartIndex`] if `start` is not a valid position
/// - [`SliceError::InvalidEndIndex`] if `end <= start` or `end` is past the end
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::delete_range_by_index;
///
/// assert_eq!(delete_range_by_index(&[1, 2, 3, 4, 5], 1, 3), Ok(vec![1, 4, 5]));
/// assert!(delete_range_by_index(&[1, 2, 3], 1, 1).is_err());
/// ```
pub fn delete_range_by_index<T>(slice: &[T], start: usize, end: usize) -> Result<Vec<T>, SliceError>
where
    T: Clone,
{
    let length = slice.len();
    check_start(length, start)?;
    if end <= start || end > length {
        tracing::debug!(start, end, length, "rejected deletion range");
        return Err(SliceError::InvalidEndIndex { start, end, length });
    }
    let mut result = Vec::with_capacity(length - (end - start));
    result.extend_from_slice(&slice[..start]);
    result.extend_from_slice(&slice[end..]);
    Ok(result)
}

/// Returns `slice` with `value` inserted before position `index`.
///
/// `index` may equal the length of `slice`, which appends.
///
/// # Errors
///
/// Returns [`SliceError::InvalidIndex`] if `index > slice.len()`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::insert_by_index;
///
/// assert_eq!(insert_by_index(&[1, 2, 3], 1, 99), Ok(vec![1, 99, 2, 3]));
/// assert_eq!(insert_by_index(&[1, 2, 3], 3, 99), Ok(vec![1, 2, 3, 99]));
/// ```
pub fn insert_by_index<T>(slice: &[T], index: usize, value: T) -> Result<Vec<T>, SliceError>
where
    T: Clone,
{
    insert_slice_by_index(slice, index, std::slice::from_ref(&value))
}

/// Returns `slice` with all of `values` inserted before position `index`.
///
/// # Errors
///
/// Returns [`SliceError::InvalidIndex`] if `index > slice.len()`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::insert_slice_by_index;
///
/// assert_eq!(insert_slice_by_index(&[1, 4], 1, &[2, 3]), Ok(vec![1, 2, 3, 4]));
/// ```
pub fn insert_slice_by_index<T>(
    slice: &[T],
    index: usize,
    values: &[T],
) -> Result<Vec<T>, SliceError>
where
    T: Clone,
{
    let length = slice.len();
    if index > length {
        tracing::debug!(index, length, "rejected insertion index");
        return Err(SliceError::InvalidIndex { index, length });
    }
    let mut result = Vec::with_capacity(length + values.len());
    result.extend_from_slice(&slice[..index]);
    result.extend_from_slice(values);
    result.extend_from_slice(&slice[index..]);
    Ok(result)
}

/// Returns `slice` with the element at `index` replaced by `value`.
///
/// # Errors
///
/// Returns [`SliceError::InvalidIndex`] if `index >= slice.len()`.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::update_by_index;
///
/// assert_eq!(update_by_index(&["a", "b"], 0, "z"), Ok(vec!["z", "b"]));
/// ```
pub fn update_by_index<T>(slice: &[T], index: usize, value: T) -> Result<Vec<T>, SliceError>
where
    T: Clone,
{
    let length = slice.len();
    if index >= length {
        tracing::debug!(index, length, "rejected update index");
        return Err(SliceError::InvalidIndex { index, length });
    }
    let mut result = slice.to_vec();
    result[index] = value;
    Ok(result)
}

fn check_start(length: usize, start: usize) -> Result<(), SliceError> {
    if start >= length {
        tracing::debug!(start, length, "rejected deletion start");
        return Err(SliceError::InvalidStartIndex {
            index: start,
            length,
        });
    }
    Ok(())
}
