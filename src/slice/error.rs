//! Error types for slice operations.
//!
//! Every fallible slice helper reports contract violations through
//! [`SliceError`] instead of panicking. An operation either returns its full
//! result or an error; partial results are never produced.

/// Represents a contract violation detected by a slice operation.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::{SliceError, update_by_index};
///
/// let error = update_by_index(&[1, 2, 3], 5, 9).unwrap_err();
/// assert_eq!(error, SliceError::InvalidIndex { index: 5, length: 3 });
/// assert_eq!(error.to_string(), "invalid index 5 for slice of length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    /// The start of a deletion lies outside the slice.
    #[error("invalid start index {index} for slice of length {length}")]
    InvalidStartIndex {
        /// The rejected start index.
        index: usize,
        /// The length of the slice.
        length: usize,
    },

    /// The end of a deletion range is not after its start or lies past the slice.
    #[error("invalid end index {end} for range starting at {start} in slice of length {length}")]
    InvalidEndIndex {
        /// The start of the range.
        start: usize,
        /// The rejected end index.
        end: usize,
        /// The length of the slice.
        length: usize,
    },

    /// An insertion or update position lies outside the slice.
    #[error("invalid index {index} for slice of length {length}")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// The length of the slice.
        length: usize,
    },

    /// The element type has no field with the requested name.
    #[error("field `{0}` not found")]
    FieldNotFound(String),

    /// The requested field exists but its type cannot be compared.
    #[error("field `{field}` has unsupported type `{type_name}`")]
    UnsupportedFieldType {
        /// The name of the field.
        field: String,
        /// The declared type of the field.
        type_name: &'static str,
    },

    /// A sort direction string was neither `asc` nor `desc`.
    #[error("invalid sort order `{0}`, expected `asc` or `desc`")]
    InvalidSortOrder(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        SliceError::InvalidStartIndex { index: 3, length: 3 },
        "invalid start index 3 for slice of length 3"
    )]
    #[case(
        SliceError::InvalidEndIndex { start: 1, end: 1, length: 4 },
        "invalid end index 1 for range starting at 1 in slice of length 4"
    )]
    #[case(
        SliceError::FieldNotFound("Name".to_string()),
        "field `Name` not found"
    )]
    #[case(
        SliceError::UnsupportedFieldType { field: "tags".to_string(), type_name: "Vec<String>" },
        "field `tags` has unsupported type `Vec<String>`"
    )]
    #[case(
        SliceError::InvalidSortOrder("up".to_string()),
        "invalid sort order `up`, expected `asc` or `desc`"
    )]
    fn test_slice_error_display(#[case] error: SliceError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_slice_error_source_is_none() {
        use std::error::Error;

        let error = SliceError::InvalidIndex {
            index: 0,
            length: 0,
        };
        assert!(error.source().is_none());
    }
}
