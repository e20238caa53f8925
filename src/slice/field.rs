//! Sorting structs by a field chosen at runtime.
//!
//! A struct opts in by implementing [`SortFields`], normally through
//! `#[derive(SortFields)]`. [`sort_by_field`] then looks the field up by
//! name, checks that its kind is comparable, and sorts the slice in place.
//!
//! # Examples
//!
#![cfg_attr(feature = "derive", doc = "```rust")]
#![cfg_attr(not(feature = "derive"), doc = "```ignore")]
//! use scalpel::SortFields;
//! use scalpel::slice::{SortOrder, sort_by_field};
//!
//! #[derive(Debug, PartialEq, SortFields)]
//! struct Student {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut students = vec![
//!     Student { name: "b".to_string(), age: 20 },
//!     Student { name: "a".to_string(), age: 21 },
//! ];
//!
//! sort_by_field(&mut students, "name", SortOrder::Ascending).unwrap();
//! assert_eq!(students[0].name, "a");
//!
//! sort_by_field(&mut students, "age", SortOrder::Descending).unwrap();
//! assert_eq!(students[0].age, 21);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::SliceError;

/// The comparable kind of a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A signed integer (`i8` through `i128`, `isize`).
    Integer,
    /// An unsigned integer (`u8` through `u128`, `usize`).
    Unsigned,
    /// A floating point number (`f32`, `f64`).
    Float,
    /// A string (`String`, `&str`).
    String,
    /// A boolean; `false` orders before `true`.
    Boolean,
    /// A field whose type cannot be compared. Holds the declared type.
    Unsupported(&'static str),
}

/// The value of a struct field, widened to a common representation per kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// A signed integer.
    Integer(i128),
    /// An unsigned integer.
    Unsigned(u128),
    /// A floating point number.
    Float(f64),
    /// A borrowed string.
    String(&'a str),
    /// A boolean.
    Boolean(bool),
}

impl FieldValue<'_> {
    /// Compares two values of the same kind.
    ///
    /// Floats use a total order in which every `NaN`, whatever its sign,
    /// sorts after every other value and equal to any other `NaN`. Returns
    /// `None` when the kinds differ.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => Some(left.cmp(right)),
            (Self::Unsigned(left), Self::Unsigned(right)) => Some(left.cmp(right)),
            (Self::Float(left), Self::Float(right)) => Some(compare_floats(*left, *right)),
            (Self::String(left), Self::String(right)) => Some(left.cmp(right)),
            (Self::Boolean(left), Self::Boolean(right)) => Some(left.cmp(right)),
            _ => None,
        }
    }
}

fn compare_floats(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.total_cmp(&right),
    }
}

/// Name-based access to the comparable fields of a struct.
///
/// Implement it with `#[derive(SortFields)]`. Hand-written implementations
/// must keep the two methods consistent: `field_value` returns `Some` for
/// exactly the names for which `field_kind` returns a supported kind, with a
/// value of that kind.
pub trait SortFields {
    /// Returns the kind of the field called `name`, or `None` if the type has
    /// no such field.
    fn field_kind(name: &str) -> Option<FieldKind>;

    /// Returns the value of the field called `name`, or `None` if the field
    /// does not exist or its kind is unsupported.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<T: SortFields> SortFields for &T {
    fn field_kind(name: &str) -> Option<FieldKind> {
        T::field_kind(name)
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field_value(name)
    }
}

impl<T: SortFields> SortFields for Box<T> {
    fn field_kind(name: &str) -> Option<FieldKind> {
        T::field_kind(name)
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field_value(name)
    }
}

/// The direction of a sort. Defaults to ascending.
///
/// Parses from `"asc"`/`"ascending"` and `"desc"`/`"descending"`, ignoring
/// ASCII case.
///
/// # Examples
///
/// ```rust
/// use scalpel::slice::SortOrder;
///
/// assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Descending));
/// assert_eq!(SortOrder::default(), SortOrder::Ascending);
/// assert!("sideways".parse::<SortOrder>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Orients an ascending comparison result in this direction.
    #[inline]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SliceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("asc") || value.eq_ignore_ascii_case("ascending") {
            Ok(Self::Ascending)
        } else if value.eq_ignore_ascii_case("desc") || value.eq_ignore_ascii_case("descending") {
            Ok(Self::Descending)
        } else {
            Err(SliceError::InvalidSortOrder(value.to_string()))
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => formatter.write_str("asc"),
            Self::Descending => formatter.write_str("desc"),
        }
    }
}

/// Sorts `slice` in place by the field called `field`.
///
/// The sort is stable in both directions: elements with equal field values
/// keep their relative order, also when sorting descending.
///
/// # Errors
///
/// - [`SliceError::FieldNotFound`] if `T` has no field called `field`
/// - [`SliceError::UnsupportedFieldType`] if the field is not an integer,
///   float, string, or boolean
///
/// The field is checked against the type, so an empty slice reports the
/// same errors as a populated one.
pub fn sort_by_field<T>(slice: &mut [T], field: &str, order: SortOrder) -> Result<(), SliceError>
where
    T: SortFields,
{
    match T::field_kind(field) {
        None => {
            tracing::debug!(field, "sort field not found");
            return Err(SliceError::FieldNotFound(field.to_string()));
        }
        Some(FieldKind::Unsupported(type_name)) => {
            tracing::debug!(field, type_name, "sort field has unsupported type");
            return Err(SliceError::UnsupportedFieldType {
                field: field.to_string(),
                type_name,
            });
        }
        Some(_) => {}
    }

    tracing::trace!(field, %order, length = slice.len(), "sorting by field");
    slice.sort_by(|left, right| {
        let ordering = match (left.field_value(field), right.field_value(field)) {
            (Some(left), Some(right)) => left.compare(&right).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        order.apply(ordering)
    });
    Ok(())
}
