//! Derive macros for scalpel.
//!
//! This crate provides procedural macros that expose struct fields to the
//! runtime by name, so that slices of structs can be sorted by a field
//! chosen at runtime.
//!
//! # Available Derive Macros
//!
//! - [`SortFields`]: Implements `scalpel::slice::SortFields` for named structs
//!
//! # Example
//!
//! ```rust,ignore
//! use scalpel::slice::{SortOrder, sort_by_field};
//! use scalpel_derive::SortFields;
//!
//! #[derive(Debug, SortFields)]
//! struct Student {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut students = vec![
//!     Student { name: "Bob".to_string(), age: 20 },
//!     Student { name: "Alice".to_string(), age: 22 },
//! ];
//!
//! sort_by_field(&mut students, "name", SortOrder::Ascending).unwrap();
//! assert_eq!(students[0].name, "Alice");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod sort_fields;

use proc_macro::TokenStream;

/// Derive macro exposing struct fields for runtime, name-based sorting.
///
/// Generates an implementation of `scalpel::slice::SortFields`, which lets
/// `scalpel::slice::sort_by_field` look up a field by its name and compare
/// the field values of two elements.
///
/// # Requirements
///
/// - The type must be a struct with named fields
///
/// # Field Kinds
///
/// The kind of each field is decided from its declared type:
///
/// | Declared type | Kind |
/// |---|---|
/// | `i8`, `i16`, `i32`, `i64`, `i128`, `isize` | `FieldKind::Integer` |
/// | `u8`, `u16`, `u32`, `u64`, `u128`, `usize` | `FieldKind::Unsigned` |
/// | `f32`, `f64` | `FieldKind::Float` |
/// | `String`, `&str`, `&String` | `FieldKind::String` |
/// | `bool` | `FieldKind::Boolean` |
///
/// Any other type (including type aliases of the types above) is reported
/// as `FieldKind::Unsupported`, and sorting by that field fails at runtime
/// with `SliceError::UnsupportedFieldType`.
///
/// Raw identifiers are exposed without their `r#` prefix, so a field
/// declared as `r#type` is looked up as `"type"`.
///
/// # Example
///
/// ```rust,ignore
/// use scalpel::slice::{FieldKind, SortFields};
/// use scalpel_derive::SortFields;
///
/// #[derive(SortFields)]
/// struct Point {
///     x: i32,
///     label: String,
///     tags: Vec<String>,
/// }
///
/// assert_eq!(Point::field_kind("x"), Some(FieldKind::Integer));
/// assert_eq!(Point::field_kind("label"), Some(FieldKind::String));
/// assert!(matches!(Point::field_kind("tags"), Some(FieldKind::Unsupported(_))));
/// assert_eq!(Point::field_kind("missing"), None);
/// ```
///
/// # Generics
///
/// Generic structs are supported. Fields whose type is a type parameter are
/// unsupported, since their kind cannot be decided at expansion time.
#[proc_macro_derive(SortFields)]
pub fn derive_sort_fields(input: TokenStream) -> TokenStream {
    sort_fields::derive_sort_fields_impl(input)
}
