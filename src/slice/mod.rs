//! Slice helpers.
//!
//! Stateless functions over `&[T]`. Apart from the explicitly in-place
//! helpers ([`reverse_slice`], [`shuffle_in_place`], [`sort_by_field`]),
//! every function leaves its input untouched and returns a new `Vec`.
//!
//! - **Membership**: [`contain`], [`Contain`]
//! - **Set algebra**: [`difference`], [`union`], [`intersection`],
//!   [`without`], [`unique`], [`unique_hashed`]
//! - **Predicates**: [`every`], [`some`], [`none`], [`filter`],
//!   [`group_by`], [`find`]
//! - **Transforms**: [`chunk`], [`map`], [`reduce`], [`drop_n`],
//!   [`flatten_deep`]
//! - **Position edits**: [`delete_by_index`], [`delete_range_by_index`],
//!   [`insert_by_index`], [`insert_slice_by_index`], [`update_by_index`]
//! - **Ordering**: [`reverse_slice`], `shuffle`, [`sort_by_field`]
//! - **Conversions**: [`convert`], [`try_convert`], [`to_boxed_any`]
//!
//! Predicates and mappers receive `(index, &element)`.
//!
//! # Examples
//!
//! ```rust
//! use scalpel::slice::{chunk, group_by, insert_by_index, unique};
//!
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let (even, odd) = group_by(&[1, 2, 3, 4], |_, value| value % 2 == 0);
//! assert_eq!((even, odd), (vec![2, 4], vec![1, 3]));
//!
//! assert_eq!(insert_by_index(&[1, 2, 3], 1, 99), Ok(vec![1, 99, 2, 3]));
//! assert_eq!(unique(&[1, 1, 2]), vec![1, 2]);
//! ```

mod contain;
mod convert;
mod error;
mod field;
mod flatten;
mod index;
mod order;
mod predicate;
mod set;
mod transform;

#[cfg(feature = "rayon")]
pub mod parallel;

pub use contain::{Contain, contain};
pub use convert::{convert, to_boxed_any, try_convert};
pub use error::SliceError;
pub use field::{FieldKind, FieldValue, SortFields, SortOrder, sort_by_field};
pub use flatten::{Nested, flatten_deep};
pub use index::{
    delete_by_index, delete_range_by_index, insert_by_index, insert_slice_by_index, update_by_index,
};
pub use order::reverse_slice;
#[cfg(feature = "random")]
pub use order::{shuffle, shuffle_in_place, shuffle_with};
pub use predicate::{every, filter, find, group_by, none, some};
pub use set::{
    difference, difference_by, intersection, union, unique, unique_by, unique_hashed, without,
};
pub use transform::{chunk, drop_n, map, reduce};
