//! # scalpel
//!
//! Generic slice manipulation helpers and an `Optional` value wrapper.
//!
//! ## Overview
//!
//! This library collects small, stateless helpers that are missing from the
//! standard library or are awkward to write inline. It includes:
//!
//! - **Optional**: A present/absent value wrapper with Java-style accessors
//! - **Slice Helpers**: Chunking, set algebra, quantifiers, grouping,
//!   flattening, index-based editing, shuffling, and sorting by field name
//!
//! Every helper is generic over the element type. Equality and ordering are
//! trait bounds, and element comparisons that would otherwise need runtime
//! reflection (sorting by field name) are provided by a derive macro.
//!
//! ## Feature Flags
//!
//! - `datastructure`: The `Optional` type
//! - `slice`: Slice helpers
//! - `derive`: `#[derive(SortFields)]` for `slice::sort_by_field`
//! - `random`: Shuffling helpers backed by `rand`
//! - `rayon`: Parallel quantifiers and maps
//! - `serde`: Serialization for `Optional`
//! - `fxhash` / `ahash`: Faster hasher for `slice::unique_hashed`
//! - `full`: Enable all features except the hasher selection
//!
//! ## Example
//!
#![cfg_attr(all(feature = "datastructure", feature = "slice"), doc = "```rust")]
#![cfg_attr(
    not(all(feature = "datastructure", feature = "slice")),
    doc = "```ignore"
)]
//! use scalpel::prelude::*;
//!
//! let chunks = chunk(&[1, 2, 3, 4, 5], 2);
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let name = Optional::of("scalpel").or_else("unknown");
//! assert_eq!(name, "scalpel");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets code generated by `scalpel-derive` refer to `::scalpel` from inside this crate.
extern crate self as scalpel;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use scalpel::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "datastructure")]
    pub use crate::datastructure::*;

    #[cfg(feature = "slice")]
    pub use crate::slice::*;

    #[cfg(feature = "derive")]
    pub use crate::SortFields;
}

#[cfg(feature = "datastructure")]
pub mod datastructure;

#[cfg(feature = "slice")]
pub mod slice;

#[cfg(feature = "derive")]
pub use scalpel_derive::SortFields;
