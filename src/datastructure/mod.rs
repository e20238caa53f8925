//! Value wrappers.
//!
//! This module provides:
//!
//! - [`Optional`]: A value that may or may not be present
//! - [`AbsentValueError`]: The error returned when reading an absent value
//!
//! # Examples
//!
//! ```rust
//! use scalpel::datastructure::Optional;
//!
//! let present = Optional::of(42);
//! assert_eq!(present.get(), Ok(&42));
//!
//! let absent: Optional<i32> = Optional::empty();
//! assert!(absent.get().is_err());
//! assert_eq!(absent.or_else(7), 7);
//! ```

mod optional;

pub use optional::{AbsentValueError, Optional};
