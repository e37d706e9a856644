//! Core generic operations, errors, and constants for `genops`.
//!
//! The heart of the crate is [`generic`]: hand-written, generic versions of
//! the three classic higher-order collection operations (`map`, `filter` and
//! `reduce`), plus a keyed `map` over dictionaries. Each is offered both as a
//! free function and as an extension method, so calls read either way:
//!
//! ```
//! use genops_core::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(transform(&numbers, |n| n * 2), vec![2, 4, 6, 8, 10]);
//! assert_eq!(numbers.filter(|n| *n > 3), vec![4, 5]);
//! assert_eq!(numbers.fold(0, |acc, n| acc + n), 15);
//! ```
//!
//! ## Key Components
//!
//! - **`generic`**: the sequence operations and the [`SequenceExt`] trait.
//! - **`generic::keyed`**: the keyed transform and the [`KeyedExt`] trait.
//! - **`errors`**: the `Error` enum and `Result` alias used by the
//!   configuration and output layers. The operations themselves never fail.
//! - **`constants`**: file names and environment variable names shared by
//!   the other crates.

pub mod constants;
pub mod errors;
pub mod generic;

pub use self::{
    errors::{Error, Result, ResultExt},
    generic::keyed::{transform_entries, KeyedExt},
    generic::{filter, fold, transform, SequenceExt},
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::generic::keyed::{transform_entries, KeyedExt};
    pub use crate::generic::{filter, fold, transform, SequenceExt};
}
