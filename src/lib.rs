//! # enwrap
//!
//! Algebraic wrapper types for optional values and fallible computations.
//!
//! ## Overview
//!
//! This library provides three small, immutable, two-variant value wrappers
//! together with a fixed set of combinators (map, flat-map, filter, flatten,
//! recovery, default extraction) for manipulating a possibly-absent or
//! possibly-failed value without branching at every call site:
//!
//! - [`Optional`](optional::Optional): presence or absence of a value
//!   (`Present` / `Absent`)
//! - [`Outcome`](outcome::Outcome): success or failure of a computation,
//!   carrying an error on failure (`Succeeded` / `Failed`)
//! - [`Attempt`](attempt::Attempt): a second name for the same
//!   success/failure contract, provided as an alias of `Outcome`
//!
//! All wrappers are plain value types: constructing, combining, and
//! consuming them never performs I/O, never blocks, and never mutates
//! shared state.
//!
//! ## Example
//!
//! ```rust
//! use enwrap::prelude::*;
//!
//! let present = Optional::Present(21);
//! let doubled = present.map(|n| n * 2);
//! assert_eq!(doubled, Optional::Present(42));
//!
//! let absent: Optional<i32> = Optional::Absent;
//! assert_eq!(absent.get_or_default(0), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the wrapper types and the library's error types.
///
/// # Usage
///
/// ```rust
/// use enwrap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attempt::Attempt;
    pub use crate::error::{EmptyValueError, PredicateFailedError, WrongVariantError};
    pub use crate::optional::Optional;
    pub use crate::outcome::Outcome;
}

pub mod attempt;
pub mod error;
pub mod optional;
pub mod outcome;
