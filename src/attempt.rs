//! Attempt type - a second name for the success/failure contract.
//!
//! `Attempt<T, E>` carries exactly the semantics of
//! [`Outcome<T, E>`](crate::outcome::Outcome): a computation that either
//! `Succeeded(T)` or `Failed(E)`, with the same combinators, equality, and
//! hashing. Rather than duplicating the combinator logic under a second
//! type, the name is provided as an alias of the one generic sum type, so
//! attempts and outcomes are interchangeable values.
//!
//! # Examples
//!
//! ```rust
//! use enwrap::attempt::Attempt;
//! use enwrap::outcome::Outcome;
//!
//! let attempt: Attempt<i32, std::fmt::Error> = Attempt::Succeeded(42);
//! assert_eq!(attempt.map(|n| n * 2), Attempt::Succeeded(84));
//!
//! // Attempt and Outcome are the same type
//! let outcome: Outcome<i32, std::fmt::Error> = Attempt::Succeeded(42);
//! assert_eq!(outcome, Attempt::Succeeded(42));
//! ```

use crate::outcome::Outcome;

/// The result of a computation that may have failed, under its second name.
///
/// See [`Outcome`] for the full contract; every combinator, accessor, and
/// trait implementation applies to `Attempt` unchanged.
pub type Attempt<T, E> = Outcome<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_attempt_is_outcome() {
        let attempt: Attempt<i32, std::fmt::Error> = Attempt::Succeeded(42);
        let outcome: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
        assert_eq!(attempt, outcome);
    }

    #[rstest]
    fn test_attempt_combinators_available() {
        let attempt: Attempt<i32, std::fmt::Error> = Attempt::Succeeded(21);
        assert_eq!(attempt.map(|n| n * 2), Attempt::Succeeded(42));
    }
}
