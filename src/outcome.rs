//! Outcome type - the result of a computation that may have failed.
//!
//! This module provides the `Outcome<T, E>` type, which represents a
//! computation that either `Succeeded(T)` or `Failed(E)`. This is commonly
//! used in functional programming for:
//!
//! - Carrying a failure cause alongside the failure itself
//! - Chaining fallible computations without branching at each step
//! - Recovering from failures (`recover`) or discarding them
//!   (`to_optional`)
//!
//! The failure payload is constrained to implement [`std::error::Error`],
//! so an outcome can only fail with an actual error value.
//!
//! # Examples
//!
//! ```rust
//! use enwrap::outcome::Outcome;
//!
//! let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
//! let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
//!
//! // Pattern matching
//! match succeeded {
//!     Outcome::Succeeded(n) => println!("Got value: {}", n),
//!     Outcome::Failed(error) => println!("Failed: {}", error),
//! }
//!
//! // Recovering from a failure
//! let recovered = failed.recover(|_| 0);
//! assert_eq!(recovered, Outcome::Succeeded(0));
//! ```

use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::{PredicateFailedError, WrongVariantError};
use crate::optional::Optional;

/// The result of a computation that may have failed.
///
/// `Outcome<T, E>` represents a computation that either `Succeeded(T)` or
/// `Failed(E)`. Exactly one variant is active at any time, and a
/// constructed outcome is never mutated: every combinator consumes its
/// receiver and returns a new outcome (or a raw value).
///
/// The failure payload must be an error type; constructing `Failed` with a
/// non-error value is rejected at compile time:
///
/// ```compile_fail
/// use enwrap::outcome::Outcome;
///
/// // i32 does not implement std::error::Error
/// let outcome: Outcome<i32, i32> = Outcome::Failed(5);
/// ```
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure error, which must implement
///   [`std::error::Error`]
///
/// # Examples
///
/// ```rust
/// use enwrap::outcome::Outcome;
///
/// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
/// let doubled = succeeded.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Succeeded(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T, E: Error> {
    /// The variant holding the value of a successful computation.
    Succeeded(T),
    /// The variant holding the error that caused a computation to fail.
    Failed(E),
}

impl<T, E: Error> Outcome<T, E> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this outcome is `Failed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert!(failed.is_failed());
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert!(!succeeded.is_failed());
    /// ```
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `true` if this outcome is `Succeeded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert!(succeeded.is_succeeded());
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert!(!failed.is_succeeded());
    /// ```
    #[inline]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    // =========================================================================
    // Value and Error Extraction
    // =========================================================================

    /// Returns the success value, or the *original stored error* if this
    /// outcome is `Failed`.
    ///
    /// The stored error is returned by identity, never wrapped: the
    /// failure cause propagates to the caller exactly as it was stored.
    /// Contrast with [`error`], which signals a generic
    /// [`WrongVariantError`] on the wrong variant.
    ///
    /// [`error`]: Outcome::error
    ///
    /// # Errors
    ///
    /// Returns the stored error if this outcome is `Failed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.result(), Ok(42));
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.result(), Err(std::fmt::Error));
    /// ```
    #[inline]
    pub fn result(self) -> Result<T, E> {
        match self {
            Self::Succeeded(value) => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }

    /// Returns the stored error, consuming the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`WrongVariantError`] if this outcome is `Succeeded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    /// use enwrap::error::WrongVariantError;
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.error(), Ok(std::fmt::Error));
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.error(), Err(WrongVariantError));
    /// ```
    #[inline]
    pub fn error(self) -> Result<E, WrongVariantError> {
        match self {
            Self::Succeeded(_) => Err(WrongVariantError),
            Self::Failed(error) => Ok(error),
        }
    }

    /// Returns a reference to the success value if succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.value_ref(), Some(&42));
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Returns a reference to the stored error if failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.error_ref(), Some(&std::fmt::Error));
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.error_ref(), None);
    /// ```
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Returns the success value, or `default` if this outcome is
    /// `Failed`.
    ///
    /// The default is evaluated eagerly; use [`get_or_else`] when the
    /// default is expensive to compute.
    ///
    /// [`get_or_else`]: Outcome::get_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.get_or_default(0), 42);
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.get_or_default(0), 0);
    /// ```
    #[inline]
    pub fn get_or_default(self, default: T) -> T {
        match self {
            Self::Succeeded(value) => value,
            Self::Failed(_) => default,
        }
    }

    /// Returns the success value, or the result of evaluating `function`
    /// if this outcome is `Failed`.
    ///
    /// The function is only called when the outcome is `Failed`, making
    /// this the lazy counterpart of [`get_or_default`].
    ///
    /// [`get_or_default`]: Outcome::get_or_default
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.get_or_else(|| 0), 42);
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Succeeded(value) => value,
            Self::Failed(_) => function(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Keeps the success value if the predicate accepts it, otherwise
    /// produces a fresh `Failed(PredicateFailedError)`.
    ///
    /// The synthesized failure is produced both when the predicate rejects
    /// a succeeded value and when the receiver was already `Failed`; in the
    /// latter case the original error is discarded and replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    /// use enwrap::error::PredicateFailedError;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(5);
    /// assert_eq!(succeeded.filter(|n| *n > 0), Outcome::Succeeded(5));
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(-5);
    /// assert_eq!(succeeded.filter(|n| *n > 0), Outcome::Failed(PredicateFailedError));
    ///
    /// // An already-failed outcome also becomes a predicate failure
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.filter(|n| *n > 0), Outcome::Failed(PredicateFailedError));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Outcome<T, PredicateFailedError>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Succeeded(value) => {
                if predicate(&value) {
                    Outcome::Succeeded(value)
                } else {
                    Outcome::Failed(PredicateFailedError)
                }
            }
            Self::Failed(_) => Outcome::Failed(PredicateFailedError),
        }
    }

    /// Applies a function returning an outcome to the success value.
    ///
    /// If this is `Succeeded(v)`, returns `function(v)`. If this is
    /// `Failed(e)`, returns `Failed(e)` without calling the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, std::fmt::Error> {
    ///     if n % 2 == 0 { Outcome::Succeeded(n / 2) } else { Outcome::Failed(std::fmt::Error) }
    /// }
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.flat_map(half), Outcome::Succeeded(21));
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.flat_map(half), Outcome::Failed(std::fmt::Error));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Succeeded(value) => function(value),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Applies a function to the success value if succeeded.
    ///
    /// If this is `Succeeded(v)`, returns `Succeeded(function(v))`. If
    /// this is `Failed(e)`, returns `Failed(e)` without calling the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.map(|n| n * 2), Outcome::Succeeded(84));
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.map(|n| n * 2), Outcome::Failed(std::fmt::Error));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(function(value)),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Returns this outcome if it is `Succeeded`, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.or_else(Outcome::Succeeded(0)), Outcome::Succeeded(42));
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.or_else(Outcome::Succeeded(0)), Outcome::Succeeded(0));
    /// ```
    #[inline]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Succeeded(value) => Self::Succeeded(value),
            Self::Failed(_) => alternative,
        }
    }

    /// Turns a failure back into a success by applying a function to the
    /// stored error.
    ///
    /// If this is `Failed(e)`, returns `Succeeded(function(e))`. If this
    /// is `Succeeded(v)`, returns `Succeeded(v)` without calling the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.recover(|_| 0), Outcome::Succeeded(0));
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.recover(|_| 0), Outcome::Succeeded(42));
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Succeeded(value) => Self::Succeeded(value),
            Self::Failed(error) => Self::Succeeded(function(error)),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts this outcome to an [`Optional`], discarding the error.
    ///
    /// `Succeeded(v)` becomes `Present(v)`, and `Failed(_)` becomes
    /// `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.to_optional(), Optional::Present(42));
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.to_optional(), Optional::Absent);
    /// ```
    #[inline]
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Self::Succeeded(value) => Optional::Present(value),
            Self::Failed(_) => Optional::Absent,
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the success value.
    ///
    /// The iterator yields one element if the outcome is `Succeeded`, zero
    /// if it is `Failed`. Each call produces a fresh iterator, so iteration
    /// is restartable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.iter().collect::<Vec<_>>(), vec![&42]);
    ///
    /// let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
    /// assert_eq!(failed.iter().count(), 0);
    /// ```
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value_ref(),
        }
    }
}

// =============================================================================
// Nested Outcome Operations
// =============================================================================

impl<T, E: Error> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting from an outcome of outcomes.
    ///
    /// `Succeeded(Succeeded(v))` becomes `Succeeded(v)`,
    /// `Succeeded(Failed(e))` becomes `Failed(e)`, and `Failed(e)` stays
    /// `Failed(e)`. Arbitrarily deep chains reduce by repeated application.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, std::fmt::Error>, std::fmt::Error> =
    ///     Outcome::Succeeded(Outcome::Succeeded(42));
    /// assert_eq!(nested.flatten(), Outcome::Succeeded(42));
    ///
    /// let nested: Outcome<Outcome<i32, std::fmt::Error>, std::fmt::Error> =
    ///     Outcome::Succeeded(Outcome::Failed(std::fmt::Error));
    /// assert_eq!(nested.flatten(), Outcome::Failed(std::fmt::Error));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Succeeded(inner) => inner,
            Self::Failed(error) => Outcome::Failed(error),
        }
    }
}

// =============================================================================
// Hash Implementation
// =============================================================================

impl<T: Hash, E: Hash + Error> Hash for Outcome<T, E> {
    /// Hashes `Succeeded(v)` exactly as `v` hashes and `Failed(e)` exactly
    /// as `e` hashes.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Succeeded(value) => value.hash(state),
            Self::Failed(error) => error.hash(state),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: Error> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded(value) => formatter.debug_tuple("Succeeded").field(value).finish(),
            Self::Failed(error) => formatter.debug_tuple("Failed").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E: Error> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(v)` becomes `Succeeded(v)`, and `Err(e)` becomes `Failed(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let ok: Result<i32, std::fmt::Error> = Ok(42);
    /// let outcome: Outcome<i32, std::fmt::Error> = ok.into();
    /// assert_eq!(outcome, Outcome::Succeeded(42));
    ///
    /// let err: Result<i32, std::fmt::Error> = Err(std::fmt::Error);
    /// let outcome: Outcome<i32, std::fmt::Error> = err.into();
    /// assert_eq!(outcome, Outcome::Failed(std::fmt::Error));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(error) => Self::Failed(error),
        }
    }
}

impl<T, E: Error> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// `Succeeded(v)` becomes `Ok(v)`, and `Failed(e)` becomes `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// let result: Result<i32, std::fmt::Error> = succeeded.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Succeeded(value) => Ok(value),
            Outcome::Failed(error) => Err(error),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A consuming iterator over the success value of an [`Outcome`].
///
/// Yields one element if the outcome was `Succeeded`, zero if it was
/// `Failed`. Created by the [`IntoIterator`] implementation for
/// `Outcome<T, E>`.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A borrowing iterator over the success value of an [`Outcome`].
///
/// Yields one reference if the outcome is `Succeeded`, zero if it is
/// `Failed`. Created by [`Outcome::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T, E: Error> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns a consuming iterator yielding zero or one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::outcome::Outcome;
    ///
    /// let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
    /// let collected: Vec<i32> = succeeded.into_iter().collect();
    /// assert_eq!(collected, vec![42]);
    /// ```
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: match self {
                Self::Succeeded(value) => Some(value),
                Self::Failed(_) => None,
            },
        }
    }
}

impl<'a, T, E: Error> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// Immutable value wrappers share freely across threads.
static_assertions::assert_impl_all!(Outcome<i32, std::fmt::Error>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<String, std::io::Error>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_succeeded_construction() {
        let value: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
        assert!(value.is_succeeded());
        assert!(!value.is_failed());
    }

    #[rstest]
    fn test_failed_construction() {
        let value: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
        assert!(value.is_failed());
        assert!(!value.is_succeeded());
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, std::fmt::Error> = Ok(42);
        let outcome: Outcome<i32, std::fmt::Error> = ok.into();
        let result: Result<i32, std::fmt::Error> = outcome.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, std::fmt::Error> = Err(std::fmt::Error);
        let outcome: Outcome<i32, std::fmt::Error> = err.into();
        let result: Result<i32, std::fmt::Error> = outcome.into();
        assert_eq!(result, Err(std::fmt::Error));
    }

    #[rstest]
    fn test_debug_formatting() {
        let succeeded: Outcome<i32, std::fmt::Error> = Outcome::Succeeded(42);
        assert_eq!(format!("{succeeded:?}"), "Succeeded(42)");

        let failed: Outcome<i32, std::fmt::Error> = Outcome::Failed(std::fmt::Error);
        assert_eq!(format!("{failed:?}"), "Failed(Error)");
    }
}
