//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, which represents a value
//! that is either `Present(T)` or `Absent`. This is commonly used in
//! functional programming for:
//!
//! - Expressing absence without a sentinel value
//! - Chaining computations over possibly-missing data
//! - As the error-discarding view of an [`Outcome`](crate::outcome::Outcome)
//!
//! # Examples
//!
//! ```rust
//! use enwrap::optional::Optional;
//!
//! // Creating Optional values
//! let present: Optional<i32> = Optional::Present(42);
//! let absent: Optional<i32> = Optional::Absent;
//!
//! // Pattern matching
//! match present {
//!     Optional::Present(n) => println!("Got value: {}", n),
//!     Optional::Absent => println!("Nothing here"),
//! }
//!
//! // Using combinators to avoid branching
//! let result = absent.map(|n| n * 2).get_or_default(0);
//! assert_eq!(result, 0);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::EmptyValueError;

/// A value that may or may not be present.
///
/// `Optional<T>` represents a value that is either `Present(T)` or
/// `Absent`. Exactly one variant is active at any time, and a constructed
/// optional is never mutated: every combinator consumes its receiver and
/// returns a new optional (or a raw value).
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use enwrap::optional::Optional;
///
/// let present: Optional<i32> = Optional::Present(42);
/// let doubled = present.map(|x| x * 2);
/// assert_eq!(doubled, Optional::Present(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    /// The variant holding a value that exists.
    Present(T),
    /// The variant representing a value that does not exist.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this optional is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert!(absent.is_absent());
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert!(!present.is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this optional is `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert!(present.is_present());
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert!(!absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the optional.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if this optional is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    /// use enwrap::error::EmptyValueError;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert_eq!(present.get(), Ok(42));
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.get(), Err(EmptyValueError));
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueError),
        }
    }

    /// Returns a reference to the contained value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert_eq!(present.value_ref(), Some(&42));
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns the contained value, or `default` if this optional is
    /// `Absent`.
    ///
    /// The default is evaluated eagerly; use [`get_or_else`] when the
    /// default is expensive to compute.
    ///
    /// [`get_or_else`]: Optional::get_or_else
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert_eq!(present.get_or_default(0), 42);
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.get_or_default(0), 0);
    /// ```
    #[inline]
    pub fn get_or_default(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value, or the result of evaluating `function`
    /// if this optional is `Absent`.
    ///
    /// The function is only called when the optional is `Absent`, making
    /// this the lazy counterpart of [`get_or_default`].
    ///
    /// [`get_or_default`]: Optional::get_or_default
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert_eq!(present.get_or_else(|| 0), 42);
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Returns this optional if it is `Present` and the predicate accepts
    /// its value, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert_eq!(present.filter(|n| *n > 0), Optional::Present(42));
    ///
    /// let present: Optional<i32> = Optional::Present(-42);
    /// assert_eq!(present.filter(|n| *n > 0), Optional::Absent);
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.filter(|n| *n > 0), Optional::Absent);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Applies a function returning an optional to the contained value.
    ///
    /// If this is `Present(v)`, returns `function(v)`. If this is `Absent`,
    /// returns `Absent` without calling the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// fn half(n: i32) -> Optional<i32> {
    ///     if n % 2 == 0 { Optional::Present(n / 2) } else { Optional::Absent }
    /// }
    ///
    /// assert_eq!(Optional::Present(42).flat_map(half), Optional::Present(21));
    /// assert_eq!(Optional::Present(21).flat_map(half), Optional::Absent);
    /// assert_eq!(Optional::Absent.flat_map(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies a function to the contained value if present.
    ///
    /// If this is `Present(v)`, returns `Present(function(v))`. If this is
    /// `Absent`, returns `Absent` without calling the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert_eq!(present.map(|n| n.to_string()), Optional::Present("42".to_string()));
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.map(|n| n.to_string()), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns this optional if it is `Present`, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert_eq!(present.or_else(Optional::Present(0)), Optional::Present(42));
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.or_else(Optional::Present(0)), Optional::Present(0));
    /// ```
    #[inline]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative,
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the contained value.
    ///
    /// The iterator yields one element if the optional is `Present`, zero
    /// if it is `Absent`. Each call produces a fresh iterator, so iteration
    /// is restartable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let present: Optional<i32> = Optional::Present(42);
    /// assert_eq!(present.iter().collect::<Vec<_>>(), vec![&42]);
    /// assert_eq!(present.iter().count(), 1);
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.iter().count(), 0);
    /// ```
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value_ref(),
        }
    }
}

// =============================================================================
// Nested Optional Operations
// =============================================================================

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting from an optional of optionals.
    ///
    /// `Present(Present(v))` becomes `Present(v)`, `Present(Absent)`
    /// becomes `Absent`, and `Absent` stays `Absent`. Arbitrarily deep
    /// chains reduce by repeated application.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let nested: Optional<Optional<i32>> = Optional::Present(Optional::Present(42));
    /// assert_eq!(nested.flatten(), Optional::Present(42));
    ///
    /// let nested: Optional<Optional<i32>> = Optional::Present(Optional::Absent);
    /// assert_eq!(nested.flatten(), Optional::Absent);
    ///
    /// let nested: Optional<Optional<i32>> = Optional::Absent;
    /// assert_eq!(nested.flatten(), Optional::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Optional::Absent,
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Optional<T> {
    /// Returns `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let absent: Optional<i32> = Optional::default();
    /// assert!(absent.is_absent());
    /// ```
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Hash Implementation
// =============================================================================

impl<T: Hash> Hash for Optional<T> {
    /// Hashes `Present(v)` exactly as `v` hashes; `Absent` hashes to a
    /// fixed constant byte.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Present(value) => value.hash(state),
            Self::Absent => state.write_u8(0),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts an `Option` to an `Optional`.
    ///
    /// `Some(v)` becomes `Present(v)`, and `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let optional: Optional<i32> = Some(42).into();
    /// assert_eq!(optional, Optional::Present(42));
    ///
    /// let optional: Optional<i32> = None.into();
    /// assert_eq!(optional, Optional::Absent);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` to an `Option`.
    ///
    /// `Present(v)` becomes `Some(v)`, and `Absent` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let option: Option<i32> = Optional::Present(42).into();
    /// assert_eq!(option, Some(42));
    ///
    /// let option: Option<i32> = Optional::<i32>::Absent.into();
    /// assert_eq!(option, None);
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A consuming iterator over the value of an [`Optional`].
///
/// Yields one element if the optional was `Present`, zero if it was
/// `Absent`. Created by the [`IntoIterator`] implementation for
/// `Optional<T>`.
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

/// A borrowing iterator over the value of an [`Optional`].
///
/// Yields one reference if the optional is `Present`, zero if it is
/// `Absent`. Created by [`Optional::iter`].
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

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns a consuming iterator yielding zero or one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enwrap::optional::Optional;
    ///
    /// let collected: Vec<i32> = Optional::Present(42).into_iter().collect();
    /// assert_eq!(collected, vec![42]);
    ///
    /// let collected: Vec<i32> = Optional::<i32>::Absent.into_iter().collect();
    /// assert!(collected.is_empty());
    /// ```
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// Immutable value wrappers share freely across threads.
static_assertions::assert_impl_all!(Optional<i32>: Send, Sync);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_present_construction() {
        let value: Optional<i32> = Optional::Present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_absent_construction() {
        let value: Optional<i32> = Optional::Absent;
        assert!(value.is_absent());
        assert!(!value.is_present());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let some: Option<i32> = Some(42);
        let optional: Optional<i32> = some.into();
        let option: Option<i32> = optional.into();
        assert_eq!(option, Some(42));

        let none: Option<i32> = None;
        let optional: Optional<i32> = none.into();
        let option: Option<i32> = optional.into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn test_debug_formatting() {
        assert_eq!(format!("{:?}", Optional::Present(42)), "Present(42)");
        assert_eq!(format!("{:?}", Optional::<i32>::Absent), "Absent");
    }
}
