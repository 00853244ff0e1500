//! Error types for the wrapper library.
//!
//! This module provides the errors the wrappers themselves can signal:
//! extracting a value from an empty [`Optional`](crate::optional::Optional),
//! extracting the error from a succeeded
//! [`Outcome`](crate::outcome::Outcome), and the synthesized failure
//! produced when a `filter` predicate rejects a value.
//!
//! Failures raised by caller-supplied closures are never wrapped or caught;
//! they propagate to the caller untouched. The types here cover only the
//! wrappers' own invariant violations.

/// Represents an attempt to extract a value from an absent `Optional`.
///
/// # Examples
///
/// ```rust
/// use enwrap::error::EmptyValueError;
///
/// let error = EmptyValueError;
/// assert_eq!(
///     format!("{}", error),
///     "cannot get a value from an absent optional"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyValueError;

impl std::fmt::Display for EmptyValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("cannot get a value from an absent optional")
    }
}

impl std::error::Error for EmptyValueError {}

/// Represents an attempt to extract the error from a succeeded `Outcome`.
///
/// Note the asymmetry with the value accessor: extracting the *value* from
/// a failed outcome yields the original stored error, while extracting the
/// *error* from a succeeded outcome yields this generic wrong-variant error.
///
/// # Examples
///
/// ```rust
/// use enwrap::error::WrongVariantError;
///
/// let error = WrongVariantError;
/// assert_eq!(
///     format!("{}", error),
///     "cannot retrieve the error from a succeeded outcome"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrongVariantError;

impl std::fmt::Display for WrongVariantError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("cannot retrieve the error from a succeeded outcome")
    }
}

impl std::error::Error for WrongVariantError {}

/// Represents a value rejected by a `filter` predicate.
///
/// This error is never raised directly: `filter` wraps it in a fresh
/// `Failed` outcome, both when the predicate rejects a succeeded value and
/// when the receiver was already failed.
///
/// # Examples
///
/// ```rust
/// use enwrap::error::PredicateFailedError;
///
/// let error = PredicateFailedError;
/// assert_eq!(format!("{}", error), "predicate failed");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PredicateFailedError;

impl std::fmt::Display for PredicateFailedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("predicate failed")
    }
}

impl std::error::Error for PredicateFailedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_error_display() {
        assert_eq!(
            format!("{EmptyValueError}"),
            "cannot get a value from an absent optional"
        );
    }

    #[test]
    fn test_wrong_variant_error_display() {
        assert_eq!(
            format!("{WrongVariantError}"),
            "cannot retrieve the error from a succeeded outcome"
        );
    }

    #[test]
    fn test_predicate_failed_error_display() {
        assert_eq!(format!("{PredicateFailedError}"), "predicate failed");
    }

    #[test]
    fn test_errors_are_error_trait_objects() {
        use std::error::Error;

        let _: &dyn Error = &EmptyValueError;
        let _: &dyn Error = &WrongVariantError;
        let _: &dyn Error = &PredicateFailedError;
    }

    #[test]
    fn test_error_sources_are_none() {
        use std::error::Error;

        assert!(EmptyValueError.source().is_none());
        assert!(WrongVariantError.source().is_none());
        assert!(PredicateFailedError.source().is_none());
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EmptyValueError, EmptyValueError);
        assert_eq!(WrongVariantError, WrongVariantError);
        assert_eq!(PredicateFailedError, PredicateFailedError);
    }

    #[test]
    fn test_error_clone() {
        let error = PredicateFailedError;
        let cloned = error;
        assert_eq!(error, cloned);
    }
}
