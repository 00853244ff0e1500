//! Property-based tests for Optional<T> laws.
//!
//! This module verifies that Optional satisfies the functor and monad
//! laws, and that its equality and hash contracts hold:
//!
//! - **Functor Identity**: `opt.map(|x| x) == opt`
//! - **Functor Composition**: `opt.map(f).map(g) == opt.map(|x| g(f(x)))`
//! - **Monad Left Identity**: `Present(v).flat_map(f) == f(v)`
//! - **Monad Right Identity**: `opt.flat_map(Present) == opt`
//! - **Monad Associativity**: grouping of flat_map chains is irrelevant
//!
//! Using proptest, we generate random inputs to verify these laws across
//! a wide range of values.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use enwrap::optional::Optional;
use proptest::prelude::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn optional_of(value: Option<i32>) -> Optional<i32> {
    Optional::from(value)
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping with the identity function returns the original value
    #[test]
    fn prop_optional_functor_identity(value in any::<Option<i32>>()) {
        let optional = optional_of(value);
        prop_assert_eq!(optional.map(|x| x), optional);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_optional_functor_composition(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = optional_of(value).map(function1).map(function2);
        let right = optional_of(value).map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law over owned strings
    #[test]
    fn prop_optional_string_functor_identity(value in any::<Option<String>>()) {
        let optional = Optional::from(value.clone());
        prop_assert_eq!(optional.map(|x| x), Optional::from(value));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: wrapping then flat-mapping equals applying directly
    #[test]
    fn prop_optional_monad_left_identity(value in any::<i32>()) {
        let function = |n: i32| {
            if n % 2 == 0 { Optional::Present(n.wrapping_mul(2)) } else { Optional::Absent }
        };
        prop_assert_eq!(Optional::Present(value).flat_map(function), function(value));
    }

    /// Right Identity: flat-mapping the constructor changes nothing
    #[test]
    fn prop_optional_monad_right_identity(value in any::<Option<i32>>()) {
        let optional = optional_of(value);
        prop_assert_eq!(optional.flat_map(Optional::Present), optional);
    }

    /// Associativity: grouping of flat_map chains is irrelevant
    #[test]
    fn prop_optional_monad_associativity(value in any::<Option<i32>>()) {
        let function1 = |n: i32| {
            if n % 2 == 0 { Optional::Present(n.wrapping_add(1)) } else { Optional::Absent }
        };
        let function2 = |n: i32| {
            if n % 3 == 0 { Optional::Present(n.wrapping_mul(2)) } else { Optional::Absent }
        };

        let left = optional_of(value).flat_map(function1).flat_map(function2);
        let right = optional_of(value).flat_map(|x| function1(x).flat_map(function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Combinator Consistency
// =============================================================================

proptest! {
    /// map can be expressed through flat_map
    #[test]
    fn prop_optional_map_via_flat_map(value in any::<Option<i32>>()) {
        let function = |n: i32| n.wrapping_mul(3);

        let mapped = optional_of(value).map(function);
        let flat_mapped = optional_of(value).flat_map(|x| Optional::Present(function(x)));

        prop_assert_eq!(mapped, flat_mapped);
    }

    /// filter keeps exactly the values the predicate accepts
    #[test]
    fn prop_optional_filter_consistency(value in any::<Option<i32>>()) {
        let predicate = |n: &i32| *n % 2 == 0;

        let filtered = optional_of(value).filter(predicate);
        match value {
            Some(n) if n % 2 == 0 => prop_assert_eq!(filtered, Optional::Present(n)),
            _ => prop_assert_eq!(filtered, Optional::Absent),
        }
    }

    /// or_else keeps present values and substitutes absent ones
    #[test]
    fn prop_optional_or_else(value in any::<Option<i32>>(), alternative in any::<i32>()) {
        let result = optional_of(value).or_else(Optional::Present(alternative));
        prop_assert_eq!(result, Optional::Present(value.unwrap_or(alternative)));
    }

    /// get_or_default and get_or_else agree
    #[test]
    fn prop_optional_defaults_agree(value in any::<Option<i32>>(), default in any::<i32>()) {
        let eager = optional_of(value).get_or_default(default);
        let lazy = optional_of(value).get_or_else(|| default);
        prop_assert_eq!(eager, lazy);
    }
}

// =============================================================================
// Equality, Hash, and Iteration Contracts
// =============================================================================

proptest! {
    /// Equality follows the contained values
    #[test]
    fn prop_optional_equality_follows_contents(
        first in any::<Option<i32>>(),
        second in any::<Option<i32>>(),
    ) {
        prop_assert_eq!(optional_of(first) == optional_of(second), first == second);
    }

    /// Present(v) hashes exactly as v does
    #[test]
    fn prop_optional_present_hash_transparency(value in any::<i32>()) {
        prop_assert_eq!(hash_of(&Optional::Present(value)), hash_of(&value));
    }

    /// Equal optionals hash equal
    #[test]
    fn prop_optional_equal_implies_equal_hash(value in any::<Option<i32>>()) {
        prop_assert_eq!(hash_of(&optional_of(value)), hash_of(&optional_of(value)));
    }

    /// Iteration yields the contained value exactly once, twice in a row
    #[test]
    fn prop_optional_iteration_restartable(value in any::<Option<i32>>()) {
        let optional = optional_of(value);
        let first: Vec<i32> = optional.iter().copied().collect();
        let second: Vec<i32> = optional.iter().copied().collect();

        let expected: Vec<i32> = value.into_iter().collect();
        prop_assert_eq!(first, expected.clone());
        prop_assert_eq!(second, expected);
    }
}
