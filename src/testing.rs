//! Test helpers for validations
//!
//! Assertion macros that print the accumulated errors when they fail, plus
//! `proptest` support behind the `proptest` feature.
//!
//! ```rust
//! use validated_config::{assert_errors, assert_invalid, assert_valid, Validation};
//!
//! assert_valid!(Validation::<&str, _>::valid(42));
//! assert_invalid!(Validation::<_, i32>::invalid("error"));
//! assert_errors!(Validation::<_, i32>::invalid("error"), ["error"]);
//! ```

/// Assert that a validation is `Valid`, evaluating to the value.
///
/// Panics with the accumulated errors otherwise.
///
/// ```rust
/// use validated_config::{assert_valid, Validation};
///
/// let value = assert_valid!(Validation::<&str, _>::valid(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Valid(value) => value,
            $crate::Validation::Invalid(errors) => {
                panic!("Expected Valid, got Invalid: {:?}", errors)
            }
        }
    };
}

/// Assert that a validation is `Invalid`, evaluating to its errors.
///
/// ```rust
/// use validated_config::{assert_invalid, Validation};
///
/// let errors = assert_invalid!(Validation::<_, i32>::invalid("error"));
/// assert_eq!(errors.len(), 1);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Invalid(errors) => errors,
            $crate::Validation::Valid(value) => {
                panic!("Expected Invalid, got Valid: {:?}", value)
            }
        }
    };
}

/// Assert that a validation is `Invalid` with exactly these errors, in order.
///
/// The expected errors can be a bracketed list or any expression comparable
/// to a `Vec` of errors.
///
/// ```rust
/// use validated_config::{assert_errors, NonEmptyVec, Validation};
///
/// let v = Validation::<_, i32>::invalid_all(NonEmptyVec::new("a", vec!["b"]));
/// assert_errors!(v.clone(), ["a", "b"]);
/// assert_errors!(v, vec!["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_errors {
    ($validation:expr, [$($expected:expr),+ $(,)?]) => {
        $crate::assert_errors!($validation, vec![$($expected),+])
    };
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Invalid(errors) => {
                assert_eq!(errors.into_vec(), $expected);
            }
            $crate::Validation::Valid(value) => {
                panic!(
                    "Expected Invalid with errors {:?}, got Valid: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::{NonEmptyVec, Validation};

    impl<T> Arbitrary for NonEmptyVec<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (any::<T>(), prop::collection::vec(any::<T>(), 0..8))
                .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
                .boxed()
        }
    }

    impl<E, A> Arbitrary for Validation<E, A>
    where
        E: Arbitrary + 'static,
        A: Arbitrary + 'static,
    {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                any::<A>().prop_map(Validation::valid),
                any::<NonEmptyVec<E>>().prop_map(Validation::invalid_all),
            ]
            .boxed()
        }
    }
}
