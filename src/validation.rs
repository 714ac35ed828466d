//! Validation type for accumulating errors
//!
//! `Validation<E, A>` is shaped like `Result`, but combining two of them keeps
//! the errors of *both* sides instead of stopping at the first failure. Each
//! independent check runs, and the caller receives every violated rule in a
//! single pass.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use validated_config::Validation;
//!
//! let ok = Validation::<&str, _>::valid(42);
//! let ko = Validation::<_, i32>::invalid("error");
//!
//! assert!(ok.is_valid());
//! assert!(ko.is_invalid());
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use validated_config::{NonEmptyVec, Validation};
//!
//! let v1 = Validation::<_, i32>::invalid("error1");
//! let v2 = Validation::<_, i32>::invalid("error2");
//!
//! assert_eq!(
//!     v1.and(v2),
//!     Validation::Invalid(NonEmptyVec::new("error1", vec!["error2"]))
//! );
//! ```
//!
//! ## Validating tuples
//!
//! ```
//! use validated_config::{validation::ValidateAll, Validation};
//!
//! let result = (
//!     Validation::<&str, _>::valid(1),
//!     Validation::<&str, _>::valid("two"),
//!     Validation::<&str, _>::valid(3.0),
//! )
//!     .validate_all();
//!
//! assert_eq!(result, Validation::Valid((1, "two", 3.0)));
//! ```

use std::fmt;

use crate::{NonEmptyVec, Semigroup};

/// The outcome of validating one value: the value, or every reason it was rejected.
///
/// # Type Parameters
///
/// * `E` - a single error; failures carry a [`NonEmptyVec<E>`]
/// * `A` - the validated value
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, A> {
    /// Every check passed.
    Valid(A),
    /// At least one check failed. Errors appear in the order they were produced.
    Invalid(NonEmptyVec<E>),
}

/// Lift a value into a successful validation.
#[inline]
pub fn pure<E, A>(value: A) -> Validation<E, A> {
    Validation::Valid(value)
}

/// Build a failed validation carrying exactly one error.
#[inline]
pub fn fail<E, A>(error: E) -> Validation<E, A> {
    Validation::invalid(error)
}

/// Combine two independent validations with `f`, accumulating errors.
///
/// Equivalent to [`Validation::zip_with`].
pub fn combine2<E, A, B, C, F>(
    va: Validation<E, A>,
    vb: Validation<E, B>,
    f: F,
) -> Validation<E, C>
where
    F: FnOnce(A, B) -> C,
{
    va.zip_with(vb, f)
}

/// Combine three independent validations with `f`, accumulating errors
/// left to right.
///
/// ```
/// use validated_config::validation::{combine3, fail, pure, Validation};
///
/// let result: Validation<&str, i32> = combine3(
///     fail("first"),
///     pure(2),
///     fail("third"),
///     |a: i32, b, c: i32| a + b + c,
/// );
/// assert_eq!(result.errors().map(|e| e.len()), Some(2));
/// ```
pub fn combine3<E, A, B, C, D, F>(
    va: Validation<E, A>,
    vb: Validation<E, B>,
    vc: Validation<E, C>,
    f: F,
) -> Validation<E, D>
where
    F: FnOnce(A, B, C) -> D,
{
    (va, vb, vc).validate_all().map(|(a, b, c)| f(a, b, c))
}

impl<E, A> Validation<E, A> {
    /// Create a successful validation.
    #[inline]
    pub fn valid(value: A) -> Self {
        Validation::Valid(value)
    }

    /// Create a failed validation from a single error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Validation::Invalid(NonEmptyVec::singleton(error))
    }

    /// Create a failed validation from an existing set of errors.
    #[inline]
    pub fn invalid_all(errors: NonEmptyVec<E>) -> Self {
        Validation::Invalid(errors)
    }

    /// Create a validation from a `Result`.
    ///
    /// ```
    /// use validated_config::Validation;
    ///
    /// let v = Validation::from_result("7".parse::<u8>());
    /// assert_eq!(v, Validation::Valid(7));
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Validation::Valid(value),
            Err(error) => Validation::invalid(error),
        }
    }

    /// Convert into a `Result`, keeping every error.
    #[inline]
    pub fn into_result(self) -> Result<A, NonEmptyVec<E>> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(errors) => Err(errors),
        }
    }

    /// `true` for `Valid`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// `true` for `Invalid`.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validation::Invalid(_))
    }

    /// The validated value, if any.
    pub fn value(&self) -> Option<&A> {
        match self {
            Validation::Valid(value) => Some(value),
            Validation::Invalid(_) => None,
        }
    }

    /// The accumulated errors, if any.
    pub fn errors(&self) -> Option<&NonEmptyVec<E>> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }

    /// Transform the validated value.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(f(value)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Transform each accumulated error.
    ///
    /// ```
    /// use validated_config::Validation;
    ///
    /// let v = Validation::<_, ()>::invalid(404).map_errors(|code| format!("status {code}"));
    /// assert_eq!(v.error_messages(), vec!["status 404"]);
    /// ```
    pub fn map_errors<E2, F>(self, f: F) -> Validation<E2, A>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(value),
            Validation::Invalid(errors) => Validation::Invalid(errors.map(f)),
        }
    }

    /// Pair this validation with another, accumulating errors from both.
    ///
    /// If exactly one side failed its errors are returned unchanged; if both
    /// failed, `self`'s errors come first.
    pub fn and<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e1), Validation::Invalid(e2)) => {
                Validation::Invalid(e1.combine(e2))
            }
            (Validation::Invalid(e), _) | (_, Validation::Invalid(e)) => Validation::Invalid(e),
        }
    }

    /// Combine with another validation through `f`, accumulating errors.
    ///
    /// ```
    /// use validated_config::Validation;
    ///
    /// let width = Validation::<&str, u32>::valid(3);
    /// let height = Validation::<&str, u32>::valid(4);
    /// assert_eq!(width.zip_with(height, |w, h| w * h), Validation::Valid(12));
    /// ```
    #[inline]
    pub fn zip_with<B, C, F>(self, other: Validation<E, B>, f: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.and(other).map(|(a, b)| f(a, b))
    }

    /// Chain a validation that depends on this one's value.
    ///
    /// `f` runs only on success, so errors it could produce are not
    /// accumulated with earlier ones. Use [`Validation::and`] for
    /// independent checks.
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Validation::Valid(value) => f(value),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Combine every validation in a `Vec`, keeping all errors in input order.
    ///
    /// An empty input is `Valid(vec![])`.
    ///
    /// ```
    /// use validated_config::Validation;
    ///
    /// let checks = vec![
    ///     Validation::valid(1),
    ///     Validation::invalid("odd one out"),
    ///     Validation::valid(3),
    /// ];
    /// assert!(Validation::all_vec(checks).is_invalid());
    /// ```
    pub fn all_vec(validations: Vec<Validation<E, A>>) -> Validation<E, Vec<A>> {
        let mut values = Vec::with_capacity(validations.len());
        let mut errors: Option<NonEmptyVec<E>> = None;

        for validation in validations {
            match validation {
                Validation::Valid(value) => values.push(value),
                Validation::Invalid(e) => {
                    errors = Some(match errors {
                        Some(acc) => acc.combine(e),
                        None => e,
                    });
                }
            }
        }

        match errors {
            Some(errors) => Validation::Invalid(errors),
            None => Validation::Valid(values),
        }
    }
}

// Hosted on `()` so `Validation::all(..)` needs no annotation for the value type.
impl<E> Validation<E, ()> {
    /// Combine all validations in a tuple.
    ///
    /// Delegates to [`ValidateAll`]; works for tuples of 1 to 8 validations
    /// sharing one error type.
    ///
    /// ```
    /// use validated_config::Validation;
    ///
    /// let v = Validation::all((
    ///     Validation::<&str, _>::valid(1),
    ///     Validation::<_, u8>::invalid("no"),
    /// ));
    /// assert_eq!(v.error_messages(), vec!["no"]);
    /// ```
    pub fn all<V>(validations: V) -> Validation<E, V::Output>
    where
        V: ValidateAll<E>,
    {
        validations.validate_all()
    }
}

impl<E: fmt::Display, A> Validation<E, A> {
    /// Render each error with its `Display` impl, in order.
    ///
    /// Empty for `Valid`.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors()
            .map(|errors| errors.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Validation<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Valid(value) => write!(f, "Valid({value})"),
            Validation::Invalid(errors) => {
                write!(f, "Invalid([")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{error}")?;
                }
                write!(f, "])")
            }
        }
    }
}

/// Combine a tuple of validations that share an error type.
///
/// Elements are paired left to right with [`Validation::and`], so errors keep
/// the order of the tuple regardless of which elements failed.
pub trait ValidateAll<E> {
    /// The tuple of values produced when every element is valid.
    type Output;

    /// Combine all elements, accumulating errors.
    fn validate_all(self) -> Validation<E, Self::Output>;
}

// Folds `.and(next)` over the remaining idents, flattening the nested pair
// back into a flat tuple after every step.
macro_rules! and_flatten {
    ($acc:expr; [$($done:ident),*];) => {
        $acc
    };
    ($acc:expr; [$($done:ident),*]; $next:ident $(, $rest:ident)*) => {
        and_flatten!(
            $acc.and($next).map(|(($($done,)*), $next)| ($($done,)* $next,));
            [$($done,)* $next];
            $($rest),*
        )
    };
}

macro_rules! impl_validate_all {
    ($first:ident $(, $rest:ident)*) => {
        impl<E, $first $(, $rest)*> ValidateAll<E>
            for (Validation<E, $first>, $(Validation<E, $rest>,)*)
        {
            type Output = ($first, $($rest,)*);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validation<E, Self::Output> {
                let ($first, $($rest,)*) = self;
                and_flatten!($first.map(|$first| ($first,)); [$first]; $($rest),*)
            }
        }
    };
}

impl_validate_all!(T1);
impl_validate_all!(T1, T2);
impl_validate_all!(T1, T2, T3);
impl_validate_all!(T1, T2, T3, T4);
impl_validate_all!(T1, T2, T3, T4, T5);
impl_validate_all!(T1, T2, T3, T4, T5, T6);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7);
impl_validate_all!(T1, T2, T3, T4, T5, T6, T7, T8);

#[cfg(test)]
mod tests {
    use super::*;

    fn errs<E>(head: E, tail: Vec<E>) -> NonEmptyVec<E> {
        NonEmptyVec::new(head, tail)
    }

    #[test]
    fn test_pure_and_fail() {
        let ok: Validation<&str, i32> = pure(1);
        let ko: Validation<&str, i32> = fail("boom");

        assert_eq!(ok, Validation::Valid(1));
        assert_eq!(ko, Validation::Invalid(NonEmptyVec::singleton("boom")));
    }

    #[test]
    fn test_from_result() {
        assert_eq!(Validation::from_result(Ok::<_, &str>(3)), Validation::Valid(3));
        assert_eq!(
            Validation::from_result(Err::<i32, _>("bad")),
            Validation::invalid("bad")
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Validation::<&str, _>::valid(3).into_result(), Ok(3));
        assert_eq!(
            Validation::<_, i32>::invalid("bad").into_result(),
            Err(NonEmptyVec::singleton("bad"))
        );
    }

    #[test]
    fn test_accessors() {
        let ok = Validation::<&str, _>::valid(5);
        assert_eq!(ok.value(), Some(&5));
        assert!(ok.errors().is_none());

        let ko = Validation::<_, i32>::invalid("e");
        assert!(ko.value().is_none());
        assert_eq!(ko.errors().map(NonEmptyVec::len), Some(1));
    }

    #[test]
    fn test_map_only_touches_success() {
        assert_eq!(Validation::<&str, _>::valid(5).map(|x| x * 2), Validation::Valid(10));
        assert_eq!(
            Validation::<_, i32>::invalid("e").map(|x| x * 2),
            Validation::invalid("e")
        );
    }

    #[test]
    fn test_map_errors_keeps_order() {
        let v = Validation::<_, ()>::invalid_all(errs(1, vec![2, 3])).map_errors(|e| e * 10);
        assert_eq!(v, Validation::Invalid(errs(10, vec![20, 30])));
    }

    #[test]
    fn test_and_both_valid() {
        let v = Validation::<&str, _>::valid(1).and(Validation::valid("a"));
        assert_eq!(v, Validation::Valid((1, "a")));
    }

    #[test]
    fn test_and_both_invalid_concatenates_in_argument_order() {
        let v1 = Validation::<_, i32>::invalid_all(errs("a", vec!["b"]));
        let v2 = Validation::<_, i32>::invalid("c");
        assert_eq!(v1.and(v2), Validation::Invalid(errs("a", vec!["b", "c"])));
    }

    #[test]
    fn test_and_single_side_invalid() {
        let left = Validation::<_, i32>::invalid("left").and(Validation::valid(2));
        assert_eq!(left, Validation::invalid("left"));

        let right = Validation::valid(1).and(Validation::<_, i32>::invalid("right"));
        assert_eq!(right, Validation::invalid("right"));
    }

    #[test]
    fn test_combine2_applies_constructor() {
        let v = combine2(pure::<&str, _>(2), pure(3), |a, b| a * b);
        assert_eq!(v, Validation::Valid(6));
    }

    #[test]
    fn test_combine2_accumulates() {
        let v: Validation<&str, ()> = combine2(fail::<_, ()>("x"), fail::<_, ()>("y"), |_, _| ());
        assert_eq!(v.error_messages(), vec!["x", "y"]);
    }

    #[test]
    fn test_combine3_partial_failure() {
        let v = combine3(
            fail::<_, i32>("first"),
            pure(2),
            fail::<_, i32>("third"),
            |a, b: i32, c| a + b + c,
        );
        assert_eq!(v, Validation::Invalid(errs("first", vec!["third"])));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let mut called = false;
        let v = Validation::<_, i32>::invalid("e").and_then(|x| {
            called = true;
            Validation::valid(x)
        });
        assert!(!called);
        assert_eq!(v, Validation::invalid("e"));

        let v = Validation::<&str, _>::valid(2).and_then(|x| Validation::valid(x + 1));
        assert_eq!(v, Validation::Valid(3));
    }

    #[test]
    fn test_validate_all_single() {
        let v = (Validation::<&str, _>::valid(1),).validate_all();
        assert_eq!(v, Validation::Valid((1,)));
    }

    #[test]
    fn test_validate_all_mixed_types() {
        let v = (
            Validation::<&str, _>::valid(1),
            Validation::valid("two"),
            Validation::valid(3u8),
            Validation::valid('4'),
        )
            .validate_all();
        assert_eq!(v, Validation::Valid((1, "two", 3u8, '4')));
    }

    #[test]
    fn test_validate_all_keeps_tuple_order() {
        let v = (
            Validation::<_, i32>::invalid("e1"),
            Validation::valid(2),
            Validation::<_, i32>::invalid_all(errs("e3a", vec!["e3b"])),
            Validation::valid(4),
            Validation::<_, i32>::invalid("e5"),
        )
            .validate_all();
        assert_eq!(v.error_messages(), vec!["e1", "e3a", "e3b", "e5"]);
    }

    #[test]
    fn test_validate_all_eight() {
        let v = Validation::all((
            pure::<&str, _>(1),
            pure(2),
            pure(3),
            pure(4),
            pure(5),
            pure(6),
            pure(7),
            pure(8),
        ));
        assert_eq!(v, Validation::Valid((1, 2, 3, 4, 5, 6, 7, 8)));
    }

    #[test]
    fn test_all_vec_empty() {
        let v = Validation::<&str, i32>::all_vec(vec![]);
        assert_eq!(v, Validation::Valid(vec![]));
    }

    #[test]
    fn test_all_vec_collects_values() {
        let v = Validation::<&str, _>::all_vec(vec![pure(1), pure(2), pure(3)]);
        assert_eq!(v, Validation::Valid(vec![1, 2, 3]));
    }

    #[test]
    fn test_all_vec_collects_every_error() {
        let v = Validation::all_vec(vec![
            fail("a"),
            pure(1),
            fail("b"),
            fail("a"),
        ]);
        assert_eq!(v, Validation::Invalid(errs("a", vec!["b", "a"])));
    }

    #[test]
    fn test_display() {
        let ok = Validation::<&str, _>::valid(42);
        assert_eq!(ok.to_string(), "Valid(42)");

        let ko = Validation::<_, i32>::invalid_all(errs("first", vec!["second"]));
        assert_eq!(ko.to_string(), "Invalid([first, second])");
    }

    #[test]
    fn test_error_messages_empty_on_success() {
        assert!(Validation::<&str, _>::valid(1).error_messages().is_empty());
    }
}
