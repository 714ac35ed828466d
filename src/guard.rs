//! Presence gate for optional fields
//!
//! A field can fail in two ways: it can be absent, or it can be present and
//! malformed. [`apply_on_present`] keeps those apart. An absent field reports
//! only the "missing" error, and the format check never sees it.

use crate::validation::{fail, Validation};

/// Run `check` on a present value, or fail with `missing` when it is absent.
///
/// ```
/// use validated_config::{apply_on_present, Validation};
///
/// fn positive(n: i32) -> Validation<&'static str, i32> {
///     if n > 0 { Validation::valid(n) } else { Validation::invalid("not positive") }
/// }
///
/// assert_eq!(apply_on_present(Some(3), positive, "missing"), Validation::valid(3));
/// assert_eq!(
///     apply_on_present(Some(-1), positive, "missing"),
///     Validation::invalid("not positive")
/// );
/// assert_eq!(apply_on_present(None, positive, "missing"), Validation::invalid("missing"));
/// ```
pub fn apply_on_present<T, E, R, F>(value: Option<T>, check: F, missing: E) -> Validation<E, R>
where
    F: FnOnce(T) -> Validation<E, R>,
{
    match value {
        Some(value) => check(value),
        None => fail(missing),
    }
}
