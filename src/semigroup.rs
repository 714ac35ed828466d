//! Associative combination of error collections
//!
//! A Semigroup is a type with an associative binary operation. Validation
//! relies on it to merge the errors of independent checks: whichever way the
//! merges are grouped, the resulting sequence is the same.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use validated_config::{NonEmptyVec, Semigroup};
//!
//! let left = NonEmptyVec::new("missing id", vec!["bad url"]);
//! let right = NonEmptyVec::singleton("bad token");
//! assert_eq!(
//!     left.combine(right).into_vec(),
//!     vec!["missing id", "bad url", "bad token"]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both operands by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another, `self` first.
    fn combine(self, other: Self) -> Self;
}
