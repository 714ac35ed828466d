//! # validated-config
//!
//! Validate a loosely-typed configuration record and get back either a
//! fully-typed record or *every* rule it violates, never just the first one.
//!
//! The crate is two layers:
//!
//! - an accumulating validation engine ([`Validation`], [`NonEmptyVec`],
//!   [`Semigroup`], the combinators in [`validation`] and the presence gate
//!   [`apply_on_present`]), generic over the error and value types;
//! - the [`configuration`] rules built on it: one validator per field, and
//!   [`validate_configuration`] combining them.
//!
//! ## Quick Example
//!
//! ```rust
//! use validated_config::{validate_configuration, Configuration, Validation};
//!
//! let input = Configuration::default()
//!     .with_id("c92a3de0-f898-4664-9625-9fb929058e1b")
//!     .with_url("https://subdomain.staticdomain.net/coucou")
//!     .with_token("SGVsbG8gdG8geW91ICE=");
//!
//! match validate_configuration(&input) {
//!     Validation::Valid(output) => {
//!         assert_eq!(output.token(), Some("Hello to you !"));
//!     }
//!     Validation::Invalid(errors) => {
//!         for error in &errors {
//!             eprintln!("{error}");
//!         }
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the records, errors and validations
//! - `tracing`: debug events from the record validator
//! - `proptest`: `Arbitrary` impls for [`Validation`] and [`NonEmptyVec`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod configuration;
pub mod guard;
pub mod nonempty;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use configuration::{
    validate_configuration, Configuration, ConfigurationError, ConfigurationRules,
    OutputConfiguration, SchemeMatch,
};
pub use guard::apply_on_present;
pub use nonempty::NonEmptyVec;
pub use semigroup::Semigroup;
pub use validation::{ValidateAll, Validation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::configuration::{
        validate_configuration, Configuration, ConfigurationError, ConfigurationRules,
        OutputConfiguration,
    };
    pub use crate::guard::apply_on_present;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::{combine2, combine3, fail, pure, ValidateAll, Validation};
}
