//! Configuration records and the rules they are validated against
//!
//! A raw [`Configuration`] goes in; either an [`OutputConfiguration`] or every
//! [`ConfigurationError`] it violates comes out.

mod error;
mod model;
mod rules;

pub use error::ConfigurationError;
pub use model::{Configuration, OutputConfiguration};
pub use rules::{
    check_domain, https_url, id_format, validate_configuration, validate_token, validate_url,
    ConfigurationRules, ConfigurationValidation, SchemeMatch,
};
