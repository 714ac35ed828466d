//! Violations a configuration record can report

use thiserror::Error;

/// One violated configuration rule.
///
/// Each variant carries only what its message needs: the property name for a
/// missing field, the offending value verbatim for a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ConfigurationError {
    /// A required property was absent.
    #[error("'{property}' is missing")]
    MissingProperty {
        /// Name of the absent property.
        property: String,
    },

    /// The id did not parse as a UUID.
    #[error("{value} is not a UUID format")]
    FormatIdError {
        /// The id as supplied.
        value: String,
    },

    /// The url does not use the required scheme.
    #[error("{value} is not an https URL")]
    NotHttpsError {
        /// The url as supplied.
        value: String,
    },

    /// The url is outside the allowed domain.
    #[error("{value} is not in restricted domain")]
    InvalidDomainError {
        /// The url as supplied.
        value: String,
    },

    /// The token is present but is not valid base64.
    #[error("'token' is not base64 encoded")]
    TokenNotBase64Error,
}

impl ConfigurationError {
    /// A [`ConfigurationError::MissingProperty`] for `property`.
    pub fn missing(property: impl Into<String>) -> Self {
        Self::MissingProperty {
            property: property.into(),
        }
    }

    /// Name of the record field this error concerns.
    ///
    /// ```
    /// use validated_config::ConfigurationError;
    ///
    /// assert_eq!(ConfigurationError::missing("url").field(), "url");
    /// assert_eq!(ConfigurationError::TokenNotBase64Error.field(), "token");
    /// ```
    pub fn field(&self) -> &str {
        match self {
            Self::MissingProperty { property } => property,
            Self::FormatIdError { .. } => "id",
            Self::NotHttpsError { .. } | Self::InvalidDomainError { .. } => "url",
            Self::TokenNotBase64Error => "token",
        }
    }
}
