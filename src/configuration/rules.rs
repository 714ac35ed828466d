//! Field rules and the record validator
//!
//! Each field validator looks at one field in isolation. [`validate_configuration`]
//! runs all of them unconditionally and merges the outcomes, so a record with
//! several problems reports all of them, in field order: id, url scheme, url
//! domain, token.
//!
//! The free functions apply [`ConfigurationRules::STANDARD`]. Build a
//! different [`ConfigurationRules`] to check against another scheme or domain.
//!
//! ```
//! use validated_config::{validate_configuration, Configuration};
//!
//! let input = Configuration::default()
//!     .with_url("coucou")
//!     .with_token("abcdefgh!_rasc");
//!
//! assert_eq!(
//!     validate_configuration(&input).error_messages(),
//!     vec![
//!         "'id' is missing",
//!         "coucou is not an https URL",
//!         "coucou is not in restricted domain",
//!         "'token' is not base64 encoded",
//!     ]
//! );
//! ```

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine as _;
use uuid::Uuid;

use super::{Configuration, ConfigurationError, OutputConfiguration};
use crate::guard::apply_on_present;
use crate::validation::{combine2, combine3, fail, pure, Validation};

/// Validation outcome for one configuration rule.
pub type ConfigurationValidation<A> = Validation<ConfigurationError, A>;

// Standard alphabet; trailing `=` padding may be present or omitted, and
// leftover bits in the final symbol are ignored.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Where the required scheme must appear in a url.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SchemeMatch {
    /// Anywhere in the string, e.g. `ftp://host/?next=https://x` passes.
    #[default]
    Anywhere,
    /// At the very start of the string.
    Prefix,
}

/// The constants the field rules check against.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigurationRules {
    /// Scheme marker a url must contain, `https://` by default.
    pub required_scheme: Cow<'static, str>,
    /// Domain a url must contain, `staticdomain.net` by default.
    pub allowed_domain: Cow<'static, str>,
    /// How `required_scheme` is matched.
    pub scheme_match: SchemeMatch,
}

impl Default for ConfigurationRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl ConfigurationRules {
    /// `https://` anywhere in the url, and `staticdomain.net` anywhere in it.
    pub const STANDARD: ConfigurationRules = ConfigurationRules {
        required_scheme: Cow::Borrowed("https://"),
        allowed_domain: Cow::Borrowed("staticdomain.net"),
        scheme_match: SchemeMatch::Anywhere,
    };

    /// Replace the required scheme marker.
    pub fn with_required_scheme(mut self, scheme: impl Into<Cow<'static, str>>) -> Self {
        self.required_scheme = scheme.into();
        self
    }

    /// Replace the allowed domain.
    pub fn with_allowed_domain(mut self, domain: impl Into<Cow<'static, str>>) -> Self {
        self.allowed_domain = domain.into();
        self
    }

    /// Change how the scheme is matched.
    pub fn with_scheme_match(mut self, scheme_match: SchemeMatch) -> Self {
        self.scheme_match = scheme_match;
        self
    }

    /// Check that `url` carries the required scheme.
    pub fn https_url(&self, url: &str) -> ConfigurationValidation<()> {
        let scheme = &*self.required_scheme;
        let matched = match self.scheme_match {
            SchemeMatch::Anywhere => url.contains(scheme),
            SchemeMatch::Prefix => url.starts_with(scheme),
        };

        if matched {
            pure(())
        } else {
            fail(ConfigurationError::NotHttpsError {
                value: url.to_owned(),
            })
        }
    }

    /// Check that `url` mentions the allowed domain.
    pub fn check_domain(&self, url: &str) -> ConfigurationValidation<()> {
        if url.contains(&*self.allowed_domain) {
            pure(())
        } else {
            fail(ConfigurationError::InvalidDomainError {
                value: url.to_owned(),
            })
        }
    }

    /// Run the scheme and domain checks, both of them, and keep the url verbatim.
    pub fn validate_url(&self, url: &str) -> ConfigurationValidation<String> {
        combine2(self.https_url(url), self.check_domain(url), |(), ()| {
            url.to_owned()
        })
    }

    /// Validate a whole record against these rules.
    pub fn validate(&self, input: &Configuration) -> ConfigurationValidation<OutputConfiguration> {
        let id = apply_on_present(
            input.id.as_deref(),
            id_format,
            ConfigurationError::missing("id"),
        );
        let url = apply_on_present(
            input.url.as_deref(),
            |url| self.validate_url(url),
            ConfigurationError::missing("url"),
        );
        let token = validate_token(input.token.as_deref());

        let result = combine3(id, url, token, OutputConfiguration::new);

        #[cfg(feature = "tracing")]
        log_outcome(&result);

        result
    }
}

/// Parse `id` as a UUID.
///
/// Hyphenated, simple, braced and URN forms are accepted.
pub fn id_format(id: &str) -> ConfigurationValidation<Uuid> {
    match Uuid::parse_str(id) {
        Ok(uuid) => pure(uuid),
        Err(_) => fail(ConfigurationError::FormatIdError {
            value: id.to_owned(),
        }),
    }
}

/// [`ConfigurationRules::https_url`] under the standard rules.
pub fn https_url(url: &str) -> ConfigurationValidation<()> {
    ConfigurationRules::STANDARD.https_url(url)
}

/// [`ConfigurationRules::check_domain`] under the standard rules.
pub fn check_domain(url: &str) -> ConfigurationValidation<()> {
    ConfigurationRules::STANDARD.check_domain(url)
}

/// [`ConfigurationRules::validate_url`] under the standard rules.
pub fn validate_url(url: &str) -> ConfigurationValidation<String> {
    ConfigurationRules::STANDARD.validate_url(url)
}

/// Decode an optional base64 token.
///
/// An absent token is valid. Decoded bytes that are not UTF-8 are converted
/// lossily rather than rejected.
pub fn validate_token(token: Option<&str>) -> ConfigurationValidation<Option<String>> {
    let Some(token) = token else {
        return pure(None);
    };

    match TOKEN_ENGINE.decode(token) {
        Ok(bytes) => pure(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(error = %_err, "token rejected");
            fail(ConfigurationError::TokenNotBase64Error)
        }
    }
}

/// Validate a configuration record under the standard rules.
pub fn validate_configuration(
    input: &Configuration,
) -> ConfigurationValidation<OutputConfiguration> {
    ConfigurationRules::STANDARD.validate(input)
}

impl Configuration {
    /// Shorthand for [`validate_configuration`].
    pub fn validate(&self) -> ConfigurationValidation<OutputConfiguration> {
        validate_configuration(self)
    }
}

#[cfg(feature = "tracing")]
fn log_outcome(result: &ConfigurationValidation<OutputConfiguration>) {
    match result {
        Validation::Valid(output) => tracing::debug!(
            id = %output.id(),
            has_token = output.token().is_some(),
            "configuration accepted"
        ),
        Validation::Invalid(errors) => tracing::debug!(
            error_count = errors.len(),
            "configuration rejected"
        ),
    }
}
