//! Raw and validated configuration records

use std::fmt;

use uuid::Uuid;

/// A configuration record as received: every field optional and untyped.
///
/// Absence is not a reason to skip validation; the rules decide what an
/// absent field means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Configuration {
    /// Identifier, expected to be a UUID.
    pub id: Option<String>,
    /// Service URL.
    pub url: Option<String>,
    /// Base64-encoded token.
    pub token: Option<String>,
}

impl Configuration {
    /// Set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// A configuration that passed every rule.
///
/// Only the record validator builds one, and its fields cannot be changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutputConfiguration {
    id: Uuid,
    url: String,
    token: Option<String>,
}

impl OutputConfiguration {
    pub(crate) fn new(id: Uuid, url: String, token: Option<String>) -> Self {
        Self { id, url, token }
    }

    /// The parsed identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The url exactly as supplied.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The decoded token, when one was supplied.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Display for OutputConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutputConfiguration(id={}, url={}, token=", self.id, self.url)?;
        match &self.token {
            Some(token) => write!(f, "Some({token}))"),
            None => write!(f, "None)"),
        }
    }
}
