//! End-to-end scenarios for the configuration validator

use uuid::Uuid;
use validated_config::prelude::*;
use validated_config::{assert_errors, assert_invalid, assert_valid};

const SAMPLE_ID: &str = "c92a3de0-f898-4664-9625-9fb929058e1b";
const SAMPLE_URL: &str = "https://subdomain.staticdomain.net/coucou";
const SAMPLE_TOKEN: &str = "SGVsbG8gdG8geW91ICE=";

fn sample() -> Configuration {
    Configuration::default()
        .with_id(SAMPLE_ID)
        .with_url(SAMPLE_URL)
        .with_token(SAMPLE_TOKEN)
}

// Field order (id, url, token), not the token-first order of the old sample
// output; see decision 2 in DESIGN.md.
#[test]
fn sample_invalid_record_reports_four_errors() {
    let input = Configuration::default()
        .with_url("coucou")
        .with_token("abcdefgh!_rasc");

    let result = validate_configuration(&input);

    assert_eq!(
        result.error_messages(),
        vec![
            "'id' is missing",
            "coucou is not an https URL",
            "coucou is not in restricted domain",
            "'token' is not base64 encoded",
        ]
    );
}

#[test]
fn sample_valid_record_is_fully_typed() {
    let output = assert_valid!(validate_configuration(&sample()));

    assert_eq!(output.id(), Uuid::parse_str(SAMPLE_ID).unwrap());
    assert_eq!(output.url(), SAMPLE_URL);
    assert_eq!(output.token(), Some("Hello to you !"));
}

#[test]
fn sample_valid_record_renders_like_a_record() {
    let result = validate_configuration(&sample());
    assert_eq!(
        result.to_string(),
        "Valid(OutputConfiguration(id=c92a3de0-f898-4664-9625-9fb929058e1b, \
         url=https://subdomain.staticdomain.net/coucou, token=Some(Hello to you !)))"
    );
}

#[test]
fn absent_token_is_never_an_error() {
    let input = Configuration {
        token: None,
        ..sample()
    };
    let output = assert_valid!(validate_configuration(&input));
    assert_eq!(output.token(), None);
}

#[test]
fn everything_missing_or_broken() {
    let input = Configuration::default().with_token("abcdefgh!_rasc");

    assert_errors!(
        validate_configuration(&input),
        [
            ConfigurationError::missing("id"),
            ConfigurationError::missing("url"),
            ConfigurationError::TokenNotBase64Error,
        ]
    );
}

#[test]
fn url_failing_both_checks_reports_both() {
    let input = Configuration {
        url: Some("http://elsewhere.org".into()),
        ..sample()
    };

    assert_errors!(
        validate_configuration(&input),
        [
            ConfigurationError::NotHttpsError {
                value: "http://elsewhere.org".into()
            },
            ConfigurationError::InvalidDomainError {
                value: "http://elsewhere.org".into()
            },
        ]
    );
}

#[test]
fn malformed_id_is_reported_verbatim() {
    let input = Configuration {
        id: Some(" C92A3DE0 ".into()),
        ..sample()
    };

    let errors = assert_invalid!(validate_configuration(&input));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.head().to_string(), " C92A3DE0  is not a UUID format");
}

#[test]
fn empty_strings_are_present_not_missing() {
    let input = Configuration::default().with_id("").with_url("").with_token("");

    let errors = assert_invalid!(validate_configuration(&input));
    let fields: Vec<_> = errors.iter().map(ConfigurationError::field).collect();
    assert_eq!(fields, vec!["id", "url", "url"]);
    assert!(!errors
        .iter()
        .any(|e| matches!(e, ConfigurationError::MissingProperty { .. })));
}

#[test]
fn scheme_anywhere_is_accepted_by_default() {
    let input = Configuration {
        url: Some("ftp://staticdomain.net/?redirect=https://".into()),
        ..sample()
    };
    assert_valid!(validate_configuration(&input));
}

#[test]
fn prefix_rules_reject_mid_string_scheme() {
    let rules =
        ConfigurationRules::default().with_scheme_match(validated_config::SchemeMatch::Prefix);
    let input = Configuration {
        url: Some("ftp://staticdomain.net/?redirect=https://".into()),
        ..sample()
    };

    let errors = assert_invalid!(rules.validate(&input));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.head().field(), "url");
}

#[test]
fn rendering_is_repeatable() {
    let result = validate_configuration(&Configuration::default().with_url("coucou"));

    assert_eq!(result.error_messages(), result.error_messages());
    assert_eq!(result.to_string(), result.to_string());
    assert_eq!(
        result.to_string(),
        "Invalid(['id' is missing, coucou is not an https URL, coucou is not in restricted domain])"
    );
}

#[test]
fn input_record_is_untouched() {
    let input = sample();
    let before = input.clone();
    let _ = validate_configuration(&input);
    let _ = validate_configuration(&input);
    assert_eq!(input, before);
}

#[test]
fn into_result_keeps_every_error() {
    let err = validate_configuration(&Configuration::default())
        .into_result()
        .unwrap_err();
    assert_eq!(
        err.into_vec(),
        vec![
            ConfigurationError::missing("id"),
            ConfigurationError::missing("url"),
        ]
    );
}
