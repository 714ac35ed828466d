//! Configuration validation walkthrough
//!
//! Validates the two sample records and prints every accumulated error.
//! Run with `--features tracing` to also see the validator's debug events.

use validated_config::prelude::*;

fn report(label: &str, input: &Configuration) {
    println!("{label}");
    println!("  input: {input:?}");

    match validate_configuration(input) {
        Validation::Valid(output) => println!("  ✓ {output}"),
        Validation::Invalid(errors) => {
            println!("  ✗ {} errors:", errors.len());
            for (i, error) in errors.iter().enumerate() {
                println!("    {}. {}", i + 1, error);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== Configuration Validation ===\n");

    let invalid = Configuration::default()
        .with_url("coucou")
        .with_token("abcdefgh!_rasc");
    report("Broken record", &invalid);

    println!();

    let valid = Configuration::default()
        .with_id("c92a3de0-f898-4664-9625-9fb929058e1b")
        .with_url("https://subdomain.staticdomain.net/coucou")
        .with_token("SGVsbG8gdG8geW91ICE=");
    report("Valid record", &valid);

    println!();

    let strict =
        ConfigurationRules::default().with_scheme_match(validated_config::SchemeMatch::Prefix);
    let sneaky = Configuration::default()
        .with_id("c92a3de0-f898-4664-9625-9fb929058e1b")
        .with_url("ftp://staticdomain.net/?next=https://");
    println!("Scheme anywhere (default): {}", validate_configuration(&sneaky));
    println!("Scheme as prefix:          {}", strict.validate(&sneaky));
}

/* Expected output:

=== Configuration Validation ===

Broken record
  input: Configuration { id: None, url: Some("coucou"), token: Some("abcdefgh!_rasc") }
  ✗ 4 errors:
    1. 'id' is missing
    2. coucou is not an https URL
    3. coucou is not in restricted domain
    4. 'token' is not base64 encoded

Valid record
  input: Configuration { id: Some("c92a3de0-f898-4664-9625-9fb929058e1b"), url: Some("https://subdomain.staticdomain.net/coucou"), token: Some("SGVsbG8gdG8geW91ICE=") }
  ✓ OutputConfiguration(id=c92a3de0-f898-4664-9625-9fb929058e1b, url=https://subdomain.staticdomain.net/coucou, token=Some(Hello to you !))

Scheme anywhere (default): Valid(OutputConfiguration(id=c92a3de0-f898-4664-9625-9fb929058e1b, url=ftp://staticdomain.net/?next=https://, token=None))
Scheme as prefix:          Invalid([ftp://staticdomain.net/?next=https:// is not an https URL])

*/
