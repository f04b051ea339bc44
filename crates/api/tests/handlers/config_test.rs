use std::{collections::HashMap, time::Duration};

use agenda_api::config::ApiConfig;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::Level;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/agenda")]))
        .unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn test_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/agenda"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
    ]))
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.request_timeout, 5);
}

#[test]
fn test_missing_database_url() {
    assert!(ApiConfig::from_lookup(lookup(&[])).is_err());
}

#[test]
fn test_invalid_port() {
    let result = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/agenda"),
        ("API_PORT", "eighty"),
    ]));

    assert!(result.is_err());
}

#[rstest]
#[case("0")]
#[case("soon")]
#[case("-5")]
fn test_invalid_request_timeout(#[case] value: &str) {
    let result = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/agenda"),
        ("API_REQUEST_TIMEOUT_SECONDS", value),
    ]));

    assert!(result.is_err());
}
