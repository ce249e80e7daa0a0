use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "RESTOFIND_ENV"));
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.api_base_url, "http://localhost:5000");
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "restofind/0.1 (restaurant-finder)");
    assert!((cfg.default_radius_km - 100.0).abs() < f64::EPSILON);
    assert_eq!(cfg.term_width, 80);
    assert!(cfg.home_location.is_none());
}

#[test]
fn build_app_config_strips_trailing_slash_from_base_url() {
    let mut map = HashMap::new();
    map.insert(
        "RESTOFIND_API_BASE_URL",
        "https://restaurant-finder123.onrender.com/",
    );
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "https://restaurant-finder123.onrender.com");
}

#[test]
fn build_app_config_rejects_non_http_base_url() {
    let mut map = HashMap::new();
    map.insert("RESTOFIND_API_BASE_URL", "localhost:5000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RESTOFIND_API_BASE_URL"),
        "expected InvalidEnvVar(RESTOFIND_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("RESTOFIND_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("RESTOFIND_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RESTOFIND_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(RESTOFIND_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_positive_radius() {
    let mut map = HashMap::new();
    map.insert("RESTOFIND_DEFAULT_RADIUS_KM", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RESTOFIND_DEFAULT_RADIUS_KM"),
        "expected InvalidEnvVar(RESTOFIND_DEFAULT_RADIUS_KM), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_home_location() {
    let mut map = HashMap::new();
    map.insert("RESTOFIND_HOME_LAT", "12.9716");
    map.insert("RESTOFIND_HOME_LNG", "77.5946");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let home = cfg.home_location.expect("home location should be set");
    assert!((home.latitude - 12.9716).abs() < 1e-9);
    assert!((home.longitude - 77.5946).abs() < 1e-9);
}

#[test]
fn build_app_config_requires_both_home_coordinates() {
    let mut map = HashMap::new();
    map.insert("RESTOFIND_HOME_LAT", "12.9716");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "RESTOFIND_HOME_LNG"),
        "expected MissingEnvVar(RESTOFIND_HOME_LNG), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unparseable_home_latitude() {
    let mut map = HashMap::new();
    map.insert("RESTOFIND_HOME_LAT", "north");
    map.insert("RESTOFIND_HOME_LNG", "77.5946");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RESTOFIND_HOME_LAT"),
        "expected InvalidEnvVar(RESTOFIND_HOME_LAT), got: {result:?}"
    );
}
