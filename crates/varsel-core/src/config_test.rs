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
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
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
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "VARSEL_ENV"));
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.catalog_path,
        std::path::PathBuf::from("./catalog/product.json")
    );
    assert_eq!(cfg.output, OutputStyle::Pretty);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("VARSEL_ENV", "production");
    map.insert("VARSEL_LOG_LEVEL", "debug");
    map.insert("VARSEL_CATALOG_PATH", "/srv/catalog/tee.yaml");
    map.insert("VARSEL_OUTPUT", "compact");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.catalog_path,
        std::path::PathBuf::from("/srv/catalog/tee.yaml")
    );
    assert_eq!(cfg.output, OutputStyle::Compact);
}

#[test]
fn build_app_config_fails_with_invalid_env() {
    let mut map = HashMap::new();
    map.insert("VARSEL_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VARSEL_ENV"),
        "expected InvalidEnvVar(VARSEL_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_output() {
    let mut map = HashMap::new();
    map.insert("VARSEL_OUTPUT", "yaml");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VARSEL_OUTPUT"),
        "expected InvalidEnvVar(VARSEL_OUTPUT), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_blank_log_level() {
    let mut map = HashMap::new();
    map.insert("VARSEL_LOG_LEVEL", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VARSEL_LOG_LEVEL"),
        "expected InvalidEnvVar(VARSEL_LOG_LEVEL), got: {result:?}"
    );
}

#[test]
fn environment_display_matches_env_values() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Production.to_string(), "production");
}
