use crate::app_config::{AppConfig, Environment, OutputStyle};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("VARSEL_ENV", "development"))?;
    let log_level = or_default("VARSEL_LOG_LEVEL", "info");
    if log_level.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "VARSEL_LOG_LEVEL".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }
    let catalog_path = PathBuf::from(or_default("VARSEL_CATALOG_PATH", "./catalog/product.json"));
    let output = parse_output_style(&or_default("VARSEL_OUTPUT", "pretty"))?;

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        output,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VARSEL_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_output_style(s: &str) -> Result<OutputStyle, ConfigError> {
    match s {
        "pretty" => Ok(OutputStyle::Pretty),
        "compact" => Ok(OutputStyle::Compact),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VARSEL_OUTPUT".to_string(),
            reason: format!("expected 'pretty' or 'compact', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
