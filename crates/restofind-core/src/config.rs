use crate::app_config::{AppConfig, Environment, HomeLocation};
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
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_opt_f64 = |var: &str| -> Result<Option<f64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|e| invalid(var, e.to_string())),
            _ => Ok(None),
        }
    };

    let env = parse_environment(&or_default("RESTOFIND_ENV", "development"))?;

    let api_base_url = or_default("RESTOFIND_API_BASE_URL", "http://localhost:5000");
    let api_base_url = api_base_url.trim().trim_end_matches('/').to_string();
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(invalid(
            "RESTOFIND_API_BASE_URL",
            format!("expected an http(s) URL, got \"{api_base_url}\""),
        ));
    }

    let log_level = or_default("RESTOFIND_LOG_LEVEL", "warn");
    let request_timeout_secs = parse_u64("RESTOFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("RESTOFIND_USER_AGENT", "restofind/0.1 (restaurant-finder)");

    let default_radius_km = or_default("RESTOFIND_DEFAULT_RADIUS_KM", "100")
        .parse::<f64>()
        .map_err(|e| invalid("RESTOFIND_DEFAULT_RADIUS_KM", e.to_string()))?;
    if !default_radius_km.is_finite() || default_radius_km <= 0.0 {
        return Err(invalid(
            "RESTOFIND_DEFAULT_RADIUS_KM",
            "must be a positive number".to_string(),
        ));
    }

    let term_width = parse_usize("RESTOFIND_TERM_WIDTH", "80")?;

    let home_location = match (
        parse_opt_f64("RESTOFIND_HOME_LAT")?,
        parse_opt_f64("RESTOFIND_HOME_LNG")?,
    ) {
        (Some(latitude), Some(longitude)) => Some(HomeLocation {
            latitude,
            longitude,
        }),
        (None, None) => None,
        (Some(_), None) => {
            return Err(ConfigError::MissingEnvVar("RESTOFIND_HOME_LNG".to_string()))
        }
        (None, Some(_)) => {
            return Err(ConfigError::MissingEnvVar("RESTOFIND_HOME_LAT".to_string()))
        }
    };

    Ok(AppConfig {
        env,
        api_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        default_radius_km,
        term_width,
        home_location,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RESTOFIND_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
