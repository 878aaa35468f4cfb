use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_DATA_SOURCE: &str = "assets/tournaments_with_coords.json";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "tourneymap/0.1 (chess-tournament-map)";

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
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(raw)
    };

    let env = parse_environment(&or_default("TOURNEYMAP_ENV", "development"))?;
    let data_source = non_empty("TOURNEYMAP_DATA_SOURCE", DEFAULT_DATA_SOURCE)?;
    let geocoder_url = non_empty("TOURNEYMAP_GEOCODER_URL", DEFAULT_GEOCODER_URL)?;
    let geocoder_country_codes = non_empty("TOURNEYMAP_GEOCODER_COUNTRY_CODES", "us")?;
    let request_timeout_secs = parse_u64("TOURNEYMAP_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TOURNEYMAP_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = non_empty("TOURNEYMAP_USER_AGENT", DEFAULT_USER_AGENT)?;
    let log_level = or_default("TOURNEYMAP_LOG_LEVEL", "info");

    Ok(AppConfig {
        env,
        data_source,
        geocoder_url,
        geocoder_country_codes,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TOURNEYMAP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
