use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_RAPIDAPI_HOST: &str = "travel-advisor.p.rapidapi.com";

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
/// Unlike [`load_app_config`], this does NOT load `.env` files. Used by tests
/// and by callers that manage env setup themselves.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default: a missing API key is not an error, it just
/// routes the travel and summary services onto their fallback paths.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values count as unset so `RAPIDAPI_KEY=` in a `.env` file behaves
    // like a missing key.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("TRIPWISE_ENV", "development"))?;
    let bind_addr = parse_addr("TRIPWISE_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("TRIPWISE_LOG_LEVEL", "info");

    let use_real_api = parse_flag(&or_default("USE_REAL_API", "false"));
    let rapidapi_key = optional("RAPIDAPI_KEY");
    let rapidapi_host = optional("RAPIDAPI_HOST").unwrap_or_else(|| DEFAULT_RAPIDAPI_HOST.into());
    let rapidapi_base_url =
        optional("RAPIDAPI_BASE_URL").unwrap_or_else(|| format!("https://{rapidapi_host}"));
    let travel_request_timeout_secs = parse_u64("TRIPWISE_TRAVEL_TIMEOUT_SECS", "8")?;

    let openai_api_key = optional("OPENAI_API_KEY");
    let openai_base_url = or_default("OPENAI_BASE_URL", "https://api.openai.com/v1");
    let openai_model = or_default("OPENAI_MODEL", "gpt-4o-mini");
    let summary_request_timeout_secs = parse_u64("TRIPWISE_SUMMARY_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        use_real_api,
        rapidapi_key,
        rapidapi_host,
        rapidapi_base_url,
        travel_request_timeout_secs,
        openai_api_key,
        openai_base_url,
        openai_model,
        summary_request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRIPWISE_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

/// Only the literal `true` (any case) enables a flag.
fn parse_flag(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("true")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
