use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::error::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, so it suits
/// testing or callers that manage env setup themselves.
///
/// # Errors
///
/// Returns `ConfigError` if any env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup instead of `set_var`/`remove_var`.
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let ml_base_url = lookup("ATTRSIM_ML_BASE_URL").ok();
    let ml_timeout_secs = parse_u64("ATTRSIM_ML_TIMEOUT_SECS", "30")?;
    let log_level = or_default("ATTRSIM_LOG_LEVEL", "info");
    let weights_path = lookup("ATTRSIM_WEIGHTS_PATH").ok().map(PathBuf::from);
    let dataset_size = parse_usize("ATTRSIM_DATASET_SIZE", "500")?;

    Ok(AppConfig {
        ml_base_url,
        ml_timeout_secs,
        log_level,
        weights_path,
        dataset_size,
    })
}
