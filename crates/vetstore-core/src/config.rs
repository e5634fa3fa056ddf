use crate::app_config::{
    StoreConfig, DEFAULT_API_VERSION, DEFAULT_DISCOUNT_METAOBJECT_ID,
    DEFAULT_DISCOUNT_METAOBJECT_TYPE,
};
use crate::ConfigError;

/// Load store configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_store_config() -> Result<StoreConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_store_config_from_env()
}

/// Load store configuration from environment variables already in the process.
///
/// Unlike [`load_store_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_store_config_from_env() -> Result<StoreConfig, ConfigError> {
    build_store_config(|key| std::env::var(key))
}

/// Build store configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_store_config<F>(lookup: F) -> Result<StoreConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let non_blank = |var: &str, value: String| -> Result<String, ConfigError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "value is empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let require = |var: &str| -> Result<String, ConfigError> {
        let value = lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))?;
        non_blank(var, value)
    };

    let or_default = |var: &str, default: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) => non_blank(var, value),
            Err(_) => Ok(default.to_string()),
        }
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default)?;
        let value = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let store_domain = require("SHOPIFY_STORE_DOMAIN")?;
    let access_token = require("SHOPIFY_STOREFRONT_ACCESS_TOKEN")?;

    let api_version = or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION)?;
    let discount_metaobject_id = or_default(
        "VETSTORE_DISCOUNT_METAOBJECT_ID",
        DEFAULT_DISCOUNT_METAOBJECT_ID,
    )?;
    let discount_metaobject_type = or_default(
        "VETSTORE_DISCOUNT_METAOBJECT_TYPE",
        DEFAULT_DISCOUNT_METAOBJECT_TYPE,
    )?;
    let request_timeout_secs = parse_positive_u64("VETSTORE_REQUEST_TIMEOUT_SECS", "30")?;
    let log_level = or_default("VETSTORE_LOG_LEVEL", "info")?;

    Ok(StoreConfig {
        store_domain,
        access_token,
        api_version,
        discount_metaobject_id,
        discount_metaobject_type,
        request_timeout_secs,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
