//! Process configuration from environment variables.

use std::env::VarError;
use std::net::SocketAddr;

use thiserror::Error;

use crate::pricing::CartValueMode;
use crate::venues::client::DEFAULT_BASE_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub venue_api_base_url: String,
    pub venue_request_timeout_secs: u64,
    pub cart_value_mode: CartValueMode,
}

/// Load configuration, reading a `.env` file first if one exists.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Parse configuration through `lookup`, so tests can feed a plain map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("DOPC_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("DOPC_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("DOPC_LOG_LEVEL", "info");

    let venue_api_base_url = or_default("DOPC_VENUE_API_BASE_URL", DEFAULT_BASE_URL);
    reqwest::Url::parse(&venue_api_base_url)
        .map_err(|e| invalid("DOPC_VENUE_API_BASE_URL", e.to_string()))?;

    let venue_request_timeout_secs = or_default("DOPC_VENUE_REQUEST_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| invalid("DOPC_VENUE_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if venue_request_timeout_secs == 0 {
        return Err(invalid(
            "DOPC_VENUE_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let cart_value_mode = or_default("DOPC_CART_VALUE_MODE", "truncate")
        .parse::<CartValueMode>()
        .map_err(|reason| invalid("DOPC_CART_VALUE_MODE", reason))?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        venue_api_base_url,
        venue_request_timeout_secs,
        cart_value_mode,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

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
    fn build_app_config_uses_defaults() {
        let map = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.venue_api_base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.venue_request_timeout_secs, 10);
        assert_eq!(cfg.cart_value_mode, CartValueMode::Truncate);
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = HashMap::new();
        map.insert("DOPC_BIND_ADDR", "127.0.0.1:9000");
        map.insert("DOPC_LOG_LEVEL", "debug");
        map.insert("DOPC_VENUE_API_BASE_URL", "http://localhost:8080/venues/");
        map.insert("DOPC_VENUE_REQUEST_TIMEOUT_SECS", "3");
        map.insert("DOPC_CART_VALUE_MODE", "strict");
        let cfg = build_app_config(lookup_from_map(&map)).expect("overrides are valid");
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.venue_api_base_url, "http://localhost:8080/venues/");
        assert_eq!(cfg.venue_request_timeout_secs, 3);
        assert_eq!(cfg.cart_value_mode, CartValueMode::Strict);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("DOPC_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOPC_BIND_ADDR"),
            "expected InvalidEnvVar(DOPC_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_zero_timeout() {
        let mut map = HashMap::new();
        map.insert("DOPC_VENUE_REQUEST_TIMEOUT_SECS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOPC_VENUE_REQUEST_TIMEOUT_SECS"),
            "got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_unknown_cart_mode() {
        let mut map = HashMap::new();
        map.insert("DOPC_CART_VALUE_MODE", "round");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOPC_CART_VALUE_MODE"),
            "got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_base_url() {
        let mut map = HashMap::new();
        map.insert("DOPC_VENUE_API_BASE_URL", "::not a url::");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DOPC_VENUE_API_BASE_URL"),
            "got: {result:?}"
        );
    }
}
