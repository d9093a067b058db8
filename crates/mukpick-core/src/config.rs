use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    let naver_client_id = require("NAVER_CLIENT_ID")?;
    let naver_client_secret = require("NAVER_CLIENT_SECRET")?;

    let env = parse_environment(&or_default("MUKPICK_ENV", "development"));
    let log_level = or_default("MUKPICK_LOG_LEVEL", "info");

    let http_timeout_secs = parse_u64("MUKPICK_HTTP_TIMEOUT_SECS", "30")?;
    let position_timeout_secs = parse_u64("MUKPICK_POSITION_TIMEOUT_SECS", "30")?;
    let locality_language = or_default("MUKPICK_LOCALITY_LANGUAGE", "ko");
    let prefs_path = PathBuf::from(or_default("MUKPICK_PREFS_PATH", "./.mukpick/prefs.json"));

    Ok(AppConfig {
        env,
        log_level,
        naver_client_id,
        naver_client_secret,
        http_timeout_secs,
        position_timeout_secs,
        locality_language,
        prefs_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
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

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("NAVER_CLIENT_ID", "test-client-id");
        m.insert("NAVER_CLIENT_SECRET", "test-client-secret");
        m
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn build_app_config_fails_without_client_id() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "NAVER_CLIENT_ID"),
            "expected MissingEnvVar(NAVER_CLIENT_ID), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_without_client_secret() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("NAVER_CLIENT_ID", "test-client-id");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "NAVER_CLIENT_SECRET"),
            "expected MissingEnvVar(NAVER_CLIENT_SECRET), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.http_timeout_secs, 30);
        assert_eq!(cfg.position_timeout_secs, 30);
        assert_eq!(cfg.locality_language, "ko");
        assert_eq!(cfg.prefs_path.to_string_lossy(), "./.mukpick/prefs.json");
    }

    #[test]
    fn build_app_config_http_timeout_override() {
        let mut map = full_env();
        map.insert("MUKPICK_HTTP_TIMEOUT_SECS", "10");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.http_timeout_secs, 10);
    }

    #[test]
    fn build_app_config_http_timeout_invalid() {
        let mut map = full_env();
        map.insert("MUKPICK_HTTP_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MUKPICK_HTTP_TIMEOUT_SECS"),
            "expected InvalidEnvVar(MUKPICK_HTTP_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_position_timeout_override() {
        let mut map = full_env();
        map.insert("MUKPICK_POSITION_TIMEOUT_SECS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.position_timeout_secs, 5);
    }

    #[test]
    fn build_app_config_locality_language_override() {
        let mut map = full_env();
        map.insert("MUKPICK_LOCALITY_LANGUAGE", "en");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.locality_language, "en");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-client-id"));
        assert!(!rendered.contains("test-client-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
