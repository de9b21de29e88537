//! Service configuration, loaded from the environment at startup.

use avs_relay::client::BASE_URL;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone)]
pub struct Config {
    pub access_token: Option<String>,
    pub base_url: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables, reading `.env` first
    /// if present:
    ///
    /// *   `AVS_ACCESS_TOKEN`: Bearer token for the speech service. Required by `recognize`.
    /// *   `AVS_BASE_URL`: (Optional) Service endpoint. Defaults to the North American one.
    /// *   `RUST_LOG`: (Optional) The logging level. Defaults to "INFO".
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let access_token = var("AVS_ACCESS_TOKEN").filter(|token| !token.is_empty());
        let base_url = var("AVS_BASE_URL").unwrap_or_else(|| BASE_URL.to_string());

        let log_level_str = var("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            access_token,
            base_url,
            log_level,
        })
    }

    pub fn require_access_token(&self) -> Result<&str, ConfigError> {
        self.access_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar("AVS_ACCESS_TOKEN".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.log_level, Level::INFO);
        assert!(matches!(
            config.require_access_token(),
            Err(ConfigError::MissingVar(_))
        ));
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_vars(vars(&[
            ("AVS_ACCESS_TOKEN", "Atza|token"),
            ("AVS_BASE_URL", "http://localhost:9000"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.require_access_token().unwrap(), "Atza|token");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_log_level() {
        let result = Config::from_vars(vars(&[("RUST_LOG", "loud")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(name, _)) if name == "RUST_LOG"));
    }
}
