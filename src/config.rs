use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {0}: {1}")]
    Invalid(&'static str, String),
}

/// Process configuration, loaded once at startup and passed by reference.
/// Business logic never reads the environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Base URI of the upstream comics-catalog API.
    pub catalog_base_url: String,
    /// API key appended to every upstream request.
    pub catalog_api_key: String,
    pub cors_origin: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            catalog_base_url: require("CATALOG_API_URI")?,
            catalog_api_key: require("CATALOG_API_KEY")?,
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match env::var("PORT") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PORT", raw))?,
                Err(_) => 8080,
            },
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        env::set_var("DATABASE_URL", "sqlite://data/test.db");
        env::set_var("CATALOG_API_URI", "https://catalog.example.com");
        env::set_var("CATALOG_API_KEY", "test-key");
    }

    fn clear_vars() {
        for name in [
            "DATABASE_URL",
            "CATALOG_API_URI",
            "CATALOG_API_KEY",
            "CORS_ORIGIN",
            "HOST",
            "PORT",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn loads_required_vars_with_defaults() {
        clear_vars();
        set_required_vars();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.catalog_api_key, "test-key");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);

        clear_vars();
    }

    #[test]
    #[serial]
    fn missing_api_key_is_an_error() {
        clear_vars();
        env::set_var("DATABASE_URL", "sqlite://data/test.db");
        env::set_var("CATALOG_API_URI", "https://catalog.example.com");

        let result = AppConfig::from_env();
        assert!(matches!(result, Err(ConfigError::Missing("CATALOG_API_KEY"))));

        clear_vars();
    }

    #[test]
    #[serial]
    fn rejects_non_numeric_port() {
        clear_vars();
        set_required_vars();
        env::set_var("PORT", "not-a-port");

        let result = AppConfig::from_env();
        assert!(matches!(result, Err(ConfigError::Invalid("PORT", _))));

        clear_vars();
    }
}
