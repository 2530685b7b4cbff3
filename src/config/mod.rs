//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PORTAL_AI` prefix and nested values use double underscores as separators.
//! The OpenAI SDK's own variables (`OPENAI_API_KEY` and friends) are honored
//! as fallbacks.
//!
//! # Example
//!
//! ```no_run
//! use portal_ai::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Standard OpenAI SDK variables and the setting each one fills in when the
/// `PORTAL_AI__AI__*` equivalent is unset.
const OPENAI_SDK_VARS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "ai.openai_api_key"),
    ("OPENAI_BASE_URL", "ai.base_url"),
    ("OPENAI_ORG_ID", "ai.organization"),
    ("OPENAI_PROJECT_ID", "ai.project"),
];

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Assistant service configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds `ai.*` from `OPENAI_API_KEY`, `OPENAI_BASE_URL`,
    ///    `OPENAI_ORG_ID` and `OPENAI_PROJECT_ID` when set
    /// 3. Reads environment variables with `PORTAL_AI` prefix, which win
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PORTAL_AI__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PORTAL_AI__AI__OPENAI_API_KEY=sk-...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (var, key) in OPENAI_SDK_VARS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(*key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("PORTAL_AI")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate(self.server.is_production())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PORTAL_AI__AI__OPENAI_API_KEY",
        "PORTAL_AI__AI__BASE_URL",
        "PORTAL_AI__AI__ORGANIZATION",
        "PORTAL_AI__SERVER__PORT",
        "PORTAL_AI__SERVER__ENVIRONMENT",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "OPENAI_ORG_ID",
        "OPENAI_PROJECT_ID",
    ];

    fn set_minimal_env() {
        env::set_var("PORTAL_AI__AI__OPENAI_API_KEY", "sk-test-xxx");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PORTAL_AI__AI__ORGANIZATION", "org-123");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.ai.openai_api_key.unwrap().expose_secret(),
            "sk-test-xxx"
        );
        assert_eq!(config.ai.organization.as_deref(), Some("org-123"));
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_key_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert!(config.ai.openai_api_key.is_none());
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired(
                "PORTAL_AI__AI__OPENAI_API_KEY or OPENAI_API_KEY"
            ))
        );
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.timeout_secs, 600);
    }

    #[test]
    fn test_production_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PORTAL_AI__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.server.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_openai_variables_are_read() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-from-standard-env");
        env::set_var("OPENAI_BASE_URL", "https://proxy.example.com/v1");
        env::set_var("OPENAI_ORG_ID", "org-std");
        env::set_var("OPENAI_PROJECT_ID", "proj-std");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.ai.openai_api_key.as_ref().unwrap().expose_secret(),
            "sk-from-standard-env"
        );
        assert_eq!(config.ai.base_url, "https://proxy.example.com/v1");
        assert_eq!(config.ai.organization.as_deref(), Some("org-std"));
        assert_eq!(config.ai.project.as_deref(), Some("proj-std"));
    }

    #[test]
    fn test_prefixed_variables_override_standard_ones() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-from-standard-env");
        env::set_var("OPENAI_ORG_ID", "org-std");
        set_minimal_env();
        env::set_var("PORTAL_AI__AI__ORGANIZATION", "org-123");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.ai.openai_api_key.unwrap().expose_secret(),
            "sk-test-xxx"
        );
        assert_eq!(config.ai.organization.as_deref(), Some("org-123"));
    }

    #[test]
    fn test_production_rejects_plain_http_upstream() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PORTAL_AI__SERVER__ENVIRONMENT", "production");
        env::set_var("PORTAL_AI__AI__BASE_URL", "http://localhost:4010/v1");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::BaseUrlMustBeHttps));
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PORTAL_AI__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
