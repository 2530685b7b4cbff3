//! Assistant service (OpenAI) configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::OpenAIConfig;

/// Where the API key can come from, for error messages.
const API_KEY_VARS: &str = "PORTAL_AI__AI__OPENAI_API_KEY or OPENAI_API_KEY";

/// Assistant service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// API base URL (override for proxies and compatible gateways)
    ///
    /// Keys are only checked for the `sk-` prefix against the default URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `OpenAI-Organization` header
    pub organization: Option<String>,

    /// `OpenAI-Project` header
    pub project: Option<String>,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when requests go to OpenAI itself rather than a gateway.
    fn targets_openai(&self) -> bool {
        self.base_url.trim_end_matches('/') == default_base_url()
    }

    fn api_key(&self) -> Result<&str, ValidationError> {
        self.openai_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.is_empty())
            .ok_or(ValidationError::MissingRequired(API_KEY_VARS))
    }

    /// Build the adapter configuration.
    pub fn openai_config(&self) -> Result<OpenAIConfig, ValidationError> {
        let mut config = OpenAIConfig::new(self.api_key()?)
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout());
        if let Some(ref organization) = self.organization {
            config = config.with_organization(organization.clone());
        }
        if let Some(ref project) = self.project {
            config = config.with_project(project.clone());
        }
        Ok(config)
    }

    /// Validate assistant service configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        let key = self.api_key()?;

        if self.targets_openai() && !key.starts_with("sk-") {
            return Err(ValidationError::InvalidOpenAiKey);
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }

        if self.timeout_secs == 0 || self.timeout_secs > 3600 {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            base_url: default_base_url(),
            organization: None,
            project: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

// Matches the official SDK's default; the thread handler does not override it.
fn default_timeout() -> u64 {
    600
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> AiConfig {
        AiConfig {
            openai_api_key: Some(Secret::new(key.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.timeout_secs, 600);
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_validation_missing_key() {
        assert_eq!(
            AiConfig::default().validate(false),
            Err(ValidationError::MissingRequired(API_KEY_VARS))
        );
        assert!(with_key("").validate(false).is_err());
    }

    #[test]
    fn test_validation_key_prefix() {
        assert_eq!(
            with_key("not-a-key").validate(false),
            Err(ValidationError::InvalidOpenAiKey)
        );
        assert!(with_key("sk-proj-abc").validate(false).is_ok());

        let trailing_slash = AiConfig {
            base_url: "https://api.openai.com/v1/".to_string(),
            ..with_key("not-a-key")
        };
        assert_eq!(
            trailing_slash.validate(false),
            Err(ValidationError::InvalidOpenAiKey)
        );
    }

    #[test]
    fn test_gateway_accepts_its_own_key_format() {
        let config = AiConfig {
            base_url: "https://gateway.internal/openai/v1".to_string(),
            ..with_key("gw_live_12345")
        };
        assert!(config.validate(true).is_ok());
        assert!(config.openai_config().is_ok());
    }

    #[test]
    fn test_missing_key_message_names_both_variables() {
        let err = AiConfig::default().validate(false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PORTAL_AI__AI__OPENAI_API_KEY"));
        assert!(message.contains(" OPENAI_API_KEY"));
    }

    #[test]
    fn test_validation_base_url() {
        let config = AiConfig {
            base_url: "ftp://example.com".to_string(),
            ..with_key("sk-xxx")
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_production_requires_https() {
        let config = AiConfig {
            base_url: "http://localhost:4010/v1".to_string(),
            ..with_key("sk-xxx")
        };
        assert!(config.validate(false).is_ok());
        assert_eq!(config.validate(true), Err(ValidationError::BaseUrlMustBeHttps));
    }

    #[test]
    fn test_validation_timeout_range() {
        let config = AiConfig {
            timeout_secs: 0,
            ..with_key("sk-xxx")
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_openai_config_carries_settings() {
        let config = AiConfig {
            organization: Some("org-1".to_string()),
            project: Some("proj-1".to_string()),
            base_url: "http://localhost:4010/v1/".to_string(),
            timeout_secs: 30,
            ..with_key("sk-xxx")
        };
        let openai = config.openai_config().unwrap();
        assert_eq!(openai.base_url, "http://localhost:4010/v1");
        assert_eq!(openai.organization.as_deref(), Some("org-1"));
        assert_eq!(openai.project.as_deref(), Some("proj-1"));
        assert_eq!(openai.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_openai_config_requires_key() {
        assert_eq!(
            AiConfig::default().openai_config().unwrap_err(),
            ValidationError::MissingRequired(API_KEY_VARS)
        );
    }
}
