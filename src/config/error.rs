//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host/port combination")]
    InvalidSocketAddr,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid OpenAI API key format")]
    InvalidOpenAiKey,

    #[error("OpenAI base URL must be http(s)")]
    InvalidBaseUrl,

    #[error("OpenAI base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Invalid upstream timeout")]
    InvalidTimeout,
}
