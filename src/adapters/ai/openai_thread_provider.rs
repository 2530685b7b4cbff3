//! OpenAI Thread Provider - Implementation of ThreadProvider for the Assistants API.
//!
//! Creates threads with `POST {base_url}/threads` on the assistants v2 beta.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_base_url("https://api.openai.com/v1")
//!     .with_organization("org-123");
//!
//! let provider = OpenAIThreadProvider::new(config)?;
//! let thread = provider.create_thread().await?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::domain::foundation::ThreadId;
use crate::domain::thread::Thread;
use crate::ports::{ThreadProvider, ThreadProviderError};

/// Beta header value selecting the assistants v2 API.
const ASSISTANTS_BETA: &str = "assistants=v2";

/// Retry-after used when a 429 response carries no usable header.
const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Configuration for the OpenAI thread provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Optional `OpenAI-Organization` header.
    pub organization: Option<String>,
    /// Optional `OpenAI-Project` header.
    pub project: Option<String>,
    /// Transport timeout for the whole request.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openai.com/v1".to_string(),
            organization: None,
            project: None,
            timeout: Duration::from_secs(600),
        }
    }

    /// Sets the base URL. A trailing slash is ignored.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the organization header.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Sets the project header.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI Assistants API thread provider.
///
/// Holds one pooled `reqwest::Client` for all requests. Build once at startup
/// and share behind an `Arc<dyn ThreadProvider>`.
pub struct OpenAIThreadProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIThreadProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self, ThreadProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ThreadProviderError::network(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Builds the thread creation endpoint URL.
    fn threads_url(&self) -> String {
        format!("{}/threads", self.config.base_url)
    }

    /// Sends the create request.
    async fn send_request(&self) -> Result<Response, ThreadProviderError> {
        let mut request = self
            .client
            .post(self.threads_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("OpenAI-Beta", ASSISTANTS_BETA)
            .json(&serde_json::json!({}));

        if let Some(ref organization) = self.config.organization {
            request = request.header("OpenAI-Organization", organization);
        }
        if let Some(ref project) = self.config.project {
            request = request.header("OpenAI-Project", project);
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                ThreadProviderError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                ThreadProviderError::network(format!("Connection failed: {}", e))
            } else {
                ThreadProviderError::network(e.to_string())
            }
        })
    }

    /// Checks the response status and maps failures.
    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, ThreadProviderError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = Self::parse_retry_after(&response);
        let error_body = response.text().await.unwrap_or_default();
        let message = Self::error_message(&error_body).unwrap_or(error_body);

        match status.as_u16() {
            401 | 403 => Err(ThreadProviderError::AuthenticationFailed),
            429 => Err(ThreadProviderError::rate_limited(retry_after)),
            400 | 404 | 422 => Err(ThreadProviderError::InvalidRequest(message)),
            500..=599 => Err(ThreadProviderError::unavailable(format!(
                "Server error {}: {}",
                status, message
            ))),
            _ => Err(ThreadProviderError::network(format!(
                "Unexpected status {}: {}",
                status, message
            ))),
        }
    }

    /// Reads whole seconds from a `retry-after` header.
    fn parse_retry_after(response: &Response) -> u32 {
        response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
    }

    /// Extracts `error.message` from an OpenAI error body.
    fn error_message(body: &str) -> Option<String> {
        let parsed: Value = serde_json::from_str(body).ok()?;
        parsed
            .get("error")?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }

    /// Parses a successful response into a domain thread.
    async fn parse_response(&self, response: Response) -> Result<Thread, ThreadProviderError> {
        let response = self.handle_response_status(response).await?;

        let body: OpenAIThread = response
            .json()
            .await
            .map_err(|e| ThreadProviderError::parse(format!("Failed to parse response: {}", e)))?;

        let id = ThreadId::new(body.id)
            .map_err(|e| ThreadProviderError::parse(format!("Invalid thread id: {}", e)))?;

        let mut thread = Thread::new(id);
        if let Some(created_at) = body.created_at {
            thread = thread.with_created_at_unix(created_at);
        }
        Ok(thread)
    }
}

#[async_trait]
impl ThreadProvider for OpenAIThreadProvider {
    async fn create_thread(&self) -> Result<Thread, ThreadProviderError> {
        let response = self.send_request().await?;
        self.parse_response(response).await
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// OpenAI API Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct OpenAIThread {
    id: String,
    #[serde(default)]
    created_at: Option<i64>,
}
