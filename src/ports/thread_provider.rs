//! Thread Provider Port - Interface to the hosted assistant service.
//!
//! The assistant service owns conversation threads: their storage, messages
//! and runs. This port exposes the single operation we need from it, creating
//! a new empty thread and returning its identifier.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedProvider;
//!
//! #[async_trait]
//! impl ThreadProvider for FixedProvider {
//!     async fn create_thread(&self) -> Result<Thread, ThreadProviderError> {
//!         Ok(Thread::new(ThreadId::new("thread_fixed")?))
//!     }
//!
//!     fn provider_name(&self) -> &'static str {
//!         "fixed"
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::thread::Thread;

/// Port for creating conversation threads on an assistant service.
///
/// Implementations are shared across concurrent requests and must not hold
/// per-request mutable state.
#[async_trait]
pub trait ThreadProvider: Send + Sync {
    /// Allocate a new, empty conversation thread.
    ///
    /// Each call creates a distinct thread. Implementations must not retry or
    /// cache: one call here is one upstream request.
    async fn create_thread(&self) -> Result<Thread, ThreadProviderError>;

    /// Short provider name for logs (e.g. "openai").
    fn provider_name(&self) -> &'static str;
}

/// Failures talking to the assistant service.
///
/// Callers treat every variant as the same upstream failure; the variants
/// exist so logs say what actually went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThreadProviderError {
    /// API key missing, invalid, or lacking permission.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider returned a server error.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Provider response could not be understood.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ThreadProviderError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a later attempt could succeed.
    ///
    /// Logged with every failed request. Nothing in this crate retries.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ThreadProviderError::RateLimited { .. }
                | ThreadProviderError::Unavailable { .. }
                | ThreadProviderError::Network(_)
                | ThreadProviderError::Timeout { .. }
        )
    }
}
