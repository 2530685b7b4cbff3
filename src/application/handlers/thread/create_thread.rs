//! CreateThreadHandler - Command handler for creating assistant threads.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::thread::Thread;
use crate::ports::{ThreadProvider, ThreadProviderError};

/// Command to create a new thread.
///
/// Carries nothing: the provider assigns everything about a fresh thread.
#[derive(Debug, Clone, Default)]
pub struct CreateThreadCommand;

/// Result of successful thread creation.
#[derive(Debug, Clone)]
pub struct CreateThreadResult {
    pub thread: Thread,
}

/// Handler for creating threads.
pub struct CreateThreadHandler {
    provider: Arc<dyn ThreadProvider>,
}

impl CreateThreadHandler {
    pub fn new(provider: Arc<dyn ThreadProvider>) -> Self {
        Self { provider }
    }

    /// Issues exactly one create call to the provider.
    ///
    /// Failures are returned as-is. There is no retry and no fallback id.
    pub async fn handle(
        &self,
        _cmd: CreateThreadCommand,
    ) -> Result<CreateThreadResult, ThreadProviderError> {
        debug!(provider = self.provider.provider_name(), "Creating thread");

        let thread = self.provider.create_thread().await?;

        info!(
            provider = self.provider.provider_name(),
            thread_id = %thread.id(),
            created_at = ?thread.created_at(),
            "Thread created"
        );

        Ok(CreateThreadResult { thread })
    }
}
