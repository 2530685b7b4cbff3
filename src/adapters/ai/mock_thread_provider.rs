//! Mock Thread Provider for testing.
//!
//! Provides a configurable mock implementation of the ThreadProvider port,
//! allowing tests to run without calling the real assistant service.
//!
//! # Features
//!
//! - Scripted outcomes, consumed in order
//! - Generated ids once the script runs out
//! - Simulated latency
//! - Call counting for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockThreadProvider::new()
//!     .with_thread("thread_1")
//!     .with_error(ThreadProviderError::AuthenticationFailed);
//!
//! assert_eq!(provider.create_thread().await?.id().as_str(), "thread_1");
//! assert!(provider.create_thread().await.is_err());
//! assert_eq!(provider.call_count(), 2);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::ThreadId;
use crate::domain::thread::Thread;
use crate::ports::{ThreadProvider, ThreadProviderError};

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockThreadOutcome {
    /// Return a thread with this id.
    Created(String),
    /// Fail with this error.
    Error(ThreadProviderError),
}

/// Mock thread provider for testing.
///
/// Clones share the same script and call counter.
#[derive(Debug, Clone, Default)]
pub struct MockThreadProvider {
    outcomes: Arc<Mutex<VecDeque<MockThreadOutcome>>>,
    calls: Arc<Mutex<usize>>,
    delay: Duration,
}

impl MockThreadProvider {
    /// Creates a new mock provider with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful creation returning `id`.
    pub fn with_thread(self, id: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockThreadOutcome::Created(id.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: ThreadProviderError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockThreadOutcome::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Records a call and returns its 1-based sequence number.
    fn record_call(&self) -> usize {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        *calls
    }

    fn next_outcome(&self, call: usize) -> MockThreadOutcome {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockThreadOutcome::Created(format!("thread_mock_{}", call)))
    }
}

#[async_trait]
impl ThreadProvider for MockThreadProvider {
    async fn create_thread(&self) -> Result<Thread, ThreadProviderError> {
        let call = self.record_call();

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_outcome(call) {
            MockThreadOutcome::Created(id) => {
                let id = ThreadId::new(id)
                    .map_err(|e| ThreadProviderError::parse(e.to_string()))?;
                Ok(Thread::new(id))
            }
            MockThreadOutcome::Error(err) => Err(err),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
