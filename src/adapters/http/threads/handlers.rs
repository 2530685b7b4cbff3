//! HTTP handlers for thread endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::thread::{CreateThreadCommand, CreateThreadHandler};
use crate::ports::{ThreadProvider, ThreadProviderError};

use super::dto::CreateThreadResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for thread endpoints.
///
/// Cloned per request; the provider behind the `Arc` is built once at startup
/// and never mutated.
#[derive(Clone)]
pub struct ThreadsAppState {
    pub thread_provider: Arc<dyn ThreadProvider>,
}

impl ThreadsAppState {
    pub fn new(thread_provider: Arc<dyn ThreadProvider>) -> Self {
        Self { thread_provider }
    }

    pub fn create_thread_handler(&self) -> CreateThreadHandler {
        CreateThreadHandler::new(self.thread_provider.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/assistants/threads - Create a new assistant thread
///
/// The request body is never read, so any payload (or none) behaves the same.
pub async fn create_thread(
    State(state): State<ThreadsAppState>,
) -> Result<impl IntoResponse, ThreadsApiError> {
    let handler = state.create_thread_handler();

    let result = handler.handle(CreateThreadCommand).await?;

    Ok(Json(CreateThreadResponse::from(result.thread)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Upstream failure surfaced as a bare 500.
///
/// All provider errors are one class to the client: no error code, no body.
/// The detail goes to the log only.
#[derive(Debug)]
pub struct ThreadsApiError(ThreadProviderError);

impl From<ThreadProviderError> for ThreadsApiError {
    fn from(err: ThreadProviderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ThreadsApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(
            error = %self.0,
            transient = self.0.is_transient(),
            "Thread creation failed"
        );
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
