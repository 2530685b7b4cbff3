//! Axum router configuration for thread endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_thread, ThreadsAppState};

/// Create the thread API router.
///
/// # Routes
/// - `POST /` - Create a new thread
pub fn threads_routes() -> Router<ThreadsAppState> {
    Router::new().route("/", post(create_thread))
}

/// Create the thread module router, suitable for nesting under `/api`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", threads_router())
///     .with_state(ThreadsAppState::new(provider));
/// ```
pub fn threads_router() -> Router<ThreadsAppState> {
    Router::new().nest("/assistants/threads", threads_routes())
}
