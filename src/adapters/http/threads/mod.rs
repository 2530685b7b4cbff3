//! HTTP adapter for assistant thread endpoints.
//!
//! Exposes thread creation via REST API:
//! - `POST /api/assistants/threads` - Create a thread, returns `{"threadId": "..."}`

mod dto;
mod handlers;
mod routes;

pub use dto::CreateThreadResponse;
pub use handlers::{create_thread, ThreadsApiError, ThreadsAppState};
pub use routes::{threads_router, threads_routes};
