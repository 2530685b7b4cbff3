//! HTTP DTOs (Data Transfer Objects) for thread endpoints.
//!
//! The response shape is what browser clients read: `{"threadId": "..."}`
//! and nothing else.

use serde::Serialize;

use crate::domain::thread::Thread;

/// Response for a newly created thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadResponse {
    /// Provider-assigned thread identifier.
    pub thread_id: String,
}

impl From<Thread> for CreateThreadResponse {
    fn from(thread: Thread) -> Self {
        Self {
            thread_id: thread.into_id().into_inner(),
        }
    }
}
