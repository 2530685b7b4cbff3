//! Thread value returned by the assistant service.

use chrono::{DateTime, Utc};

use crate::domain::foundation::ThreadId;

/// A newly created conversation thread.
///
/// Only `id` is surfaced to clients. `created_at` goes to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    id: ThreadId,
    created_at: Option<DateTime<Utc>>,
}

impl Thread {
    /// Creates a thread reference with no timestamp.
    pub fn new(id: ThreadId) -> Self {
        Self {
            id,
            created_at: None,
        }
    }

    /// Sets the creation time from unix seconds. Out-of-range values are dropped.
    pub fn with_created_at_unix(mut self, secs: i64) -> Self {
        self.created_at = DateTime::from_timestamp(secs, 0);
        self
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn created_at(&self) -> Option<&DateTime<Utc>> {
        self.created_at.as_ref()
    }

    /// Consumes the thread, keeping only its identifier.
    pub fn into_id(self) -> ThreadId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread_id() -> ThreadId {
        ThreadId::new("thread_abc123").unwrap()
    }

    #[test]
    fn new_thread_has_no_timestamp() {
        let thread = Thread::new(thread_id());
        assert_eq!(thread.id().as_str(), "thread_abc123");
        assert!(thread.created_at().is_none());
    }

    #[test]
    fn created_at_converts_unix_seconds() {
        let thread = Thread::new(thread_id()).with_created_at_unix(1_699_012_949);
        let created = thread.created_at().unwrap();
        assert_eq!(created.timestamp(), 1_699_012_949);
    }

    #[test]
    fn out_of_range_timestamp_is_dropped() {
        let thread = Thread::new(thread_id()).with_created_at_unix(i64::MAX);
        assert!(thread.created_at().is_none());
    }

    #[test]
    fn into_id_returns_identifier() {
        assert_eq!(Thread::new(thread_id()).into_id(), thread_id());
    }
}
