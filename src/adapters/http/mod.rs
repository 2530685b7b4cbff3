//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod health;
pub mod router;
pub mod threads;

// Re-export key types for convenience
pub use router::app_router;
pub use threads::{threads_router, ThreadsAppState};
