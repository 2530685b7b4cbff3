//! Foundation module - Shared value objects used across the domain.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::ThreadId;
