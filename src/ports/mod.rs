//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ThreadProvider` - Hosted assistant service that owns conversation threads

mod thread_provider;

pub use thread_provider::{ThreadProvider, ThreadProviderError};
