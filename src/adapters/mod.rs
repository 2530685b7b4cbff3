//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Assistant service clients (OpenAI, mock)
//! - `http` - Axum REST surface

pub mod ai;
pub mod http;
