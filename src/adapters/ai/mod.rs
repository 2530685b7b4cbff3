//! Assistant Service Adapters.
//!
//! Implementations of the ThreadProvider port.
//!
//! ## Available Adapters
//!
//! - `OpenAIThreadProvider` - OpenAI Assistants API (v2 beta)
//! - `MockThreadProvider` - Scripted provider for testing

mod mock_thread_provider;
mod openai_thread_provider;

pub use mock_thread_provider::{MockThreadOutcome, MockThreadProvider};
pub use openai_thread_provider::{OpenAIConfig, OpenAIThreadProvider};
