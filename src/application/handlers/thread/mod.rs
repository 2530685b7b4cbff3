//! Thread command handlers.

mod create_thread;

pub use create_thread::{CreateThreadCommand, CreateThreadHandler, CreateThreadResult};
