//! Application handlers.
//!
//! Command handlers that orchestrate calls through ports.

pub mod thread;
