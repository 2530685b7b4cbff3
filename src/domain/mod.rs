//! Domain layer - Value objects for assistant threads.

pub mod foundation;
pub mod thread;
