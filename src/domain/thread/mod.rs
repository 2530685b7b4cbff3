//! Thread module - Provider-side conversation threads.
//!
//! A thread is created and owned by the upstream assistant service. This
//! service only ever holds a transient reference to one: long enough to hand
//! its identifier back to the caller.

mod model;

pub use model::Thread;
