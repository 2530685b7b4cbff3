//! Portal AI - Assistant thread service
//!
//! Creates conversation threads on a hosted assistant service (OpenAI
//! Assistants API) and hands the new thread id back to web clients.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
