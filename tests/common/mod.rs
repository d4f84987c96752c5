//! Shared helpers for integration tests.
//!
//! - `fixtures`: wiremock helpers and canned backend payloads
//! - `logger`: structured test logging
//! - `log_capture`: assertions over emitted `tracing` events

pub mod fixtures;
pub mod log_capture;
pub mod logger;
