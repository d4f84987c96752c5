//! pawfeed - typed REST client for the dog-breed social backend.
//!
//! The request layer lives in [`core`]: an endpoint registry, a request
//! builder, a transport/decode pipeline that yields exactly one
//! `Result<T, NetworkError>` per call, and a multipart image upload. The
//! [`cli`] module drives every operation from the command line.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod storage;
pub mod util;

/// Test utilities module - included in test builds or when test-utils feature is enabled.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ExitCode, NetworkError, PawfeedError, Result};

// Re-export test utilities for external test crates
#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::*;
