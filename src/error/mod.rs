//! Error types for pawfeed.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Request failures are described by [`NetworkError`], which is what the
//! request layer hands back to its callers. Everything the CLI can hit on top
//! of that is wrapped in [`PawfeedError`] and sorted into categories:
//! - **Network**: anything produced by the request pipeline
//! - **Configuration**: config file parsing, validation, or bad values
//! - **Input**: invalid arguments, unreadable payload or image files
//! - **Internal**: I/O, JSON, or unclassified issues
//!
//! Each error has a stable error code (e.g., `PAWF-N001`) for programmatic handling.

pub mod network;
pub mod suggestions;

use thiserror::Error;

pub use network::NetworkError;
pub use suggestions::FixSuggestion;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Request pipeline failures (timeouts, server errors, decoding).
    Network,
    /// Configuration issues (parse errors, invalid values).
    Configuration,
    /// Bad user input (arguments, payload files, images).
    Input,
    /// Internal errors (bugs, unexpected state, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Configuration => "Configuration error",
            Self::Input => "Input error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Network => "N",
            Self::Configuration => "C",
            Self::Input => "I",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Bad arguments or configuration
    UsageError = 2,
    /// The server rejected the request or returned something undecodable
    ServerError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for pawfeed operations.
#[derive(Error, Debug)]
pub enum PawfeedError {
    // ==========================================================================
    // Network errors (Category: Network)
    // ==========================================================================
    /// A request failed in the transport/decode pipeline.
    #[error(transparent)]
    Network(#[from] NetworkError),

    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // Input errors (Category: Input)
    // ==========================================================================
    /// A command-line argument or payload was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Image file could not be opened or decoded.
    #[error("cannot read image {path}: {message}")]
    Image { path: String, message: String },

    // ==========================================================================
    // I/O errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==========================================================================
    // Generic wrapper (Category: Internal)
    // ==========================================================================
    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PawfeedError {
    /// Map error to a process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Network(NetworkError::Timeout) => ExitCode::Timeout,
            Self::Network(NetworkError::Server { .. } | NetworkError::Decoding(_)) => {
                ExitCode::ServerError
            }
            Self::Network(NetworkError::BadUrl(_))
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_)
            | Self::InvalidArgument(_)
            | Self::Image { .. } => ExitCode::UsageError,
            Self::Network(NetworkError::Unknown(_))
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and routing.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::ConfigParse { .. } | Self::ConfigInvalid { .. } | Self::Config(_) => {
                ErrorCategory::Configuration
            }
            Self::InvalidArgument(_) | Self::Image { .. } => ErrorCategory::Input,
            Self::Io(_) | Self::Json(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `PAWF-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            // Network errors (N001-N099)
            Self::Network(NetworkError::Timeout) => "PAWF-N001",
            Self::Network(NetworkError::Server { .. }) => "PAWF-N002",
            Self::Network(NetworkError::Decoding(_)) => "PAWF-N003",
            Self::Network(NetworkError::BadUrl(_)) => "PAWF-N004",
            Self::Network(NetworkError::Unknown(_)) => "PAWF-N099",

            // Configuration errors (C001-C099)
            Self::ConfigParse { .. } => "PAWF-C001",
            Self::ConfigInvalid { .. } => "PAWF-C002",
            Self::Config(_) => "PAWF-C003",

            // Input errors (I001-I099)
            Self::InvalidArgument(_) => "PAWF-I001",
            Self::Image { .. } => "PAWF-I002",

            // Internal errors (X001-X099)
            Self::Io(_) => "PAWF-X001",
            Self::Json(_) => "PAWF-X002",
            Self::Other(_) => "PAWF-X099",
        }
    }

    /// Returns whether retrying the same call might succeed.
    ///
    /// Informational only: nothing in the request layer retries.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(NetworkError::Timeout | NetworkError::Unknown(_)) => true,
            Self::Network(NetworkError::Server { status, .. }) => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Returns actionable fix suggestions for this error.
    #[must_use]
    pub fn fix_suggestions(&self) -> Vec<FixSuggestion> {
        match self {
            Self::Network(NetworkError::Timeout) => suggestions::timeout_suggestions(),
            Self::Network(NetworkError::Server { status, message }) => {
                suggestions::server_error_suggestions(*status, message.as_deref())
            }
            Self::Network(NetworkError::Decoding(cause)) => {
                suggestions::decoding_suggestions(&cause.to_string())
            }
            Self::Network(NetworkError::BadUrl(url)) => suggestions::bad_url_suggestions(url),
            Self::Network(NetworkError::Unknown(cause)) => {
                suggestions::unknown_network_suggestions(&cause.to_string())
            }
            Self::ConfigParse { path, message } => {
                suggestions::config_parse_suggestions(path, message)
            }
            Self::ConfigInvalid { key, value, message } => {
                suggestions::config_invalid_suggestions(key, value, message)
            }
            Self::Config(msg) => vec![FixSuggestion::new(
                vec!["pawfeed config show".to_string()],
                format!("Configuration error: {msg}"),
            )],
            Self::InvalidArgument(msg) => vec![FixSuggestion::new(
                vec!["pawfeed --help".to_string()],
                format!("The command line could not be used as given: {msg}"),
            )],
            Self::Image { path, .. } => suggestions::image_suggestions(path),
            Self::Io(_) | Self::Json(_) | Self::Other(_) => Vec::new(),
        }
    }
}

/// Result type alias for pawfeed operations.
pub type Result<T> = std::result::Result<T, PawfeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn server(status: u16) -> PawfeedError {
        PawfeedError::Network(NetworkError::Server {
            status,
            message: None,
        })
    }

    #[test]
    fn exit_codes_follow_network_kind() {
        assert_eq!(
            PawfeedError::Network(NetworkError::Timeout).exit_code(),
            ExitCode::Timeout
        );
        assert_eq!(server(404).exit_code(), ExitCode::ServerError);
        assert_eq!(
            PawfeedError::Network(NetworkError::BadUrl("x".into())).exit_code(),
            ExitCode::UsageError
        );
        assert_eq!(
            PawfeedError::Config("bad".into()).exit_code(),
            ExitCode::UsageError
        );
        assert_eq!(
            PawfeedError::Other(anyhow::anyhow!("boom")).exit_code(),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn error_codes_carry_category_prefix() {
        let errors = [
            PawfeedError::Network(NetworkError::Timeout),
            PawfeedError::Config("x".into()),
            PawfeedError::InvalidArgument("x".into()),
            PawfeedError::Other(anyhow::anyhow!("x")),
        ];
        for err in &errors {
            let prefix = format!("PAWF-{}", err.category().code_prefix());
            assert!(
                err.error_code().starts_with(&prefix),
                "{} should start with {prefix}",
                err.error_code()
            );
        }
    }

    #[test]
    fn retryable_only_for_transient_failures() {
        assert!(PawfeedError::Network(NetworkError::Timeout).is_retryable());
        assert!(server(503).is_retryable());
        assert!(server(429).is_retryable());
        assert!(!server(404).is_retryable());
        assert!(!PawfeedError::Config("x".into()).is_retryable());
    }

    #[test]
    fn network_error_display_is_transparent() {
        let err = PawfeedError::from(NetworkError::Timeout);
        assert_eq!(err.to_string(), "request timed out");
    }

    #[test]
    fn every_network_error_has_suggestions() {
        let errors = [
            PawfeedError::Network(NetworkError::Timeout),
            server(500),
            PawfeedError::Network(NetworkError::BadUrl("nope".into())),
            PawfeedError::Network(NetworkError::no_data()),
        ];
        for err in &errors {
            assert!(!err.fix_suggestions().is_empty(), "{err:?}");
        }
    }
}
