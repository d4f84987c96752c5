//! Request-failure taxonomy for the transport/decode pipeline.
//!
//! Every call into [`crate::core::http::ApiClient`] ends in exactly one of
//! these variants or a decoded value. None of them are retried internally.

use thiserror::Error;

/// Why a single API request failed.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The composed URL was not a valid absolute http(s) URL.
    #[error("bad URL: {0}")]
    BadUrl(String),

    /// The response body could not be decoded into the requested type.
    #[error("failed to decode response: {0}")]
    Decoding(#[source] anyhow::Error),

    /// The server answered with a status outside 200..=299.
    #[error("server error {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The transport gave up waiting for the server.
    #[error("request timed out")]
    Timeout,

    /// Anything else: connection failures, empty bodies, encoding problems.
    #[error("unknown network error: {0}")]
    Unknown(#[source] anyhow::Error),
}

impl NetworkError {
    /// HTTP status carried by a server error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-friendly name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BadUrl(_) => "bad_url",
            Self::Decoding(_) => "decoding",
            Self::Server { .. } => "server",
            Self::Timeout => "timeout",
            Self::Unknown(_) => "unknown",
        }
    }

    pub(crate) fn no_data() -> Self {
        Self::Unknown(anyhow::anyhow!("No data"))
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Unknown(e.into())
        }
    }
}
