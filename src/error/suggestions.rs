//! Fix suggestion database for pawfeed errors.
//!
//! Provides actionable fix suggestions mapped to specific error types,
//! including commands, context explanations, and prevention tips.

// =============================================================================
// Fix Suggestion Types
// =============================================================================

/// A fix suggestion for an error.
///
/// Contains actionable information to help users resolve errors.
#[derive(Debug, Clone)]
pub struct FixSuggestion {
    /// Primary fix commands in order of preference.
    /// These should be copy-paste ready for the terminal.
    pub commands: Vec<String>,

    /// Explanation of why this error occurred.
    pub context: String,

    /// Tips to prevent this error in the future.
    pub prevention: Option<String>,
}

impl FixSuggestion {
    /// Creates a new fix suggestion with required fields.
    #[must_use]
    pub fn new(commands: Vec<String>, context: impl Into<String>) -> Self {
        Self {
            commands,
            context: context.into(),
            prevention: None,
        }
    }

    /// Builder: adds prevention tips.
    #[must_use]
    pub fn with_prevention(mut self, prevention: impl Into<String>) -> Self {
        self.prevention = Some(prevention.into());
        self
    }
}

// =============================================================================
// Suggestion Generators
// =============================================================================

/// Generates fix suggestions for request timeouts.
#[must_use]
pub fn timeout_suggestions() -> Vec<FixSuggestion> {
    vec![
        FixSuggestion::new(
            vec![
                "pawfeed --timeout 120 <command>".to_string(),
                "pawfeed config show".to_string(),
            ],
            "The backend did not answer within the request timeout. The server may be \
             overloaded or the network path to it may be slow.",
        )
        .with_prevention("Raise `timeout_seconds` in the [api] section of config.toml."),
    ]
}

/// Generates fix suggestions for non-2xx responses.
#[must_use]
pub fn server_error_suggestions(status: u16, message: Option<&str>) -> Vec<FixSuggestion> {
    let detail = message.map(|m| format!(" Server said: {m}")).unwrap_or_default();
    let context = match status {
        400 | 422 => format!("The backend rejected the request payload ({status}).{detail}"),
        401 | 403 => format!("The backend refused access ({status}).{detail}"),
        404 => format!("The requested record does not exist ({status}).{detail}"),
        429 => format!("The backend is rate limiting requests ({status}).{detail}"),
        s if s >= 500 => format!("The backend failed while handling the request ({s}).{detail}"),
        s => format!("The backend answered with status {s}.{detail}"),
    };
    vec![FixSuggestion::new(
        vec!["pawfeed --verbose <command>".to_string()],
        context,
    )]
}

/// Generates fix suggestions for undecodable response bodies.
#[must_use]
pub fn decoding_suggestions(cause: &str) -> Vec<FixSuggestion> {
    vec![
        FixSuggestion::new(
            vec!["pawfeed --log-level debug <command>".to_string()],
            format!(
                "The response did not match the expected shape: {cause}. The backend API \
                 may have changed or the base URL may point at a different service."
            ),
        )
        .with_prevention("Check `base_url` with `pawfeed config show`."),
    ]
}

/// Generates fix suggestions for malformed URLs.
#[must_use]
pub fn bad_url_suggestions(url: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![
            "pawfeed config show".to_string(),
            "pawfeed --base-url https://<host>/ <command>".to_string(),
        ],
        format!("'{url}' is not a valid http(s) URL. Check the configured base URL."),
    )]
}

/// Generates fix suggestions for unclassified transport failures.
#[must_use]
pub fn unknown_network_suggestions(cause: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["pawfeed config show".to_string()],
        format!("The request could not be completed: {cause}. Check your connection and the base URL."),
    )]
}

/// Generates fix suggestions for config parse errors.
#[must_use]
pub fn config_parse_suggestions(path: &str, message: &str) -> Vec<FixSuggestion> {
    vec![
        FixSuggestion::new(
            vec![format!("$EDITOR {path}"), "pawfeed config path".to_string()],
            format!("The configuration file at {path} is not valid TOML: {message}"),
        )
        .with_prevention("Delete the file to fall back to built-in defaults."),
    ]
}

/// Generates fix suggestions for invalid config values.
#[must_use]
pub fn config_invalid_suggestions(key: &str, value: &str, message: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["pawfeed config show".to_string()],
        format!("The value '{value}' for '{key}' is invalid: {message}"),
    )]
}

/// Generates fix suggestions for unreadable images.
#[must_use]
pub fn image_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![format!("file {path}")],
        "Only JPEG and PNG images can be uploaded.",
    )]
}
