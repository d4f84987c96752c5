//! Error rendering for pawfeed.
//!
//! Human mode prints the error, its code and the first fix suggestion.
//! JSON mode prints a structured object for machine consumption.

use super::Palette;
use crate::cli::args::OutputFormat;
use crate::error::{FixSuggestion, PawfeedError};

/// Render an error for stderr.
#[must_use]
pub fn render_error(error: &PawfeedError, format: OutputFormat, no_color: bool, pretty: bool) -> String {
    match format {
        OutputFormat::Json => render_error_json(error, pretty),
        OutputFormat::Human => {
            let palette = Palette::new(!no_color && crate::util::env::stderr_is_tty());
            render_text(error, &palette)
        }
    }
}

/// Render error as structured JSON.
#[must_use]
pub fn render_error_json(error: &PawfeedError, pretty: bool) -> String {
    let json = ErrorJson::from_error(error);
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    rendered.unwrap_or_else(|_| render_text(error, &Palette::plain()))
}

fn render_text(error: &PawfeedError, palette: &Palette) -> String {
    let suggestions = error.fix_suggestions();

    let mut lines = vec![format!(
        "{} {}",
        palette.bad(&format!("Error [{}]:", error.error_code())),
        error
    )];

    if let Some(suggestion) = suggestions.first() {
        if !suggestion.context.is_empty() {
            lines.push(format!("  {}", suggestion.context));
        }
        if let Some(cmd) = suggestion.commands.first() {
            lines.push(format!("Fix: {}", palette.accent(cmd)));
        }
        if let Some(prevention) = &suggestion.prevention {
            lines.push(palette.muted(&format!("Tip: {prevention}")));
        }
    }

    lines.join("\n")
}

// =============================================================================
// JSON Rendering
// =============================================================================

#[derive(serde::Serialize)]
struct ErrorJson {
    error_code: String,
    category: String,
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    message: String,
    is_retryable: bool,
    suggestions: Vec<SuggestionJson>,
}

#[derive(serde::Serialize)]
struct SuggestionJson {
    commands: Vec<String>,
    context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prevention: Option<String>,
}

impl From<FixSuggestion> for SuggestionJson {
    fn from(s: FixSuggestion) -> Self {
        Self {
            commands: s.commands,
            context: s.context,
            prevention: s.prevention,
        }
    }
}

impl ErrorJson {
    fn from_error(error: &PawfeedError) -> Self {
        let network = match error {
            PawfeedError::Network(e) => Some(e),
            _ => None,
        };
        Self {
            error_code: error.error_code().to_string(),
            category: error.category().description().to_string(),
            kind: network.map(crate::error::NetworkError::kind),
            status: network.and_then(crate::error::NetworkError::status),
            message: error.to_string(),
            is_retryable: error.is_retryable(),
            suggestions: error
                .fix_suggestions()
                .into_iter()
                .map(SuggestionJson::from)
                .collect(),
        }
    }
}
