//! Robot-mode output (JSON).

use serde::Serialize;

use crate::error::Result;

/// Render any serializable value as compact or pretty JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}
