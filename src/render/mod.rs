//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
pub use human::Palette;

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub no_color: bool,
}

/// A value that can be printed as command output.
///
/// JSON output uses the `Serialize` impl; human output uses [`Self::human`].
pub trait Render: Serialize {
    /// Human-readable rendering, one line per item.
    fn human(&self, palette: &Palette) -> String;
}

/// Render `value` according to `options`.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn render<T: Render + ?Sized>(value: &T, options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => robot::render_json(value, options.pretty),
        OutputFormat::Human => Ok(value.human(&Palette::new(!options.no_color))),
    }
}
