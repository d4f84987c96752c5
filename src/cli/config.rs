//! `pawfeed config` subcommands.

use serde::Serialize;

use super::Session;
use super::args::ConfigCommand;
use crate::error::Result;
use crate::render::{Palette, Render};
use crate::storage::config::ResolvedConfig;

/// Resolved settings with their sources.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    pub config_path: String,
    pub config_file_exists: bool,
    pub settings: Vec<ConfigEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigEntry {
    pub key: &'static str,
    pub value: String,
    pub source: String,
}

impl ConfigReport {
    #[must_use]
    pub fn from_resolved(config: &ResolvedConfig) -> Self {
        let s = &config.sources;
        let entry = |key: &'static str, value: String, source: crate::storage::ConfigSource| ConfigEntry {
            key,
            value,
            source: source.to_string(),
        };
        Self {
            config_path: config.config_path.display().to_string(),
            config_file_exists: config.config_path.exists(),
            settings: vec![
                entry("base_url", config.base_url.clone(), s.base_url),
                entry(
                    "timeout_seconds",
                    config.timeout.as_secs().to_string(),
                    s.timeout,
                ),
                entry("user_agent", config.user_agent.clone(), s.user_agent),
                entry("format", config.format.as_str().to_string(), s.format),
                entry("pretty", config.pretty.to_string(), s.pretty),
                entry("color", (!config.no_color).to_string(), s.no_color),
            ],
        }
    }
}

impl Render for ConfigReport {
    fn human(&self, palette: &Palette) -> String {
        let mut lines = vec![format!(
            "{} {}{}",
            palette.heading("Config file:"),
            self.config_path,
            if self.config_file_exists {
                String::new()
            } else {
                palette.muted(" (not present, using defaults)")
            }
        )];
        for setting in &self.settings {
            lines.push(format!(
                "  {:<16} {}  {}",
                setting.key,
                palette.accent(&setting.value),
                palette.muted(&format!("({})", setting.source))
            ));
        }
        lines.join("\n")
    }
}

/// Execute a config subcommand.
///
/// # Errors
///
/// Returns error if JSON serialization fails.
pub fn execute(cmd: &ConfigCommand, session: &Session) -> Result<()> {
    match cmd {
        ConfigCommand::Show => session.emit(&ConfigReport::from_resolved(&session.config)),
        ConfigCommand::Path => session.emit(&session.config.config_path.display().to_string()),
    }
}
