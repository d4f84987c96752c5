//! Configuration file loading and resolution.
//!
//! Loads configuration from:
//! - Linux: `~/.config/pawfeed/config.toml`
//! - macOS: `~/Library/Application Support/app.pawfeed.pawfeed/config.toml`
//! - Windows: `%APPDATA%/pawfeed/pawfeed/config/config.toml`
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `PAWFEED_BASE_URL`: Backend base URL
//! - `PAWFEED_TIMEOUT`: Request timeout in seconds
//! - `PAWFEED_FORMAT`: Output format (human, json)
//! - `PAWFEED_PRETTY`: Pretty-print JSON output (1, true, yes)
//! - `PAWFEED_NO_COLOR` or `NO_COLOR`: Disable colors
//! - `PAWFEED_CONFIG`: Override config file path

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use super::AppPaths;
use crate::cli::args::{Cli, OutputFormat};
use crate::core::http::{ApiConfig, DEFAULT_BASE_URL, default_user_agent};
use crate::error::{PawfeedError, Result};

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_BASE_URL: &str = "PAWFEED_BASE_URL";
pub const ENV_TIMEOUT: &str = "PAWFEED_TIMEOUT";
pub const ENV_FORMAT: &str = "PAWFEED_FORMAT";
pub const ENV_PRETTY: &str = "PAWFEED_PRETTY";
pub const ENV_NO_COLOR: &str = "PAWFEED_NO_COLOR";
/// Standard environment variable to disable colors.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
pub const ENV_CONFIG: &str = "PAWFEED_CONFIG";

/// Accepted timeout range in seconds.
pub const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=300;

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Final configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub format: OutputFormat,
    pub pretty: bool,
    pub no_color: bool,
    /// File the settings were read from (may not exist).
    pub config_path: PathBuf,
    /// Source of each setting for `config show`.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub base_url: ConfigSource,
    pub timeout: ConfigSource,
    pub user_agent: ConfigSource,
    pub format: ConfigSource,
    pub pretty: ConfigSource,
    pub no_color: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve against an already loaded config file.
    ///
    /// # Errors
    ///
    /// Returns an error if a CLI or env value fails validation.
    pub fn resolve_with(cli: &Cli, config: &Config, config_path: PathBuf) -> Result<Self> {
        let mut sources = ConfigSources::default();

        let base_url = Self::resolve_base_url(cli, config, &mut sources.base_url)?;
        let timeout = Self::resolve_timeout(cli, config, &mut sources.timeout)?;
        let user_agent = Self::resolve_user_agent(config, &mut sources.user_agent);
        let format = Self::resolve_format(cli, config, &mut sources.format)?;
        let pretty = Self::resolve_pretty(cli, config, &mut sources.pretty);
        let no_color = Self::resolve_no_color(cli, config, &mut sources.no_color);

        Ok(Self {
            base_url,
            timeout,
            user_agent,
            format,
            pretty,
            no_color,
            config_path,
            sources,
        })
    }

    /// Connection settings for the request layer.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone())
            .with_timeout(self.timeout)
            .with_user_agent(self.user_agent.clone())
    }

    fn resolve_base_url(cli: &Cli, config: &Config, source: &mut ConfigSource) -> Result<String> {
        // 1. CLI flag
        if let Some(url) = &cli.base_url {
            *source = ConfigSource::Cli;
            validate_base_url(url)?;
            return Ok(url.clone());
        }

        // 2. Environment variable
        if let Some(url) = env_value(ENV_BASE_URL) {
            *source = ConfigSource::Env;
            validate_base_url(&url)?;
            return Ok(url);
        }

        // 3. Config file
        if let Some(url) = &config.api.base_url {
            *source = ConfigSource::ConfigFile;
            return Ok(url.clone());
        }

        // 4. Default
        *source = ConfigSource::Default;
        Ok(DEFAULT_BASE_URL.to_string())
    }

    fn resolve_timeout(cli: &Cli, config: &Config, source: &mut ConfigSource) -> Result<Duration> {
        // 1. CLI flag
        if let Some(secs) = cli.timeout {
            *source = ConfigSource::Cli;
            validate_timeout(secs)?;
            return Ok(Duration::from_secs(secs));
        }

        // 2. Environment variable
        if let Some(raw) = env_value(ENV_TIMEOUT) {
            *source = ConfigSource::Env;
            let secs = raw.parse::<u64>().map_err(|_| PawfeedError::ConfigInvalid {
                key: ENV_TIMEOUT.to_string(),
                value: raw.clone(),
                message: "expected a whole number of seconds".to_string(),
            })?;
            validate_timeout(secs)?;
            return Ok(Duration::from_secs(secs));
        }

        // 3. Config file
        if let Some(secs) = config.api.timeout_seconds {
            *source = ConfigSource::ConfigFile;
            return Ok(Duration::from_secs(secs));
        }

        // 4. Default
        *source = ConfigSource::Default;
        Ok(crate::core::http::DEFAULT_TIMEOUT)
    }

    fn resolve_user_agent(config: &Config, source: &mut ConfigSource) -> String {
        if let Some(ua) = &config.api.user_agent {
            *source = ConfigSource::ConfigFile;
            return ua.clone();
        }
        *source = ConfigSource::Default;
        default_user_agent()
    }

    fn resolve_format(
        cli: &Cli,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<OutputFormat> {
        // 1. CLI --json shorthand or --format
        if cli.json {
            *source = ConfigSource::Cli;
            return Ok(OutputFormat::Json);
        }
        if let Some(format) = cli.format {
            *source = ConfigSource::Cli;
            return Ok(format);
        }

        // 2. Environment variable
        if let Some(raw) = env_value(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return parse_format(ENV_FORMAT, &raw);
        }

        // 3. Config file
        if let Some(raw) = &config.output.format {
            *source = ConfigSource::ConfigFile;
            return parse_format("output.format", raw);
        }

        // 4. Default
        *source = ConfigSource::Default;
        Ok(OutputFormat::Human)
    }

    fn resolve_pretty(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.pretty {
            *source = ConfigSource::Cli;
            return true;
        }
        if is_env_truthy(ENV_PRETTY) {
            *source = ConfigSource::Env;
            return true;
        }
        if config.output.pretty {
            *source = ConfigSource::ConfigFile;
            return true;
        }
        *source = ConfigSource::Default;
        false
    }

    fn resolve_no_color(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.no_color {
            *source = ConfigSource::Cli;
            return true;
        }

        // NO_COLOR disables color whenever it is present, regardless of value.
        if is_env_truthy(ENV_NO_COLOR) || std::env::var_os(ENV_NO_COLOR_STD).is_some() {
            *source = ConfigSource::Env;
            return true;
        }

        // Inverted: output.color = false means no_color = true.
        if !config.output.color {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var: &str) -> bool {
    std::env::var(var)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

fn parse_format(key: &str, raw: &str) -> Result<OutputFormat> {
    match raw.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        _ => Err(PawfeedError::ConfigInvalid {
            key: key.to_string(),
            value: raw.to_string(),
            message: "valid formats: human, json".to_string(),
        }),
    }
}

fn validate_base_url(raw: &str) -> Result<()> {
    let invalid = |message: &str| PawfeedError::ConfigInvalid {
        key: "base_url".to_string(),
        value: raw.to_string(),
        message: message.to_string(),
    };
    let url = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    Ok(())
}

fn validate_timeout(secs: u64) -> Result<()> {
    if TIMEOUT_RANGE.contains(&secs) {
        Ok(())
    } else {
        Err(PawfeedError::ConfigInvalid {
            key: "timeout_seconds".to_string(),
            value: secs.to_string(),
            message: "Timeout must be between 1 and 300 seconds".to_string(),
        })
    }
}

// =============================================================================
// Config File
// =============================================================================

/// Application configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend connection settings.
    pub api: ApiSection,
    /// Output settings.
    pub output: OutputConfig,
    /// General settings.
    pub general: GeneralConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json).
    pub format: Option<String>,
    /// Whether to use colors in output.
    pub color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty: false,
        }
    }
}

/// `[general]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
}

impl Config {
    /// Config file path, honoring `PAWFEED_CONFIG`.
    #[must_use]
    pub fn config_path() -> PathBuf {
        env_value(ENV_CONFIG).map_or_else(|| AppPaths::new().config_file(), PathBuf::from)
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error only if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PawfeedError::ConfigParse {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// [`PawfeedError::ConfigInvalid`] for a non-http(s) base URL, a timeout
    /// outside 1-300 seconds, or an unknown output format.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api.base_url {
            validate_base_url(url)?;
        }
        if let Some(secs) = self.api.timeout_seconds {
            validate_timeout(secs)?;
        }
        if let Some(format) = &self.output.format {
            parse_format("output.format", format)?;
        }
        Ok(())
    }
}
