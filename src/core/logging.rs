//! Diagnostic logging to stderr (or a file).
//!
//! Stdout is reserved for command output, so every subscriber built here
//! writes elsewhere. `RUST_LOG` wins over everything when set.

use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

pub const LOG_LEVEL_ENV: &str = "PAWFEED_LOG";
pub const LOG_FORMAT_ENV: &str = "PAWFEED_LOG_FORMAT";
pub const LOG_FILE_ENV: &str = "PAWFEED_LOG_FILE";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable logs.
    #[default]
    Human,
    /// JSON logs (one event per line).
    Json,
    /// Compact logs (single line, terse).
    Compact,
}

impl LogFormat {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Json => "json",
            Self::Compact => "compact",
        })
    }
}

/// Verbosity threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    #[default]
    Error,
}

impl LogLevel {
    /// Parse from a CLI, env or config value.
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "verbose" | "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn as_tracing_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse log level from `PAWFEED_LOG`.
#[must_use]
pub fn parse_log_level_from_env() -> Option<LogLevel> {
    env_value(LOG_LEVEL_ENV).and_then(|v| LogLevel::from_arg(&v))
}

/// Parse log format from `PAWFEED_LOG_FORMAT`.
#[must_use]
pub fn parse_log_format_from_env() -> Option<LogFormat> {
    env_value(LOG_FORMAT_ENV).and_then(|v| LogFormat::from_arg(&v))
}

/// Parse log file path from `PAWFEED_LOG_FILE`.
#[must_use]
pub fn parse_log_file_from_env() -> Option<PathBuf> {
    env_value(LOG_FILE_ENV).map(PathBuf::from)
}

/// Resolved logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    /// Resolve settings. Precedence: CLI > env > config file > default.
    ///
    /// `verbose` bumps the default level to debug but never overrides an
    /// explicit level.
    #[must_use]
    pub fn resolve(
        cli_level: Option<&str>,
        json_output: bool,
        config_level: Option<&str>,
        verbose: bool,
    ) -> Self {
        let explicit = cli_level
            .and_then(LogLevel::from_arg)
            .or_else(parse_log_level_from_env)
            .or_else(|| config_level.and_then(LogLevel::from_arg));
        let level = match explicit {
            Some(level) => level,
            None if verbose => LogLevel::Debug,
            None => LogLevel::default(),
        };

        let format = if json_output {
            LogFormat::Json
        } else {
            parse_log_format_from_env().unwrap_or_default()
        };

        Self {
            level,
            format,
            file: parse_log_file_from_env(),
        }
    }

    /// Filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("pawfeed={}", self.level.as_filter())
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(settings: &LogSettings) {
    let file = settings.file.as_ref().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    let writer = || -> BoxMakeWriter {
        match file.as_ref().and_then(|f| f.try_clone().ok()) {
            Some(f) => BoxMakeWriter::new(f),
            None => BoxMakeWriter::new(std::io::stderr),
        }
    };

    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(settings.default_directive()))
    };

    match settings.format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .json()
                .with_writer(writer())
                .with_span_events(FmtSpan::CLOSE)
                .try_init()
                .ok();
        }
        LogFormat::Compact => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .compact()
                .with_writer(writer())
                .with_target(true)
                .try_init()
                .ok();
        }
        LogFormat::Human => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(writer())
                .with_target(false)
                .without_time()
                .try_init()
                .ok();
        }
    }
}
