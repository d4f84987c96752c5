//! Structured test logging.
//!
//! A `TestLogger` prints phase-tagged lines to stderr (and optionally a file)
//! so a failing integration test shows how far it got.
//!
//! ```rust,ignore
//! let log = TestLogger::new("posts_page_decodes");
//! log.phase("setup");
//! // ... mount mocks ...
//! log.phase("execute");
//! log.http_request("GET", &url);
//! log.finish_ok();
//! ```
//!
//! # Environment Variables
//!
//! - `PAWFEED_TEST_LOG` - minimum level: trace, debug, info, warn, error (default: info)
//! - `PAWFEED_TEST_LOG_FILE` - also append plain lines to this file
//! - `PAWFEED_TEST_LOG_JSON` - "1" or "true" for one JSON object per line
#![allow(dead_code)]

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use super::log_capture::TestLogCapture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

struct Settings {
    min_level: LogLevel,
    json: bool,
    file: Option<Mutex<File>>,
}

fn settings() -> &'static Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS.get_or_init(|| Settings {
        min_level: std::env::var("PAWFEED_TEST_LOG")
            .ok()
            .and_then(|s| LogLevel::parse(&s))
            .unwrap_or(LogLevel::Info),
        json: std::env::var("PAWFEED_TEST_LOG_JSON")
            .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        file: std::env::var("PAWFEED_TEST_LOG_FILE").ok().and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
                .map(Mutex::new)
        }),
    })
}

#[derive(Serialize)]
struct Entry<'a> {
    timestamp: String,
    level: LogLevel,
    test: &'a str,
    phase: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u64>,
}

/// Per-test logger with phase and duration tracking.
pub struct TestLogger {
    test_name: String,
    started: Instant,
    phase: Mutex<String>,
}

impl TestLogger {
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        let logger = Self {
            test_name: test_name.to_string(),
            started: Instant::now(),
            phase: Mutex::new("init".to_string()),
        };
        logger.info("Test starting");
        logger
    }

    /// Logger plus a tracing capture scoped to the current thread.
    #[must_use]
    pub fn with_capture(test_name: &str) -> (Self, TestLogCapture) {
        let capture = TestLogCapture::start();
        (Self::new(test_name), capture)
    }

    pub fn phase(&self, phase: &str) {
        if let Ok(mut current) = self.phase.lock() {
            *current = phase.to_string();
        }
        self.emit(LogLevel::Debug, &format!("Phase: {phase}"), None);
    }

    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message, None);
    }

    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message, None);
    }

    pub fn http_request(&self, method: &str, url: &str) {
        self.debug(&format!("HTTP {method} {url}"));
    }

    pub fn http_response(&self, status: u16) {
        self.debug(&format!("HTTP response {status}"));
    }

    pub fn finish_ok(&self) {
        let ms = self.elapsed_ms();
        self.emit(LogLevel::Info, &format!("Test passed ({ms}ms)"), Some(ms));
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn emit(&self, level: LogLevel, message: &str, duration_ms: Option<u64>) {
        let settings = settings();
        if level < settings.min_level {
            return;
        }
        let phase = self
            .phase
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default();
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();

        let line = if settings.json {
            serde_json::to_string(&Entry {
                timestamp,
                level,
                test: &self.test_name,
                phase: &phase,
                message,
                duration_ms,
            })
            .unwrap_or_default()
        } else {
            format!("[{timestamp}] [{level}] [{}:{phase}] {message}", self.test_name)
        };

        eprintln!("{line}");
        if let Some(file) = &settings.file
            && let Ok(mut file) = file.lock()
        {
            let _ = writeln!(file, "{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_and_order() {
        assert_eq!(LogLevel::parse("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!(LogLevel::Debug < LogLevel::Error);
    }

    #[test]
    fn logger_tracks_phases() {
        let log = TestLogger::new("logger_tracks_phases");
        log.phase("execute");
        assert_eq!(*log.phase.lock().unwrap(), "execute");
        log.finish_ok();
    }
}
