//! pawfeed - command-line client for the dog-breed social backend.
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use pawfeed::cli::{self, Cli};
use pawfeed::core::logging::{self, LogSettings};
use pawfeed::storage::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The config file is read before logging starts so its log level applies.
    let config_path = Config::config_path();
    let file_config = Config::load_from(&config_path);

    let settings = LogSettings::resolve(
        cli.log_level.as_deref(),
        cli.json_output,
        file_config
            .as_ref()
            .ok()
            .and_then(|c| c.general.log_level.as_deref()),
        cli.verbose,
    );
    logging::init(&settings);

    let format = cli::error_format(&cli);
    let no_color = cli.no_color;
    let pretty = cli.pretty;

    let result = match file_config {
        Ok(config) => cli::run(cli, config, config_path).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), "Command failed: {e}");
            let rendered = pawfeed::render::error::render_error(&e, format, no_color, pretty);
            eprintln!("{rendered}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
