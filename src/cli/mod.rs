//! CLI argument parsing and command dispatch.

pub mod args;
pub mod comments;
pub mod config;
pub mod endpoints;
pub mod follows;
pub mod likes;
pub mod posts;
pub mod upload;
pub mod users;

use std::path::PathBuf;

pub use args::{Cli, Commands, OutputFormat};

use crate::core::api::SocialApi;
use crate::error::Result;
use crate::render::{self, Render, RenderOptions};
use crate::storage::config::{Config, ENV_FORMAT, ResolvedConfig};

/// Resolved settings plus output handling for one invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: ResolvedConfig,
    pub output: RenderOptions,
}

impl Session {
    /// Validate the loaded config file and merge it with CLI flags and env.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any value is invalid.
    pub fn new(cli: &Cli, file_config: &Config, config_path: PathBuf) -> Result<Self> {
        file_config.validate()?;
        let config = ResolvedConfig::resolve_with(cli, file_config, config_path)?;
        let output = RenderOptions {
            format: config.format,
            pretty: config.pretty,
            no_color: !crate::util::env::should_use_color(config.no_color),
        };
        tracing::debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            format = config.format.as_str(),
            "Resolved configuration"
        );
        Ok(Self { config, output })
    }

    /// Client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn api(&self) -> Result<SocialApi> {
        Ok(SocialApi::from_config(self.config.api_config())?)
    }

    /// Print `value` to stdout in the configured format.
    ///
    /// # Errors
    ///
    /// Returns error if JSON serialization fails.
    pub fn emit<T: Render + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", render::render(value, self.output)?);
        Ok(())
    }
}

/// Dispatch a parsed command.
///
/// # Errors
///
/// Any error produced by the command.
pub async fn run(cli: Cli, file_config: Config, config_path: PathBuf) -> Result<()> {
    let session = Session::new(&cli, &file_config, config_path)?;

    match cli.command {
        Commands::Users(cmd) => users::execute(cmd, &session).await,
        Commands::Posts(cmd) => posts::execute(cmd, &session).await,
        Commands::Comments(cmd) => comments::execute(cmd, &session).await,
        Commands::Likes(cmd) => likes::execute(cmd, &session).await,
        Commands::Follows(cmd) => follows::execute(cmd, &session).await,
        Commands::Upload { file } => upload::execute(&file, &session).await,
        Commands::Endpoints { name } => endpoints::execute(name.as_deref(), &session),
        Commands::Config(cmd) => config::execute(&cmd, &session),
    }
}

/// Format used to report errors, available before configuration resolves.
#[must_use]
pub fn error_format(cli: &Cli) -> OutputFormat {
    if cli.json {
        return OutputFormat::Json;
    }
    if let Some(format) = cli.format {
        return format;
    }
    match std::env::var(ENV_FORMAT) {
        Ok(v) if v.trim().eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Human,
    }
}
