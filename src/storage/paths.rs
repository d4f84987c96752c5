//! Application paths.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Configuration directory.
    pub config: PathBuf,
}

impl AppPaths {
    /// Create paths for the pawfeed application.
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("app", "pawfeed", "pawfeed") {
            Self {
                config: proj_dirs.config_dir().to_path_buf(),
            }
        } else {
            // No resolvable home directory; fall back to the working directory.
            let home = directories::BaseDirs::new()
                .map_or_else(|| PathBuf::from("."), |d| d.home_dir().to_path_buf());
            Self {
                config: home.join(".config/pawfeed"),
            }
        }
    }

    /// Default config file path.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config.join(CONFIG_FILE_NAME)
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
