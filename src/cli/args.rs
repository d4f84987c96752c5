//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;

use crate::error::{PawfeedError, Result};

/// pawfeed - command-line client for the dog-breed social backend.
#[derive(Parser, Debug)]
#[command(name = "pawfeed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    // === Global flags ===
    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Backend base URL
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// User accounts
    #[command(subcommand)]
    Users(UsersCommand),

    /// Posts and the feed
    #[command(subcommand)]
    Posts(PostsCommand),

    /// Comments on posts
    #[command(subcommand)]
    Comments(CommentsCommand),

    /// Likes on posts
    #[command(subcommand)]
    Likes(LikesCommand),

    /// Follow relationships
    #[command(subcommand)]
    Follows(FollowsCommand),

    /// Resize, compress and upload an image; prints the stored URL
    Upload {
        /// JPEG or PNG file to upload
        file: PathBuf,
    },

    /// List backend endpoints, or show one by name
    Endpoints {
        /// Endpoint name, e.g. `all-posts`
        name: Option<String>,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// Check whether an account exists for a uid
    Check {
        #[arg(long)]
        uid: String,
    },
    /// Create a user from a JSON payload
    Create(PayloadArgs),
    /// Fetch a user by id or uid
    Get {
        #[arg(long, conflicts_with = "uid", required_unless_present = "uid")]
        id: Option<i64>,
        #[arg(long)]
        uid: Option<String>,
    },
    /// List all users
    List,
    /// Report a user
    Report {
        #[arg(long)]
        id: i64,
    },
    /// Update a user's push notification token
    Token {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        token: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PostsCommand {
    /// Fetch one page of the feed
    List {
        /// Page number, sent to the backend as given
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Posts per page
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Fetch a post by id
    Get {
        #[arg(long)]
        id: i64,
    },
    /// List posts authored by a user
    ByUser {
        #[arg(long)]
        user_id: i64,
    },
    /// Create a post from a JSON payload
    Create(PayloadArgs),
    /// Watch a post for activity
    Watch {
        #[arg(long)]
        id: i64,
    },
    /// Report a post
    Report {
        #[arg(long)]
        id: i64,
    },
    /// Delete a post
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommentsCommand {
    /// Add a comment from a JSON payload
    Add(PayloadArgs),
    /// List comments on a post
    List {
        #[arg(long)]
        post_id: i64,
    },
    /// Delete a comment
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum LikesCommand {
    /// Like a post
    Add {
        #[arg(long)]
        post_id: i64,
        #[arg(long)]
        user_id: i64,
    },
    /// Remove a like
    Remove {
        #[arg(long)]
        post_id: i64,
        #[arg(long)]
        user_id: i64,
    },
    /// List likes on a post
    List {
        #[arg(long)]
        post_id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum FollowsCommand {
    /// Follow a user
    Add {
        #[arg(long)]
        follower_id: i64,
        #[arg(long)]
        following_id: i64,
    },
    /// Stop following a user
    Remove {
        #[arg(long)]
        follower_id: i64,
        #[arg(long)]
        following_id: i64,
    },
    /// List a user's followers
    Followers {
        #[arg(long)]
        user_id: i64,
    },
    /// List who a user follows
    Following {
        #[arg(long)]
        user_id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show resolved settings and where each came from
    Show,
    /// Print the config file path
    Path,
}

/// JSON request payload, inline or from a file.
#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Inline JSON payload
    #[arg(long, conflicts_with = "data_file", required_unless_present = "data_file")]
    pub data: Option<String>,

    /// Path to a JSON payload file
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

impl PayloadArgs {
    /// Read and parse the payload.
    ///
    /// # Errors
    ///
    /// [`PawfeedError::InvalidArgument`] if no payload was given or it does
    /// not parse as `T`; I/O errors reading `--data-file`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        let (raw, origin) = match (&self.data, &self.data_file) {
            (Some(inline), _) => (inline.clone(), "--data".to_string()),
            (None, Some(path)) => (std::fs::read_to_string(path)?, path.display().to_string()),
            (None, None) => {
                return Err(PawfeedError::InvalidArgument(
                    "one of --data or --data-file is required".to_string(),
                ));
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| PawfeedError::InvalidArgument(format!("invalid payload in {origin}: {e}")))
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable one line per item
    #[default]
    Human,
    /// JSON output
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
        }
    }
}
