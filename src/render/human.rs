//! Human-readable output using colored.
//!
//! Every item renders as a single line so output stays greppable.

use colored::Colorize;

use super::Render;
use crate::core::models::{Comment, FollowUser, Like, PagedPosts, Post, User};

/// Applies (or skips) terminal styling.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    #[must_use]
    pub fn accent(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan())
    }

    #[must_use]
    pub fn muted(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    #[must_use]
    pub fn good(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    #[must_use]
    pub fn bad(&self, text: &str) -> String {
        self.paint(text, |t| t.red().bold())
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> colored::ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn author(palette: &Palette, username: Option<&str>, user_id: i64) -> String {
    username.map_or_else(
        || palette.muted(&format!("user #{user_id}")),
        |name| palette.accent(&format!("@{name}")),
    )
}

impl Render for User {
    fn human(&self, palette: &Palette) -> String {
        format!(
            "{} {} {}  {} followers  {} following",
            palette.muted(&format!("#{}", self.id)),
            palette.heading(&self.username),
            palette.muted(&format!("({})", self.uid)),
            self.follower_count,
            self.following_count,
        )
    }
}

impl Render for Post {
    fn human(&self, palette: &Palette) -> String {
        let mut line = format!(
            "{} {}",
            palette.muted(&format!("#{}", self.id)),
            palette.heading(&self.breed)
        );
        if let Some(confidence) = self.confidence {
            line.push_str(&format!(" {:.0}%", confidence * 100.0));
        }
        line.push_str(&format!(
            " by {}  {} likes  {} comments",
            author(palette, self.username.as_deref(), self.user_id),
            self.like_count,
            self.comment_count,
        ));
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            line.push_str(&format!("  {}", palette.muted(description)));
        }
        line
    }
}

impl Render for PagedPosts {
    fn human(&self, palette: &Palette) -> String {
        let mut out = self.posts.human(palette);
        out.push('\n');
        out.push_str(&palette.muted(&format!(
            "{} posts on this page, {} pages total",
            self.posts.len(),
            self.total_pages
        )));
        out
    }
}

impl Render for Comment {
    fn human(&self, palette: &Palette) -> String {
        format!(
            "{} {}: {}",
            palette.muted(&format!("#{}", self.id)),
            author(palette, self.username.as_deref(), self.user_id),
            self.text
        )
    }
}

impl Render for Like {
    fn human(&self, palette: &Palette) -> String {
        format!(
            "{} likes post #{}",
            author(palette, self.username.as_deref(), self.user_id),
            self.post_id
        )
    }
}

impl Render for FollowUser {
    fn human(&self, palette: &Palette) -> String {
        format!(
            "{} {}",
            palette.muted(&format!("#{}", self.id)),
            palette.accent(&format!("@{}", self.username))
        )
    }
}

impl<T: Render> Render for Vec<T> {
    fn human(&self, palette: &Palette) -> String {
        if self.is_empty() {
            return palette.muted("(none)");
        }
        self.iter()
            .map(|item| item.human(palette))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Plain-text acknowledgements and uploaded image URLs.
impl Render for String {
    fn human(&self, palette: &Palette) -> String {
        palette.good(self)
    }
}

impl Render for bool {
    fn human(&self, _palette: &Palette) -> String {
        self.to_string()
    }
}
