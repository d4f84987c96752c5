//! Test utilities for pawfeed.
//!
//! Provides shared helpers, test data factories, and assertion macros
//! for use across all test modules.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pawfeed::test_utils::*;
//!
//! let page = make_test_paged_posts(2, 3);
//! let api = make_test_api("http://127.0.0.1:8080");
//! let dir = TestDir::new();
//! dir.create_file("config.toml", &make_test_config_toml("http://127.0.0.1:8080"));
//! ```

use chrono::{TimeZone, Utc};
use image::{DynamicImage, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::api::SocialApi;
use crate::core::http::ApiConfig;
use crate::core::models::{Comment, FollowUser, Like, PagedPosts, Post, User};

// =============================================================================
// Test Data Factories
// =============================================================================

/// Create a test `User` with follower counts filled in.
#[must_use]
pub fn make_test_user(id: i64, username: &str) -> User {
    User {
        id,
        uid: format!("uid-{id}"),
        username: username.to_string(),
        email: Some(format!("{username}@example.com")),
        profile_image_url: None,
        notification_token: None,
        follower_count: 4,
        following_count: 2,
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).single(),
    }
}

/// Create a test `Post` by user 7 with a beagle prediction.
#[must_use]
pub fn make_test_post(id: i64) -> Post {
    Post {
        id,
        user_id: 7,
        username: Some("rex".to_string()),
        image_url: format!("https://cdn.example.com/posts/{id}.jpg"),
        breed: "beagle".to_string(),
        confidence: Some(0.87),
        description: Some("found a stick".to_string()),
        like_count: 3,
        comment_count: 1,
        created_at: Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).single(),
    }
}

/// Create a feed page with `count` posts (ids 1..=count).
#[must_use]
pub fn make_test_paged_posts(count: i64, total_pages: u32) -> PagedPosts {
    PagedPosts {
        posts: (1..=count).map(make_test_post).collect(),
        total_pages,
    }
}

#[must_use]
pub fn make_test_comment(id: i64, post_id: i64) -> Comment {
    Comment {
        id,
        post_id,
        user_id: 7,
        username: Some("rex".to_string()),
        text: "good dog".to_string(),
        created_at: None,
    }
}

#[must_use]
pub fn make_test_like(post_id: i64, user_id: i64) -> Like {
    Like {
        id: Some(post_id * 100 + user_id),
        post_id,
        user_id,
        username: None,
    }
}

#[must_use]
pub fn make_test_follow_user(id: i64, username: &str) -> FollowUser {
    FollowUser {
        id,
        username: username.to_string(),
        profile_image_url: None,
    }
}

/// Solid-color RGB image of the given size.
#[must_use]
pub fn make_test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([180, 140, 90])))
}

/// Connection settings pointing at a mock server, with a short timeout.
#[must_use]
pub fn make_test_api_config(base_url: &str) -> ApiConfig {
    ApiConfig::new(base_url).with_timeout(Duration::from_secs(5))
}

/// API client pointing at a mock server.
///
/// # Panics
///
/// Panics if the HTTP client cannot be constructed.
#[must_use]
pub fn make_test_api(base_url: &str) -> SocialApi {
    SocialApi::from_config(make_test_api_config(base_url)).expect("Failed to build test client")
}

/// A config file pointing the CLI at `base_url`.
#[must_use]
pub fn make_test_config_toml(base_url: &str) -> String {
    format!(
        r#"[api]
base_url = "{base_url}"
timeout_seconds = 5

[output]
color = false
pretty = false

[general]
log_level = "warn"
"#
    )
}

// =============================================================================
// Temporary Directory Helper
// =============================================================================

/// Isolated temporary directory, removed on drop.
///
/// ```rust,ignore
/// use pawfeed::test_utils::TestDir;
///
/// let dir = TestDir::new();
/// dir.create_file("config.toml", "[api]\ntimeout_seconds = 30");
/// assert!(dir.file_path("config.toml").exists());
/// ```
pub struct TestDir {
    inner: tempfile::TempDir,
}

impl TestDir {
    /// Create a new isolated temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: tempfile::tempdir().expect("Failed to create temp directory"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Create a file with the given content, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.inner.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Save `image` as a PNG and return its path.
    ///
    /// # Panics
    ///
    /// Panics if the image cannot be written.
    pub fn create_image(&self, name: &str, image: &DynamicImage) -> PathBuf {
        let path = self.inner.path().join(name);
        image.save(&path).expect("Failed to write test image");
        path
    }

    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Assertion Macros
// =============================================================================

/// Assert that a string contains a substring.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack = $haystack;
        let needle = $needle;
        assert!(
            haystack.contains(needle),
            "Expected string to contain {:?}\n\nActual string:\n{:?}",
            needle,
            haystack
        );
    };
}

/// Assert that a string is valid JSON.
#[macro_export]
macro_rules! assert_json_valid {
    ($json:expr) => {
        let json = $json;
        if let Err(e) = serde_json::from_str::<serde_json::Value>(json) {
            panic!(
                "Expected valid JSON, but parsing failed: {}\n\nJSON string:\n{}",
                e, json
            );
        }
    };
}

/// Assert that a string does NOT contain ANSI escape codes.
#[macro_export]
macro_rules! assert_no_ansi_codes {
    ($text:expr) => {
        let text = $text;
        assert!(
            !text.contains('\x1b'),
            "Expected string to NOT contain ANSI escape codes.\n\nActual string:\n{:?}",
            text
        );
    };
}
