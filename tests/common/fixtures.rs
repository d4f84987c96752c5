//! Canned backend payloads and mock-server helpers for integration tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use common::fixtures::*;
//!
//! let server = MockServer::start().await;
//! mount_json(&server, "GET", "/api/post/all", 200, paged_posts_json(2, 3)).await;
//! let api = make_test_api(&server.uri());
//! ```
#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub use pawfeed::test_utils::{TestDir, make_test_api, make_test_api_config, make_test_image};

// =============================================================================
// Payloads
// =============================================================================

/// A user as the backend serializes it.
#[must_use]
pub fn user_json(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "uid": format!("uid-{id}"),
        "username": username,
        "email": format!("{username}@example.com"),
        "followerCount": 4,
        "followingCount": 2,
        "createdAt": "2026-03-01T10:00:00Z"
    })
}

/// A post as the backend serializes it.
#[must_use]
pub fn post_json(id: i64, breed: &str) -> Value {
    json!({
        "id": id,
        "userId": 7,
        "username": "rex",
        "imageUrl": format!("https://cdn.example.com/posts/{id}.jpg"),
        "breed": breed,
        "confidence": 0.87,
        "description": "found a stick",
        "likeCount": 3,
        "commentCount": 1,
        "createdAt": "2026-03-02T08:30:00Z"
    })
}

/// One feed page with `count` posts.
#[must_use]
pub fn paged_posts_json(count: i64, total_pages: u32) -> Value {
    let posts: Vec<Value> = (1..=count).map(|id| post_json(id, "beagle")).collect();
    json!({ "posts": posts, "totalPages": total_pages })
}

#[must_use]
pub fn comment_json(id: i64, post_id: i64, text: &str) -> Value {
    json!({
        "id": id,
        "postId": post_id,
        "userId": 7,
        "username": "rex",
        "text": text
    })
}

#[must_use]
pub fn like_json(post_id: i64, user_id: i64) -> Value {
    json!({ "id": post_id * 100 + user_id, "postId": post_id, "userId": user_id })
}

#[must_use]
pub fn follow_user_json(id: i64, username: &str) -> Value {
    json!({ "id": id, "username": username })
}

// =============================================================================
// Mock helpers
// =============================================================================

/// Respond to `verb route` with a JSON body.
pub async fn mount_json(server: &MockServer, verb: &str, route: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Respond to `verb route` with a plain-text body.
pub async fn mount_text(server: &MockServer, verb: &str, route: &str, status: u16, body: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Query pairs of the single request the server received.
///
/// # Panics
///
/// Panics unless exactly one request was received.
pub async fn only_request_query(server: &MockServer) -> Vec<(String, String)> {
    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
