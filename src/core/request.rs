//! Request builder.
//!
//! Composes the URL (base + path + query) and a [`RequestDescriptor`] holding
//! everything the transport needs for one call. Descriptors are built once,
//! consumed by [`crate::core::http::ApiClient`], and never cached.

use std::time::Duration;

use reqwest::Url;
use serde::Serialize;

use crate::core::endpoint::{Endpoint, HttpMethod};
use crate::core::http::{ApiConfig, DEFAULT_TIMEOUT};
use crate::error::NetworkError;

/// Common HTTP header names and values.
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// A single file field of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field_name: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Body attached to a request descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Serialized JSON document.
    Json(Vec<u8>),
    /// One-file multipart form; the boundary is generated when sent.
    Multipart(FilePart),
}

/// Fully composed, ready-to-send description of one HTTP call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    url: Url,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    body: Option<RequestBody>,
    timeout: Duration,
}

impl RequestDescriptor {
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Headers in the order they were applied.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub const fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn into_parts(
        self,
    ) -> (Url, HttpMethod, Vec<(String, String)>, Option<RequestBody>, Duration) {
        (self.url, self.method, self.headers, self.body, self.timeout)
    }
}

/// Builder for [`RequestDescriptor`].
#[derive(Debug)]
pub struct RequestBuilder {
    base_url: String,
    path: String,
    method: HttpMethod,
    query: Vec<(String, String)>,
    body: Option<PendingBody>,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

#[derive(Debug)]
enum PendingBody {
    Json(serde_json::Result<Vec<u8>>),
    Multipart(FilePart),
}

impl RequestBuilder {
    /// Start a request for an arbitrary path.
    pub fn new(base_url: impl Into<String>, path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            method,
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Start a request for a registered endpoint using the config's base URL and timeout.
    #[must_use]
    pub fn endpoint(config: &ApiConfig, endpoint: Endpoint) -> Self {
        Self::new(config.base_url.as_str(), endpoint.path(), endpoint.method())
            .timeout(config.timeout)
    }

    /// Add a query parameter. Setting the same key again replaces the value.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        if let Some(slot) = self.query.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.query.push((key, value));
        }
        self
    }

    /// Add several query parameters.
    #[must_use]
    pub fn query_pairs<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        pairs
            .into_iter()
            .fold(self, |builder, (k, v)| builder.query(k, v))
    }

    /// Attach a JSON body. Ignored for GET and DELETE.
    #[must_use]
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = Some(PendingBody::Json(serde_json::to_vec(body)));
        self
    }

    /// Attach a single-file multipart body. Ignored for GET and DELETE.
    #[must_use]
    pub fn multipart_file(mut self, part: FilePart) -> Self {
        self.body = Some(PendingBody::Multipart(part));
        self
    }

    /// Add a header, replacing any existing header of the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Add several headers.
    #[must_use]
    pub fn headers<I, K, V>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        headers
            .into_iter()
            .fold(self, |builder, (k, v)| builder.header(k, v))
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Compose the URL and finish the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::BadUrl`] when base + path is not an absolute
    /// http(s) URL, and [`NetworkError::Unknown`] when the JSON body cannot be
    /// serialized.
    pub fn build(self) -> Result<RequestDescriptor, NetworkError> {
        let url = compose_url(&self.base_url, &self.path, &self.query)?;

        let mut headers = Vec::new();
        let body = match self.body {
            Some(pending) if self.method.carries_body() => match pending {
                PendingBody::Json(bytes) => {
                    let bytes = bytes.map_err(|e| NetworkError::Unknown(e.into()))?;
                    set_header(
                        &mut headers,
                        headers::CONTENT_TYPE.to_string(),
                        headers::CONTENT_TYPE_JSON.to_string(),
                    );
                    Some(RequestBody::Json(bytes))
                }
                PendingBody::Multipart(part) => Some(RequestBody::Multipart(part)),
            },
            Some(_) => {
                tracing::trace!(method = %self.method, "Dropping body for bodiless method");
                None
            }
            None => None,
        };

        for (name, value) in self.headers {
            set_header(&mut headers, name, value);
        }

        Ok(RequestDescriptor {
            url,
            method: self.method,
            headers,
            body,
            timeout: self.timeout,
        })
    }
}

/// Join base and path with exactly one slash and append the query pairs.
///
/// # Errors
///
/// Returns [`NetworkError::BadUrl`] if the result is not an absolute http(s) URL.
pub fn compose_url(
    base_url: &str,
    path: &str,
    query: &[(String, String)],
) -> Result<Url, NetworkError> {
    let raw = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    let mut url = Url::parse(&raw).map_err(|e| {
        tracing::debug!(url = %raw, error = %e, "Rejected malformed URL");
        NetworkError::BadUrl(raw.clone())
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        tracing::debug!(url = %raw, "Rejected non-http URL");
        return Err(NetworkError::BadUrl(raw));
    }

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}

fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
    headers.push((name, value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://api.example.com/";

    #[test]
    fn joins_base_and_path_with_single_slash() {
        let req = RequestBuilder::new("https://api.example.com", "api/user/all", HttpMethod::Get)
            .build()
            .unwrap();
        assert_eq!(req.url().as_str(), "https://api.example.com/api/user/all");

        let req = RequestBuilder::new(BASE, "/api/user/all", HttpMethod::Get)
            .build()
            .unwrap();
        assert_eq!(req.url().as_str(), "https://api.example.com/api/user/all");
    }

    #[test]
    fn query_parameters_are_encoded_in_order() {
        let req = RequestBuilder::new(BASE, "api/user/token", HttpMethod::Put)
            .query("token", "a b&c=d")
            .query("userId", 7)
            .build()
            .unwrap();
        let pairs: Vec<(String, String)> = req
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("token".to_string(), "a b&c=d".to_string()),
                ("userId".to_string(), "7".to_string()),
            ]
        );
        assert!(!req.url().query().unwrap().contains(' '));
        assert!(req.url().query().unwrap().contains("a+b%26c%3Dd"));
    }

    #[test]
    fn repeated_query_key_replaces_value() {
        let req = RequestBuilder::new(BASE, "api/post/all", HttpMethod::Get)
            .query("page", 1)
            .query("size", 20)
            .query("page", 2)
            .build()
            .unwrap();
        assert_eq!(req.url().query(), Some("page=2&size=20"));
    }

    #[test]
    fn no_query_means_no_question_mark() {
        let req = RequestBuilder::new(BASE, "api/user/all", HttpMethod::Get)
            .build()
            .unwrap();
        assert_eq!(req.url().query(), None);
        assert!(!req.url().as_str().contains('?'));
    }

    #[test]
    fn malformed_base_is_bad_url() {
        for base in ["not a url", "", "ftp://files.example.com", "http://exa mple.com"] {
            let err = RequestBuilder::new(base, "api/user/all", HttpMethod::Get)
                .build()
                .unwrap_err();
            assert!(matches!(err, NetworkError::BadUrl(_)), "{base}: {err:?}");
        }
    }

    #[test]
    fn post_body_sets_json_content_type() {
        let req = RequestBuilder::new(BASE, "api/post", HttpMethod::Post)
            .json_body(&json!({"description": "good boy"}))
            .build()
            .unwrap();
        assert_eq!(req.header("content-type"), Some("application/json"));
        match req.body() {
            Some(RequestBody::Json(bytes)) => {
                let value: serde_json::Value = serde_json::from_slice(bytes).unwrap();
                assert_eq!(value["description"], "good boy");
            }
            other => panic!("expected JSON body, got {other:?}"),
        }
    }

    #[test]
    fn get_and_delete_ignore_body() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let req = RequestBuilder::new(BASE, "api/post", method)
                .json_body(&json!({"ignored": true}))
                .build()
                .unwrap();
            assert!(req.body().is_none());
            assert!(req.header("Content-Type").is_none());
        }
    }

    #[test]
    fn caller_headers_override_default_content_type() {
        let req = RequestBuilder::new(BASE, "api/post", HttpMethod::Put)
            .json_body(&json!({"a": 1}))
            .header("content-type", "application/vnd.pawfeed+json")
            .header("X-Trace", "abc")
            .build()
            .unwrap();
        assert_eq!(
            req.header("Content-Type"),
            Some("application/vnd.pawfeed+json")
        );
        assert_eq!(req.header("x-trace"), Some("abc"));
        let content_types = req
            .headers()
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .count();
        assert_eq!(content_types, 1);
    }

    #[test]
    fn default_timeout_is_sixty_seconds() {
        let req = RequestBuilder::new(BASE, "api/user/all", HttpMethod::Get)
            .build()
            .unwrap();
        assert_eq!(req.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn endpoint_builder_uses_config() {
        let config = ApiConfig::new("http://localhost:8080/").with_timeout(Duration::from_secs(5));
        let req = RequestBuilder::endpoint(&config, Endpoint::PostsByUser(9))
            .build()
            .unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:8080/api/post/user/9");
        assert_eq!(req.method(), HttpMethod::Get);
        assert_eq!(req.timeout(), Duration::from_secs(5));
    }
}
