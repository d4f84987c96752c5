//! Transport/decode pipeline.
//!
//! [`ApiClient`] executes a [`RequestDescriptor`] over reqwest, checks the
//! status, and decodes the body into a caller-chosen type. Each call yields
//! exactly one `Result<T, NetworkError>`; nothing is retried.

use std::time::{Duration, Instant};

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::task::JoinHandle;

use crate::core::request::headers::CONTENT_TYPE;
use crate::core::request::{RequestBody, RequestBuilder, RequestDescriptor};
use crate::error::NetworkError;

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.pawfeed.app/";

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

/// `pawfeed/<version>`.
#[must_use]
pub fn default_user_agent() -> String {
    format!("pawfeed/{}", env!("CARGO_PKG_VERSION"))
}

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(config: &ApiConfig) -> Result<Client, NetworkError> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| NetworkError::Unknown(e.into()))
}

// =============================================================================
// Decoding
// =============================================================================

/// How JSON object keys are mapped before deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyDecodingStrategy {
    /// Keys are used exactly as sent.
    #[default]
    UseDefaultKeys,
    /// `snake_case` keys are rewritten to `camelCase` first.
    ConvertFromSnakeCase,
}

/// JSON decoder used by the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder {
    pub key_strategy: KeyDecodingStrategy,
}

impl JsonDecoder {
    #[must_use]
    pub const fn new(key_strategy: KeyDecodingStrategy) -> Self {
        Self { key_strategy }
    }

    /// Decode `body` into `T`.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if the body is not valid JSON or
    /// does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> serde_json::Result<T> {
        match self.key_strategy {
            KeyDecodingStrategy::UseDefaultKeys => serde_json::from_slice(body),
            KeyDecodingStrategy::ConvertFromSnakeCase => {
                let value: Value = serde_json::from_slice(body)?;
                serde_json::from_value(convert_keys(value))
            }
        }
    }
}

fn convert_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (snake_to_camel(&k), convert_keys(v)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(convert_keys).collect()),
        other => other,
    }
}

/// `total_pages` -> `totalPages`. Leading underscores are kept.
#[must_use]
pub fn snake_to_camel(key: &str) -> String {
    let trimmed = key.trim_start_matches('_');
    let prefix = &key[..key.len() - trimmed.len()];
    let mut out = String::with_capacity(key.len());
    out.push_str(prefix);
    let mut upper_next = false;
    for c in trimmed.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

// =============================================================================
// Response interpretation
// =============================================================================

/// Status and body of a completed exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Apply the status and empty-body rules, returning the body on success.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Server`] for non-2xx statuses, [`NetworkError::Unknown`]
    /// for an empty 2xx body.
    pub fn into_success_body(self) -> Result<Vec<u8>, NetworkError> {
        if !(200..300).contains(&self.status) {
            let message = String::from_utf8(self.body)
                .ok()
                .filter(|text| !text.is_empty());
            return Err(NetworkError::Server {
                status: self.status,
                message,
            });
        }
        if self.body.is_empty() {
            return Err(NetworkError::no_data());
        }
        Ok(self.body)
    }

    /// Decode a successful JSON body.
    ///
    /// # Errors
    ///
    /// Status errors as in [`Self::into_success_body`], then
    /// [`NetworkError::Decoding`] if the body does not decode into `T`.
    pub fn decode<T: DeserializeOwned>(self, decoder: &JsonDecoder) -> Result<T, NetworkError> {
        let body = self.into_success_body()?;
        decoder
            .decode(&body)
            .map_err(|e| NetworkError::Decoding(e.into()))
    }

    /// Decode a successful body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Status errors as in [`Self::into_success_body`], then
    /// [`NetworkError::Decoding`] on invalid UTF-8.
    pub fn text(self) -> Result<String, NetworkError> {
        let body = self.into_success_body()?;
        String::from_utf8(body).map_err(|e| NetworkError::Decoding(e.into()))
    }
}

// =============================================================================
// Client
// =============================================================================

/// Executes request descriptors against the backend.
///
/// Cheap to clone; clones share the underlying connection handle.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    decoder: JsonDecoder,
}

impl ApiClient {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, NetworkError> {
        let http = build_client(&config)?;
        Ok(Self {
            http,
            config,
            decoder: JsonDecoder::default(),
        })
    }

    /// Replace the decoder used by [`Self::send`].
    #[must_use]
    pub const fn with_decoder(mut self, decoder: JsonDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Execute and decode the body as JSON with the client's decoder.
    ///
    /// # Errors
    ///
    /// Any [`NetworkError`] variant; see the module docs.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T, NetworkError> {
        let decoder = self.decoder;
        self.send_with(request, &decoder).await
    }

    /// Execute and decode the body as JSON with an explicit decoder.
    ///
    /// # Errors
    ///
    /// Any [`NetworkError`] variant; see the module docs.
    pub async fn send_with<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
        decoder: &JsonDecoder,
    ) -> Result<T, NetworkError> {
        let raw = self.execute(request).await?;
        let result = raw.decode(decoder);
        if let Err(NetworkError::Decoding(e)) = &result {
            tracing::warn!(error = %e, "Response body did not match expected type");
        }
        result
    }

    /// Execute and return the body as text.
    ///
    /// # Errors
    ///
    /// Any [`NetworkError`] variant; see the module docs.
    pub async fn send_text(&self, request: RequestDescriptor) -> Result<String, NetworkError> {
        self.execute(request).await?.text()
    }

    /// Build `request`, run it through [`Self::send`] on the tokio runtime and
    /// hand the outcome to `on_complete`, which is called exactly once.
    ///
    /// Build failures such as [`NetworkError::BadUrl`] are delivered to the
    /// callback like any other error. Must be called from within a tokio
    /// runtime.
    pub fn dispatch<T, F>(&self, request: RequestBuilder, on_complete: F) -> JoinHandle<()>
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T, NetworkError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let result = match request.build() {
                Ok(descriptor) => client.send::<T>(descriptor).await,
                Err(e) => Err(e),
            };
            on_complete(result);
        })
    }

    /// Send the request and collect status + body, without interpreting them.
    ///
    /// # Errors
    ///
    /// [`NetworkError::Timeout`] or [`NetworkError::Unknown`] on transport failure.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse, NetworkError> {
        let (url, method, headers, body, timeout) = request.into_parts();
        let started = Instant::now();
        tracing::debug!(%method, %url, "Sending request");

        let mut builder = self
            .http
            .request(method.into(), url.clone())
            .timeout(timeout);

        let is_multipart = matches!(body, Some(RequestBody::Multipart(_)));
        match body {
            Some(RequestBody::Json(bytes)) => builder = builder.body(bytes),
            Some(RequestBody::Multipart(part)) => {
                let file = reqwest::multipart::Part::bytes(part.bytes)
                    .file_name(part.file_name)
                    .mime_str(&part.mime)
                    .map_err(|e| NetworkError::Unknown(e.into()))?;
                let form = reqwest::multipart::Form::new().part(part.field_name, file);
                tracing::trace!(boundary = form.boundary(), "Built multipart form");
                builder = builder.multipart(form);
            }
            None => {}
        }

        // The multipart Content-Type carries the boundary and must be the only one.
        for (name, value) in headers {
            if is_multipart && name.eq_ignore_ascii_case(CONTENT_TYPE) {
                tracing::trace!(%value, "Ignoring caller Content-Type on multipart request");
                continue;
            }
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| {
            let err = NetworkError::from(e);
            tracing::warn!(%method, %url, error = %err, "Request failed");
            err
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(NetworkError::from)?
            .to_vec();

        tracing::debug!(
            %method,
            %url,
            status,
            bytes = body.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Received response"
        );

        Ok(RawResponse { status, body })
    }
}
