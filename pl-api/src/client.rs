//! HTTP client for the listings REST API.
//!
//! Handles the session auth header, custom headers, timeouts, SSL
//! certificate handling, and mapping of transport and status failures
//! into `PlError`. Requests are sent exactly once; nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use pl_core::config::{ApiConfig, AppConfig};
use pl_core::constants;
use pl_core::error::{PlError, PlResult};

/// A single request against the listings API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API root, starting with `/`.
    pub path: String,
    /// Session token for the auth header. Empty when there is no session.
    pub token: String,
    /// JSON body for mutating calls.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            token: token.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(Method::GET, path, token)
    }

    pub fn post(path: impl Into<String>, token: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path, token).with_body(body)
    }

    pub fn patch(path: impl Into<String>, token: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PATCH, path, token).with_body(body)
    }

    pub fn delete(path: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path, token)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends API requests and returns the parsed JSON body.
///
/// An empty response body yields `Value::Null`. A non-2xx status is an
/// error carrying the server's JSON error body when there is one.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> PlResult<Value>;
}

/// HTTP client for communicating with the listings server.
///
/// Wraps reqwest::Client with the auth header, custom header injection,
/// and error classification.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// Base URL for the API (e.g. "https://listings.example.com/api").
    api_root: String,
    /// Default request timeout.
    timeout: Duration,
    /// Custom headers from config.
    custom_headers: Vec<(String, String)>,
}

impl ApiClient {
    /// Create a new ApiClient from API configuration.
    pub fn new(config: &ApiConfig) -> PlResult<Self> {
        let api_root = AppConfig::sanitize_api_url(&config.url);
        if api_root.is_empty() {
            return Err(PlError::MissingConfig("api.url".into()));
        }

        let timeout = Duration::from_millis(config.timeout_ms);
        let mut builder = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(15))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30));

        if config.accept_self_signed_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| PlError::Http(format!("failed to build HTTP client: {e}")))?;

        let mut custom_headers: Vec<(String, String)> = config
            .custom_headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        custom_headers.sort();

        Ok(Self {
            inner,
            api_root,
            timeout,
            custom_headers,
        })
    }

    /// Get the current API root URL.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Build a request with the auth header, custom headers, and optional JSON body.
    fn build_request(&self, request: &ApiRequest) -> RequestBuilder {
        let mut builder = self
            .inner
            .request(request.method.clone(), self.url(&request.path))
            .header(constants::AUTH_HEADER, request.token.as_str())
            .header(reqwest::header::ACCEPT, "application/json");
        for (key, value) in &self.custom_headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder
    }

    /// Check the HTTP status code and convert to PlError if needed.
    async fn check_status(response: Response) -> PlResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let payload = serde_json::from_str::<Value>(&text).ok();
        let message = payload
            .as_ref()
            .and_then(error_message_from_body)
            .or_else(|| (!text.trim().is_empty()).then(|| text.trim().to_string()))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string());

        Err(PlError::ServerError {
            status: status.as_u16(),
            message,
            payload,
        })
    }

    /// Read the body as JSON, treating an empty body as null.
    async fn read_json(response: Response) -> PlResult<Value> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PlError::Http(format!("failed to read response body: {e}")))?;
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| PlError::Serialization(format!("failed to parse response: {e}")))
    }

    /// Classify a reqwest error into a PlError variant.
    fn classify_error(e: reqwest::Error) -> PlError {
        if e.is_timeout() {
            PlError::Timeout(e.to_string())
        } else if e.is_connect() {
            PlError::Http(format!("connection failed: {e}"))
        } else {
            PlError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn execute(&self, request: ApiRequest) -> PlResult<Value> {
        debug!("{} {}", request.method, request.path);
        let response = self
            .build_request(&request)
            .send()
            .await
            .map_err(Self::classify_error)?;
        let response = Self::check_status(response).await?;
        Self::read_json(response).await
    }
}

/// Pull a human-readable message out of a JSON error body.
fn error_message_from_body(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(|e| e.get("message").or(Some(e)))
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .map(String::from)
}
