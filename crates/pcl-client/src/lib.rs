//! # pcl-client
//!
//! Async HTTP client for the PCL Infotech backend.
//!
//! - `/admin/*`: bearer-authenticated dashboard reads and mutations
//! - `/api/*`: public catalog reads and enrollment/payment submissions
//!
//! Every response goes through the envelope check in [`http`]: HTTP 2xx
//! **and** `success: true`, or an error carrying the server's message.

pub mod admin;
pub mod public;
pub mod resource;

mod error;
mod http;
mod multipart;

pub use error::ClientError;
pub use resource::{AdminResource, CatalogResource, DeletableResource, EditableResource, StatusResource};

use pcl_config::ApiConfig;
use serde_json::{Map, Value};

const USER_AGENT: &str = concat!("pcl/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build (TLS backend initialisation).
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            token: None,
        })
    }

    /// Attach a bearer token for `/admin/*` calls.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Add the bearer header, or fail before sending when there is no token.
    fn authed(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, ClientError> {
        let token = self.token.as_deref().ok_or(ClientError::Unauthorized)?;
        Ok(request.bearer_auth(token))
    }
}

/// Body of a successful mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Receipt {
    body: Map<String, Value>,
}

impl Receipt {
    pub(crate) const fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// The server's `message`, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.str_field("message")
    }

    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn i64_field(&self, key: &str) -> Option<i64> {
        self.body.get(key).and_then(Value::as_i64)
    }

    #[must_use]
    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }
}

impl From<Map<String, Value>> for Receipt {
    fn from(body: Map<String, Value>) -> Self {
        Self::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_url_is_normalized() {
        let config = ApiConfig {
            base_url: "http://localhost:7000/".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:7000");
        assert_eq!(client.url("/admin/courses"), "http://localhost:7000/admin/courses");
        assert!(!client.has_token());
    }

    #[test]
    fn admin_calls_need_a_token() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        let request = client.http.get(client.url("/admin/courses"));
        assert!(matches!(client.authed(request), Err(ClientError::Unauthorized)));

        let client = client.with_token("abc");
        let request = client.http.get(client.url("/admin/courses"));
        assert!(client.authed(request).is_ok());
    }

    #[test]
    fn receipt_fields() {
        let body = serde_json::json!({"success": true, "course_id": 7, "slug": "python", "message": "Course created successfully"});
        let receipt = Receipt::new(body.as_object().cloned().unwrap());
        assert_eq!(receipt.message(), Some("Course created successfully"));
        assert_eq!(receipt.i64_field("course_id"), Some(7));
        assert_eq!(receipt.str_field("slug"), Some("python"));
    }
}
