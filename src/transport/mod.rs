//! HTTP transport abstraction.
//!
//! The client speaks to VirusTotal through the [`Transport`] trait rather
//! than a concrete HTTP client, keeping request execution swappable:
//!
//! - [`http`] - Production implementation over `reqwest`
//! - [`mock`] - Scripted in-memory implementation for tests
//!
//! A transport carries bytes and status lines only; header policy and body
//! interpretation belong to the client.

pub mod http;
pub mod mock;

use crate::core::VtError;

use async_trait::async_trait;
use std::fmt::Debug;

pub use http::HttpTransport;
pub use mock::MockTransport;

/// HTTP method for an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// An HTTP GET.
    Get,
    /// An HTTP POST.
    Post,
}

/// A single outbound API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,

    /// Absolute request URL.
    pub url: String,

    /// Header name/value pairs to attach.
    pub headers: Vec<(String, String)>,

    /// Request body, present for form posts.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Creates a GET request for the given URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request for the given URL with a body.
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// Attaches a header to the request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A raw API response: status line plus body bytes.
///
/// Success is not decided here; the client inspects the status code before
/// deserializing the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Numeric HTTP status code.
    pub status: u16,

    /// Reason phrase for the status, empty when unknown.
    pub reason: String,

    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Returns `true` if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The trait used by the client to execute HTTP requests.
///
/// Implementations must be `Send + Sync` for use in async contexts and
/// should surface connection-level failures as `VtError::Transport`;
/// non-2xx statuses are returned as ordinary responses, not errors.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Executes a single request and returns the raw response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, VtError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::post("https://example.test/urls", "url=x")
            .with_header("x-apikey", "key");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body.as_deref(), Some("url=x"));
        assert_eq!(request.headers.len(), 1);

        let request = ApiRequest::get("https://example.test/analyses/1");
        assert_eq!(request.method, Method::Get);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_response_is_success() {
        let mut response = ApiResponse {
            status: 200,
            reason: "OK".into(),
            body: Vec::new(),
        };
        assert!(response.is_success());

        response.status = 299;
        assert!(response.is_success());

        response.status = 301;
        assert!(!response.is_success());

        response.status = 404;
        assert!(!response.is_success());
    }
}
