//! Mock transport for testing.
//!
//! This module provides a scripted transport that replays a queue of
//! canned responses, records every request it receives, and counts calls.
//! It backs the client's behavioral tests but is exported so consumers
//! can test their own code against a `vturl` client without a network.

use crate::core::VtError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A scripted transport for tests.
///
/// Responses are consumed in FIFO order, one per request. Sending a request
/// after the script is exhausted fails the test via a panic, which keeps
/// call-count regressions loud.
///
/// # Examples
///
/// ```rust
/// use vturl::transport::{ApiResponse, MockTransport};
///
/// let transport = MockTransport::new()
///     .with_response(ApiResponse {
///         status: 200,
///         reason: "OK".into(),
///         body: br#"{"data":{}}"#.to_vec(),
///     });
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Scripted responses, consumed front to back.
    responses: Mutex<VecDeque<Result<ApiResponse, VtError>>>,
    /// Every request received, in order.
    requests: Mutex<Vec<ApiRequest>>,
    /// Number of `send` calls observed.
    call_count: AtomicU64,
}

impl MockTransport {
    /// Creates an empty mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response to be returned for the next unanswered request.
    pub fn with_response(self, response: ApiResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queues a successful JSON response with the given status line.
    pub fn with_json_response(self, status: u16, reason: &str, body: &str) -> Self {
        self.with_response(ApiResponse {
            status,
            reason: reason.to_string(),
            body: body.as_bytes().to_vec(),
        })
    }

    /// Queues an error to be returned for the next unanswered request,
    /// simulating a transport-level failure.
    pub fn with_error(self, error: VtError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of requests sent through this transport.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Returns copies of every request received, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the number of scripted responses not yet consumed.
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, VtError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("MockTransport: no scripted response for request"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let transport = MockTransport::new()
            .with_json_response(200, "OK", "{}")
            .with_json_response(404, "Not Found", "{}");

        let first = transport
            .send(ApiRequest::get("https://example.test/a"))
            .await
            .unwrap();
        assert_eq!(first.status, 200);

        let second = transport
            .send(ApiRequest::get("https://example.test/b"))
            .await
            .unwrap();
        assert_eq!(second.status, 404);
        assert_eq!(second.reason, "Not Found");

        assert_eq!(transport.call_count(), 2);
        assert_eq!(transport.remaining_responses(), 0);
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let transport = MockTransport::new().with_json_response(200, "OK", "{}");

        transport
            .send(ApiRequest::post("https://example.test/urls", "url=x").with_header("x-apikey", "k"))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body.as_deref(), Some("url=x"));
    }

    #[tokio::test]
    async fn test_mock_scripted_error() {
        let transport =
            MockTransport::new().with_error(VtError::invalid_response("simulated failure"));

        let err = transport
            .send(ApiRequest::get("https://example.test/a"))
            .await
            .unwrap_err();
        assert!(matches!(err, VtError::InvalidResponse { .. }));
    }
}
