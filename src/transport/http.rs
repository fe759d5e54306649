//! Production HTTP transport backed by `reqwest`.

use crate::core::VtError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

use async_trait::async_trait;
use std::time::Duration;

/// A [`Transport`] implementation over a shared `reqwest::Client`.
///
/// Connection pooling lives inside the `reqwest` client, so cloning this
/// transport (or the `vturl` client that owns it) is cheap.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, VtError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(VtError::Transport)?;
        Ok(Self { client })
    }

    /// Creates a transport from an existing `reqwest::Client`.
    ///
    /// Useful when the hosting application already maintains a configured
    /// client (proxies, custom TLS, shared pool).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, VtError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(ApiResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
