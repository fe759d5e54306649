//! The VirusTotal client.
//!
//! [`Client`] exposes the three operations of this crate: submitting a URL
//! for scanning, fetching an analysis by id, and a convenience wait loop
//! that submits and then polls until the analysis completes.

pub mod config;

use crate::core::{AnalysisReport, ScanSubmission, VtError, VtResult};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::form_urlencoded;

pub use config::ClientConfig;

/// An async client for the VirusTotal v3 URL scanning API.
///
/// The client holds only immutable configuration and a shared transport,
/// so a single instance is safe to use from any number of concurrent
/// callers; independent calls never interfere.
///
/// # Examples
///
/// ```rust,no_run
/// use vturl::{Client, ClientConfig};
///
/// # async fn run() -> Result<(), vturl::VtError> {
/// let client = Client::new(ClientConfig::new("your-api-key"))?;
/// let report = client.scan_url_and_wait("https://example.com").await?;
/// println!("detections: {}", report.stats().detections());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client over the production HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`VtError::InvalidConfiguration`] if the API key is empty,
    /// or [`VtError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> VtResult<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a client over a caller-supplied transport.
    ///
    /// This is the seam used by tests to script responses; it applies the
    /// same configuration validation as [`Client::new`].
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> VtResult<Self> {
        if config.api_key.expose_secret().is_empty() {
            return Err(VtError::invalid_configuration("API key is required"));
        }
        Ok(Self { config, transport })
    }

    /// Submits a URL for scanning.
    ///
    /// Issues a single `POST {base}/urls` with a form-encoded body; the
    /// returned submission carries the analysis id used for polling. The
    /// remote scan job is created as a side effect.
    ///
    /// # Errors
    ///
    /// Returns [`VtError::RemoteApi`] on any non-2xx response. No retry is
    /// performed at this layer.
    pub async fn scan_url(&self, url: &str) -> VtResult<ScanSubmission> {
        let endpoint = format!("{}/urls", self.config.base_url);
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("url", url)
            .finish();

        tracing::debug!(url, "submitting URL for scanning");

        let request = ApiRequest::post(endpoint, body)
            .with_header("x-apikey", self.config.api_key.expose_secret())
            .with_header("Content-Type", "application/x-www-form-urlencoded");

        let response = self.transport.send(request).await?;
        let submission: ScanSubmission = Self::decode(ensure_success(response)?)?;

        tracing::debug!(analysis_id = submission.analysis_id(), "scan submitted");
        Ok(submission)
    }

    /// Fetches the current state of an analysis.
    ///
    /// Issues a single `GET {base}/analyses/{id}`. This is a pure read;
    /// repeated calls return independently fetched snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`VtError::RemoteApi`] on any non-2xx response.
    pub async fn get_analysis(&self, analysis_id: &str) -> VtResult<AnalysisReport> {
        let endpoint = format!("{}/analyses/{}", self.config.base_url, analysis_id);

        let request = ApiRequest::get(endpoint)
            .with_header("x-apikey", self.config.api_key.expose_secret());

        let response = self.transport.send(request).await?;
        Self::decode(ensure_success(response)?)
    }

    /// Submits a URL and polls until the analysis completes.
    ///
    /// The submission is never retried; any submit error propagates
    /// immediately. Polling then runs for at most
    /// [`max_attempts`](ClientConfig::max_attempts) iterations, returning
    /// the report on the first `completed` status. The configured
    /// [`poll_interval`](ClientConfig::poll_interval) elapses only between
    /// attempts; there is no trailing wait after the final one. Fixed-rate
    /// polling matches the API's typical analysis latency, so no backoff
    /// is applied.
    ///
    /// A `completed` status terminates the loop even when stats and
    /// results are still empty.
    ///
    /// # Errors
    ///
    /// Returns [`VtError::PollingExhausted`] when every attempt observed a
    /// non-completed status. With `max_attempts == 0` the URL is still
    /// submitted, but the error is returned before any poll.
    pub async fn scan_url_and_wait(&self, url: &str) -> VtResult<AnalysisReport> {
        let submission = self.scan_url(url).await?;
        let analysis_id = submission.analysis_id();
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            let report = self.get_analysis(analysis_id).await?;
            if report.is_completed() {
                tracing::debug!(analysis_id, attempt, "analysis completed");
                return Ok(report);
            }

            tracing::debug!(
                analysis_id,
                attempt,
                max_attempts,
                status = %report.status(),
                "analysis not ready"
            );

            if attempt < max_attempts {
                tokio::time::sleep(self.config.poll_interval).await;
            }
        }

        Err(VtError::PollingExhausted {
            attempts: max_attempts,
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn decode<T: DeserializeOwned>(body: Vec<u8>) -> VtResult<T> {
        serde_json::from_slice(&body).map_err(|e| VtError::invalid_response(e.to_string()))
    }
}

/// Maps a non-2xx response to [`VtError::RemoteApi`] without touching its
/// body; success responses yield the body for deserialization.
fn ensure_success(response: ApiResponse) -> VtResult<Vec<u8>> {
    if response.is_success() {
        Ok(response.body)
    } else {
        Err(VtError::remote_api(response.status, response.reason))
    }
}
