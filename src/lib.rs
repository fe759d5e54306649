//! # vturl
//!
//! An async client for the VirusTotal v3 URL scanning API.
//!
//! ## Overview
//!
//! The crate exposes a single [`Client`] with three operations:
//!
//! - [`Client::scan_url`] - submit a URL for scanning
//! - [`Client::get_analysis`] - fetch an analysis by id
//! - [`Client::scan_url_and_wait`] - submit, then poll at a fixed interval
//!   until the analysis completes or the attempt budget is spent
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vturl::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("your-api-key"))?;
//!
//!     let report = client.scan_url_and_wait("https://example.com").await?;
//!
//!     let stats = report.stats();
//!     println!("harmless: {}", stats.harmless);
//!     println!("malicious: {}", stats.malicious);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **core**: wire-shape types and structured errors
//! - **transport**: the HTTP seam, with a `reqwest` implementation and a
//!   scripted mock for tests
//! - **client**: configuration, header policy, and the wait loop
//!
//! The client holds only immutable configuration, so one instance can be
//! shared freely across concurrent tasks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod client;
pub mod core;
pub mod transport;

// Re-export commonly used types at the crate root
pub use crate::client::{Client, ClientConfig};
pub use crate::core::{
    AnalysisAttributes, AnalysisCategory, AnalysisData, AnalysisReport, AnalysisStats,
    AnalysisStatus, EngineResult, ScanSubmission, SubmissionData, SubmissionLinks, VtError,
    VtResult,
};
pub use crate::transport::Transport;

/// Prelude module for convenient imports.
///
/// ```rust
/// use vturl::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{Client, ClientConfig};
    pub use crate::core::{
        AnalysisCategory, AnalysisReport, AnalysisStats, AnalysisStatus, EngineResult,
        ScanSubmission, VtError, VtResult,
    };
    pub use crate::transport::Transport;
}
