//! Scan submission structures.
//!
//! This module defines the response shape of `POST /urls`, documented at
//! <https://docs.virustotal.com/reference/scan-url>. A submission is the
//! receipt for a newly created analysis job; its `id` is the key used for
//! subsequent polling.

use serde::{Deserialize, Serialize};

/// The complete response envelope for a URL scan submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSubmission {
    /// The created analysis descriptor.
    pub data: SubmissionData,
}

impl ScanSubmission {
    /// Identifier of the analysis created for this submission.
    pub fn analysis_id(&self) -> &str {
        &self.data.id
    }

    /// URL at which the analysis can be retrieved.
    pub fn self_link(&self) -> &str {
        &self.data.links.self_link
    }
}

/// Descriptor of the analysis created by a URL scan submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionData {
    /// Resource type discriminator; always `"analysis"`.
    #[serde(rename = "type")]
    pub object_type: String,

    /// Analysis identifier.
    pub id: String,

    /// Related links.
    pub links: SubmissionLinks,
}

/// Links attached to a scan submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionLinks {
    /// URL to retrieve the analysis.
    #[serde(rename = "self")]
    pub self_link: String,
}
