//! Analysis report structures.
//!
//! This module defines the response shape of `GET /analyses/{id}`,
//! documented at <https://docs.virustotal.com/reference/analysis>.
//! Reports are plain snapshots; the client holds no cache, so every fetch
//! returns an independently deserialized record.

use crate::core::types::{AnalysisStats, AnalysisStatus, EngineResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The complete response envelope for an analysis fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The analysis resource.
    pub data: AnalysisData,
}

impl AnalysisReport {
    /// The analysis identifier.
    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// Current lifecycle status of the analysis.
    pub fn status(&self) -> AnalysisStatus {
        self.data.attributes.status
    }

    /// Returns `true` if the analysis has finished.
    ///
    /// A completed analysis may still carry empty stats and results in rare
    /// transient cases; completion is determined by status alone.
    pub fn is_completed(&self) -> bool {
        self.data.attributes.status.is_completed()
    }

    /// Summary statistics for the analysis.
    pub fn stats(&self) -> &AnalysisStats {
        &self.data.attributes.stats
    }

    /// Per-engine results, keyed by engine name.
    pub fn results(&self) -> &HashMap<String, EngineResult> {
        &self.data.attributes.results
    }

    /// When the analysis was observed, as a UTC timestamp.
    ///
    /// Returns `None` if the epoch value is out of `chrono`'s range.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.data.attributes.date, 0)
    }
}

/// An analysis resource for a URL or file submitted to VirusTotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    /// Analysis identifier, as returned by the submit operation.
    pub id: String,

    /// Resource type discriminator; always `"analysis"`.
    #[serde(rename = "type")]
    pub object_type: String,

    /// The analysis payload.
    pub attributes: AnalysisAttributes,
}

/// Core attributes of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisAttributes {
    /// Unix epoch UTC time of the analysis, in seconds.
    pub date: i64,

    /// Lifecycle status of the analysis.
    pub status: AnalysisStatus,

    /// Summary of the `results` field. Empty while the analysis is queued.
    #[serde(default)]
    pub stats: AnalysisStats,

    /// Per-engine results keyed by engine name. Empty while queued,
    /// partial while in progress.
    #[serde(default)]
    pub results: HashMap<String, EngineResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AnalysisCategory;

    fn completed_report_json() -> &'static str {
        r#"{
            "data": {
                "attributes": {
                    "date": 1591701032,
                    "results": {
                        "Example-AV": {
                            "category": "harmless",
                            "engine_name": "Example-AV",
                            "method": "blacklist",
                            "result": "clean"
                        },
                        "Other-AV": {
                            "category": "undetected",
                            "engine_name": "Other-AV",
                            "method": "blacklist",
                            "result": null
                        }
                    },
                    "stats": {
                        "harmless": 1,
                        "malicious": 0,
                        "suspicious": 0,
                        "undetected": 1
                    },
                    "status": "completed"
                },
                "id": "u-abc123-1591701032",
                "type": "analysis"
            }
        }"#
    }

    #[test]
    fn test_deserialize_completed_report() {
        let report: AnalysisReport = serde_json::from_str(completed_report_json()).unwrap();
        assert_eq!(report.id(), "u-abc123-1591701032");
        assert!(report.is_completed());
        assert_eq!(report.stats().harmless, 1);
        assert_eq!(report.stats().undetected, 1);
        assert_eq!(report.results().len(), 2);
        assert_eq!(
            report.results()["Example-AV"].category,
            AnalysisCategory::Harmless
        );
        assert!(report.results()["Other-AV"].result.is_none());
    }

    #[test]
    fn test_deserialize_queued_report_with_empty_payload() {
        let json = r#"{
            "data": {
                "attributes": {
                    "date": 1591701032,
                    "results": {},
                    "stats": {},
                    "status": "queued"
                },
                "id": "u-abc123-1591701032",
                "type": "analysis"
            }
        }"#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.status(), AnalysisStatus::Queued);
        assert_eq!(report.stats().total(), 0);
        assert!(report.results().is_empty());
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let report: AnalysisReport = serde_json::from_str(completed_report_json()).unwrap();
        let encoded = serde_json::to_string(&report).unwrap();
        let decoded: AnalysisReport = serde_json::from_str(&encoded).unwrap();
        assert_eq!(report, decoded);
    }

    #[test]
    fn test_date_accessor() {
        let report: AnalysisReport = serde_json::from_str(completed_report_json()).unwrap();
        let date = report.date().unwrap();
        assert_eq!(date.timestamp(), 1591701032);
    }
}
