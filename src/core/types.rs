//! Core types used throughout the vturl library.
//!
//! This module defines the fundamental data structures mirrored from the
//! VirusTotal v3 API: analysis lifecycle status, per-engine verdict
//! categories, per-engine results, and aggregate statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of an analysis job.
///
/// A submitted URL moves through `queued` (empty results and stats),
/// `in-progress` (partial results and stats), and finally `completed`.
/// The API never regresses an analysis away from `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisStatus {
    /// The item is waiting to be analysed.
    Queued,
    /// The item is being analysed; results and stats are partial.
    InProgress,
    /// The analysis is finished.
    Completed,
}

impl AnalysisStatus {
    /// Returns `true` if the analysis has finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// An engine's per-item verdict classification.
///
/// Several categories are only produced for file analyses; they are listed
/// here because the analysis endpoint is shared between URLs and files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisCategory {
    /// The engine reached its timeout confirming the verdict (files only).
    ConfirmedTimeout,
    /// The engine reached a timeout while analysing the item.
    Timeout,
    /// The engine failed while analysing the item (files only).
    Failure,
    /// The engine thinks the item is not malicious.
    Harmless,
    /// The engine has no opinion about the item.
    Undetected,
    /// The engine thinks the item is suspicious.
    Suspicious,
    /// The engine thinks the item is malicious.
    Malicious,
    /// The engine cannot analyse this type of item (files only).
    TypeUnsupported,
}

impl AnalysisCategory {
    /// Returns `true` if this category represents a detection
    /// (malicious or suspicious).
    pub fn is_detection(&self) -> bool {
        matches!(self, Self::Malicious | Self::Suspicious)
    }
}

/// A single engine's contribution to an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineResult {
    /// Name of the engine that produced this result.
    pub engine_name: String,

    /// Verdict classification assigned by the engine.
    pub category: AnalysisCategory,

    /// Free-text verdict (e.g. a threat name), `None` when the engine has
    /// no verdict to report.
    pub result: Option<String>,

    /// Detection method (e.g. "blacklist"), when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Signature database date in `YYYYMMDD` format (file analyses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_update: Option<String>,

    /// Engine version string (file analyses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
}

/// Summary counts of engine verdicts, keyed by category.
///
/// A queued analysis carries an empty stats object, so every field
/// tolerates absence. The file-only counters stay `None` for URL analyses
/// rather than defaulting to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Engines reporting the item as harmless.
    #[serde(default)]
    pub harmless: u32,

    /// Engines reporting the item as malicious.
    #[serde(default)]
    pub malicious: u32,

    /// Engines reporting the item as suspicious.
    #[serde(default)]
    pub suspicious: u32,

    /// Engines with no opinion about the item.
    #[serde(default)]
    pub undetected: u32,

    /// Engines that timed out while analysing the item.
    #[serde(default)]
    pub timeout: u32,

    /// Engines that reached a confirmed timeout (file analyses only).
    #[serde(
        rename = "confirmed-timeout",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub confirmed_timeout: Option<u32>,

    /// Engines that failed while analysing the item (file analyses only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<u32>,

    /// Engines that do not support this item type (file analyses only).
    #[serde(
        rename = "type-unsupported",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub type_unsupported: Option<u32>,
}

impl AnalysisStats {
    /// Total number of engine verdicts across all categories.
    pub fn total(&self) -> u32 {
        self.harmless
            + self.malicious
            + self.suspicious
            + self.undetected
            + self.timeout
            + self.confirmed_timeout.unwrap_or(0)
            + self.failure.unwrap_or(0)
            + self.type_unsupported.unwrap_or(0)
    }

    /// Number of engines reporting a detection (malicious + suspicious).
    pub fn detections(&self) -> u32 {
        self.malicious + self.suspicious
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&AnalysisStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let status: AnalysisStatus = serde_json::from_str("\"queued\"").unwrap();
        assert_eq!(status, AnalysisStatus::Queued);
        assert!(!status.is_completed());
        assert!(AnalysisStatus::Completed.is_completed());
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&AnalysisCategory::TypeUnsupported).unwrap(),
            "\"type-unsupported\""
        );
        let category: AnalysisCategory = serde_json::from_str("\"confirmed-timeout\"").unwrap();
        assert_eq!(category, AnalysisCategory::ConfirmedTimeout);
    }

    #[test]
    fn test_category_is_detection() {
        assert!(AnalysisCategory::Malicious.is_detection());
        assert!(AnalysisCategory::Suspicious.is_detection());
        assert!(!AnalysisCategory::Harmless.is_detection());
        assert!(!AnalysisCategory::Undetected.is_detection());
    }

    #[test]
    fn test_stats_default_from_empty_object() {
        let stats: AnalysisStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, AnalysisStats::default());
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_stats_totals() {
        let stats = AnalysisStats {
            harmless: 60,
            malicious: 2,
            suspicious: 1,
            undetected: 10,
            timeout: 1,
            ..AnalysisStats::default()
        };
        assert_eq!(stats.total(), 74);
        assert_eq!(stats.detections(), 3);
    }

    #[test]
    fn test_engine_result_null_verdict() {
        let json = r#"{
            "category": "undetected",
            "engine_name": "Example-AV",
            "method": "blacklist",
            "result": null
        }"#;
        let result: EngineResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.engine_name, "Example-AV");
        assert_eq!(result.category, AnalysisCategory::Undetected);
        assert!(result.result.is_none());
        assert!(result.engine_version.is_none());
    }

    #[test]
    fn test_stats_hyphenated_fields() {
        let json = r#"{
            "harmless": 1,
            "malicious": 0,
            "suspicious": 0,
            "undetected": 2,
            "timeout": 0,
            "confirmed-timeout": 0,
            "failure": 1,
            "type-unsupported": 3
        }"#;
        let stats: AnalysisStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.confirmed_timeout, Some(0));
        assert_eq!(stats.failure, Some(1));
        assert_eq!(stats.type_unsupported, Some(3));
        assert_eq!(stats.total(), 7);
    }
}
