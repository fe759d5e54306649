//! Core types for the vturl library.
//!
//! This module provides the fundamental building blocks used throughout
//! the library:
//!
//! - [`types`] - Domain enums and records like `AnalysisStatus`, `AnalysisStats`
//! - [`analysis`] - The analysis report returned by `GET /analyses/{id}`
//! - [`submission`] - The receipt returned by `POST /urls`
//! - [`error`] - Structured error types

pub mod analysis;
pub mod error;
pub mod submission;
pub mod types;

// Re-export commonly used types at the core level
pub use analysis::{AnalysisAttributes, AnalysisData, AnalysisReport};
pub use error::{VtError, VtResult};
pub use submission::{ScanSubmission, SubmissionData, SubmissionLinks};
pub use types::{AnalysisCategory, AnalysisStats, AnalysisStatus, EngineResult};
