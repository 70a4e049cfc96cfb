//! Diagnosis result models
//!
//! This module contains the per-report result types produced by the matcher
//! and the aggregator: which symptoms were found, which diseases they
//! implicate, and the overall severity tier suggested for the report.

use crate::models::severity::Severity;
use serde::{Deserialize, Serialize};

/// One canonical symptom detected in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomMatch {
    /// Canonical name of the matched symptom
    pub canonical: String,
    /// The synonym phrasing that matched first
    pub matched_synonym: String,
    /// Byte offset of the first occurrence in the normalized report text
    pub first_offset: usize,
}

/// The set of distinct symptoms found in one report
///
/// Matches are kept in order of first textual occurrence; symptom presence
/// is boolean, so a symptom matched through several synonyms appears once
/// with its earliest offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Identifier of the scanned report
    pub report_id: usize,
    /// Distinct matched symptoms in first-occurrence order
    pub matches: Vec<SymptomMatch>,
}

impl MatchResult {
    /// Whether no symptom was detected (the unmapped case)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// A (symptom, disease, severity) triple implied by a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisFinding {
    /// Canonical symptom that triggered this finding
    pub symptom: String,
    /// Candidate disease implicated by the symptom
    pub disease: String,
    /// Severity tier of the symptom
    pub severity: Severity,
}

/// Structured diagnosis for one report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Identifier of the report
    pub report_id: usize,
    /// Raw report text, kept for review alongside the findings
    pub report: String,
    /// Canonical names of the matched symptoms, first-occurrence order
    pub matched_symptoms: Vec<String>,
    /// Candidate diseases, deduplicated, in finding order
    pub candidate_diseases: Vec<String>,
    /// All findings, ordered by severity descending then first occurrence
    pub findings: Vec<DiagnosisFinding>,
    /// Maximum severity over the findings; `None` when nothing matched
    pub max_severity: Option<Severity>,
    /// Set when zero symptoms were matched; the report needs manual review
    pub unmapped: bool,
}

/// Marker for a report that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFailure {
    /// Identifier of the report
    pub report_id: usize,
    /// Description of the per-report failure
    pub error: String,
}

/// Outcome of processing one report
///
/// Per-report anomalies are data, not exceptions: a failed record is carried
/// in the outcome sequence so the batch loop never aborts on one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportOutcome {
    /// The report was processed; its diagnosis may still be empty
    Completed(DiagnosisResult),
    /// The report could not be processed and was recorded as failed
    Failed(ReportFailure),
}

impl ReportOutcome {
    /// Identifier of the underlying report
    #[must_use]
    pub const fn report_id(&self) -> usize {
        match self {
            Self::Completed(result) => result.report_id,
            Self::Failed(failure) => failure.report_id,
        }
    }

    /// The diagnosis, when processing completed
    #[must_use]
    pub const fn diagnosis(&self) -> Option<&DiagnosisResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Failed(_) => None,
        }
    }
}
