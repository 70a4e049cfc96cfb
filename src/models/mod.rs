//! Data models for the triage pipeline
//!
//! Leaf types shared by the loader, matcher, aggregator and exporter:
//! severity tiers, symptom entries, patient reports, per-report diagnosis
//! results and corpus statistics.

pub mod diagnosis;
pub mod report;
pub mod severity;
pub mod statistics;
pub mod symptom;

pub use diagnosis::{
    DiagnosisFinding, DiagnosisResult, MatchResult, ReportFailure, ReportOutcome, SymptomMatch,
};
pub use report::{PatientReport, ReportRecord};
pub use severity::{Severity, UNGRADED_LABEL};
pub use statistics::{CorpusStatistics, CorpusSummary, SeverityBucket};
pub use symptom::SymptomEntry;
