//! A Rust library for rule-based triage of free-text patient reports, with
//! synonym-aware symptom matching, severity grading and structured export.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod export;
pub mod kb;
pub mod loader;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::TriageConfig;
pub use error::{Result, TriageError};
pub use kb::{KnowledgeBase, KnowledgeBaseError, load_mapping, load_mapping_from_reader};
pub use models::{
    CorpusStatistics, CorpusSummary, DiagnosisFinding, DiagnosisResult, MatchResult,
    PatientReport, ReportOutcome, ReportRecord, Severity, SymptomEntry,
};

// Matching and aggregation
pub use algorithm::{TriageRun, aggregate, run_triage};
pub use matcher::SymptomMatcher;
pub use normalize::normalize;

// Input and output boundaries
pub use export::{ExportDocument, ExportFormat, export_results, infer_format};
pub use loader::{load_reports, parse_reports};
