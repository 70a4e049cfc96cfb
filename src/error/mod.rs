//! Error handling for the triage pipeline.

pub mod util;

use crate::kb::loader::KnowledgeBaseError;
use std::{fmt, io};

/// Specialized error type for triage operations
#[derive(Debug)]
pub enum TriageError {
    /// Error opening or reading an input file
    IoError(io::Error),
    /// Error in the symptom mapping source
    KnowledgeBase(KnowledgeBaseError),
    /// Error reading or writing delimited data
    CsvError(csv::Error),
    /// Error serializing results
    JsonError(serde_json::Error),
    /// Requested export format outside the supported set
    UnsupportedFormat(String),
    /// Error with an input path or its contents
    InputError(String),
}

impl From<io::Error> for TriageError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<KnowledgeBaseError> for TriageError {
    fn from(error: KnowledgeBaseError) -> Self {
        Self::KnowledgeBase(error)
    }
}

impl From<csv::Error> for TriageError {
    fn from(error: csv::Error) -> Self {
        Self::CsvError(error)
    }
}

impl From<serde_json::Error> for TriageError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error)
    }
}

impl fmt::Display for TriageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::KnowledgeBase(e) => write!(f, "Knowledge base error: {e}"),
            Self::CsvError(e) => write!(f, "CSV error: {e}"),
            Self::JsonError(e) => write!(f, "JSON error: {e}"),
            Self::UnsupportedFormat(fmt_name) => {
                write!(f, "Unsupported export format: {fmt_name}")
            }
            Self::InputError(msg) => write!(f, "Input error: {msg}"),
        }
    }
}

impl std::error::Error for TriageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::KnowledgeBase(e) => Some(e),
            Self::CsvError(e) => Some(e),
            Self::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;
