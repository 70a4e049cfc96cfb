//! Patient report model
//!
//! Reports are short free-text statements, one per input line, identified by
//! their 1-based position in the corpus. They are immutable once read.

/// A single free-text patient report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientReport {
    /// 1-based identifier assigned by the corpus loader
    pub id: usize,
    /// Raw report text as read from the corpus
    pub text: String,
}

impl PatientReport {
    /// Create a new report
    #[must_use]
    pub const fn new(id: usize, text: String) -> Self {
        Self { id, text }
    }
}

/// One record of the report corpus, valid or not
///
/// Lines that cannot be decoded are carried through the pipeline as
/// `Unreadable` so that a single bad record never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRecord {
    /// A report that was read successfully
    Valid(PatientReport),
    /// A line that could not be decoded as text
    Unreadable {
        /// 1-based identifier of the offending line
        id: usize,
        /// Description of the decode failure
        error: String,
    },
}

impl ReportRecord {
    /// Identifier of the underlying line, valid or not
    #[must_use]
    pub const fn id(&self) -> usize {
        match self {
            Self::Valid(report) => report.id,
            Self::Unreadable { id, .. } => *id,
        }
    }
}
