//! Corpus-wide coverage and severity statistics
//!
//! `CorpusStatistics` accumulates one update per processed report and is
//! consumed into a `CorpusSummary` once the whole corpus has been handled.
//! Percentages exist only on the summary; partial reads during processing
//! are not part of the contract.

use crate::models::diagnosis::{DiagnosisResult, ReportOutcome};
use crate::models::severity::Severity;
use serde::{Deserialize, Serialize};

/// Incremental statistics over a report corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStatistics {
    /// Total reports seen, including failed ones
    total_reports: usize,
    /// Reports with at least one matched symptom
    matched_reports: usize,
    /// Reports with zero matched symptoms
    unmapped_reports: usize,
    /// Reports that could not be processed
    failed_reports: usize,
    /// Maximum-severity histogram, indexed by tier rank - 1
    severity_histogram: [usize; 4],
}

impl CorpusStatistics {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one processed report
    pub fn record(&mut self, outcome: &ReportOutcome) {
        match outcome {
            ReportOutcome::Completed(result) => self.record_diagnosis(result),
            ReportOutcome::Failed(_) => {
                self.total_reports += 1;
                self.failed_reports += 1;
            }
        }
    }

    fn record_diagnosis(&mut self, result: &DiagnosisResult) {
        self.total_reports += 1;
        if result.unmapped {
            self.unmapped_reports += 1;
        } else {
            self.matched_reports += 1;
        }
        // Histogram only counts graded reports; an undefined severity is
        // reported separately, never folded into the lowest tier.
        if let Some(severity) = result.max_severity {
            self.severity_histogram[(severity.rank() - 1) as usize] += 1;
        }
    }

    /// Number of reports recorded so far
    #[must_use]
    pub const fn total_reports(&self) -> usize {
        self.total_reports
    }

    /// Count of reports whose maximum severity was the given tier
    #[must_use]
    pub const fn severity_count(&self, severity: Severity) -> usize {
        self.severity_histogram[(severity.rank() - 1) as usize]
    }

    /// Finalize the accumulator into a summary with percentages
    #[must_use]
    pub fn finalize(self) -> CorpusSummary {
        let coverage_pct = if self.total_reports > 0 {
            (self.matched_reports as f64 / self.total_reports as f64) * 100.0
        } else {
            0.0
        };

        let severity_distribution = Severity::DISPLAY_ORDER
            .iter()
            .map(|&tier| SeverityBucket {
                severity: tier,
                count: self.severity_histogram[(tier.rank() - 1) as usize],
            })
            .collect();

        CorpusSummary {
            total_reports: self.total_reports,
            matched_reports: self.matched_reports,
            unmapped_reports: self.unmapped_reports,
            failed_reports: self.failed_reports,
            coverage_pct,
            severity_distribution,
        }
    }
}

/// One bucket of the maximum-severity histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityBucket {
    /// Severity tier of this bucket
    pub severity: Severity,
    /// Number of reports whose maximum severity fell in this tier
    pub count: usize,
}

/// Finalized corpus statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSummary {
    /// Total reports processed, including failed ones
    pub total_reports: usize,
    /// Reports with at least one matched symptom
    pub matched_reports: usize,
    /// Reports flagged for manual review (zero matches)
    pub unmapped_reports: usize,
    /// Reports that could not be processed
    pub failed_reports: usize,
    /// Share of reports with at least one match, in percent
    pub coverage_pct: f64,
    /// Maximum-severity histogram, most severe tier first
    pub severity_distribution: Vec<SeverityBucket>,
}
