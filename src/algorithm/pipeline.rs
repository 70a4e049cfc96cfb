//! Batch triage pipeline
//!
//! Drives the per-run state machine: with a loaded knowledge base, process
//! the corpus one report at a time in input order, accumulate statistics,
//! and finalize them once the last report is done. A report that cannot be
//! processed becomes a `Failed` outcome and the batch continues; only
//! knowledge-base loading and export can abort a run.

use crate::algorithm::triage::aggregate;
use crate::kb::KnowledgeBase;
use crate::matcher::SymptomMatcher;
use crate::models::diagnosis::{ReportFailure, ReportOutcome};
use crate::models::report::ReportRecord;
use crate::models::statistics::{CorpusStatistics, CorpusSummary};
use crate::normalize::normalize;
use crate::utils::logging::log::log_record_warning;
use crate::utils::progress;
use log::info;
use std::time::Instant;

/// Result of one batch run: ordered outcomes plus finalized statistics
#[derive(Debug, Clone, PartialEq)]
pub struct TriageRun {
    /// One outcome per input record, in input order
    pub outcomes: Vec<ReportOutcome>,
    /// Corpus statistics, finalized after the last report
    pub summary: CorpusSummary,
}

/// Process a report corpus against a loaded knowledge base
///
/// Sequential and deterministic: outcomes are produced in input order and
/// two runs over the same corpus yield identical results.
#[must_use]
pub fn run_triage(
    records: &[ReportRecord],
    kb: &KnowledgeBase,
    show_progress: bool,
) -> TriageRun {
    let start = Instant::now();
    info!(
        "Processing {} reports against {} symptoms",
        records.len(),
        kb.len()
    );

    let matcher = SymptomMatcher::new(kb);
    let mut outcomes = Vec::with_capacity(records.len());
    let mut stats = CorpusStatistics::new();

    let pb = show_progress.then(|| {
        progress::create_report_progress_bar(records.len() as u64, Some("Triaging reports"))
    });

    for record in records {
        let outcome = match record {
            ReportRecord::Valid(report) => {
                let normalized = normalize(&report.text);
                let matches = matcher.scan(report.id, &normalized);
                ReportOutcome::Completed(aggregate(report, &matches, kb))
            }
            ReportRecord::Unreadable { id, error } => {
                log_record_warning(*id, error);
                ReportOutcome::Failed(ReportFailure {
                    report_id: *id,
                    error: error.clone(),
                })
            }
        };

        stats.record(&outcome);
        outcomes.push(outcome);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = &pb {
        progress::finish_progress_bar(pb, Some("Triage complete"));
    }

    let summary = stats.finalize();
    info!(
        "Processed {} reports ({} matched, {} unmapped, {} failed) in {:?}",
        summary.total_reports,
        summary.matched_reports,
        summary.unmapped_reports,
        summary.failed_reports,
        start.elapsed()
    );

    TriageRun { outcomes, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::load_mapping_from_reader;
    use crate::models::report::PatientReport;

    const MAPPING: &str = "\
symptom,synonyms,associated_diseases,severity_level
dor no peito,,angina,alto
falta de ar,,insuficiência cardíaca,crítico
";

    #[test]
    fn test_failed_record_does_not_abort_the_batch() {
        let kb = load_mapping_from_reader(MAPPING.as_bytes()).unwrap();
        let records = vec![
            ReportRecord::Valid(PatientReport::new(1, "dor no peito".to_string())),
            ReportRecord::Unreadable {
                id: 2,
                error: "invalid utf-8".to_string(),
            },
            ReportRecord::Valid(PatientReport::new(3, "falta de ar".to_string())),
        ];

        let run = run_triage(&records, &kb, false);

        assert_eq!(run.outcomes.len(), 3);
        assert!(run.outcomes[0].diagnosis().is_some());
        assert!(run.outcomes[1].diagnosis().is_none());
        assert!(run.outcomes[2].diagnosis().is_some());
        assert_eq!(run.summary.failed_reports, 1);
        assert_eq!(run.summary.matched_reports, 2);
    }

    #[test]
    fn test_outcomes_keep_input_order() {
        let kb = load_mapping_from_reader(MAPPING.as_bytes()).unwrap();
        let records: Vec<ReportRecord> = (1..=4)
            .map(|id| ReportRecord::Valid(PatientReport::new(id, format!("relato {id}"))))
            .collect();

        let run = run_triage(&records, &kb, false);
        let ids: Vec<usize> = run.outcomes.iter().map(ReportOutcome::report_id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }
}
