//! Diagnosis aggregation
//!
//! Reduces the matches for one report into a ranked diagnosis: all
//! (symptom, disease, severity) triples implied by the matched symptoms,
//! ordered by severity descending and then by first occurrence in the text,
//! together with the report's maximum severity tier.

use crate::kb::KnowledgeBase;
use crate::models::diagnosis::{DiagnosisFinding, DiagnosisResult, MatchResult};
use crate::models::report::PatientReport;
use itertools::Itertools;
use std::cmp::Reverse;

/// Build the diagnosis for one report from its match result
///
/// The maximum severity is the supremum over the matched tiers; it is `None`
/// for an empty match result, never the lowest tier, so an unmapped report
/// is not understated.
#[must_use]
pub fn aggregate(
    report: &PatientReport,
    match_result: &MatchResult,
    kb: &KnowledgeBase,
) -> DiagnosisResult {
    let matched_symptoms: Vec<String> = match_result
        .matches
        .iter()
        .map(|m| m.canonical.clone())
        .collect();

    // Matches arrive in first-occurrence order; the stable sort below keeps
    // that order within each severity tier.
    let mut findings: Vec<DiagnosisFinding> = Vec::new();
    for matched in &match_result.matches {
        if let Some(entry) = kb.lookup(&matched.canonical) {
            for disease in &entry.diseases {
                findings.push(DiagnosisFinding {
                    symptom: entry.canonical.clone(),
                    disease: disease.clone(),
                    severity: entry.severity,
                });
            }
        }
    }
    findings.sort_by_key(|f| Reverse(f.severity));

    let candidate_diseases: Vec<String> = findings
        .iter()
        .map(|f| f.disease.clone())
        .unique()
        .collect();

    let max_severity = findings.iter().map(|f| f.severity).max();
    let unmapped = match_result.is_empty();

    DiagnosisResult {
        report_id: report.id,
        report: report.text.clone(),
        matched_symptoms,
        candidate_diseases,
        findings,
        max_severity,
        unmapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::load_mapping_from_reader;
    use crate::matcher::SymptomMatcher;
    use crate::models::severity::Severity;
    use crate::normalize::normalize;

    const MAPPING: &str = "\
symptom,synonyms,associated_diseases,severity_level
dor no peito,,angina,alto
falta de ar,,insuficiência cardíaca,crítico
palpitação,,arritmia;ansiedade,moderado
";

    fn diagnose(text: &str) -> DiagnosisResult {
        let kb = load_mapping_from_reader(MAPPING.as_bytes()).unwrap();
        let report = PatientReport::new(1, text.to_string());
        let matches = SymptomMatcher::new(&kb).scan(report.id, &normalize(&report.text));
        aggregate(&report, &matches, &kb)
    }

    #[test]
    fn test_findings_ranked_by_severity_then_occurrence() {
        let result = diagnose("dor no peito, palpitação e falta de ar");

        let ranked: Vec<(&str, Severity)> = result
            .findings
            .iter()
            .map(|f| (f.disease.as_str(), f.severity))
            .collect();
        assert_eq!(
            ranked,
            [
                ("insuficiência cardíaca", Severity::Critico),
                ("angina", Severity::Alto),
                ("arritmia", Severity::Moderado),
                ("ansiedade", Severity::Moderado),
            ]
        );
        assert_eq!(result.max_severity, Some(Severity::Critico));
        assert!(!result.unmapped);
    }

    #[test]
    fn test_end_to_end_example() {
        let result = diagnose("dor no peito e falta de ar");

        assert_eq!(result.matched_symptoms, ["dor no peito", "falta de ar"]);
        assert_eq!(
            result.candidate_diseases,
            ["insuficiência cardíaca", "angina"]
        );
        assert_eq!(result.max_severity, Some(Severity::Critico));
    }

    #[test]
    fn test_unmapped_report_has_no_severity() {
        let result = diagnose("estou com dor de cabeça");

        assert!(result.unmapped);
        assert_eq!(result.max_severity, None);
        assert!(result.findings.is_empty());
        assert!(result.candidate_diseases.is_empty());
    }
}
