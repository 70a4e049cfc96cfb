//! Console output utilities
//!
//! Renders per-report diagnoses and the corpus summary for the terminal.
//! Output strings stay in the domain language of the corpus.

use crate::models::diagnosis::{DiagnosisResult, ReportFailure, ReportOutcome};
use crate::models::severity::UNGRADED_LABEL;
use crate::models::statistics::CorpusSummary;

/// Print one report outcome
pub fn print_outcome(outcome: &ReportOutcome) {
    match outcome {
        ReportOutcome::Completed(result) => print_diagnosis(result),
        ReportOutcome::Failed(failure) => print_failure(failure),
    }
}

/// Print the diagnosis for one report
pub fn print_diagnosis(result: &DiagnosisResult) {
    println!("Relato {}: {}", result.report_id, result.report);

    if result.matched_symptoms.is_empty() {
        println!("  Sintomas reconhecidos: nenhum mapeado");
    } else {
        println!("  Sintomas reconhecidos:");
        for symptom in &result.matched_symptoms {
            println!("    - {symptom}");
        }
    }

    if result.findings.is_empty() {
        println!("  Diagnósticos sugeridos: revisão manual necessária");
    } else {
        println!("  Diagnósticos sugeridos:");
        for finding in &result.findings {
            println!("    - {} (gravidade: {})", finding.disease, finding.severity);
        }
        match result.max_severity {
            Some(severity) => println!("  Gravidade máxima indicada: {severity}"),
            None => println!("  Gravidade máxima indicada: {UNGRADED_LABEL}"),
        }
    }
    println!();
}

/// Print a report that could not be processed
pub fn print_failure(failure: &ReportFailure) {
    println!("Relato {}: [não processado]", failure.report_id);
    println!("  Erro: {}", failure.error);
    println!();
}

/// Print the corpus summary
pub fn print_summary(summary: &CorpusSummary) {
    println!("Resumo geral:");
    println!("  Relatos analisados: {}", summary.total_reports);
    println!(
        "  Relatos com sintomas reconhecidos: {}",
        summary.matched_reports
    );
    println!(
        "  Relatos para revisão manual: {}",
        summary.unmapped_reports
    );
    if summary.failed_reports > 0 {
        println!("  Relatos não processados: {}", summary.failed_reports);
    }
    println!("  Cobertura: {:.1}%", summary.coverage_pct);

    if summary.severity_distribution.iter().any(|b| b.count > 0) {
        println!("  Distribuição de gravidade sugerida:");
        for bucket in &summary.severity_distribution {
            if bucket.count > 0 {
                println!("    - {}: {}", bucket.severity, bucket.count);
            }
        }
    } else {
        println!("  Distribuição de gravidade sugerida: nenhum caso classificado");
    }
}
