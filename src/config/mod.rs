//! Configuration for the triage run.

use crate::export::ExportFormat;
use std::path::PathBuf;

/// Configuration for one batch triage run
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// File with one free-text patient report per line
    pub reports_path: PathBuf,
    /// CSV file mapping symptom synonyms to diseases and severity
    pub mapping_path: PathBuf,
    /// Destination for the structured export, when requested
    pub export_path: Option<PathBuf>,
    /// Export format; inferred from the destination extension when absent
    pub export_format: Option<ExportFormat>,
    /// Show a progress bar while processing the corpus
    pub show_progress: bool,
    /// Print every per-report diagnosis to the console
    pub print_reports: bool,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            reports_path: PathBuf::from("data/relatos_pacientes.txt"),
            mapping_path: PathBuf::from("data/mapa_sintomas_doencas.csv"),
            export_path: None,
            export_format: None,
            show_progress: true,
            print_reports: true,
        }
    }
}
