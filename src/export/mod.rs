//! Result export
//!
//! Serializes the ordered outcome sequence plus the finalized corpus
//! summary to JSON or CSV. The destination is published atomically: results
//! are written through a buffered writer to a temporary sibling file,
//! flushed, then renamed over the destination, so a partially written file
//! is never observable at the destination path. Format validation happens
//! before anything touches the filesystem.

use crate::error::util::ensure_parent_dir;
use crate::error::{Result, TriageError};
use crate::models::diagnosis::ReportOutcome;
use crate::models::statistics::CorpusSummary;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Separator used when flattening lists into one CSV cell
const CSV_LIST_SEPARATOR: &str = "; ";

/// Column order of the tabular export
const CSV_COLUMNS: [&str; 7] = [
    "report_id",
    "report",
    "matched_symptoms",
    "candidate_diseases",
    "max_severity",
    "unmapped",
    "error",
];

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One JSON document with per-report objects and the summary
    Json,
    /// Flattened per-report rows with `;`-joined list columns
    Csv,
}

impl ExportFormat {
    /// File extension associated with this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = TriageError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(TriageError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Resolve the export format from an explicit choice or the destination extension
pub fn infer_format(path: &Path, explicit: Option<ExportFormat>) -> Result<ExportFormat> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => ext.parse(),
        None => Err(TriageError::UnsupportedFormat(format!(
            "cannot infer format for {}",
            path.display()
        ))),
    }
}

/// The complete JSON export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// One entry per report, in input order
    pub reports: Vec<ReportOutcome>,
    /// Finalized corpus statistics
    pub summary: CorpusSummary,
}

/// Serialize the outcome sequence and summary to the destination path
///
/// Field order is preserved and the report identifier and unmapped flag are
/// always present; failed reports carry their error marker. Nothing is
/// written for an unsupported format.
pub fn export_results(
    path: &Path,
    format: ExportFormat,
    outcomes: &[ReportOutcome],
    summary: &CorpusSummary,
) -> Result<()> {
    ensure_parent_dir(path, "exporting results")?;

    let tmp = temp_sibling(path);
    let written = write_to(&tmp, format, outcomes, summary);
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path)?;

    info!(
        "Exported {} report results to {} ({})",
        outcomes.len(),
        path.display(),
        format.extension().to_uppercase()
    );
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(
        || std::ffi::OsString::from("export"),
        std::ffi::OsStr::to_os_string,
    );
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_to(
    tmp: &Path,
    format: ExportFormat,
    outcomes: &[ReportOutcome],
    summary: &CorpusSummary,
) -> Result<()> {
    let file = fs::File::create(tmp)?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => {
            let document = ExportDocument {
                reports: outcomes.to_vec(),
                summary: summary.clone(),
            };
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writer.write_all(b"\n")?;
        }
        ExportFormat::Csv => write_csv(&mut writer, outcomes)?,
    }

    writer.flush()?;
    Ok(())
}

fn write_csv<W: Write>(writer: W, outcomes: &[ReportOutcome]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_COLUMNS)?;

    for outcome in outcomes {
        match outcome {
            ReportOutcome::Completed(result) => {
                csv_writer.write_record([
                    result.report_id.to_string(),
                    result.report.clone(),
                    result.matched_symptoms.join(CSV_LIST_SEPARATOR),
                    result.candidate_diseases.join(CSV_LIST_SEPARATOR),
                    result
                        .max_severity
                        .map(|s| s.label().to_string())
                        .unwrap_or_default(),
                    result.unmapped.to_string(),
                    String::new(),
                ])?;
            }
            ReportOutcome::Failed(failure) => {
                csv_writer.write_record([
                    failure.report_id.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    failure.error.clone(),
                ])?;
            }
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(TriageError::UnsupportedFormat(name)) if name == "xml"
        ));
    }

    #[test]
    fn test_infer_format_from_extension() {
        assert_eq!(
            infer_format(Path::new("out/resultado.json"), None).unwrap(),
            ExportFormat::Json
        );
        assert_eq!(
            infer_format(Path::new("resultado.txt"), Some(ExportFormat::Csv)).unwrap(),
            ExportFormat::Csv
        );
        assert!(infer_format(Path::new("resultado.xml"), None).is_err());
        assert!(infer_format(Path::new("resultado"), None).is_err());
    }

    #[test]
    fn test_temp_sibling_stays_in_directory() {
        let tmp = temp_sibling(Path::new("out/resultado.json"));
        assert_eq!(tmp, Path::new("out/resultado.json.tmp"));
    }
}
