//! Report corpus loading
//!
//! Reads the free-text patient reports, one logical report per non-empty
//! line, assigning 1-based identifiers in input order. A line that is not
//! valid UTF-8 becomes an `Unreadable` record so the batch can continue and
//! surface the failure per report instead of aborting the load.

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::report::{PatientReport, ReportRecord};
use crate::utils::logging::log::{log_load_complete, log_load_start};
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Load the report corpus from a file on disk
pub fn load_reports(path: &Path) -> Result<Vec<ReportRecord>> {
    log_load_start("report corpus", path);
    let start = Instant::now();

    let mut file = safe_open_file(path, "loading report corpus")?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let records = parse_reports(&bytes);
    log_load_complete("reports", path, records.len(), start.elapsed());
    Ok(records)
}

/// Split raw corpus bytes into report records
///
/// Blank lines are not records; identifiers count only the lines that carry
/// content, matching how the curated corpora are numbered.
#[must_use]
pub fn parse_reports(bytes: &[u8]) -> Vec<ReportRecord> {
    let mut records = Vec::new();

    for raw_line in bytes.split(|&b| b == b'\n') {
        let raw_line = raw_line.strip_suffix(b"\r").unwrap_or(raw_line);

        match std::str::from_utf8(raw_line) {
            Ok(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    let id = records.len() + 1;
                    records.push(ReportRecord::Valid(PatientReport::new(
                        id,
                        text.to_string(),
                    )));
                }
            }
            Err(e) => {
                if raw_line.iter().any(|b| !b.is_ascii_whitespace()) {
                    let id = records.len() + 1;
                    records.push(ReportRecord::Unreadable {
                        id,
                        error: format!("line is not valid UTF-8: {e}"),
                    });
                }
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_not_records() {
        let records = parse_reports(b"primeiro relato\n\n  \nsegundo relato\n");

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            ReportRecord::Valid(PatientReport::new(1, "primeiro relato".to_string()))
        );
        assert_eq!(records[1].id(), 2);
    }

    #[test]
    fn test_invalid_utf8_line_becomes_unreadable_record() {
        let mut bytes = b"relato bom\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
        bytes.push(b'\n');
        bytes.extend_from_slice(b"outro relato\n");

        let records = parse_reports(&bytes);
        assert_eq!(records.len(), 3);
        assert!(matches!(records[1], ReportRecord::Unreadable { id: 2, .. }));
        assert_eq!(records[2].id(), 3);
    }

    #[test]
    fn test_crlf_corpus() {
        let records = parse_reports(b"um\r\ndois\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            ReportRecord::Valid(PatientReport::new(2, "dois".to_string()))
        );
    }
}
