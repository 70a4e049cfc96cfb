//! Knowledge-base loader
//!
//! Builds the synonym-to-symptom mapping from CSV tabular data with the
//! columns `symptom`, `synonyms` (`;`-separated, optional),
//! `associated_diseases` (`;`-separated) and `severity_level`. Ambiguous
//! domain data is rejected rather than silently merged: a synonym owned by
//! two different symptoms aborts the load.

use crate::kb::KnowledgeBase;
use crate::models::severity::Severity;
use crate::models::symptom::SymptomEntry;
use crate::normalize::normalize;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Separator between synonyms and between diseases within one cell
const LIST_SEPARATOR: char = ';';

/// Errors that can occur while loading the symptom mapping
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    /// The same synonym is claimed by two different canonical symptoms
    #[error("duplicate synonym '{synonym}' maps to both '{existing}' and '{incoming}'")]
    DuplicateSynonym {
        /// The normalized synonym that collided
        synonym: String,
        /// Canonical symptom that already owns the synonym
        existing: String,
        /// Canonical symptom of the row being loaded
        incoming: String,
    },

    /// The severity label is not one of the recognized tiers
    #[error("unrecognized severity level '{value}' for symptom '{symptom}'")]
    InvalidSeverity {
        /// The offending label as authored
        value: String,
        /// Canonical symptom of the row being loaded
        symptom: String,
    },

    /// A required column is absent from the header row
    #[error("missing column '{0}' in symptom mapping")]
    MissingColumn(&'static str),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for knowledge-base loading
pub type Result<T> = std::result::Result<T, KnowledgeBaseError>;

#[derive(Debug, Deserialize)]
struct MappingRow {
    symptom: String,
    #[serde(default)]
    synonyms: Option<String>,
    associated_diseases: String,
    severity_level: String,
}

/// Load the symptom mapping from a CSV file on disk
pub fn load_mapping(path: &Path) -> crate::error::Result<KnowledgeBase> {
    let start = Instant::now();
    let file = crate::error::util::safe_open_file(path, "loading symptom mapping")?;
    let kb = load_mapping_from_reader(file)?;
    log::info!(
        "Loaded {} symptoms ({} synonyms) from {} in {:?}",
        kb.len(),
        kb.synonym_count(),
        path.display(),
        start.elapsed()
    );
    Ok(kb)
}

/// Load the symptom mapping from any CSV source
///
/// Every synonym is normalized before registration, so lookups against
/// normalized report text need no further folding. The canonical name is
/// registered as a synonym of itself; a repeated canonical therefore fails
/// as a duplicate synonym like any other collision.
pub fn load_mapping_from_reader<R: Read>(source: R) -> Result<KnowledgeBase> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    validate_headers(&mut reader)?;

    let mut entries: Vec<SymptomEntry> = Vec::new();
    let mut synonym_index: FxHashMap<String, usize> = FxHashMap::default();

    for row in reader.deserialize::<MappingRow>() {
        let row = row?;

        let canonical = normalize(&row.symptom);
        if canonical.is_empty() {
            warn!("Skipping mapping row with empty symptom name");
            continue;
        }

        let diseases: Vec<&str> = row
            .associated_diseases
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect();
        if diseases.is_empty() {
            warn!("Skipping symptom '{canonical}' with no associated disease");
            continue;
        }

        let severity = Severity::from_normalized(&normalize(&row.severity_level)).ok_or_else(
            || KnowledgeBaseError::InvalidSeverity {
                value: row.severity_level.clone(),
                symptom: canonical.clone(),
            },
        )?;

        let mut entry = SymptomEntry::new(canonical.clone(), severity);
        entry.add_synonym(canonical.clone());
        for synonym in row
            .synonyms
            .as_deref()
            .unwrap_or_default()
            .split(LIST_SEPARATOR)
        {
            let synonym = normalize(synonym);
            if !synonym.is_empty() {
                entry.add_synonym(synonym);
            }
        }
        for disease in diseases {
            entry.add_disease(disease.to_string());
        }

        let idx = entries.len();
        for synonym in &entry.synonyms {
            if let Some(&owner) = synonym_index.get(synonym) {
                return Err(KnowledgeBaseError::DuplicateSynonym {
                    synonym: synonym.clone(),
                    existing: entries[owner].canonical.clone(),
                    incoming: entry.canonical.clone(),
                });
            }
            synonym_index.insert(synonym.clone(), idx);
        }

        debug!(
            "Registered symptom '{}' ({} synonyms, {} diseases, severity {})",
            entry.canonical,
            entry.synonyms.len(),
            entry.diseases.len(),
            entry.severity
        );
        entries.push(entry);
    }

    Ok(KnowledgeBase::from_parts(entries, synonym_index))
}

/// Columns the mapping source must provide; `synonyms` is optional
const REQUIRED_COLUMNS: [&str; 3] = ["symptom", "associated_diseases", "severity_level"];

fn validate_headers<R: Read>(reader: &mut csv::Reader<R>) -> Result<()> {
    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(KnowledgeBaseError::MissingColumn(required));
        }
    }
    Ok(())
}
