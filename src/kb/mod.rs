//! Symptom knowledge base
//!
//! The knowledge base is the read-only mapping from normalized synonym to
//! symptom entry that drives the matcher. It is built once by the loader at
//! startup and passed explicitly to every matching operation; nothing in the
//! pipeline mutates it afterwards.

pub mod loader;

use crate::models::symptom::SymptomEntry;
use rustc_hash::FxHashMap;

pub use loader::{KnowledgeBaseError, load_mapping, load_mapping_from_reader};

/// Immutable synonym-to-symptom mapping
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    /// Symptom entries in source order
    entries: Vec<SymptomEntry>,
    /// Normalized synonym -> index into `entries`
    synonym_index: FxHashMap<String, usize>,
}

impl KnowledgeBase {
    pub(crate) fn from_parts(
        entries: Vec<SymptomEntry>,
        synonym_index: FxHashMap<String, usize>,
    ) -> Self {
        Self {
            entries,
            synonym_index,
        }
    }

    /// Look up the entry owning a normalized synonym
    #[must_use]
    pub fn lookup(&self, synonym: &str) -> Option<&SymptomEntry> {
        self.synonym_index
            .get(synonym)
            .map(|&idx| &self.entries[idx])
    }

    /// All entries in source order
    #[must_use]
    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }

    /// Iterate over every registered synonym with its entry
    pub fn synonyms(&self) -> impl Iterator<Item = (&str, &SymptomEntry)> {
        self.synonym_index
            .iter()
            .map(|(synonym, &idx)| (synonym.as_str(), &self.entries[idx]))
    }

    /// Number of symptom entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the base holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered synonyms across all entries
    #[must_use]
    pub fn synonym_count(&self) -> usize {
        self.synonym_index.len()
    }
}
