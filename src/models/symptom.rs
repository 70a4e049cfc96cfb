//! Symptom entity model
//!
//! A `SymptomEntry` clusters the synonymous phrasings of one canonical
//! symptom together with the diseases it implicates and its severity tier.
//! Entries are built once by the knowledge-base loader and never mutated.

use crate::models::severity::Severity;
use smallvec::SmallVec;

/// One canonical symptom with its synonyms, diseases and severity tier
#[derive(Debug, Clone)]
pub struct SymptomEntry {
    /// Canonical symptom name, unique across the knowledge base
    pub canonical: String,
    /// Synonym phrasings, pre-normalized, including the canonical form
    pub synonyms: SmallVec<[String; 4]>,
    /// Diseases implicated by this symptom, in authored order
    pub diseases: SmallVec<[String; 2]>,
    /// Severity tier attached to this symptom
    pub severity: Severity,
}

impl SymptomEntry {
    /// Create a new entry; the canonical name must already be normalized
    #[must_use]
    pub fn new(canonical: String, severity: Severity) -> Self {
        Self {
            canonical,
            synonyms: SmallVec::new(),
            diseases: SmallVec::new(),
            severity,
        }
    }

    /// Register a normalized synonym, skipping duplicates within the entry
    pub fn add_synonym(&mut self, synonym: String) {
        if !synonym.is_empty() && !self.synonyms.iter().any(|s| *s == synonym) {
            self.synonyms.push(synonym);
        }
    }

    /// Register an implicated disease, preserving authored order
    pub fn add_disease(&mut self, disease: String) {
        if !disease.is_empty() && !self.diseases.iter().any(|d| *d == disease) {
            self.diseases.push(disease);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_deduplicate() {
        let mut entry = SymptomEntry::new("dor no peito".to_string(), Severity::Alto);
        entry.add_synonym("dor no peito".to_string());
        entry.add_synonym("dor toracica".to_string());
        entry.add_synonym("dor no peito".to_string());
        entry.add_synonym(String::new());

        assert_eq!(entry.synonyms.len(), 2);
    }

    #[test]
    fn test_diseases_keep_order() {
        let mut entry = SymptomEntry::new("palpitacao".to_string(), Severity::Moderado);
        entry.add_disease("arritmia".to_string());
        entry.add_disease("ansiedade".to_string());
        entry.add_disease("arritmia".to_string());

        assert_eq!(entry.diseases.as_slice(), ["arritmia", "ansiedade"]);
    }
}
