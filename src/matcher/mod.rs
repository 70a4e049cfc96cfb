//! Symptom matching
//!
//! Scans a normalized report against the knowledge base and produces the
//! distinct canonical symptoms whose synonyms occur in the text. Matching is
//! lexical containment at word boundaries; synonym occurrences are detected
//! independently and collapsed per canonical symptom, keeping the earliest
//! offset so downstream ordering can follow the text.

use crate::kb::KnowledgeBase;
use crate::models::diagnosis::{MatchResult, SymptomMatch};
use rustc_hash::FxHashMap;

/// Scanner for normalized report text
#[derive(Debug, Clone, Copy)]
pub struct SymptomMatcher<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> SymptomMatcher<'kb> {
    /// Create a matcher over a loaded knowledge base
    #[must_use]
    pub const fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Scan one normalized report
    ///
    /// Returns the distinct matched symptoms in order of first occurrence in
    /// the text. An empty result is the expected unmapped case, not an
    /// error. Symptom presence is boolean: a symptom matched through several
    /// synonyms appears once, with the earliest hit.
    #[must_use]
    pub fn scan(&self, report_id: usize, normalized_text: &str) -> MatchResult {
        // canonical -> (first offset, synonym that hit there)
        let mut hits: FxHashMap<&str, (usize, &str)> = FxHashMap::default();

        if !normalized_text.is_empty() {
            for (synonym, entry) in self.kb.synonyms() {
                if let Some(offset) = find_word(normalized_text, synonym) {
                    let candidate = (offset, synonym);
                    hits.entry(entry.canonical.as_str())
                        .and_modify(|best| {
                            if candidate < *best {
                                *best = candidate;
                            }
                        })
                        .or_insert(candidate);
                }
            }
        }

        let mut matches: Vec<SymptomMatch> = hits
            .into_iter()
            .map(|(canonical, (offset, synonym))| SymptomMatch {
                canonical: canonical.to_string(),
                matched_synonym: synonym.to_string(),
                first_offset: offset,
            })
            .collect();
        // First textual occurrence, then canonical name so that equal
        // offsets stay deterministic across runs
        matches.sort_by(|a, b| {
            a.first_offset
                .cmp(&b.first_offset)
                .then_with(|| a.canonical.cmp(&b.canonical))
        });

        MatchResult { report_id, matches }
    }
}

/// Find the first occurrence of `needle` in `haystack` at word boundaries
///
/// The haystack is normalized text, so word characters are alphanumeric and
/// separators are single spaces. An occurrence inside a longer word does not
/// count: "dor" is not found in "dormir".
fn find_word(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.match_indices(needle) {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[start + needle.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return Some(start);
        }
    }
    None
}
