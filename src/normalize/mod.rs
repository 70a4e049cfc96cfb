//! Text normalization for lexical matching
//!
//! Raw report text and knowledge-base synonyms go through the same
//! canonicalization so that spelling variation (case, diacritics, stray
//! punctuation, uneven whitespace) never blocks a match. Normalization is
//! purely lexical; no stemming or lemmatization is performed.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalize raw text for matching
///
/// Lower-cases, strips diacritics via NFD decomposition, maps punctuation to
/// whitespace and collapses runs of whitespace. Deterministic and pure;
/// empty or whitespace-only input yields an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    // Collapse internal whitespace and trim in one pass
    let mut out = String::with_capacity(folded.len());
    for token in folded.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}
