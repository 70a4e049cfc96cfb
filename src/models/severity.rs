//! Severity tiers for matched symptoms
//!
//! This module implements the ordered severity scale used to grade matched
//! symptoms and to rank the suggested diagnoses for a report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tiers for matched symptoms, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Low severity (e.g., mild discomfort)
    #[serde(rename = "baixo")]
    Baixo = 1,
    /// Moderate severity (most mapped symptoms)
    #[serde(rename = "moderado")]
    Moderado = 2,
    /// High severity (e.g., chest pain)
    #[serde(rename = "alto")]
    Alto = 3,
    /// Critical severity (e.g., shortness of breath at rest)
    #[serde(rename = "crítico")]
    Critico = 4,
}

/// Label shown when a report has no matched symptom and therefore no tier
pub const UNGRADED_LABEL: &str = "sem gravidade identificada";

impl Severity {
    /// All tiers from the most to the least severe, for summary rendering
    pub const DISPLAY_ORDER: [Self; 4] = [Self::Critico, Self::Alto, Self::Moderado, Self::Baixo];

    /// Get the numeric rank for this tier (1-4, with 4 being most severe)
    #[must_use]
    pub const fn rank(self) -> i32 {
        self as i32
    }

    /// Get the canonical label for this tier
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Baixo => "baixo",
            Self::Moderado => "moderado",
            Self::Alto => "alto",
            Self::Critico => "crítico",
        }
    }

    /// Parse a severity label that has already been normalized
    /// (lower-cased, diacritics stripped)
    #[must_use]
    pub fn from_normalized(label: &str) -> Option<Self> {
        match label {
            "baixo" => Some(Self::Baixo),
            "moderado" => Some(Self::Moderado),
            "alto" => Some(Self::Alto),
            "critico" => Some(Self::Critico),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order() {
        assert!(Severity::Baixo < Severity::Moderado);
        assert!(Severity::Moderado < Severity::Alto);
        assert!(Severity::Alto < Severity::Critico);
        assert_eq!(Severity::Critico.rank(), 4);
    }

    #[test]
    fn test_from_normalized() {
        assert_eq!(Severity::from_normalized("critico"), Some(Severity::Critico));
        assert_eq!(Severity::from_normalized("baixo"), Some(Severity::Baixo));
        assert_eq!(Severity::from_normalized("grave"), None);
        assert_eq!(Severity::from_normalized(""), None);
    }

    #[test]
    fn test_labels_keep_accents() {
        assert_eq!(Severity::Critico.label(), "crítico");
        assert_eq!(Severity::Alto.to_string(), "alto");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Severity::Critico).unwrap();
        assert_eq!(json, "\"crítico\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Critico);
    }
}
