//! Keyword-heuristic fallback classifier.
//!
//! A degenerate substring-matching scorer used only when the model artifact
//! cannot be loaded, so the prediction boundary never has to surface an
//! error for the "model not yet trained" state. Results carry the same
//! shape as real inference but are tagged as fallback by the orchestrator.

use crate::classifier::result::{LABEL_AGAMA, LABEL_NETRAL, LABEL_RAS};

/// Religion-related keywords.
const AGAMA_KEYWORDS: &[&str] = &[
    "agama", "islam", "kristen", "hindu", "buddha", "kafir", "murtad",
];

/// Ethnicity-related keywords.
const RAS_KEYWORDS: &[&str] = &["ras", "etnis", "cina", "jawa", "sunda", "batak", "rasis"];

/// One class's share of a keyword-heuristic result.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    /// Display label.
    pub label: &'static str,
    /// Class identifier in the heuristic's own numbering.
    pub class_id: i64,
    /// Normalized probability.
    pub probability: f64,
}

/// A best-effort classification from the keyword heuristic.
#[derive(Debug, Clone)]
pub struct KeywordClassification {
    /// Winning display label.
    pub label: &'static str,
    /// Winning class identifier.
    pub class_id: i64,
    /// Normalized per-class scores, in Netral/Agama/Ras order.
    pub scores: Vec<KeywordScore>,
}

/// Keyword-based fallback scorer.
///
/// Counts case-insensitive substring matches of fixed per-class keyword
/// lists over the raw input, boosts the matched class's base score by
/// 0.1 per hit, and normalizes.
#[derive(Clone, Debug, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    /// Create a new keyword scorer.
    pub fn new() -> Self {
        KeywordScorer
    }

    /// Classify the raw text with the keyword heuristic.
    pub fn classify(&self, text: &str) -> KeywordClassification {
        let text_lower = text.to_lowercase();

        let agama_matches = AGAMA_KEYWORDS
            .iter()
            .filter(|kw| text_lower.contains(*kw))
            .count();
        let ras_matches = RAS_KEYWORDS
            .iter()
            .filter(|kw| text_lower.contains(*kw))
            .count();

        let mut netral_score = 0.5;
        let mut agama_score = 0.2;
        let mut ras_score = 0.3;

        if agama_matches > 0 {
            agama_score = 0.6 + agama_matches as f64 * 0.1;
            netral_score = 0.2;
            ras_score = 0.2;
        }

        if ras_matches > 0 {
            ras_score = 0.6 + ras_matches as f64 * 0.1;
            netral_score = 0.2;
            agama_score = 0.2;
        }

        let total = netral_score + agama_score + ras_score;
        netral_score /= total;
        agama_score /= total;
        ras_score /= total;

        // Strict comparisons: ties fall back to Netral.
        let (label, class_id) = if agama_score > netral_score && agama_score > ras_score {
            (LABEL_AGAMA, 1)
        } else if ras_score > netral_score && ras_score > agama_score {
            (LABEL_RAS, 2)
        } else {
            (LABEL_NETRAL, 0)
        };

        KeywordClassification {
            label,
            class_id,
            scores: vec![
                KeywordScore {
                    label: LABEL_NETRAL,
                    class_id: 0,
                    probability: netral_score,
                },
                KeywordScore {
                    label: LABEL_AGAMA,
                    class_id: 1,
                    probability: agama_score,
                },
                KeywordScore {
                    label: LABEL_RAS,
                    class_id: 2,
                    probability: ras_score,
                },
            ],
        }
    }
}
