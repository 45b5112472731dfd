//! Classification result types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Display label for the neutral class.
pub const LABEL_NETRAL: &str = "Netral";
/// Display label for the religion class.
pub const LABEL_AGAMA: &str = "Agama";
/// Display label for the ethnicity class.
pub const LABEL_RAS: &str = "Ras";

/// Where a prediction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    /// Genuine model-backed inference.
    Model,
    /// The degenerate keyword heuristic used when no artifact is available.
    KeywordFallback,
}

/// The result of classifying one input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// The winning display label. Always the label with the largest
    /// probability in `probabilities`.
    pub label: String,
    /// The class identifier selected by the classifier.
    pub class_id: i64,
    /// Probability per display label; values in [0, 1] summing to 1.0
    /// within floating-point tolerance.
    pub probabilities: HashMap<String, f64>,
    /// Provenance of this prediction.
    pub source: PredictionSource,
}

impl Prediction {
    /// Whether this prediction came from real model inference rather than
    /// the keyword fallback.
    pub fn is_model_backed(&self) -> bool {
        self.source == PredictionSource::Model
    }

    /// The probability assigned to the winning label.
    pub fn confidence(&self) -> f64 {
        self.probabilities.get(&self.label).copied().unwrap_or(0.0)
    }
}
