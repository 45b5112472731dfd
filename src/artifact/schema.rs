//! Serde schema and invariant validation for the model artifact.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TapisError};

/// Stored multinomial Naive Bayes parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaiveBayesParams {
    /// Laplace/Lidstone smoothing constant used at fit time. Carried for
    /// provenance/display only; inference never reads it.
    pub alpha: f64,
    /// Ordered class identifiers; defines the column order of all
    /// per-class arrays.
    pub classes: Vec<i64>,
    /// Log prior per class, aligned with `classes`.
    pub class_log_prior: Vec<f64>,
    /// Log probability of each feature given each class;
    /// `classes.len()` rows of `n_features` columns.
    pub feature_log_prob: Vec<Vec<f64>>,
    /// Number of features.
    pub n_features: usize,
}

/// Stored TF-IDF vectorizer parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerParams {
    /// Token -> dense 0-based feature index.
    pub vocab: HashMap<String, usize>,
    /// Inverse document frequency weights, index-aligned with `vocab`.
    pub idf: Vec<f64>,
    /// Feature names in index order, when exported.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    /// Number of features.
    pub n_features: usize,
    /// Vocabulary cap used at fit time, when exported.
    #[serde(default)]
    pub max_features: Option<usize>,
}

/// Offline evaluation metrics exported alongside the model (display only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub auc: f64,
}

/// Cross-validation summary exported alongside the model (display only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossValidationMetrics {
    pub accuracy: f64,
    pub std: f64,
}

/// The complete pre-trained model artifact.
///
/// Matches the JSON emitted by the offline trainer. The `model`,
/// `vectorizer`, and `reverse` fields drive inference; `vocab` and
/// `word_freq` enable spelling correction when both are present; everything
/// else is provenance carried for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Naive Bayes parameters.
    pub model: NaiveBayesParams,
    /// TF-IDF vectorizer parameters.
    pub vectorizer: VectorizerParams,
    /// Spelling-correction vocabulary, in scan order.
    #[serde(default)]
    pub vocab: Option<Vec<String>>,
    /// Corpus frequency per spelling-correction vocabulary word.
    #[serde(default)]
    pub word_freq: Option<HashMap<String, u64>>,
    /// Class id (as a string key) -> display label.
    pub reverse: HashMap<String, String>,
    /// Display label -> class id, when exported.
    #[serde(default)]
    pub map_target: Option<HashMap<String, i64>>,
    /// Smoothing constant duplicated at the top level by the trainer.
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub max_features: Option<usize>,
    #[serde(default)]
    pub training_accuracy: Option<f64>,
    #[serde(default)]
    pub testing_accuracy: Option<f64>,
    #[serde(default)]
    pub train_size: Option<usize>,
    #[serde(default)]
    pub test_size: Option<usize>,
    #[serde(default)]
    pub total_data: Option<usize>,
    #[serde(default)]
    pub training_metrics: Option<EvaluationMetrics>,
    #[serde(default)]
    pub testing_metrics: Option<EvaluationMetrics>,
    #[serde(default)]
    pub cv_metrics: Option<CrossValidationMetrics>,
}

impl ModelArtifact {
    /// Validate the structural invariants the inference pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        let n_classes = self.model.classes.len();
        let n_features = self.model.n_features;

        if n_classes == 0 {
            return Err(TapisError::malformed_artifact("artifact has no classes"));
        }

        if self.model.class_log_prior.len() != n_classes {
            return Err(TapisError::malformed_artifact(format!(
                "class_log_prior has {} entries for {} classes",
                self.model.class_log_prior.len(),
                n_classes
            )));
        }

        if self.model.feature_log_prob.len() != n_classes {
            return Err(TapisError::malformed_artifact(format!(
                "feature_log_prob has {} rows for {} classes",
                self.model.feature_log_prob.len(),
                n_classes
            )));
        }

        for (row_idx, row) in self.model.feature_log_prob.iter().enumerate() {
            if row.len() != n_features {
                return Err(TapisError::malformed_artifact(format!(
                    "feature_log_prob row {} has {} columns, expected {}",
                    row_idx,
                    row.len(),
                    n_features
                )));
            }
        }

        if self.vectorizer.n_features != n_features {
            return Err(TapisError::malformed_artifact(format!(
                "vectorizer has {} features, model expects {}",
                self.vectorizer.n_features, n_features
            )));
        }

        if self.vectorizer.idf.len() != n_features {
            return Err(TapisError::malformed_artifact(format!(
                "idf has {} weights for {} features",
                self.vectorizer.idf.len(),
                n_features
            )));
        }

        // The vocabulary must map onto the dense index range exactly.
        if self.vectorizer.vocab.len() != n_features {
            return Err(TapisError::malformed_artifact(format!(
                "vocabulary has {} terms for {} features",
                self.vectorizer.vocab.len(),
                n_features
            )));
        }

        let mut seen = vec![false; n_features];
        for (term, &index) in &self.vectorizer.vocab {
            if index >= n_features {
                return Err(TapisError::malformed_artifact(format!(
                    "term '{term}' maps to index {index}, out of range for {n_features} features"
                )));
            }
            if seen[index] {
                return Err(TapisError::malformed_artifact(format!(
                    "feature index {index} is assigned to more than one term"
                )));
            }
            seen[index] = true;
        }

        for class_id in &self.model.classes {
            if !self.reverse.contains_key(&class_id.to_string()) {
                return Err(TapisError::malformed_artifact(format!(
                    "class id {class_id} has no display label"
                )));
            }
        }

        Ok(())
    }

    /// Look up the display label for a class id.
    pub fn label_for_class(&self, class_id: i64) -> Option<&str> {
        self.reverse.get(&class_id.to_string()).map(|s| s.as_str())
    }

    /// Whether the artifact carries everything spelling correction needs.
    pub fn supports_spelling_correction(&self) -> bool {
        self.vocab.is_some() && self.word_freq.is_some()
    }
}
