//! The classifier engine: artifact cache plus the inference pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::analysis::analyzer::{Analyzer, IndonesianAnalyzer};
use crate::artifact::schema::ModelArtifact;
use crate::artifact::source::ArtifactSource;
use crate::classifier::result::{Prediction, PredictionSource};
use crate::error::{Result, TapisError};
use crate::ml::keyword::KeywordScorer;
use crate::ml::naive_bayes::MultinomialNb;
use crate::ml::tfidf::TfIdfVectorizer;
use crate::spelling::corrector::SpellingCorrector;

/// Inference-ready components built once from a validated artifact.
struct LoadedModel {
    vectorizer: TfIdfVectorizer,
    model: MultinomialNb,
    corrector: Option<SpellingCorrector>,
    /// Class id and display label per class, in artifact order.
    labels: Vec<(i64, String)>,
}

impl LoadedModel {
    fn from_artifact(artifact: &ModelArtifact) -> Result<Self> {
        artifact.validate()?;

        let labels = artifact
            .model
            .classes
            .iter()
            .map(|&class_id| {
                artifact
                    .label_for_class(class_id)
                    .map(|label| (class_id, label.to_string()))
                    .ok_or_else(|| {
                        TapisError::malformed_artifact(format!(
                            "class id {class_id} has no display label"
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        // Spelling correction is only enabled when the artifact carries
        // both the vocabulary and the frequency table.
        let corrector = match (&artifact.vocab, &artifact.word_freq) {
            (Some(vocab), Some(word_freq)) => {
                Some(SpellingCorrector::new(vocab.clone(), word_freq.clone()))
            }
            _ => None,
        };

        Ok(LoadedModel {
            vectorizer: TfIdfVectorizer::from_params(&artifact.vectorizer),
            model: MultinomialNb::from_params(&artifact.model),
            corrector,
            labels,
        })
    }
}

/// The inference orchestrator and sole public prediction entry point.
///
/// The artifact is loaded lazily on the first call and cached for the rest
/// of the process lifetime; [`invalidate_model`](Self::invalidate_model)
/// drops the cache when an external "model changed" signal arrives. The
/// cache holds read-only state behind a lock, so concurrent `predict` calls
/// are safe.
pub struct ClassifierEngine {
    source: Box<dyn ArtifactSource>,
    analyzer: Arc<dyn Analyzer>,
    fallback: KeywordScorer,
    cache: RwLock<Option<Arc<LoadedModel>>>,
}

impl std::fmt::Debug for ClassifierEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierEngine")
            .field("source", &self.source.describe())
            .field("analyzer", &self.analyzer.name())
            .field("model_loaded", &self.is_model_loaded())
            .finish()
    }
}

impl ClassifierEngine {
    /// Create an engine with the default Indonesian analyzer.
    pub fn new(source: Box<dyn ArtifactSource>) -> Self {
        Self::with_analyzer(source, Arc::new(IndonesianAnalyzer::new()))
    }

    /// Create an engine with a custom analyzer.
    pub fn with_analyzer(source: Box<dyn ArtifactSource>, analyzer: Arc<dyn Analyzer>) -> Self {
        ClassifierEngine {
            source,
            analyzer,
            fallback: KeywordScorer::new(),
            cache: RwLock::new(None),
        }
    }

    /// Classify the given text.
    ///
    /// Never fails: any artifact or pipeline fault is converted into a
    /// keyword-fallback prediction carrying the same shape, distinguished
    /// by [`Prediction::source`].
    pub fn predict(&self, text: &str) -> Prediction {
        match self.predict_with_model(text) {
            Ok(prediction) => prediction,
            Err(e) => {
                log::warn!("model inference unavailable ({e}); using keyword fallback");
                self.fallback_prediction(text)
            }
        }
    }

    /// Drop the cached model so the next call reloads the artifact.
    ///
    /// This is the hook for the external "model changed" signal; how that
    /// signal is delivered (polling, push, restart) is the caller's
    /// concern.
    pub fn invalidate_model(&self) {
        let had_model = self.cache.write().take().is_some();
        if had_model {
            log::info!("cached model artifact invalidated");
        }
    }

    /// Whether a model artifact is currently cached.
    pub fn is_model_loaded(&self) -> bool {
        self.cache.read().is_some()
    }

    /// Run the full model-backed pipeline:
    /// normalize -> correct -> vectorize -> classify -> relabel.
    fn predict_with_model(&self, text: &str) -> Result<Prediction> {
        let loaded = self.loaded_model()?;

        let mut tokens: Vec<String> = self
            .analyzer
            .analyze(text)?
            .map(|token| token.text)
            .collect();

        if let Some(corrector) = &loaded.corrector {
            tokens = corrector.correct_tokens(&tokens);
        }

        let features = loaded.vectorizer.transform(&tokens);
        let proba = loaded.model.predict_proba(&features);
        let predicted_class = loaded.model.predict(&features);

        // Re-derive the reported label from the posteriors themselves so it
        // can never disagree with the largest probability shown to the
        // caller. Start from the raw prediction's label and scan classes in
        // artifact order.
        let mut label = loaded
            .labels
            .iter()
            .find(|(class_id, _)| *class_id == predicted_class)
            .map(|(_, label)| label.clone())
            .unwrap_or_default();

        let mut probabilities = HashMap::with_capacity(loaded.labels.len());
        let mut max_proba = -1.0;
        for ((_, class_label), &p) in loaded.labels.iter().zip(proba.iter()) {
            probabilities.insert(class_label.clone(), p);
            if p > max_proba {
                max_proba = p;
                label = class_label.clone();
            }
        }

        Ok(Prediction {
            label,
            class_id: predicted_class,
            probabilities,
            source: PredictionSource::Model,
        })
    }

    /// Get the cached model, loading and validating the artifact on first
    /// use.
    fn loaded_model(&self) -> Result<Arc<LoadedModel>> {
        if let Some(model) = self.cache.read().as_ref() {
            return Ok(Arc::clone(model));
        }

        let mut guard = self.cache.write();
        // Another caller may have loaded it while we waited on the lock.
        if let Some(model) = guard.as_ref() {
            return Ok(Arc::clone(model));
        }

        let artifact = self.source.load()?;
        let model = Arc::new(LoadedModel::from_artifact(&artifact)?);
        log::info!(
            "model artifact loaded from {} ({} classes, {} features)",
            self.source.describe(),
            model.model.classes().len(),
            model.vectorizer.n_features()
        );

        *guard = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Build a keyword-heuristic prediction with the model result shape.
    fn fallback_prediction(&self, text: &str) -> Prediction {
        let heuristic = self.fallback.classify(text);

        let probabilities = heuristic
            .scores
            .iter()
            .map(|score| (score.label.to_string(), score.probability))
            .collect();

        Prediction {
            label: heuristic.label.to_string(),
            class_id: heuristic.class_id,
            probabilities,
            source: PredictionSource::KeywordFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::schema::{NaiveBayesParams, VectorizerParams};
    use crate::artifact::source::MemoryArtifactSource;
    use crate::classifier::result::{LABEL_AGAMA, LABEL_NETRAL, LABEL_RAS};

    fn artifact(class_log_prior: Vec<f64>) -> ModelArtifact {
        ModelArtifact {
            model: NaiveBayesParams {
                alpha: 2.0,
                classes: vec![0, 1, 2],
                class_log_prior,
                feature_log_prob: vec![
                    vec![-1.0, -3.0],
                    vec![-3.0, -1.0],
                    vec![-2.0, -2.0],
                ],
                n_features: 2,
            },
            vectorizer: VectorizerParams {
                vocab: HashMap::from([("benci".to_string(), 0), ("kafir".to_string(), 1)]),
                idf: vec![1.0, 1.0],
                feature_names: None,
                n_features: 2,
                max_features: None,
            },
            vocab: Some(vec!["benci".to_string(), "kafir".to_string()]),
            word_freq: Some(HashMap::from([
                ("benci".to_string(), 10),
                ("kafir".to_string(), 5),
            ])),
            reverse: HashMap::from([
                ("0".to_string(), LABEL_NETRAL.to_string()),
                ("1".to_string(), LABEL_RAS.to_string()),
                ("2".to_string(), LABEL_AGAMA.to_string()),
            ]),
            map_target: None,
            alpha: None,
            max_features: None,
            training_accuracy: None,
            testing_accuracy: None,
            train_size: None,
            test_size: None,
            total_data: None,
            training_metrics: None,
            testing_metrics: None,
            cv_metrics: None,
        }
    }

    fn engine(class_log_prior: Vec<f64>) -> ClassifierEngine {
        ClassifierEngine::new(Box::new(MemoryArtifactSource::new(artifact(
            class_log_prior,
        ))))
    }

    #[test]
    fn test_model_backed_prediction() {
        let engine = engine(vec![0.0, 0.0, 0.0]);
        let prediction = engine.predict("benci benci benci");

        assert!(prediction.is_model_backed());
        assert_eq!(prediction.probabilities.len(), 3);
        let sum: f64 = prediction.probabilities.values().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_label_matches_max_probability() {
        let engine = engine(vec![-0.5, -1.0, -1.5]);
        let prediction = engine.predict("kafir jahat");

        let (best_label, _) = prediction
            .probabilities
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        assert_eq!(&prediction.label, best_label);
    }

    #[test]
    fn test_empty_input_softmax_of_priors() {
        let engine = engine(vec![(0.5f64).ln(), (0.3f64).ln(), (0.2f64).ln()]);
        let prediction = engine.predict("");

        assert!(prediction.is_model_backed());
        assert!((prediction.probabilities[LABEL_NETRAL] - 0.5).abs() < 1e-9);
        assert!((prediction.probabilities[LABEL_RAS] - 0.3).abs() < 1e-9);
        assert!((prediction.probabilities[LABEL_AGAMA] - 0.2).abs() < 1e-9);
        assert_eq!(prediction.label, LABEL_NETRAL);
    }

    #[test]
    fn test_spelling_correction_reaches_vocabulary() {
        // "benci" over-stems to "benc"; spelling correction maps it back
        // into the vocabulary, so both inputs hit the same feature.
        let engine = engine(vec![0.0, 0.0, 0.0]);
        let corrected = engine.predict("bencii");
        let exact = engine.predict("benci");

        assert_eq!(corrected.label, exact.label);
        for (label, p) in &exact.probabilities {
            assert!((corrected.probabilities[label] - p).abs() < 1e-9);
        }
    }

    #[test]
    fn test_idempotent_predictions() {
        let engine = engine(vec![0.0, 0.0, 0.0]);
        let first = engine.predict("benci kafir");
        let second = engine.predict("benci kafir");

        assert_eq!(first.label, second.label);
        assert_eq!(first.class_id, second.class_id);
        for (label, p) in &first.probabilities {
            assert_eq!(second.probabilities[label], *p);
        }
    }

    #[test]
    fn test_cache_is_single_assignment() {
        let engine = engine(vec![0.0, 0.0, 0.0]);
        assert!(!engine.is_model_loaded());

        engine.predict("halo");
        assert!(engine.is_model_loaded());

        engine.invalidate_model();
        assert!(!engine.is_model_loaded());
    }

    #[test]
    fn test_malformed_artifact_falls_back() {
        let mut bad = artifact(vec![0.0, 0.0, 0.0]);
        bad.vectorizer.idf.pop();

        let engine = ClassifierEngine::new(Box::new(MemoryArtifactSource::new(bad)));
        let prediction = engine.predict("dasar kafir");

        assert_eq!(prediction.source, PredictionSource::KeywordFallback);
        assert_eq!(prediction.label, LABEL_AGAMA);
        assert!(!engine.is_model_loaded());
    }
}
