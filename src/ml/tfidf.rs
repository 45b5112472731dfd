//! TF-IDF vectorizer for text feature extraction.

use std::collections::HashMap;

use crate::artifact::schema::VectorizerParams;

/// TF-IDF vectorizer built from stored vocabulary and IDF weights.
///
/// Fitting happens offline in the trainer; this type only implements the
/// transform. The transform is stateless per call and the shared tables are
/// read-only, so a single instance can serve concurrent callers.
pub struct TfIdfVectorizer {
    /// Vocabulary: word -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each word.
    idf: Vec<f64>,
    /// Number of features.
    n_features: usize,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_features", &self.n_features)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a vectorizer from a vocabulary map and IDF weights.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        let n_features = idf.len();
        TfIdfVectorizer {
            vocabulary,
            idf,
            n_features,
        }
    }

    /// Create a vectorizer from stored artifact parameters.
    pub fn from_params(params: &VectorizerParams) -> Self {
        Self::new(params.vocab.clone(), params.idf.clone())
    }

    /// Transform a token sequence into a TF-IDF feature vector.
    ///
    /// Tokens absent from the vocabulary contribute nothing. Counts are
    /// normalized by the total token count (not the in-vocabulary count),
    /// then scaled by the stored IDF weights. An empty sequence yields an
    /// all-zero vector; the normalization divide is skipped entirely, so no
    /// division by zero can occur.
    pub fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut tf = vec![0.0; self.n_features];

        // Count term frequencies
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        // Apply IDF
        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        tf
    }

    /// Get the number of features.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
