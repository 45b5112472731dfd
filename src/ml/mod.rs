//! Feature extraction and classification.
//!
//! - [`TfIdfVectorizer`]: turns a token sequence into a dense feature vector
//!   using the vocabulary and IDF weights stored in the model artifact.
//! - [`MultinomialNb`]: scores a feature vector against the stored Naive
//!   Bayes parameters.
//! - [`KeywordScorer`]: the degenerate keyword heuristic used when no model
//!   artifact is available.

pub mod keyword;
pub mod naive_bayes;
pub mod tfidf;

pub use keyword::{KeywordScore, KeywordScorer};
pub use naive_bayes::MultinomialNb;
pub use tfidf::TfIdfVectorizer;
