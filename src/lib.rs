//! # Tapis
//!
//! An Indonesian hate-speech text classifier for Rust.
//!
//! Tapis labels short Indonesian-language sentences as `Netral`, `Agama`, or
//! `Ras` using a pre-trained multinomial Naive Bayes model serialized as a
//! JSON artifact, together with a TF-IDF vectorizer whose vocabulary and IDF
//! weights are carried in the same artifact.
//!
//! ## Features
//!
//! - Social-media-aware text normalization (mentions, hashtags, URLs, slang)
//! - Vocabulary-based spelling correction with a Levenshtein edit budget
//! - TF-IDF feature extraction from stored vocabulary and IDF weights
//! - Multinomial Naive Bayes scoring with numerically stable posteriors
//! - Keyword-heuristic fallback when no model artifact is available

pub mod analysis;
pub mod artifact;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod ml;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, IndonesianAnalyzer};
    pub use crate::artifact::schema::ModelArtifact;
    pub use crate::artifact::source::{ArtifactSource, FileArtifactSource, MemoryArtifactSource};
    pub use crate::classifier::{ClassifierEngine, Prediction, PredictionSource};
    pub use crate::error::{Result, TapisError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
