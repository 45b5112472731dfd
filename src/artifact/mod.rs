//! Model artifact handling.
//!
//! The artifact is the serialized, pre-trained model bundle produced by the
//! offline trainer: TF-IDF vocabulary and IDF weights, Naive Bayes
//! parameters, the spelling-correction vocabulary with corpus frequencies,
//! and the class-id-to-label table. It is loaded once, validated, and
//! treated as read-only for the rest of the process lifetime.

pub mod schema;
pub mod source;

pub use schema::{ModelArtifact, NaiveBayesParams, VectorizerParams};
pub use source::{ArtifactSource, FileArtifactSource, MemoryArtifactSource};
