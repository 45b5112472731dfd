//! Spelling correction for out-of-vocabulary tokens.
//!
//! Maps tokens the model has never seen to the nearest in-vocabulary word
//! within a Levenshtein edit budget, using the corpus word frequencies
//! carried in the model artifact to break ties.

pub mod corrector;
pub mod levenshtein;

pub use corrector::SpellingCorrector;
pub use levenshtein::{levenshtein_distance, levenshtein_distance_threshold};
