//! Inference orchestration.
//!
//! [`ClassifierEngine`] is the sole public entry point: it loads the model
//! artifact once, wires the normalization, spelling-correction,
//! vectorization, and scoring stages in sequence, and always returns a
//! valid [`Prediction`] (falling back to the keyword heuristic when no
//! usable artifact exists).

pub mod engine;
pub mod result;

pub use engine::ClassifierEngine;
pub use result::{Prediction, PredictionSource};
