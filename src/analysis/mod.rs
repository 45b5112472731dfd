//! Text analysis module for Tapis.
//!
//! This module provides the normalization pipeline that turns raw
//! social-media text into the token sequence the classifier consumes:
//! tokenization with punctuation/mention/hashtag/URL handling, slang
//! expansion, stopword removal, and light suffix stripping.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
