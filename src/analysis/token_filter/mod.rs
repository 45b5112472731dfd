//! Token filter implementations for token transformation.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod remove_empty;
pub mod slang;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use remove_empty::RemoveEmptyFilter;
pub use slang::SlangFilter;
pub use stem::{StemFilter, Stemmer, SuffixStemmer};
pub use stop::StopFilter;
