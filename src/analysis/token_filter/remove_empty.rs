//! Filter that removes empty tokens.
//!
//! The suffix stemmer can reduce very short tokens to empty strings; this
//! filter drops those husks so they never reach the vectorizer.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens with empty text.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove-empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens.filter(|token| !token.is_empty()).collect();
        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
