//! Stemming token filter and stemmer implementations.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// A light Indonesian suffix stripper.
///
/// First matching rule wins per token: `kan` is stripped, else `an`, else
/// `i`. There is no minimum stem length and no dictionary check, so very
/// short tokens can be emptied and uninflected words ending in one of the
/// suffixes are over-stripped. This matches what the model artifact was
/// trained with and must not be "fixed" independently of retraining.
#[derive(Clone, Debug, Default)]
pub struct SuffixStemmer;

impl SuffixStemmer {
    /// Create a new suffix stemmer.
    pub fn new() -> Self {
        SuffixStemmer
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        if let Some(stem) = word.strip_suffix("kan") {
            stem.to_string()
        } else if let Some(stem) = word.strip_suffix("an") {
            stem.to_string()
        } else if let Some(stem) = word.strip_suffix('i') {
            stem.to_string()
        } else {
            word.to_string()
        }
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}

/// Filter that applies stemming to tokens.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the suffix stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Box::new(SuffixStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmed: Vec<Token> = tokens
            .map(|token| {
                let stem = self.stemmer.stem(&token.text);
                token.with_text(stem)
            })
            .collect();

        Ok(Box::new(stemmed.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_rules() {
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("makanan"), "makan");
        assert_eq!(stemmer.stem("ajarkan"), "ajar");
        assert_eq!(stemmer.stem("benci"), "benc");
        assert_eq!(stemmer.stem("rumah"), "rumah");
    }

    #[test]
    fn test_first_rule_wins() {
        // "kan" takes priority over "an"
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("bukakan"), "buka");
    }

    #[test]
    fn test_no_minimum_stem_length() {
        // Short tokens can be emptied entirely; callers drop the husks.
        let stemmer = SuffixStemmer::new();
        assert_eq!(stemmer.stem("an"), "");
        assert_eq!(stemmer.stem("i"), "");
        assert_eq!(stemmer.stem("kan"), "");
    }

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![Token::new("makanan", 0), Token::new("rumah", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "makan");
        assert_eq!(result[1].text, "rumah");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
