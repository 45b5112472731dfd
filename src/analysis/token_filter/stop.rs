//! Stopword removal filter.
//!
//! Removes common Indonesian function words that carry no signal for the
//! classifier. The word list is fixed and matches the set used when the
//! model artifact was trained.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default Indonesian stopword list.
const DEFAULT_INDONESIAN_STOP_WORDS: &[&str] = &[
    "yang", "dan", "di", "ke", "dari", "untuk", "adalah", "dengan", "para", "itu", "ini", "nya",
    "pun", "sih", "kamu", "kok", "kau", "makin", "kalau", "kan", "kst", "dob", "lah", "buat",
    "pas", "jadi", "apa", "sama", "beda", "bukan", "mau", "banyak", "kstp", "aku", "iya", "tau",
    "pak", "dulu", "gua", "semua", "mana", "memang", "tuh",
];

/// Default Indonesian stopwords as a HashSet.
pub static DEFAULT_INDONESIAN_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_INDONESIAN_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stopwords from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stopwords to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Indonesian stopwords.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_INDONESIAN_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stopwords.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stopwords.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let filtered: Vec<Token> = tokens
            .filter(|token| !stop_words.contains(&token.text.to_lowercase()))
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
