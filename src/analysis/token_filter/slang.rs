//! Slang normalization filter.
//!
//! Expands informal Indonesian abbreviations into their standard forms
//! (`yg` -> `yang`, `gk` -> `tidak`, ...). The table is fixed; it mirrors
//! the dictionary the model artifact was trained with, so extending it
//! without retraining would skew classification.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Informal-to-standard Indonesian word mappings.
const DEFAULT_SLANG_ENTRIES: &[(&str, &str)] = &[
    ("yg", "yang"),
    ("gk", "tidak"),
    ("ga", "tidak"),
    ("tdk", "tidak"),
    ("bgt", "banget"),
    ("dr", "dari"),
    ("dlm", "dalam"),
    ("utk", "untuk"),
    ("gw", "saya"),
    ("gue", "saya"),
    ("lu", "kamu"),
    ("lo", "kamu"),
    ("org", "orang"),
    ("dg", "dengan"),
    ("dgn", "dengan"),
    ("klo", "kalau"),
    ("krn", "karena"),
    ("jg", "juga"),
    ("sdh", "sudah"),
    ("udh", "sudah"),
    ("blm", "belum"),
    ("tp", "tapi"),
    ("sm", "sama"),
    ("bs", "bisa"),
    ("aj", "saja"),
    ("aja", "saja"),
    ("bkn", "bukan"),
    ("hrs", "harus"),
    ("si", "sih"),
    ("kek", "seperti"),
    ("tu", "itu"),
    ("ni", "ini"),
    ("tak", "tidak"),
    ("dah", "sudah"),
    ("makin", "semakin"),
    ("gak", "tidak"),
    ("kalo", "kalau"),
    ("kaya", "seperti"),
    ("udah", "sudah"),
    ("keknya", "sepertinya"),
    ("emang", "memang"),
    ("kau", "kamu"),
];

/// Default slang dictionary as a HashMap.
pub static DEFAULT_SLANG_MAP: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    DEFAULT_SLANG_ENTRIES
        .iter()
        .map(|&(slang, standard)| (slang.to_string(), standard.to_string()))
        .collect()
});

/// A filter that replaces slang tokens with their standard forms.
///
/// Lookup is on the lowercased token; replacements are always the
/// dictionary's canonical lowercase form. Unknown tokens pass through
/// unchanged.
#[derive(Clone, Debug)]
pub struct SlangFilter {
    /// Slang word -> standard word
    entries: Arc<HashMap<String, String>>,
}

impl SlangFilter {
    /// Create a new slang filter with the default dictionary.
    pub fn new() -> Self {
        Self::with_entries(DEFAULT_SLANG_MAP.clone())
    }

    /// Create a new slang filter with a custom dictionary.
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        SlangFilter {
            entries: Arc::new(entries),
        }
    }

    /// Look up the standard form of a word, if it is slang.
    pub fn expand(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(|s| s.as_str())
    }

    /// Get the number of dictionary entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SlangFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for SlangFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let entries = Arc::clone(&self.entries);
        let mapped: Vec<Token> = tokens
            .map(|token| match entries.get(&token.text.to_lowercase()) {
                Some(standard) => token.with_text(standard.clone()),
                None => token,
            })
            .collect();

        Ok(Box::new(mapped.into_iter()))
    }

    fn name(&self) -> &'static str {
        "slang"
    }
}
