//! Tokenizer implementations.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that split text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text and return a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Punctuation stripped repeatedly from both edges of each token.
const PUNCT_EDGES: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}', '<', '>', '`', '~',
    '|', '\\', '/',
];

/// Body of a mention/hashtag: one or more ASCII word characters.
static HANDLE_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_]+$").expect("valid handle regex"));

/// A tokenizer for short social-media text.
///
/// Cleaning happens in a fixed order that must match the behavior the model
/// artifact was trained with:
///
/// 1. Lowercase the input and split on the literal space character.
/// 2. Strip edge punctuation per token; drop tokens that become empty.
/// 3. Drop `@mention` and `#hashtag` tokens (word-character bodies only)
///    and URL tokens (`http://`, `https://`, `www.` prefixes).
/// 4. Rejoin the survivors in their pre-strip form, then remove non-ASCII
///    characters, digits, and anything outside word/whitespace classes.
/// 5. Collapse whitespace and split into the final tokens.
#[derive(Clone, Debug, Default)]
pub struct SocialMediaTokenizer;

impl SocialMediaTokenizer {
    /// Create a new social-media tokenizer.
    pub fn new() -> Self {
        SocialMediaTokenizer
    }

    /// Run the character-level cleaning stages, returning a single
    /// space-joined string ready for the final split.
    fn clean(text: &str) -> String {
        let lowered = text.to_lowercase();
        let mut kept: Vec<&str> = Vec::new();

        // Splitting is on the literal space character, not general
        // whitespace; this matches the artifact's training-time behavior.
        for tok in lowered.split(' ') {
            let core = tok.trim_matches(|c| PUNCT_EDGES.contains(&c));

            if core.is_empty() {
                continue;
            }

            // Remove mentions (@username)
            if let Some(body) = core.strip_prefix('@')
                && HANDLE_BODY.is_match(body)
            {
                continue;
            }

            // Remove hashtags (#hashtag)
            if let Some(body) = core.strip_prefix('#')
                && HANDLE_BODY.is_match(body)
            {
                continue;
            }

            // Remove URLs
            if core.starts_with("http://")
                || core.starts_with("https://")
                || core.starts_with("www.")
            {
                continue;
            }

            // The stripped core only drives the keep/drop decision; the
            // token is kept in its pre-strip form.
            kept.push(tok);
        }

        let mut cleaned: String = kept
            .join(" ")
            .chars()
            .filter(|c| (*c as u32) < 128)
            .filter(|c| !c.is_ascii_digit())
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect();

        // Collapse whitespace runs and trim the edges.
        cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
        cleaned
    }
}

impl Tokenizer for SocialMediaTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let cleaned = Self::clean(text);
        let tokens: Vec<Token> = cleaned
            .split(' ')
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "social_media"
    }
}
