//! Vocabulary-based spelling corrector.

use std::collections::{HashMap, HashSet};

use crate::spelling::levenshtein::levenshtein_distance_threshold;

/// Default maximum edit distance for a correction.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// A spelling corrector backed by a fixed vocabulary and corpus frequencies.
///
/// Tokens already in the vocabulary pass through untouched. Anything else is
/// matched against every vocabulary entry within the edit budget; the
/// minimum-distance candidate wins, ties going to the candidate with the
/// higher corpus frequency and then to the first one seen in vocabulary
/// order. A full scan is O(tokens x vocabulary x word length), which is fine
/// at this scale (hundreds of entries, short sentences); no index structure
/// is needed.
#[derive(Clone, Debug)]
pub struct SpellingCorrector {
    /// Vocabulary in artifact order; scan order for tie-breaking.
    vocabulary: Vec<String>,
    /// Membership set for the fast pass-through check.
    vocab_set: HashSet<String>,
    /// Observed corpus frequency per vocabulary word.
    word_freq: HashMap<String, u64>,
    /// Maximum edit distance for a correction.
    max_distance: usize,
}

impl SpellingCorrector {
    /// Create a new corrector with the default edit budget.
    pub fn new(vocabulary: Vec<String>, word_freq: HashMap<String, u64>) -> Self {
        let vocab_set = vocabulary.iter().cloned().collect();
        SpellingCorrector {
            vocabulary,
            vocab_set,
            word_freq,
            max_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }

    /// Set a custom maximum edit distance.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Check if a word is already in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.vocab_set.contains(word)
    }

    /// Get the number of vocabulary entries.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Correct a single word against the vocabulary.
    ///
    /// Returns the word unchanged when it is in the vocabulary or when no
    /// candidate lies within the edit budget.
    pub fn correct_word(&self, word: &str) -> String {
        if self.vocab_set.contains(word) {
            return word.to_string();
        }

        let word_len = word.chars().count();
        let mut best: Option<(usize, u64, &str)> = None;

        for candidate in &self.vocabulary {
            // Cheap pre-filter: a length gap larger than the budget can
            // never be closed.
            if candidate.chars().count().abs_diff(word_len) > self.max_distance {
                continue;
            }

            let Some(distance) = levenshtein_distance_threshold(word, candidate, self.max_distance)
            else {
                continue;
            };

            let frequency = self.word_freq.get(candidate).copied().unwrap_or(0);
            let better = match best {
                None => true,
                Some((best_distance, best_frequency, _)) => {
                    distance < best_distance
                        || (distance == best_distance && frequency > best_frequency)
                }
            };

            if better {
                best = Some((distance, frequency, candidate));
            }
        }

        match best {
            Some((_, _, candidate)) => candidate.to_string(),
            None => word.to_string(),
        }
    }

    /// Correct a token sequence, preserving length and order.
    pub fn correct_tokens(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|word| self.correct_word(word)).collect()
    }
}
