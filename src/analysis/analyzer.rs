//! Analyzer implementations that combine tokenizers and filters.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, RemoveEmptyFilter, SlangFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::{SocialMediaTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        // Apply filters in sequence
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The canonical Indonesian normalization pipeline.
///
/// Runs the social-media tokenizer followed by slang expansion, stopword
/// removal, suffix stripping, and empty-token removal, in that order. The
/// stage order is load-bearing: it matches the preprocessing the model
/// artifact was trained with, and reordering changes classification
/// results.
#[derive(Clone, Debug)]
pub struct IndonesianAnalyzer {
    pipeline: PipelineAnalyzer,
}

impl IndonesianAnalyzer {
    /// Create the default Indonesian analyzer.
    pub fn new() -> Self {
        let pipeline = PipelineAnalyzer::new(Arc::new(SocialMediaTokenizer::new()))
            .add_filter(Arc::new(SlangFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()));

        IndonesianAnalyzer { pipeline }
    }

    /// Normalize raw text into the working token sequence.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Default for IndonesianAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for IndonesianAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "indonesian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let analyzer = IndonesianAnalyzer::new();
        // gw -> saya, gk -> tidak; none of the survivors are stopwords and
        // none carry a strippable suffix.
        let tokens = analyzer.normalize("gw gk suka").unwrap();
        assert_eq!(
            tokens,
            vec!["saya".to_string(), "tidak".to_string(), "suka".to_string()]
        );
    }

    #[test]
    fn test_social_media_noise_removed() {
        let analyzer = IndonesianAnalyzer::new();
        let tokens = analyzer
            .normalize("Halo @budi #seru http://x.com 123 dunia")
            .unwrap();
        assert!(!tokens.iter().any(|t| t.contains("budi")));
        assert!(!tokens.iter().any(|t| t.contains("seru")));
        assert!(!tokens.iter().any(|t| t.contains("http")));
        assert!(!tokens.iter().any(|t| t.contains("123")));
        assert!(tokens.contains(&"halo".to_string()));
        assert!(tokens.contains(&"dunia".to_string()));
    }

    #[test]
    fn test_stopwords_removed_after_slang_expansion() {
        let analyzer = IndonesianAnalyzer::new();
        // "yg" expands to "yang", which is then removed as a stopword.
        let tokens = analyzer.normalize("orang yg jahat").unwrap();
        assert_eq!(tokens, vec!["orang".to_string(), "jahat".to_string()]);
    }

    #[test]
    fn test_stemming_can_empty_tokens() {
        let analyzer = IndonesianAnalyzer::new();
        // "an" stems to the empty string and is dropped.
        let tokens = analyzer.normalize("an makanan").unwrap();
        assert_eq!(tokens, vec!["makan".to_string()]);
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        let analyzer = IndonesianAnalyzer::new();
        assert!(analyzer.normalize("").unwrap().is_empty());
        assert!(analyzer.normalize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(IndonesianAnalyzer::new().name(), "indonesian");
    }
}
