//! Analyzer that binds a configuration to a tokenizer and its filters.
//!
//! The [`PipelineAnalyzer`] applies processing in this order:
//! 1. Tokenizer segmentation
//! 2. Preserve patterns (merge or protect, as the tokenizer declares)
//! 3. Token filters, in the order they were added
//! 4. Removal of empty and stopped tokens
//! 5. Tokenizer expansion (n-grams are cut from the filtered terms)
//! 6. Position renumbering
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use tokenkit::config::{Strategy, TokenizerConfig};
//!
//! let config = TokenizerConfig::builder()
//!     .strategy(Strategy::Unicode)
//!     .preserve_pattern(r"BRCA\d+")
//!     .build()
//!     .unwrap();
//! let analyzer = PipelineAnalyzer::from_config(&config).unwrap();
//!
//! assert_eq!(
//!     analyzer.analyze_to_strings("Patient BRCA1 test"),
//!     vec!["patient", "BRCA1", "test"]
//! );
//! ```

use std::sync::Arc;

use log::debug;
use regex::Regex;

use crate::analysis::preserve::PreservedSpans;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::{Filter, LowercaseFilter, PunctuationFilter};
use crate::analysis::tokenizer::{self, Tokenizer};
use crate::config::{Strategy, TokenizerConfig};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    preserve_patterns: Vec<Arc<Regex>>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            preserve_patterns: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Assemble the pipeline a configuration describes.
    ///
    /// Lowercasing is added when the configuration asks for it or the
    /// strategy forces it; punctuation stripping keeps the path delimiter
    /// under the path hierarchy strategy.
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        let mut analyzer = PipelineAnalyzer::new(tokenizer::from_config(config)?)
            .with_preserve_patterns(config.preserve_patterns().to_vec());

        if config.lowercases_output() {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        if config.remove_punctuation() {
            let punctuation = match config.strategy() {
                Strategy::PathHierarchy => PunctuationFilter::keeping(config.delimiter()),
                _ => PunctuationFilter::new(),
            };
            analyzer = analyzer.add_filter(Arc::new(punctuation));
        }

        debug!(
            "assembled pipeline: tokenizer={} preserve_patterns={} filters=[{}]",
            analyzer.tokenizer.name(),
            analyzer.preserve_patterns.len(),
            analyzer
                .filters
                .iter()
                .map(|filter| filter.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(analyzer)
    }

    /// Set the preserve patterns matched against the input.
    pub fn with_preserve_patterns(mut self, patterns: Vec<Arc<Regex>>) -> Self {
        self.preserve_patterns = patterns;
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Analyze `text` and keep only the token strings.
    pub fn analyze_to_strings(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let segments: Vec<Token> = self.tokenizer.segment(text).collect();
        let spans = PreservedSpans::find(&self.preserve_patterns, text);
        let mut tokens = spans
            .apply(self.tokenizer.preservation(), text, segments)
            .into_token_stream();

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
            .filter(|token| !token.is_empty() && !token.is_stopped())
            .flat_map(|token| self.tokenizer.expand(token))
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect::<Vec<_>>()
            .into_token_stream()
    }

    fn name(&self) -> &'static str {
        self.tokenizer.name()
    }
}
