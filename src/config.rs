//! Tokenizer configuration.
//!
//! A [`TokenizerConfig`] is an immutable, validated value: the strategy, the
//! shared post-processing options and every strategy-specific parameter. The
//! strategy-specific fields are always carried, so switching a configuration
//! to another strategy and back restores the earlier values.
//!
//! Configurations are produced by [`TokenizerConfigBuilder::build`], which
//! copies defaults (or an existing configuration), applies overrides, then
//! validates and compiles every regex exactly once. A failed build returns an
//! error and leaves whatever configuration the caller already holds untouched.
//!
//! # Examples
//!
//! ```
//! use tokenkit::config::{Strategy, TokenizerConfig};
//!
//! let config = TokenizerConfig::builder()
//!     .strategy(Strategy::EdgeNgram)
//!     .min_gram(0)
//!     .max_gram(4)
//!     .build()
//!     .unwrap();
//!
//! // min_gram is coerced up to 1
//! assert_eq!(config.min_gram(), 1);
//!
//! let switched = config.to_builder().strategy(Strategy::Whitespace).build().unwrap();
//! let back = switched.to_builder().strategy(Strategy::EdgeNgram).build().unwrap();
//! assert_eq!(back.max_gram(), 4);
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Result, TokenKitError};

/// Default configuration constants
pub mod defaults {
    /// Lowercase tokens unless told otherwise.
    pub const LOWERCASE: bool = true;

    /// Keep punctuation unless told otherwise.
    pub const REMOVE_PUNCTUATION: bool = false;

    /// Extended grapheme clusters by default.
    pub const GRAPHEME_EXTENDED: bool = true;

    /// Shortest gram for edge_ngram/ngram.
    pub const MIN_GRAM: usize = 2;

    /// Longest gram for edge_ngram/ngram.
    pub const MAX_GRAM: usize = 10;

    /// Path separator for path_hierarchy.
    pub const DELIMITER: &str = "/";

    /// Characters char_group splits on.
    pub const SPLIT_ON_CHARS: &str = " \t\n\r";
}

/// The segmentation algorithm a configuration selects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Runs of Unicode whitespace separate tokens.
    Whitespace,
    /// UAX #29 word boundaries.
    #[default]
    Unicode,
    /// Runs of alphabetic characters.
    Letter,
    /// Like `Letter`, always lowercased.
    Lowercase,
    /// Matches of a user supplied regex.
    Pattern,
    /// UAX #29 sentence boundaries.
    Sentence,
    /// Grapheme clusters.
    Grapheme,
    /// The whole trimmed input.
    Keyword,
    /// Prefixes of every term.
    EdgeNgram,
    /// Sliding windows over every term.
    Ngram,
    /// Cumulative prefixes of a delimited path.
    PathHierarchy,
    /// URLs and emails kept whole, unicode words elsewhere.
    UrlEmail,
    /// Runs of characters outside a split set.
    CharGroup,
}

impl Strategy {
    /// Every strategy, in a stable order.
    pub const ALL: [Strategy; 13] = [
        Strategy::Whitespace,
        Strategy::Unicode,
        Strategy::Letter,
        Strategy::Lowercase,
        Strategy::Pattern,
        Strategy::Sentence,
        Strategy::Grapheme,
        Strategy::Keyword,
        Strategy::EdgeNgram,
        Strategy::Ngram,
        Strategy::PathHierarchy,
        Strategy::UrlEmail,
        Strategy::CharGroup,
    ];

    /// The snake-case name used in options, serde and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Whitespace => "whitespace",
            Strategy::Unicode => "unicode",
            Strategy::Letter => "letter",
            Strategy::Lowercase => "lowercase",
            Strategy::Pattern => "pattern",
            Strategy::Sentence => "sentence",
            Strategy::Grapheme => "grapheme",
            Strategy::Keyword => "keyword",
            Strategy::EdgeNgram => "edge_ngram",
            Strategy::Ngram => "ngram",
            Strategy::PathHierarchy => "path_hierarchy",
            Strategy::UrlEmail => "url_email",
            Strategy::CharGroup => "char_group",
        }
    }

    /// Whether min_gram/max_gram drive this strategy.
    pub fn uses_grams(&self) -> bool {
        matches!(self, Strategy::EdgeNgram | Strategy::Ngram)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = TokenKitError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str() == name)
            .ok_or_else(|| TokenKitError::invalid_strategy(name))
    }
}

/// A validated, immutable tokenizer configuration.
///
/// Compiled regexes are shared behind `Arc`, so cloning a configuration is
/// cheap and never recompiles anything.
#[derive(Clone, Debug)]
pub struct TokenizerConfig {
    strategy: Strategy,
    lowercase: bool,
    remove_punctuation: bool,
    preserve_patterns: Vec<Arc<Regex>>,
    regex_source: Option<String>,
    regex: Option<Arc<Regex>>,
    grapheme_extended: bool,
    min_gram: usize,
    max_gram: usize,
    delimiter: String,
    split_on_chars: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            strategy: Strategy::default(),
            lowercase: defaults::LOWERCASE,
            remove_punctuation: defaults::REMOVE_PUNCTUATION,
            preserve_patterns: Vec::new(),
            regex_source: None,
            regex: None,
            grapheme_extended: defaults::GRAPHEME_EXTENDED,
            min_gram: defaults::MIN_GRAM,
            max_gram: defaults::MAX_GRAM,
            delimiter: defaults::DELIMITER.to_string(),
            split_on_chars: defaults::SPLIT_ON_CHARS.to_string(),
        }
    }
}

impl TokenizerConfig {
    /// Create a builder seeded with the defaults.
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Create a builder seeded with this configuration's values.
    pub fn to_builder(&self) -> TokenizerConfigBuilder {
        TokenizerConfigBuilder {
            strategy: self.strategy,
            lowercase: self.lowercase,
            remove_punctuation: self.remove_punctuation,
            preserve_patterns: self.preserve_pattern_sources(),
            regex: self.regex_source.clone(),
            grapheme_extended: self.grapheme_extended,
            min_gram: self.min_gram,
            max_gram: self.max_gram,
            delimiter: self.delimiter.clone(),
            split_on_chars: self.split_on_chars.clone(),
            ..TokenizerConfigBuilder::default()
        }
    }

    /// Build a configuration from defaults plus the given overrides.
    pub fn from_options(options: &TokenizerOptions) -> Result<Self> {
        options.apply(Self::builder())?.build()
    }

    /// Export every effective setting as fully populated options.
    pub fn to_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            strategy: Some(self.strategy.as_str().to_string()),
            lowercase: Some(self.lowercase),
            remove_punctuation: Some(self.remove_punctuation),
            preserve_patterns: Some(self.preserve_pattern_sources()),
            regex: self.regex_source.clone(),
            grapheme_extended: Some(self.grapheme_extended),
            min_gram: Some(self.min_gram),
            max_gram: Some(self.max_gram),
            delimiter: Some(self.delimiter.clone()),
            split_on_chars: Some(self.split_on_chars.clone()),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The configured lowercase flag, as given.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Whether output tokens are lowercased. Always true for the lowercase strategy.
    pub fn lowercases_output(&self) -> bool {
        self.lowercase || self.strategy == Strategy::Lowercase
    }

    pub fn remove_punctuation(&self) -> bool {
        self.remove_punctuation
    }

    /// Compiled preserve patterns, in configured order.
    pub fn preserve_patterns(&self) -> &[Arc<Regex>] {
        &self.preserve_patterns
    }

    /// Source strings of the preserve patterns.
    pub fn preserve_pattern_sources(&self) -> Vec<String> {
        self.preserve_patterns
            .iter()
            .map(|pattern| pattern.as_str().to_string())
            .collect()
    }

    /// The compiled pattern-strategy regex.
    ///
    /// Only guaranteed to be present when the strategy is [`Strategy::Pattern`].
    pub fn regex(&self) -> Option<&Arc<Regex>> {
        self.regex.as_ref()
    }

    pub fn regex_source(&self) -> Option<&str> {
        self.regex_source.as_deref()
    }

    pub fn grapheme_extended(&self) -> bool {
        self.grapheme_extended
    }

    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    pub fn max_gram(&self) -> usize {
        self.max_gram
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn split_on_chars(&self) -> &str {
        &self.split_on_chars
    }
}

impl PartialEq for TokenizerConfig {
    fn eq(&self, other: &Self) -> bool {
        self.to_options() == other.to_options()
    }
}

impl Serialize for TokenizerConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_options().serialize(serializer)
    }
}

/// Fluent builder for [`TokenizerConfig`].
#[derive(Clone, Debug)]
pub struct TokenizerConfigBuilder {
    strategy: Strategy,
    lowercase: bool,
    remove_punctuation: bool,
    preserve_patterns: Vec<String>,
    regex: Option<String>,
    grapheme_extended: bool,
    min_gram: usize,
    max_gram: usize,
    delimiter: String,
    split_on_chars: String,
    coerce_ngram_bounds: bool,
    lenient_preserve_patterns: bool,
}

impl Default for TokenizerConfigBuilder {
    fn default() -> Self {
        TokenizerConfigBuilder {
            strategy: Strategy::default(),
            lowercase: defaults::LOWERCASE,
            remove_punctuation: defaults::REMOVE_PUNCTUATION,
            preserve_patterns: Vec::new(),
            regex: None,
            grapheme_extended: defaults::GRAPHEME_EXTENDED,
            min_gram: defaults::MIN_GRAM,
            max_gram: defaults::MAX_GRAM,
            delimiter: defaults::DELIMITER.to_string(),
            split_on_chars: defaults::SPLIT_ON_CHARS.to_string(),
            coerce_ngram_bounds: true,
            lenient_preserve_patterns: false,
        }
    }
}

impl TokenizerConfigBuilder {
    /// Create a builder seeded with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Select the strategy by its snake-case name.
    pub fn strategy_name(mut self, name: &str) -> Result<Self> {
        self.strategy = name.parse()?;
        Ok(self)
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn remove_punctuation(mut self, remove: bool) -> Self {
        self.remove_punctuation = remove;
        self
    }

    /// Append one preserve pattern.
    pub fn preserve_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.preserve_patterns.push(pattern.into());
        self
    }

    /// Replace the preserve pattern list.
    pub fn preserve_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preserve_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the regex used by the pattern strategy.
    pub fn regex<S: Into<String>>(mut self, regex: S) -> Self {
        self.regex = Some(regex.into());
        self
    }

    pub fn clear_regex(mut self) -> Self {
        self.regex = None;
        self
    }

    pub fn grapheme_extended(mut self, extended: bool) -> Self {
        self.grapheme_extended = extended;
        self
    }

    pub fn min_gram(mut self, min_gram: usize) -> Self {
        self.min_gram = min_gram;
        self
    }

    pub fn max_gram(mut self, max_gram: usize) -> Self {
        self.max_gram = max_gram;
        self
    }

    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn split_on_chars<S: Into<String>>(mut self, chars: S) -> Self {
        self.split_on_chars = chars.into();
        self
    }

    /// When false, bad gram bounds are rejected instead of fixed up.
    pub fn coerce_ngram_bounds(mut self, coerce: bool) -> Self {
        self.coerce_ngram_bounds = coerce;
        self
    }

    /// When true, invalid preserve patterns are dropped with a warning.
    pub fn lenient_preserve_patterns(mut self, lenient: bool) -> Self {
        self.lenient_preserve_patterns = lenient;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<TokenizerConfig> {
        let (min_gram, max_gram) = self.gram_bounds()?;

        if self.strategy == Strategy::PathHierarchy && self.delimiter.is_empty() {
            return Err(TokenKitError::invalid_delimiter(self.strategy.as_str()));
        }

        let regex = match (&self.regex, self.strategy) {
            (None, Strategy::Pattern) => {
                return Err(TokenKitError::missing_parameter(
                    self.strategy.as_str(),
                    "regex",
                ));
            }
            (Some(source), Strategy::Pattern) => Some(compile(source)?),
            // Carried for a later switch back to the pattern strategy.
            (Some(source), _) => compile(source).ok(),
            (None, _) => None,
        };

        let mut preserve_patterns = Vec::with_capacity(self.preserve_patterns.len());
        for source in &self.preserve_patterns {
            match compile(source) {
                Ok(pattern) => preserve_patterns.push(pattern),
                Err(e) if self.lenient_preserve_patterns => {
                    warn!("dropping preserve pattern: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        if self.strategy == Strategy::Lowercase && !self.lowercase {
            warn!("lowercase=false has no effect with the lowercase strategy");
        }

        debug!(
            "built {} tokenizer config ({} preserve patterns)",
            self.strategy,
            preserve_patterns.len()
        );

        Ok(TokenizerConfig {
            strategy: self.strategy,
            lowercase: self.lowercase,
            remove_punctuation: self.remove_punctuation,
            preserve_patterns,
            regex_source: self.regex,
            regex,
            grapheme_extended: self.grapheme_extended,
            min_gram,
            max_gram,
            delimiter: self.delimiter,
            split_on_chars: self.split_on_chars,
        })
    }

    fn gram_bounds(&self) -> Result<(usize, usize)> {
        if self.coerce_ngram_bounds {
            let min_gram = self.min_gram.max(1);
            return Ok((min_gram, self.max_gram.max(min_gram)));
        }
        let invalid = self.min_gram == 0 || self.max_gram < self.min_gram;
        if invalid && self.strategy.uses_grams() {
            return Err(TokenKitError::invalid_ngram(self.min_gram, self.max_gram));
        }
        Ok((self.min_gram, self.max_gram))
    }
}

fn compile(source: &str) -> Result<Arc<Regex>> {
    Regex::new(source)
        .map(Arc::new)
        .map_err(|e| TokenKitError::invalid_regex(source, e))
}

/// Optional overrides applied on top of a builder.
///
/// This is the plain-data form of a configuration exchanged with hosts,
/// option files and the CLI. Absent fields keep the builder's value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_punctuation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(alias = "extended", skip_serializing_if = "Option::is_none")]
    pub grapheme_extended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gram: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gram: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_on_chars: Option<String>,
}

impl TokenizerOptions {
    /// Parse options from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Layer `other` on top of these options; fields set in `other` win.
    pub fn merge(mut self, other: TokenizerOptions) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            strategy,
            lowercase,
            remove_punctuation,
            preserve_patterns,
            regex,
            grapheme_extended,
            min_gram,
            max_gram,
            delimiter,
            split_on_chars
        );
        self
    }

    /// Apply the overrides that are set to `builder`.
    pub fn apply(&self, mut builder: TokenizerConfigBuilder) -> Result<TokenizerConfigBuilder> {
        if let Some(name) = &self.strategy {
            builder = builder.strategy_name(name)?;
        }
        if let Some(lowercase) = self.lowercase {
            builder = builder.lowercase(lowercase);
        }
        if let Some(remove) = self.remove_punctuation {
            builder = builder.remove_punctuation(remove);
        }
        if let Some(patterns) = &self.preserve_patterns {
            builder = builder.preserve_patterns(patterns.iter().cloned());
        }
        if let Some(regex) = &self.regex {
            builder = builder.regex(regex.clone());
        }
        if let Some(extended) = self.grapheme_extended {
            builder = builder.grapheme_extended(extended);
        }
        if let Some(min_gram) = self.min_gram {
            builder = builder.min_gram(min_gram);
        }
        if let Some(max_gram) = self.max_gram {
            builder = builder.max_gram(max_gram);
        }
        if let Some(delimiter) = &self.delimiter {
            builder = builder.delimiter(delimiter.clone());
        }
        if let Some(chars) = &self.split_on_chars {
            builder = builder.split_on_chars(chars.clone());
        }
        Ok(builder)
    }
}
