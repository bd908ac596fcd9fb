//! Tokenizer implementations for text analysis.
//!
//! This module provides the thirteen segmentation strategies. Each one is a
//! small value type implementing [`Tokenizer`]; [`from_config`] picks and
//! parameterizes the right one for a [`TokenizerConfig`].
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//! - [`letter::LetterTokenizer`] - Runs of letters
//! - [`lowercase::LowercaseTokenizer`] - Runs of letters, lowercased
//! - [`regex::RegexTokenizer`] - Matches of a custom regex
//! - [`sentence::SentenceTokenizer`] - Unicode sentence boundaries
//! - [`grapheme::GraphemeTokenizer`] - Grapheme clusters
//! - [`keyword::KeywordTokenizer`] - Treats the entire trimmed text as one token
//! - [`edge_ngram::EdgeNgramTokenizer`] - Prefixes of each term
//! - [`ngram::NgramTokenizer`] - Character n-grams of each term
//! - [`path_hierarchy::PathHierarchyTokenizer`] - Cumulative path prefixes
//! - [`url_email::UrlEmailTokenizer`] - URLs and emails kept whole
//! - [`char_group::CharGroupTokenizer`] - Splits on a set of characters
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::tokenizer::Tokenizer;
//! use tokenkit::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use std::sync::Arc;

use crate::analysis::preserve::Preservation;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::config::{Strategy, TokenizerConfig};
use crate::error::{Result, TokenKitError};

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization happens in two steps. [`segment`](Tokenizer::segment) cuts
/// the text into units whose offsets point into the input; these are what
/// pattern preservation and the token filters operate on.
/// [`expand`](Tokenizer::expand) then derives the emitted tokens from each
/// processed unit. Most tokenizers emit their segments unchanged; the n-gram
/// tokenizers segment into terms and expand terms into grams.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use tokenkit::analysis::token::{IntoTokenStream, Token, TokenStream};
/// use tokenkit::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn segment(&self, text: &str) -> TokenStream {
///         let mut offset = 0;
///         let mut tokens = Vec::new();
///         for (position, part) in text.split(',').enumerate() {
///             tokens.push(Token::with_offsets(part, position, offset, offset + part.len()));
///             offset += part.len() + 1;
///         }
///         tokens.into_token_stream()
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
///
/// let tokens: Vec<_> = CommaTokenizer.tokenize("a,b").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["a", "b"]);
/// ```
pub trait Tokenizer: Send + Sync {
    /// Cut the text into units with offsets into `text`.
    fn segment(&self, text: &str) -> TokenStream;

    /// Derive the emitted tokens from one processed segment.
    fn expand(&self, segment: Token) -> Vec<Token> {
        vec![segment]
    }

    /// Tokenize the given text without any post-processing.
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = self
            .segment(text)
            .flat_map(|segment| self.expand(segment))
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect();
        tokens.into_token_stream()
    }

    /// How preserve-pattern matches interact with this tokenizer's segments.
    fn preservation(&self) -> Preservation {
        Preservation::Merge
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod char_group;
pub mod edge_ngram;
pub mod grapheme;
pub mod keyword;
pub mod letter;
pub mod lowercase;
pub mod ngram;
pub mod path_hierarchy;
pub mod regex;
pub mod sentence;
pub mod unicode_word;
pub mod url_email;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use char_group::CharGroupTokenizer;
pub use edge_ngram::EdgeNgramTokenizer;
pub use grapheme::GraphemeTokenizer;
pub use keyword::KeywordTokenizer;
pub use letter::LetterTokenizer;
pub use lowercase::LowercaseTokenizer;
pub use ngram::NgramTokenizer;
pub use path_hierarchy::PathHierarchyTokenizer;
pub use self::regex::RegexTokenizer;
pub use sentence::SentenceTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use url_email::UrlEmailTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Build the tokenizer a configuration selects.
pub fn from_config(config: &TokenizerConfig) -> Result<Arc<dyn Tokenizer>> {
    let tokenizer: Arc<dyn Tokenizer> = match config.strategy() {
        Strategy::Whitespace => Arc::new(WhitespaceTokenizer::new()),
        Strategy::Unicode => Arc::new(UnicodeWordTokenizer::new()),
        Strategy::Letter => Arc::new(LetterTokenizer::new()),
        Strategy::Lowercase => Arc::new(LowercaseTokenizer::new()),
        Strategy::Pattern => {
            let regex = config.regex().ok_or_else(|| {
                TokenKitError::missing_parameter(Strategy::Pattern.as_str(), "regex")
            })?;
            Arc::new(RegexTokenizer::from_regex(Arc::clone(regex)))
        }
        Strategy::Sentence => Arc::new(SentenceTokenizer::new()),
        Strategy::Grapheme => Arc::new(GraphemeTokenizer::new(config.grapheme_extended())),
        Strategy::Keyword => Arc::new(KeywordTokenizer::new()),
        Strategy::EdgeNgram => Arc::new(EdgeNgramTokenizer::new(
            config.min_gram(),
            config.max_gram(),
        )?),
        Strategy::Ngram => Arc::new(NgramTokenizer::new(config.min_gram(), config.max_gram())?),
        Strategy::PathHierarchy => Arc::new(PathHierarchyTokenizer::new(config.delimiter())?),
        Strategy::UrlEmail => Arc::new(UrlEmailTokenizer::new()),
        Strategy::CharGroup => Arc::new(CharGroupTokenizer::new(config.split_on_chars())),
    };
    Ok(tokenizer)
}

/// Collect maximal runs of characters accepted by `accept`.
///
/// `accept` sees each character and whether a run is currently open, which
/// lets callers glue trailing combining marks onto a run.
pub(crate) fn char_runs<F>(text: &str, mut accept: F) -> Vec<Token>
where
    F: FnMut(char, bool) -> bool,
{
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (offset, ch) in text.char_indices() {
        if accept(ch, run_start.is_some()) {
            run_start.get_or_insert(offset);
        } else if let Some(start) = run_start.take() {
            tokens.push(Token::from_span(text, start..offset, tokens.len()));
        }
    }
    if let Some(start) = run_start {
        tokens.push(Token::from_span(text, start..text.len(), tokens.len()));
    }

    tokens
}

/// Whitespace-delimited terms with their offsets.
pub(crate) fn whitespace_terms(text: &str) -> Vec<Token> {
    char_runs(text, |ch, _| !ch.is_whitespace())
}
