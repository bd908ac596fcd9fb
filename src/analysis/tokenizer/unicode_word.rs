//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Segments without any alphanumeric character (punctuation,
//! whitespace, emoji) are dropped. Apostrophes between letters are word-internal,
//! so contractions stay whole, while hyphens are boundaries.
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::tokenizer::Tokenizer;
//! use tokenkit::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world! can't").map(|t| t.text).collect();
//!
//! assert_eq!(tokens, vec!["Hello", "world", "can't"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    /// Word tokens of `text`, with offsets shifted by `base`.
    pub(crate) fn words(text: &str, base: usize) -> Vec<Token> {
        text.split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(char::is_alphanumeric))
            .enumerate()
            .map(|(position, (start, word))| {
                Token::with_offsets(word, position, base + start, base + start + word.len())
            })
            .collect()
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        Self::words(text, 0).into_token_stream()
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
