//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through preservation
//! and the token filters. Besides its text it carries byte offsets into the
//! original input, a [`TokenType`], and a list of *protected* byte ranges of
//! its own text. Protected bytes came from a preserve-pattern match and must
//! reach the output verbatim, so case folding and punctuation stripping only
//! ever touch the unprotected parts (see [`Token::map_unprotected`]).
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,

    /// Token type classification
    pub token_type: TokenType,

    /// Sorted, disjoint byte ranges of `text` that filters must not alter.
    pub protected: Vec<Range<usize>>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Ordinary text
    #[default]
    Word,
    /// URLs
    Url,
    /// Email addresses
    Email,
    /// A preserve-pattern match emitted as a whole token
    Preserved,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token::with_offsets(text, position, 0, end_offset)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            token_type: TokenType::Word,
            protected: Vec::new(),
        }
    }

    /// Create a token for the `range` slice of `source`.
    pub fn from_span(source: &str, range: Range<usize>, position: usize) -> Self {
        Token::with_offsets(&source[range.clone()], position, range.start, range.end)
    }

    /// Create a verbatim preserved token for the `range` slice of `source`.
    pub fn preserved(source: &str, range: Range<usize>, position: usize) -> Self {
        let len = range.len();
        let mut token = Token::from_span(source, range, position).with_token_type(TokenType::Preserved);
        token.protected = vec![0..len];
        token
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Clone this token with updated text, dropping any protection.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token.protected.clear();
        token
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }

    /// Whether the whole text is protected.
    pub fn is_preserved(&self) -> bool {
        !self.text.is_empty()
            && self.protected.len() == 1
            && self.protected[0] == (0..self.text.len())
    }

    /// Whether any byte of the text is protected.
    pub fn has_protection(&self) -> bool {
        !self.protected.is_empty()
    }

    /// Rewrite every unprotected stretch of the text with `f`, keeping the
    /// protected stretches byte-for-byte and re-anchoring their ranges.
    pub fn map_unprotected<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        if self.protected.is_empty() {
            self.text = f(&self.text);
            return self;
        }

        let mut text = String::with_capacity(self.text.len());
        let mut protected = Vec::with_capacity(self.protected.len());
        let mut cursor = 0;

        for range in &self.protected {
            if range.start > cursor {
                text.push_str(&f(&self.text[cursor..range.start]));
            }
            let start = text.len();
            text.push_str(&self.text[range.clone()]);
            protected.push(start..text.len());
            cursor = range.end;
        }
        if cursor < self.text.len() {
            text.push_str(&f(&self.text[cursor..]));
        }

        self.text = text;
        self.protected = protected;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
