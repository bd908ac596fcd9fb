//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{Result, TokenKitError};

/// A tokenizer whose tokens are the non-overlapping matches of a regex.
///
/// Matches are produced left to right; empty matches are skipped.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer, compiling `pattern`.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| TokenKitError::invalid_regex(pattern, e))?;
        Ok(Self::from_regex(Arc::new(regex)))
    }

    /// Create a regex tokenizer around an already compiled regex.
    pub fn from_regex(pattern: Arc<Regex>) -> Self {
        RegexTokenizer { pattern }
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .filter(|mat| !mat.is_empty())
            .enumerate()
            .map(|(position, mat)| Token::from_span(text, mat.range(), position))
            .collect();

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
