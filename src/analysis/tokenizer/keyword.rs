//! Keyword tokenizer implementation.

use super::Tokenizer;

use crate::analysis::preserve::Preservation;
use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that treats the entire trimmed input as a single token.
///
/// Internal whitespace is kept verbatim. Whitespace-only input yields nothing.
#[derive(Clone, Debug, Default)]
pub struct KeywordTokenizer;

impl KeywordTokenizer {
    /// Create a new keyword tokenizer.
    pub fn new() -> Self {
        KeywordTokenizer
    }
}

impl Tokenizer for KeywordTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Box::new(std::iter::empty());
        }
        let start = text.len() - text.trim_start().len();
        let token = Token::from_span(text, start..start + trimmed.len(), 0);
        Box::new(std::iter::once(token))
    }

    fn preservation(&self) -> Preservation {
        Preservation::Protect
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
