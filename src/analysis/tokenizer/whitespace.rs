//! Whitespace tokenizer implementation.

use super::{Tokenizer, whitespace_terms};

use crate::analysis::token::{IntoTokenStream, TokenStream};

/// A tokenizer that splits text on runs of Unicode whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        whitespace_terms(text).into_token_stream()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_repeated_words_keep_their_own_offsets() {
        let tokens: Vec<Token> = WhitespaceTokenizer::new().tokenize("go go").collect();

        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[1].start_offset, 3);
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let tokens: Vec<Token> = WhitespaceTokenizer::new()
            .tokenize("\u{00A0} padded\n ")
            .collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "padded");
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
