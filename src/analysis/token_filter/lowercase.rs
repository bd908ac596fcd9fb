//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::token_filter::Filter;
//! use tokenkit::analysis::token_filter::lowercase::LowercaseFilter;
//! use tokenkit::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Applies full Unicode lowercasing, which may change the byte length
/// - Leaves protected bytes untouched
/// - Skips tokens marked as stopped
/// - Preserves token positions and offsets
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    token.map_unprotected(str::to_lowercase)
                }
            })
            .collect::<Vec<_>>();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::new("Test", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "Test"); // Stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_protected_bytes_keep_case() {
        let mut token = Token::new("The BRCA1 Gene", 0);
        token.protected = vec![4..9];

        let result: Vec<Token> = LowercaseFilter::new()
            .filter(Box::new(vec![token].into_iter()))
            .collect();
        assert_eq!(result[0].text, "the BRCA1 gene");
    }

    #[test]
    fn test_non_ascii() {
        let result: Vec<Token> = LowercaseFilter::new()
            .filter(Box::new(vec![Token::new("ÜBER Straße", 0)].into_iter()))
            .collect();
        assert_eq!(result[0].text, "über straße");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
