//! Punctuation filter implementation.

use std::collections::HashSet;

use unicode_categories::UnicodeCategories;

use super::Filter;
use crate::analysis::token::{TokenStream, TokenType};

/// A filter that removes punctuation characters from tokens.
///
/// A character counts as punctuation if it is ASCII punctuation or belongs to
/// a Unicode punctuation category (`P*`). Characters in the keep set, the
/// protected bytes of a token, and whole URL or email tokens are left alone.
/// Tokens that end up empty are marked as stopped.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter {
    keep: HashSet<char>,
}

impl PunctuationFilter {
    /// Create a filter stripping every punctuation character.
    pub fn new() -> Self {
        PunctuationFilter::default()
    }

    /// Create a filter that never strips the characters of `keep`.
    pub fn keeping(keep: &str) -> Self {
        PunctuationFilter {
            keep: keep.chars().collect(),
        }
    }

    fn strips(&self, ch: char) -> bool {
        is_punctuation(ch) && !self.keep.contains(&ch)
    }
}

/// Whether `ch` is treated as punctuation.
pub fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation() || ch.is_punctuation()
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped()
                    || matches!(token.token_type, TokenType::Url | TokenType::Email)
                {
                    return token;
                }
                let token =
                    token.map_unprotected(|s| s.chars().filter(|&ch| !self.strips(ch)).collect());
                if token.text.is_empty() {
                    token.stop()
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Box::new(filtered_tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
