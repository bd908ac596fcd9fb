//! Letter tokenizer implementation.

use unicode_categories::UnicodeCategories;

use super::{Tokenizer, char_runs};

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};

/// A tokenizer that keeps maximal runs of letters.
///
/// Digits, punctuation, symbols, emoji and whitespace all separate tokens.
/// Combining marks directly following a letter stay attached to it.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::tokenizer::Tokenizer;
/// use tokenkit::analysis::tokenizer::letter::LetterTokenizer;
///
/// let tokens: Vec<_> = LetterTokenizer::new()
///     .tokenize("R2D2 and C-3PO")
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["R", "D", "and", "C", "PO"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LetterTokenizer;

impl LetterTokenizer {
    /// Create a new letter tokenizer.
    pub fn new() -> Self {
        LetterTokenizer
    }

    pub(crate) fn letter_runs(text: &str) -> Vec<Token> {
        char_runs(text, |ch, in_run| {
            ch.is_alphabetic() || (in_run && ch.is_mark())
        })
    }
}

impl Tokenizer for LetterTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        Self::letter_runs(text).into_token_stream()
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}
