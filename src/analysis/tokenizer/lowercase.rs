//! Lowercase tokenizer implementation.

use super::Tokenizer;
use super::letter::LetterTokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};

/// A letter tokenizer whose tokens are always lowercased.
///
/// Lowercasing uses the full Unicode mapping, so a token can grow: `İ`
/// becomes `i` followed by a combining dot above. Offsets still point at the
/// original text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseTokenizer;

impl LowercaseTokenizer {
    /// Create a new lowercase tokenizer.
    pub fn new() -> Self {
        LowercaseTokenizer
    }
}

impl Tokenizer for LowercaseTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        LetterTokenizer::letter_runs(text)
            .into_iter()
            .map(|token| {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            })
            .collect::<Vec<Token>>()
            .into_token_stream()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
