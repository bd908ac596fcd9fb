//! Grapheme cluster tokenizer implementation.

use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};

/// A tokenizer emitting one token per grapheme cluster.
///
/// Extended clusters (the default) keep emoji ZWJ sequences and regional
/// indicator flags whole; legacy clusters are used when `extended` is false.
/// Every cluster is emitted, whitespace included.
#[derive(Clone, Debug)]
pub struct GraphemeTokenizer {
    extended: bool,
}

impl GraphemeTokenizer {
    /// Create a new grapheme tokenizer.
    pub fn new(extended: bool) -> Self {
        GraphemeTokenizer { extended }
    }

    /// Whether extended grapheme clusters are used.
    pub fn extended(&self) -> bool {
        self.extended
    }
}

impl Default for GraphemeTokenizer {
    fn default() -> Self {
        Self::new(crate::config::defaults::GRAPHEME_EXTENDED)
    }
}

impl Tokenizer for GraphemeTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .grapheme_indices(self.extended)
            .enumerate()
            .map(|(position, (start, grapheme))| {
                Token::from_span(text, start..start + grapheme.len(), position)
            })
            .collect();

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "grapheme"
    }
}
