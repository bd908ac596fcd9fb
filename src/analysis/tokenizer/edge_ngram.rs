//! Edge n-gram tokenizer implementation.

use super::ngram::{char_bounds, gram};
use super::{Tokenizer, whitespace_terms};

use crate::analysis::preserve::Preservation;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{Result, TokenKitError};

/// A tokenizer emitting the leading prefixes of every whitespace-delimited term.
///
/// Each term yields prefixes of `min_gram..=min(max_gram, term length)` chars,
/// shortest first. Terms shorter than `min_gram` yield nothing.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::tokenizer::edge_ngram::EdgeNgramTokenizer;
/// use tokenkit::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = EdgeNgramTokenizer::new(2, 10).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("coffee").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["co", "cof", "coff", "coffe", "coffee"]);
/// ```
#[derive(Clone, Debug)]
pub struct EdgeNgramTokenizer {
    min_gram: usize,
    max_gram: usize,
}

impl EdgeNgramTokenizer {
    /// Create a new edge n-gram tokenizer.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 || max_gram < min_gram {
            return Err(TokenKitError::invalid_ngram(min_gram, max_gram));
        }
        Ok(Self { min_gram, max_gram })
    }
}

impl Tokenizer for EdgeNgramTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        whitespace_terms(text).into_token_stream()
    }

    fn expand(&self, term: Token) -> Vec<Token> {
        let bounds = char_bounds(&term.text);
        let longest = self.max_gram.min(bounds.len() - 1);

        (self.min_gram..=longest)
            .map(|gram_size| gram(&term, &bounds, 0, gram_size))
            .collect()
    }

    fn preservation(&self) -> Preservation {
        Preservation::Protect
    }

    fn name(&self) -> &'static str {
        "edge_ngram"
    }
}
