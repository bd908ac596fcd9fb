//! N-gram tokenizer implementation.

use super::{Tokenizer, whitespace_terms};

use crate::analysis::preserve::Preservation;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{Result, TokenKitError};

/// A tokenizer that generates character n-grams of every whitespace-delimited term.
///
/// Grams are emitted per term, shortest length first and, within one length,
/// by ascending start. Lengths are counted in `char`s and capped at the term
/// length.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::tokenizer::ngram::NgramTokenizer;
/// use tokenkit::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = NgramTokenizer::new(2, 3).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("test").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["te", "es", "st", "tes", "est"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_gram` is 0 or `max_gram` is less than `min_gram`.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 || max_gram < min_gram {
            return Err(TokenKitError::invalid_ngram(min_gram, max_gram));
        }
        Ok(Self { min_gram, max_gram })
    }
}

impl Tokenizer for NgramTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        whitespace_terms(text).into_token_stream()
    }

    fn expand(&self, term: Token) -> Vec<Token> {
        let bounds = char_bounds(&term.text);
        let char_count = bounds.len() - 1;
        let longest = self.max_gram.min(char_count);
        let mut grams = Vec::new();

        for gram_size in self.min_gram..=longest {
            for start in 0..=(char_count - gram_size) {
                grams.push(gram(&term, &bounds, start, start + gram_size));
            }
        }

        grams
    }

    fn preservation(&self) -> Preservation {
        Preservation::Protect
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

/// Byte offsets of every char boundary of `text`, including the end.
pub(crate) fn char_bounds(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// The gram covering chars `start..end` of `term`.
pub(crate) fn gram(term: &Token, bounds: &[usize], start: usize, end: usize) -> Token {
    let (from, to) = (bounds[start], bounds[end]);
    Token::with_offsets(
        &term.text[from..to],
        term.position,
        term.start_offset + from,
        term.start_offset + to,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &NgramTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_ngram_creation() {
        assert!(NgramTokenizer::new(2, 3).is_ok());
        assert!(NgramTokenizer::new(0, 2).is_err());
        assert!(NgramTokenizer::new(3, 2).is_err());
    }

    #[test]
    fn test_bigram() {
        let tokens = texts(&NgramTokenizer::new(2, 2).unwrap(), "hello");
        assert_eq!(tokens, vec!["he", "el", "ll", "lo"]);
    }

    #[test]
    fn test_trigram() {
        let tokens = texts(&NgramTokenizer::new(3, 3).unwrap(), "hello");
        assert_eq!(tokens, vec!["hel", "ell", "llo"]);
    }

    #[test]
    fn test_length_major_order() {
        let tokenizer = NgramTokenizer::new(2, 3).unwrap();
        assert_eq!(texts(&tokenizer, "test"), vec!["te", "es", "st", "tes", "est"]);
    }

    #[test]
    fn test_per_term() {
        let tokenizer = NgramTokenizer::new(2, 2).unwrap();
        assert_eq!(texts(&tokenizer, "ab cd"), vec!["ab", "cd"]);
    }

    #[test]
    fn test_unicode_support() {
        let tokens: Vec<Token> = NgramTokenizer::new(2, 2).unwrap().tokenize("日本語").collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "日本");
        assert_eq!(tokens[1].text, "本語");

        // "日" = 3 bytes, "本" = 3 bytes, "語" = 3 bytes in UTF-8
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 6);
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[1].end_offset, 9);
    }

    #[test]
    fn test_short_text() {
        let tokenizer = NgramTokenizer::new(3, 5).unwrap();
        assert!(texts(&tokenizer, "ab").is_empty());
    }

    #[test]
    fn test_exact_length() {
        let tokenizer = NgramTokenizer::new(3, 3).unwrap();
        assert_eq!(texts(&tokenizer, "abc"), vec!["abc"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(NgramTokenizer::new(2, 2).unwrap().name(), "ngram");
    }
}
