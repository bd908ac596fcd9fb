//! Sentence tokenizer implementation.

use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

use crate::analysis::preserve::Preservation;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};

/// A tokenizer that splits text on Unicode sentence boundaries (UAX #29).
///
/// Whitespace following a sentence stays part of it, except after the final
/// sentence. Preserve patterns protect the matched substrings inside a
/// sentence rather than replacing the sentence.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::tokenizer::Tokenizer;
/// use tokenkit::analysis::tokenizer::sentence::SentenceTokenizer;
///
/// let tokens: Vec<_> = SentenceTokenizer::new()
///     .tokenize("One. Two? Three")
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["One. ", "Two? ", "Three"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        SentenceTokenizer
    }
}

impl Tokenizer for SentenceTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        let mut tokens: Vec<Token> = text
            .split_sentence_bound_indices()
            .filter(|(_, sentence)| !sentence.trim().is_empty())
            .enumerate()
            .map(|(position, (start, sentence))| {
                Token::from_span(text, start..start + sentence.len(), position)
            })
            .collect();

        if let Some(last) = tokens.last_mut() {
            let trimmed_len = last.text.trim_end().len();
            last.text.truncate(trimmed_len);
            last.end_offset = last.start_offset + trimmed_len;
        }

        tokens.into_token_stream()
    }

    fn preservation(&self) -> Preservation {
        Preservation::Protect
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        SentenceTokenizer::new().tokenize(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_sentence_tokenizer() {
        assert_eq!(
            texts("Hello world. How are you? Fine!  "),
            vec!["Hello world. ", "How are you? ", "Fine!"]
        );
    }

    #[test]
    fn test_single_sentence_without_terminal() {
        assert_eq!(texts("no terminal punctuation"), vec!["no terminal punctuation"]);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(texts("   \n ").is_empty());
    }

    #[test]
    fn test_last_sentence_offsets() {
        let tokens: Vec<Token> = SentenceTokenizer::new().tokenize("A b.  ").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 4));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SentenceTokenizer::new().name(), "sentence");
    }
}
