//! Character group tokenizer implementation.

use std::collections::HashSet;

use super::{Tokenizer, char_runs};

use crate::analysis::token::{IntoTokenStream, TokenStream};

/// A tokenizer that splits on any run of characters from a set.
///
/// The split characters form a set: order and duplicates are irrelevant, and
/// a multi-character string means "any one of these", never the literal
/// substring. An empty set disables splitting entirely.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::tokenizer::Tokenizer;
/// use tokenkit::analysis::tokenizer::char_group::CharGroupTokenizer;
///
/// let tokens: Vec<_> = CharGroupTokenizer::new(",;")
///     .tokenize("a,b;;c")
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug)]
pub struct CharGroupTokenizer {
    split_chars: HashSet<char>,
}

impl CharGroupTokenizer {
    /// Create a tokenizer splitting on every character of `split_on_chars`.
    pub fn new(split_on_chars: &str) -> Self {
        CharGroupTokenizer {
            split_chars: split_on_chars.chars().collect(),
        }
    }

    /// Whether `ch` separates tokens.
    pub fn splits_on(&self, ch: char) -> bool {
        self.split_chars.contains(&ch)
    }
}

impl Default for CharGroupTokenizer {
    fn default() -> Self {
        Self::new(crate::config::defaults::SPLIT_ON_CHARS)
    }
}

impl Tokenizer for CharGroupTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        char_runs(text, |ch, _| !self.splits_on(ch)).into_token_stream()
    }

    fn name(&self) -> &'static str {
        "char_group"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &CharGroupTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_default_splits_on_whitespace() {
        let tokenizer = CharGroupTokenizer::default();
        assert_eq!(texts(&tokenizer, " a\tb\r\nc "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_semantics() {
        let tokenizer = CharGroupTokenizer::new("-_-");
        assert_eq!(texts(&tokenizer, "snake_case-kebab"), vec!["snake", "case", "kebab"]);

        // "ab" splits on 'a' or 'b', not on the substring "ab"
        let tokenizer = CharGroupTokenizer::new("ab");
        assert_eq!(texts(&tokenizer, "xaybz"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_set_keeps_whole_input() {
        let tokenizer = CharGroupTokenizer::new("");
        assert_eq!(texts(&tokenizer, "no split here"), vec!["no split here"]);
        assert!(texts(&tokenizer, "").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(CharGroupTokenizer::default().name(), "char_group");
    }
}
