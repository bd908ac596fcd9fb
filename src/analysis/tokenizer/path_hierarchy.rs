//! Path hierarchy tokenizer implementation.

use super::Tokenizer;

use crate::analysis::preserve::Preservation;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::config::Strategy;
use crate::error::{Result, TokenKitError};

/// A tokenizer emitting the cumulative prefixes of a delimited path.
///
/// Empty segments are skipped and the remaining ones are joined with a single
/// delimiter, so `"//usr//bin"` yields `"/usr"` and `"/usr/bin"`. A leading
/// delimiter is kept once; a trailing one adds no token. Each token's offsets
/// run from the start of the trimmed input to the end of its last segment.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::tokenizer::path_hierarchy::PathHierarchyTokenizer;
/// use tokenkit::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = PathHierarchyTokenizer::new("/").unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("/usr/local/bin").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["/usr", "/usr/local", "/usr/local/bin"]);
/// ```
#[derive(Clone, Debug)]
pub struct PathHierarchyTokenizer {
    delimiter: String,
}

impl PathHierarchyTokenizer {
    /// Create a tokenizer splitting on the literal `delimiter`.
    pub fn new(delimiter: &str) -> Result<Self> {
        if delimiter.is_empty() {
            return Err(TokenKitError::invalid_delimiter(Strategy::PathHierarchy.as_str()));
        }
        Ok(Self {
            delimiter: delimiter.to_string(),
        })
    }

    /// The separator between path segments.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Tokenizer for PathHierarchyTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        let trimmed = text.trim();
        let base = text.len() - text.trim_start().len();
        let rooted = trimmed.starts_with(self.delimiter.as_str());
        let mut tokens = Vec::new();
        let mut path = String::with_capacity(trimmed.len());
        let mut segment_start = 0;

        for (index, _) in trimmed
            .match_indices(self.delimiter.as_str())
            .chain(std::iter::once((trimmed.len(), "")))
        {
            if index > segment_start {
                if rooted || !path.is_empty() {
                    path.push_str(&self.delimiter);
                }
                path.push_str(&trimmed[segment_start..index]);
                tokens.push(Token::with_offsets(
                    path.as_str(),
                    tokens.len(),
                    base,
                    base + index,
                ));
            }
            segment_start = index + self.delimiter.len();
        }

        tokens.into_token_stream()
    }

    fn preservation(&self) -> Preservation {
        Preservation::Protect
    }

    fn name(&self) -> &'static str {
        "path_hierarchy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(delimiter: &str, text: &str) -> Vec<String> {
        PathHierarchyTokenizer::new(delimiter)
            .unwrap()
            .tokenize(text)
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_absolute_path() {
        assert_eq!(
            texts("/", "/usr/local/bin"),
            vec!["/usr", "/usr/local", "/usr/local/bin"]
        );
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(texts("/", "a/b"), vec!["a", "a/b"]);
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(texts("/", "  readme.md "), vec!["readme.md"]);
    }

    #[test]
    fn test_repeated_and_trailing_delimiters() {
        assert_eq!(texts("/", "a//b"), vec!["a", "a/b"]);
        assert_eq!(texts("/", "//usr//bin"), vec!["/usr", "/usr/bin"]);
        assert_eq!(texts("/", "a/b/"), vec!["a", "a/b"]);
        assert!(texts("/", "/").is_empty());
    }

    #[test]
    fn test_collapsed_prefix_offsets() {
        let tokens: Vec<Token> = PathHierarchyTokenizer::new("::")
            .unwrap()
            .tokenize("a::::b")
            .collect();
        assert_eq!(tokens[1].text, "a::b");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (0, 6));
    }

    #[test]
    fn test_multi_character_delimiter() {
        assert_eq!(
            texts("::", "std::collections::HashMap"),
            vec!["std", "std::collections", "std::collections::HashMap"]
        );
    }

    #[test]
    fn test_offsets_skip_leading_whitespace() {
        let tokens: Vec<Token> = PathHierarchyTokenizer::new("/")
            .unwrap()
            .tokenize("  /a/b")
            .collect();
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[1].end_offset, 6);
    }

    #[test]
    fn test_empty_input() {
        assert!(texts("/", "").is_empty());
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        assert!(matches!(
            PathHierarchyTokenizer::new(""),
            Err(TokenKitError::InvalidDelimiter(_))
        ));
    }
}
