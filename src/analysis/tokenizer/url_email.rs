//! URL and email aware tokenizer implementation.
//!
//! Links found by [`linkify`] are emitted whole and typed as
//! [`TokenType::Url`] or [`TokenType::Email`]; the text between them goes
//! through the Unicode word rules.

use linkify::{LinkFinder, LinkKind};

use super::Tokenizer;
use super::unicode_word::UnicodeWordTokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream, TokenType};

/// A tokenizer that keeps URLs and email addresses as single tokens.
///
/// # Examples
///
/// ```
/// use tokenkit::analysis::tokenizer::url_email::UrlEmailTokenizer;
/// use tokenkit::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = UrlEmailTokenizer::new();
/// let tokens: Vec<_> = tokenizer
///     .tokenize("Mail bob@example.com or see https://example.com/a?b=1")
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(
///     tokens,
///     vec!["Mail", "bob@example.com", "or", "see", "https://example.com/a?b=1"]
/// );
/// ```
pub struct UrlEmailTokenizer {
    finder: LinkFinder,
}

impl UrlEmailTokenizer {
    /// Create a tokenizer detecting URLs (with a scheme) and emails.
    pub fn new() -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url, LinkKind::Email]);
        Self { finder }
    }
}

impl Default for UrlEmailTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for UrlEmailTokenizer {
    fn segment(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        for link in self.finder.links(text) {
            let token_type = match link.kind() {
                LinkKind::Url => TokenType::Url,
                LinkKind::Email => TokenType::Email,
                _ => continue,
            };
            tokens.extend(UnicodeWordTokenizer::words(&text[cursor..link.start()], cursor));
            tokens.push(
                Token::from_span(text, link.start()..link.end(), 0).with_token_type(token_type),
            );
            cursor = link.end();
        }
        tokens.extend(UnicodeWordTokenizer::words(&text[cursor..], cursor));

        tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect::<Vec<_>>()
            .into_token_stream()
    }

    fn name(&self) -> &'static str {
        "url_email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<Token> {
        UrlEmailTokenizer::new().tokenize(text).collect()
    }

    #[test]
    fn test_url_kept_whole() {
        let tokens = tokens("Visit https://example.com/path?q=1&r=2 today");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Visit", "https://example.com/path?q=1&r=2", "today"]);
        assert_eq!(tokens[1].token_type, TokenType::Url);
        assert_eq!(tokens[1].start_offset, 6);
    }

    #[test]
    fn test_email_kept_whole() {
        let tokens = tokens("contact: jane.doe@example.org.");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["contact", "jane.doe@example.org"]);
        assert_eq!(tokens[1].token_type, TokenType::Email);
    }

    #[test]
    fn test_plain_text_uses_word_rules() {
        let texts: Vec<_> = tokens("no links, here").into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["no", "links", "here"]);
    }

    #[test]
    fn test_bare_domain_is_not_a_url() {
        let texts: Vec<_> = tokens("example.com").into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["example.com"]);
        assert!(tokens("example.com").iter().all(|t| t.token_type == TokenType::Word));
    }

    #[test]
    fn test_positions_are_sequential() {
        let positions: Vec<_> = tokens("a bob@example.com b")
            .into_iter()
            .map(|t| t.position)
            .collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }
}
