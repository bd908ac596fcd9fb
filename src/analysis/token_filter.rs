//! Token filter implementations for token transformation.
//!
//! Filters run after preservation and rewrite the segments a tokenizer
//! produced. Protected bytes (see [`Token::map_unprotected`]) are never
//! altered by any filter here.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`punctuation::PunctuationFilter`] - Strips punctuation characters
//!
//! # Examples
//!
//! ```
//! use tokenkit::analysis::token_filter::Filter;
//! use tokenkit::analysis::token_filter::lowercase::LowercaseFilter;
//! use tokenkit::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! The analyzer chains filters in a fixed order:
//!
//! ```text
//! Tokenizer → Preservation → Lowercase → Punctuation
//! ```
//!
//! [`Token::map_unprotected`]: crate::analysis::token::Token::map_unprotected

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new one. Filtering cannot
/// fail: every option that could make it fail is validated when the
/// configuration is built.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use tokenkit::analysis::token::{Token, TokenStream};
/// use tokenkit::analysis::token_filter::Filter;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> TokenStream {
///         let reversed: Vec<Token> = tokens
///             .map(|t| t.map_unprotected(|s| s.chars().rev().collect()))
///             .collect();
///         Box::new(reversed.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod punctuation;

pub use lowercase::LowercaseFilter;
pub use punctuation::PunctuationFilter;
