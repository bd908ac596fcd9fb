//! # TokenKit
//!
//! A multi-strategy text tokenizer.
//!
//! ## Features
//!
//! - Thirteen interchangeable segmentation strategies
//! - Preserve patterns that keep regex matches verbatim through lowercasing
//!   and punctuation removal
//! - Immutable, validated configurations built once and reused across threads
//! - Parallel batch tokenization
//!
//! ## Example
//!
//! ```
//! use tokenkit::config::TokenizerOptions;
//!
//! let options = TokenizerOptions::from_json_str(
//!     r#"{"strategy": "unicode", "preserve_patterns": ["BRCA\\d+"]}"#,
//! )
//! .unwrap();
//! let config = tokenkit::build_configuration(&options).unwrap();
//!
//! let tokens = tokenkit::tokenize(&config, "Patient BRCA1 test").unwrap();
//! assert_eq!(tokens, vec!["patient", "BRCA1", "test"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

use rayon::prelude::*;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::config::{TokenizerConfig, TokenizerOptions};
use crate::error::Result;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a validated configuration from optional overrides on top of the defaults.
pub fn build_configuration(options: &TokenizerOptions) -> Result<TokenizerConfig> {
    TokenizerConfig::from_options(options)
}

/// Tokenize `text` with `config`.
///
/// The result depends only on the two arguments. The error path is only
/// reachable for a configuration that was not produced by the builder.
pub fn tokenize(config: &TokenizerConfig, text: &str) -> Result<Vec<String>> {
    Ok(PipelineAnalyzer::from_config(config)?.analyze_to_strings(text))
}

/// Tokenize many texts in parallel; the output follows the input order.
pub fn tokenize_batch<S>(config: &TokenizerConfig, texts: &[S]) -> Result<Vec<Vec<String>>>
where
    S: AsRef<str> + Sync,
{
    let analyzer = PipelineAnalyzer::from_config(config)?;
    Ok(texts
        .par_iter()
        .map(|text| analyzer.analyze_to_strings(text.as_ref()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;

    #[test]
    fn test_tokenize_with_defaults() {
        let config = build_configuration(&TokenizerOptions::default()).unwrap();
        assert_eq!(
            tokenize(&config, "Hello, World!").unwrap(),
            vec!["hello", "world"]
        );
    }

    #[test]
    fn test_tokenize_batch_keeps_order() {
        let config = TokenizerConfig::builder()
            .strategy(Strategy::Whitespace)
            .build()
            .unwrap();
        let texts = ["b a", "", "C"];
        let batch = tokenize_batch(&config, &texts).unwrap();
        assert_eq!(batch, vec![vec!["b", "a"], vec![], vec!["c"]]);
        for (text, tokens) in texts.iter().zip(&batch) {
            assert_eq!(&tokenize(&config, text).unwrap(), tokens);
        }
    }
}
