//! Integration tests for building configurations from options.

use std::io::Write;

use tempfile::NamedTempFile;

use tokenkit::config::{Strategy, TokenizerConfig, TokenizerOptions};
use tokenkit::error::{Result, TokenKitError};
use tokenkit::{build_configuration, tokenize};

#[test]
fn test_options_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"{{
            "strategy": "path_hierarchy",
            "delimiter": "::",
            "lowercase": false
        }}"#
    )?;

    let options = TokenizerOptions::from_json_file(file.path())?;
    let config = build_configuration(&options)?;
    assert_eq!(config.strategy(), Strategy::PathHierarchy);
    assert_eq!(
        tokenize(&config, "std::io::Write")?,
        vec!["std", "std::io", "std::io::Write"]
    );
    Ok(())
}

#[test]
fn test_unknown_field_is_rejected() {
    let result = TokenizerOptions::from_json_str(r#"{"stratgy": "unicode"}"#);
    assert!(matches!(result, Err(TokenKitError::Json(_))));
}

#[test]
fn test_missing_file() {
    let result = TokenizerOptions::from_json_file("/nonexistent/tokenkit.json");
    assert!(matches!(result, Err(TokenKitError::Io(_))));
}

#[test]
fn test_configuration_errors() {
    let cases = [
        (r#"{"strategy": "bogus"}"#, "strategy"),
        (r#"{"strategy": "pattern"}"#, "missing"),
        (r#"{"strategy": "pattern", "regex": "(a"}"#, "regex"),
        (r#"{"strategy": "path_hierarchy", "delimiter": ""}"#, "delimiter"),
    ];

    for (json, kind) in cases {
        let options = TokenizerOptions::from_json_str(json).unwrap();
        let error = build_configuration(&options).unwrap_err();
        assert!(error.is_config_error());
        let matched = match kind {
            "strategy" => matches!(error, TokenKitError::InvalidStrategy(_)),
            "missing" => matches!(error, TokenKitError::MissingRequiredParameter { .. }),
            "regex" => matches!(error, TokenKitError::InvalidRegex { .. }),
            _ => matches!(error, TokenKitError::InvalidDelimiter(_)),
        };
        assert!(matched, "{json}: {error}");
    }
}

#[test]
fn test_failed_build_leaves_current_config_alone() -> Result<()> {
    let current = TokenizerConfig::builder().strategy(Strategy::Whitespace).build()?;
    let attempt = current.to_builder().strategy(Strategy::Pattern).build();
    assert!(attempt.is_err());
    assert_eq!(current.strategy(), Strategy::Whitespace);
    assert_eq!(tokenize(&current, "A b")?, vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_export_rebuilds_same_config() -> Result<()> {
    let config = TokenizerConfig::builder()
        .strategy(Strategy::Ngram)
        .min_gram(0)
        .max_gram(4)
        .preserve_pattern(r"\d+")
        .build()?;
    let exported = config.to_options();
    assert_eq!(exported.min_gram, Some(1));
    assert_eq!(exported.strategy.as_deref(), Some("ngram"));

    let json = serde_json::to_string(&config)?;
    let rebuilt = build_configuration(&TokenizerOptions::from_json_str(&json)?)?;
    assert_eq!(rebuilt, config);
    Ok(())
}

#[test]
fn test_strategy_switch_restores_parameters() -> Result<()> {
    let ngram = TokenizerConfig::builder()
        .strategy(Strategy::Ngram)
        .min_gram(3)
        .max_gram(5)
        .build()?;
    let keyword = ngram.to_builder().strategy(Strategy::Keyword).build()?;
    let back = keyword.to_builder().strategy(Strategy::Ngram).build()?;
    assert_eq!((back.min_gram(), back.max_gram()), (3, 5));
    Ok(())
}
