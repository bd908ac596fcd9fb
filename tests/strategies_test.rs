//! Integration tests for the segmentation strategies through the public API.

use tokenkit::config::{Strategy, TokenizerConfig};
use tokenkit::error::Result;
use tokenkit::tokenize;

fn run(config: TokenizerConfig, text: &str) -> Result<Vec<String>> {
    tokenize(&config, text)
}

fn plain(strategy: Strategy) -> TokenizerConfig {
    TokenizerConfig::builder()
        .strategy(strategy)
        .lowercase(false)
        .build()
        .unwrap()
}

#[test]
fn test_whitespace() -> Result<()> {
    assert_eq!(
        run(plain(Strategy::Whitespace), "  Hello,\tworld \n again  ")?,
        vec!["Hello,", "world", "again"]
    );
    Ok(())
}

#[test]
fn test_unicode() -> Result<()> {
    assert_eq!(
        run(plain(Strategy::Unicode), "The café can't stop anti-CD3 cells.")?,
        vec!["The", "café", "can't", "stop", "anti", "CD3", "cells"]
    );
    Ok(())
}

#[test]
fn test_letter() -> Result<()> {
    assert_eq!(
        run(plain(Strategy::Letter), "abc123def 東京😀ok")?,
        vec!["abc", "def", "東京", "ok"]
    );
    Ok(())
}

#[test]
fn test_lowercase_override() -> Result<()> {
    assert_eq!(run(plain(Strategy::Lowercase), "TEST")?, vec!["test"]);

    let tokens = run(plain(Strategy::Lowercase), "İSTANBUL")?;
    assert_eq!(tokens, vec!["i\u{307}stanbul"]);
    assert_eq!(tokens[0].chars().count(), 9);
    Ok(())
}

#[test]
fn test_pattern() -> Result<()> {
    let config = TokenizerConfig::builder()
        .strategy(Strategy::Pattern)
        .regex(r"[A-Z]{2,}\d+")
        .lowercase(false)
        .build()?;
    assert_eq!(run(config.clone(), "BRCA1 and TP53, not p53")?, vec!["BRCA1", "TP53"]);
    assert!(run(config, "nothing here")?.is_empty());
    Ok(())
}

#[test]
fn test_pattern_with_inline_flags() -> Result<()> {
    let config = TokenizerConfig::builder()
        .strategy(Strategy::Pattern)
        .regex(r"(?i)brca\d")
        .lowercase(false)
        .build()?;
    assert_eq!(run(config, "BRCA1 brca2")?, vec!["BRCA1", "brca2"]);
    Ok(())
}

#[test]
fn test_sentence() -> Result<()> {
    assert_eq!(
        run(plain(Strategy::Sentence), "Hello there. How are you? Fine  ")?,
        vec!["Hello there. ", "How are you? ", "Fine"]
    );
    assert_eq!(run(plain(Strategy::Sentence), "no terminal punctuation")?.len(), 1);
    Ok(())
}

#[test]
fn test_grapheme() -> Result<()> {
    let family = "👨\u{200d}👩\u{200d}👧\u{200d}👦";
    assert_eq!(run(plain(Strategy::Grapheme), family)?, vec![family]);
    assert_eq!(run(plain(Strategy::Grapheme), "e\u{301}a")?, vec!["e\u{301}", "a"]);
    assert_eq!(run(plain(Strategy::Grapheme), "🇯🇵")?, vec!["🇯🇵"]);
    Ok(())
}

#[test]
fn test_keyword() -> Result<()> {
    assert_eq!(
        run(plain(Strategy::Keyword), "  New   York City \n")?,
        vec!["New   York City"]
    );
    assert!(run(plain(Strategy::Keyword), " \t ")?.is_empty());
    Ok(())
}

#[test]
fn test_edge_ngram() -> Result<()> {
    let config = TokenizerConfig::builder()
        .strategy(Strategy::EdgeNgram)
        .min_gram(2)
        .max_gram(10)
        .build()?;
    assert_eq!(
        run(config, "coffee")?,
        vec!["co", "cof", "coff", "coffe", "coffee"]
    );
    Ok(())
}

#[test]
fn test_ngram() -> Result<()> {
    let config = TokenizerConfig::builder()
        .strategy(Strategy::Ngram)
        .min_gram(2)
        .max_gram(3)
        .build()?;
    assert_eq!(run(config, "test")?, vec!["te", "es", "st", "tes", "est"]);
    Ok(())
}

#[test]
fn test_gram_bounds_are_coerced() -> Result<()> {
    let zero = TokenizerConfig::builder()
        .strategy(Strategy::EdgeNgram)
        .min_gram(0)
        .max_gram(2)
        .build()?;
    let one = TokenizerConfig::builder()
        .strategy(Strategy::EdgeNgram)
        .min_gram(1)
        .max_gram(2)
        .build()?;
    assert_eq!(run(zero, "abc")?, run(one, "abc")?);

    let inverted = TokenizerConfig::builder()
        .strategy(Strategy::Ngram)
        .min_gram(3)
        .max_gram(1)
        .build()?;
    assert_eq!(inverted.max_gram(), 3);
    assert_eq!(run(inverted, "abcd")?, vec!["abc", "bcd"]);
    Ok(())
}

#[test]
fn test_path_hierarchy() -> Result<()> {
    assert_eq!(
        run(plain(Strategy::PathHierarchy), "/usr/local/bin")?,
        vec!["/usr", "/usr/local", "/usr/local/bin"]
    );

    let config = TokenizerConfig::builder()
        .strategy(Strategy::PathHierarchy)
        .delimiter("\\")
        .lowercase(false)
        .build()?;
    assert_eq!(
        run(config, r"C:\Users\Me")?,
        vec!["C:", r"C:\Users", r"C:\Users\Me"]
    );
    Ok(())
}

#[test]
fn test_path_hierarchy_collapses_repeated_delimiters() -> Result<()> {
    assert_eq!(
        run(plain(Strategy::PathHierarchy), "//usr//local///bin/")?,
        vec!["/usr", "/usr/local", "/usr/local/bin"]
    );
    assert_eq!(run(plain(Strategy::PathHierarchy), "a//b")?, vec!["a", "a/b"]);
    Ok(())
}

#[test]
fn test_url_email() -> Result<()> {
    let config = TokenizerConfig::builder()
        .strategy(Strategy::UrlEmail)
        .remove_punctuation(true)
        .build()?;
    assert_eq!(
        run(config, "Email Support@Example.com or visit https://Example.com/Docs?page=2 today.")?,
        vec![
            "email",
            "support@example.com",
            "or",
            "visit",
            "https://example.com/docs?page=2",
            "today"
        ]
    );
    Ok(())
}

#[test]
fn test_char_group() -> Result<()> {
    let config = TokenizerConfig::builder()
        .strategy(Strategy::CharGroup)
        .split_on_chars(",;")
        .lowercase(false)
        .build()?;
    assert_eq!(run(config, "a,b;;c d")?, vec!["a", "b", "c d"]);

    let whole = TokenizerConfig::builder()
        .strategy(Strategy::CharGroup)
        .split_on_chars("")
        .lowercase(false)
        .build()?;
    assert_eq!(run(whole, "a,b c")?, vec!["a,b c"]);
    Ok(())
}

#[test]
fn test_remove_punctuation_drops_emptied_tokens() -> Result<()> {
    let config = TokenizerConfig::builder()
        .strategy(Strategy::Whitespace)
        .remove_punctuation(true)
        .build()?;
    assert_eq!(run(config, "Wait ... what?! «Oui»")?, vec!["wait", "what", "oui"]);
    Ok(())
}
