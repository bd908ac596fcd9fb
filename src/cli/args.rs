//! Command line argument parsing for TokenKit CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{TokenizerConfig, TokenizerOptions};
use crate::error::Result;

/// TokenKit - A multi-strategy text tokenizer
#[derive(Parser, Debug, Clone)]
#[command(name = "tokenkit")]
#[command(about = "Split text into tokens with one of thirteen strategies")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TokenKitArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TokenKitArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text given as an argument or on stdin
    Tokenize(TokenizeArgs),

    /// List the available strategies
    Strategies,

    /// Print the effective configuration
    Config(ConfigArgs),
}

/// Arguments for tokenizing
#[derive(Args, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Tokenize every input line separately
    #[arg(long)]
    pub lines: bool,

    #[command(flatten)]
    pub options: ConfigOptionArgs,
}

/// Arguments for printing the configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub options: ConfigOptionArgs,
}

/// Configuration flags shared by the subcommands.
///
/// Flags override the values of the `--config` file, which override the
/// defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOptionArgs {
    /// JSON options file
    #[arg(short, long, value_name = "FILE", env = "TOKENKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tokenization strategy
    #[arg(short, long, env = "TOKENKIT_STRATEGY")]
    pub strategy: Option<String>,

    /// Lowercase tokens
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub lowercase: Option<bool>,

    /// Strip punctuation from tokens
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub remove_punctuation: Option<bool>,

    /// Regex whose matches are kept verbatim (repeatable)
    #[arg(short, long = "preserve", value_name = "REGEX")]
    pub preserve_patterns: Vec<String>,

    /// Regex for the pattern strategy
    #[arg(long, value_name = "REGEX")]
    pub regex: Option<String>,

    /// Use extended grapheme clusters
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub grapheme_extended: Option<bool>,

    /// Minimum n-gram length
    #[arg(long)]
    pub min_gram: Option<usize>,

    /// Maximum n-gram length
    #[arg(long)]
    pub max_gram: Option<usize>,

    /// Path hierarchy delimiter
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Characters the char_group strategy splits on
    #[arg(long, value_name = "CHARS")]
    pub split_on_chars: Option<String>,

    /// Reject invalid n-gram bounds instead of fixing them
    #[arg(long)]
    pub strict_ngram: bool,

    /// Drop invalid preserve patterns instead of failing
    #[arg(long)]
    pub lenient_patterns: bool,
}

impl ConfigOptionArgs {
    /// Options from the `--config` file with the flags layered on top.
    pub fn to_options(&self) -> Result<TokenizerOptions> {
        let base = match &self.config {
            Some(path) => TokenizerOptions::from_json_file(path)?,
            None => TokenizerOptions::default(),
        };

        let flags = TokenizerOptions {
            strategy: self.strategy.clone(),
            lowercase: self.lowercase,
            remove_punctuation: self.remove_punctuation,
            preserve_patterns: (!self.preserve_patterns.is_empty())
                .then(|| self.preserve_patterns.clone()),
            regex: self.regex.clone(),
            grapheme_extended: self.grapheme_extended,
            min_gram: self.min_gram,
            max_gram: self.max_gram,
            delimiter: self.delimiter.clone(),
            split_on_chars: self.split_on_chars.clone(),
        };

        Ok(base.merge(flags))
    }

    /// Build the configuration these flags describe.
    pub fn build_config(&self) -> Result<TokenizerConfig> {
        let builder = TokenizerConfig::builder()
            .coerce_ngram_bounds(!self.strict_ngram)
            .lenient_preserve_patterns(self.lenient_patterns);
        self.to_options()?.apply(builder)?.build()
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
