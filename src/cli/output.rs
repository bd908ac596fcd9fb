//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{OutputFormat, TokenKitArgs};
use crate::config::TokenizerOptions;
use crate::error::Result;

/// Result structure for tokenizing one text.
#[derive(Debug, Serialize)]
pub struct TokenizeResult {
    pub strategy: String,
    pub tokens: Vec<String>,
}

/// Result structure for tokenizing one text per input line.
#[derive(Debug, Serialize)]
pub struct BatchTokenizeResult {
    pub strategy: String,
    pub results: Vec<Vec<String>>,
}

/// The strategies the CLI accepts.
#[derive(Debug, Serialize)]
pub struct StrategyList {
    pub strategies: Vec<String>,
}

/// Results with a human-readable rendering.
///
/// The default rendering prints every top-level field as `key: value`.
pub trait HumanOutput: Serialize {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        let value = serde_json::to_value(self)?;
        match value {
            serde_json::Value::Object(obj) => {
                for (key, val) in obj {
                    writeln!(out, "{key}: {}", format_value(&val))?;
                }
            }
            other => writeln!(out, "{}", format_value(&other))?,
        }
        Ok(())
    }
}

impl HumanOutput for TokenizeResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for token in &self.tokens {
            writeln!(out, "{token}")?;
        }
        Ok(())
    }
}

impl HumanOutput for BatchTokenizeResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for tokens in &self.results {
            writeln!(out, "{}", tokens.join(" "))?;
        }
        Ok(())
    }
}

impl HumanOutput for StrategyList {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for strategy in &self.strategies {
            writeln!(out, "{strategy}")?;
        }
        Ok(())
    }
}

impl HumanOutput for TokenizerOptions {}

/// Output a result to stdout in the format the arguments select.
pub fn output_result<T: HumanOutput>(result: &T, args: &TokenKitArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, args.output_format, args.pretty)
}

/// Write a result in the given format.
pub fn write_result<T: HumanOutput>(
    out: &mut dyn Write,
    result: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(out, result, pretty),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(out: &mut dyn Write, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => format!("{s:?}"),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
