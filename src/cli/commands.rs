//! Command implementations for TokenKit CLI.

use std::io::{self, Read};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Strategy;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: TokenKitArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, &args),
        Command::Strategies => list_strategies(&args),
        Command::Config(config_args) => show_config(config_args, &args),
    }
}

/// Tokenize the given text, or stdin.
fn tokenize_text(args: &TokenizeArgs, cli_args: &TokenKitArgs) -> Result<()> {
    let config = args.options.build_config()?;
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            debug!("reading text from stdin");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let strategy = config.strategy().to_string();

    if args.lines {
        let lines: Vec<&str> = text.lines().collect();
        info!("tokenizing {} lines with {strategy}", lines.len());
        let results = crate::tokenize_batch(&config, &lines)?;
        output_result(&BatchTokenizeResult { strategy, results }, cli_args)
    } else {
        let tokens = crate::tokenize(&config, &text)?;
        info!("{} tokens from {} bytes", tokens.len(), text.len());
        output_result(&TokenizeResult { strategy, tokens }, cli_args)
    }
}

/// List every strategy name.
fn list_strategies(cli_args: &TokenKitArgs) -> Result<()> {
    let strategies = Strategy::ALL.iter().map(|s| s.to_string()).collect();
    output_result(&StrategyList { strategies }, cli_args)
}

/// Print the full effective configuration.
fn show_config(args: &ConfigArgs, cli_args: &TokenKitArgs) -> Result<()> {
    let config = args.options.build_config()?;
    output_result(&config.to_options(), cli_args)
}
