//! Command Line Interface for TokenKit.

pub mod args;
pub mod commands;
pub mod output;
