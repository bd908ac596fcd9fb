//! Text analysis module for TokenKit.
//!
//! This module provides the tokenization engine: the segmentation strategies,
//! preserve-pattern handling, the token filters, and the pipeline analyzer
//! that ties them to a configuration.

pub mod analyzer;
pub mod preserve;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
