//! Flexia CLI library
//!
//! This library provides the command-line interface for the flexia
//! transliteration, slug, inflection and amount-in-words helpers.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
