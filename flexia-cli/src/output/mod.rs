//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One converted item per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// A converted item and the input it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    /// Input as given; absent for listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<&'a str>,
    /// Converted text
    pub output: &'a str,
}

impl<'a> Record<'a> {
    /// Record for a converted input
    pub fn converted(input: &'a str, output: &'a str) -> Self {
        Self {
            input: Some(input),
            output,
        }
    }

    /// Record with no input, as printed by `list`
    pub fn listed(output: &'a str) -> Self {
        Self {
            input: None,
            output,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write a single record
    fn write_record(&mut self, record: &Record<'_>) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()>;
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
