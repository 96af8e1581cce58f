//! Text conversion commands

use super::convert_items;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::collect_items;
use crate::output::OutputFormatter;
use anyhow::Result;
use clap::Args;
use flexia_core::{slugify, transliterate, Direction};

/// Positional items shared by the simple conversion commands
#[derive(Debug, Args)]
pub struct ItemArgs {
    /// Items to convert (default: one per stdin line)
    #[arg(value_name = "TEXT")]
    pub items: Vec<String>,
}

impl ItemArgs {
    /// Convert every item with `f`
    pub fn convert<F>(&self, out: &mut dyn OutputFormatter, f: F) -> Result<()>
    where
        F: Fn(&str) -> Result<String>,
    {
        let items = collect_items(&self.items)?;
        convert_items(&items, out, f)
    }
}

/// Target script of a transliteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Script {
    /// Cyrillic to Latin
    #[default]
    Latin,
    /// Latin to Cyrillic
    Cyrillic,
}

impl From<Script> for Direction {
    fn from(script: Script) -> Self {
        match script {
            Script::Latin => Direction::ToLatin,
            Script::Cyrillic => Direction::ToCyrillic,
        }
    }
}

/// Arguments for the translit command
#[derive(Debug, Args)]
pub struct TranslitArgs {
    /// Script to convert into
    #[arg(short, long, value_enum, default_value = "latin")]
    pub to: Script,

    #[command(flatten)]
    pub input: ItemArgs,
}

impl TranslitArgs {
    /// Execute the translit command
    pub fn execute(&self, out: &mut dyn OutputFormatter) -> Result<()> {
        let direction = Direction::from(self.to);
        self.input
            .convert(out, |item| Ok(transliterate(item, direction)))
    }
}

/// Arguments for the slug command
#[derive(Debug, Args)]
pub struct SlugArgs {
    /// Word separator (default: from config, else '-')
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<char>,

    #[command(flatten)]
    pub input: ItemArgs,
}

impl SlugArgs {
    /// Execute the slug command
    pub fn execute(&self, config: &CliConfig, out: &mut dyn OutputFormatter) -> Result<()> {
        let separator = self.separator.unwrap_or(config.slug.separator);
        if separator.is_ascii_alphanumeric() {
            return Err(CliError::InvalidInput(format!(
                "separator '{separator}' must not be a letter or digit"
            ))
            .into());
        }

        self.input
            .convert(out, |item| Ok(slugify(item, separator)))
    }
}
