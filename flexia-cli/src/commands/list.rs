//! List command implementation

use crate::config::CliConfig;
use crate::output::{OutputFormatter, Record};
use anyhow::Result;
use clap::Subcommand;
use flexia_core::LocaleRegistry;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages with number localization
    Languages,

    /// List currencies registered for a language
    Currencies {
        /// Language to list (default: from config, else 'ru')
        #[arg(short, long, value_name = "LANG", env = "FLEXIA_LANGUAGE")]
        language: Option<String>,
    },
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self, config: &CliConfig, out: &mut dyn OutputFormatter) -> Result<()> {
        let registry = LocaleRegistry::builtin();
        match self {
            ListCommands::Languages => {
                for language in registry.languages() {
                    out.write_record(&Record::listed(language))?;
                }
            }
            ListCommands::Currencies { language } => {
                let language = language
                    .as_deref()
                    .unwrap_or(&config.price.default_language);
                for currency in registry.currencies(language)? {
                    out.write_record(&Record::listed(currency))?;
                }
            }
        }
        Ok(())
    }
}
