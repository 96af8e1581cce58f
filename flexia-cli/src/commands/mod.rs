//! CLI command implementations

use crate::config::CliConfig;
use crate::output::{create_formatter, OutputFormat, OutputFormatter, Record};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

pub mod list;
pub mod price;
pub mod text;

/// Transliteration, slugs, English inflection and amounts in words
#[derive(Debug, Parser)]
#[command(name = "flexia", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transliterate between Cyrillic and Latin
    Translit(text::TranslitArgs),

    /// Build URL slugs
    Slug(text::SlugArgs),

    /// Convert to snake_case identifiers
    Underscore(text::ItemArgs),

    /// Convert to PascalCase identifiers
    Camelize(text::ItemArgs),

    /// Plural form of English words
    Plural(text::ItemArgs),

    /// Singular form of English words
    Singular(text::ItemArgs),

    /// Spell amounts in words
    Price(price::PriceArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Cli {
    /// Execute the selected command, writing to stdout
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let stdout = io::stdout();
        let mut formatter = create_formatter(self.format, stdout.lock());
        self.command.execute(&config, formatter.as_mut())?;
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

impl Commands {
    /// Run the command against `config`, sending results to `out`
    pub fn execute(&self, config: &CliConfig, out: &mut dyn OutputFormatter) -> Result<()> {
        match self {
            Commands::Translit(args) => args.execute(out),
            Commands::Slug(args) => args.execute(config, out),
            Commands::Underscore(args) => args.convert(out, |item| Ok(flexia_core::underscore(item))),
            Commands::Camelize(args) => args.convert(out, |item| Ok(flexia_core::camelize(item))),
            Commands::Plural(args) => args.convert(out, |item| Ok(flexia_core::pluralize(item))),
            Commands::Singular(args) => {
                args.convert(out, |item| Ok(flexia_core::singularize(item)))
            }
            Commands::Price(args) => args.execute(config, out),
            Commands::List { subcommand } => subcommand.execute(config, out),
        }
    }
}

/// Write one record per item, converting each with `f`
pub(crate) fn convert_items<F>(items: &[String], out: &mut dyn OutputFormatter, f: F) -> Result<()>
where
    F: Fn(&str) -> Result<String>,
{
    for item in items {
        let converted = f(item)?;
        out.write_record(&Record::converted(item, &converted))?;
    }
    log::info!("Converted {} item(s)", items.len());
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::output::JsonFormatter;

    /// Run `args` against `config` and collect the JSON lines it prints
    pub(crate) fn run(args: &[&str], config: &CliConfig) -> Result<Vec<serde_json::Value>> {
        let cli = Cli::try_parse_from(std::iter::once("flexia").chain(args.iter().copied()))?;
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            cli.command.execute(config, &mut formatter)?;
            formatter.finish()?;
        }
        let text = String::from_utf8(buffer)?;
        Ok(text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect())
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["flexia", "plural", "man", "-f", "json", "-vv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Plural(_)));
    }

    #[test]
    fn test_case_commands() {
        let config = CliConfig::default();
        let out = run(&["underscore", "HelloWorld"], &config).unwrap();
        assert_eq!(out[0]["output"], "hello_world");

        let out = run(&["camelize", "hello_ big   world"], &config).unwrap();
        assert_eq!(out[0]["output"], "HelloBigWorld");
    }

    #[test]
    fn test_inflection_commands() {
        let config = CliConfig::default();
        let out = run(&["plural", "man", "winner"], &config).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["input"], "man");
        assert_eq!(out[0]["output"], "men");
        assert_eq!(out[1]["output"], "winners");

        let out = run(&["singular", "people"], &config).unwrap();
        assert_eq!(out[0]["output"], "person");
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["flexia"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
