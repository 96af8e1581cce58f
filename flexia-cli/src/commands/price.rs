//! Price command implementation

use crate::config::CliConfig;
use crate::input::collect_items;
use crate::output::OutputFormatter;
use anyhow::{Context, Result};
use clap::Args;
use flexia_core::PriceFormatter;

use super::convert_items;

/// Arguments for the price command
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Amounts such as `133` or `1000000,12` (default: one per stdin line)
    #[arg(value_name = "AMOUNT")]
    pub amounts: Vec<String>,

    /// Currency code for the long form (default: from config, else 'uah')
    #[arg(long, value_name = "CODE")]
    pub currency: Option<String>,

    /// Language of the words
    #[arg(short, long, value_name = "LANG", env = "FLEXIA_LANGUAGE")]
    pub language: Option<String>,

    /// Use the short form with this major unit label (default label: from config, else 'грн.')
    #[arg(long, value_name = "LABEL")]
    pub short: Option<Option<String>>,

    /// Leave out the fractional part
    #[arg(long)]
    pub no_fraction: bool,
}

impl PriceArgs {
    /// Execute the price command
    pub fn execute(&self, config: &CliConfig, out: &mut dyn OutputFormatter) -> Result<()> {
        let language = self
            .language
            .as_deref()
            .unwrap_or(&config.price.default_language);
        let formatter = PriceFormatter::builder()
            .language(language)
            .build()
            .with_context(|| format!("Cannot render prices in '{language}'"))?;
        log::info!("Rendering prices in '{}'", formatter.language());

        let keep_fraction = !self.no_fraction;
        let amounts = collect_items(&self.amounts)?;

        match &self.short {
            Some(label) => {
                let label = label.as_deref().unwrap_or(&config.price.short_label);
                convert_items(&amounts, out, |amount| {
                    formatter
                        .render_short(amount, keep_fraction, label, None)
                        .with_context(|| format!("Cannot render amount '{amount}'"))
                })
            }
            None => {
                let currency = self
                    .currency
                    .as_deref()
                    .unwrap_or(&config.price.default_currency);
                convert_items(&amounts, out, |amount| {
                    formatter
                        .render_long(amount, keep_fraction, currency, None)
                        .with_context(|| format!("Cannot render amount '{amount}'"))
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::tests::run;
    use crate::config::CliConfig;

    #[test]
    fn test_long_form() {
        let config = CliConfig::default();
        let out = run(&["price", "133", "-l", "ua"], &config).unwrap();
        assert_eq!(out[0]["output"], "сто тридцять три гривні 00 копійок");

        let out = run(&["price", "133", "-l", "ua", "--no-fraction"], &config).unwrap();
        assert_eq!(out[0]["output"], "сто тридцять три гривні");
    }

    #[test]
    fn test_config_defaults() {
        let mut config = CliConfig::default();
        config.price.default_language = "ua".to_string();
        config.price.short_label = "руб.".to_string();

        let out = run(&["price", "1000000,12"], &config).unwrap();
        assert_eq!(out[0]["output"], "один мильйон гривень 12 копійок");

        let out = run(&["price", "301,21", "--short", "-l", "ru"], &config).unwrap();
        assert_eq!(out[0]["output"], "триста один руб. 21 коп.");
    }

    #[test]
    fn test_short_form_with_label() {
        let out = run(
            &["price", "515,21", "--no-fraction", "--short", "руб."],
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(out[0]["output"], "пятьсот пятнадцать руб.");
    }

    #[test]
    fn test_currency_flag() {
        let out = run(
            &["price", "123000,55", "--currency", "uah", "-l", "ru"],
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(out[0]["output"], "сто двадцать три тысячи гривен 55 копеек");
    }

    #[test]
    fn test_unknown_language_fails() {
        let err = run(&["price", "1", "-l", "xx"], &CliConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("no number localization registered for 'xx'"));
    }

    #[test]
    fn test_bad_amount_fails() {
        let err = run(&["price", "12abc", "-l", "ru"], &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Cannot render amount '12abc'"));
    }
}
