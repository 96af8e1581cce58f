//! Configuration module

use crate::error::{CliError, CliResult};
use anyhow::Context;
use flexia_core::{
    BUILTIN_DEFAULT_LANGUAGE, DEFAULT_CURRENCY, DEFAULT_SEPARATOR, DEFAULT_SHORT_LABEL,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Price rendering configuration
    #[serde(default)]
    pub price: PriceConfig,

    /// Slug configuration
    #[serde(default)]
    pub slug: SlugConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.slug.separator.is_ascii_alphanumeric() {
            return Err(CliError::ConfigError(format!(
                "slug separator '{}' must not be a letter or digit",
                self.slug.separator
            ))
            .into());
        }
        Ok(())
    }
}

/// Price-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PriceConfig {
    /// Language used when neither `--language` nor `FLEXIA_LANGUAGE` is set
    pub default_language: String,

    /// Currency code for the long form
    pub default_currency: String,

    /// Major unit label for the short form
    pub short_label: String,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            default_language: BUILTIN_DEFAULT_LANGUAGE.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            short_label: DEFAULT_SHORT_LABEL.to_string(),
        }
    }
}

/// Slug-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SlugConfig {
    /// Word separator
    pub separator: char,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}
