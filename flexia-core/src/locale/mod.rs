//! Number localization registry
//!
//! Holds the per-language tables used to spell amounts. The built-in
//! registry knows Russian (`ru`) and Ukrainian (`ua`), each with the `uah`
//! and `rur` currencies. Further languages and currencies can be
//! registered on an owned copy.

mod builtin;
mod types;

pub use types::{CurrencyForms, Gender, GenderedUnits, NumberLocale, WordForms};

use crate::error::{FlexiaError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

static BUILTIN: OnceLock<Arc<LocaleRegistry>> = OnceLock::new();

/// Language tables keyed by lower-case code
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: BTreeMap<String, NumberLocale>,
    aliases: BTreeMap<String, String>,
}

impl LocaleRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared built-in registry, created on first access
    pub fn builtin() -> Arc<Self> {
        BUILTIN
            .get_or_init(|| Arc::new(Self::with_builtin()))
            .clone()
    }

    /// Owned copy of the built-in tables, ready to be extended
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register_locale(builtin::russian());
        registry.register_locale(builtin::ukrainian());
        registry.add_alias("russian", "ru");
        registry.add_alias("uk", "ua");
        registry.add_alias("ukrainian", "ua");
        registry
    }

    /// Add or replace a language, returning the table it replaced
    pub fn register_locale(&mut self, mut locale: NumberLocale) -> Option<NumberLocale> {
        locale.code = locale.code.to_ascii_lowercase();
        log::debug!("registering number locale '{}'", locale.code);
        self.locales.insert(locale.code.clone(), locale)
    }

    /// Add or replace a currency of an already registered language
    pub fn register_currency(
        &mut self,
        language: &str,
        currency: &str,
        forms: CurrencyForms,
    ) -> Result<()> {
        let code = self.resolve(language);
        let locale = self
            .locales
            .get_mut(&code)
            .ok_or_else(|| FlexiaError::missing_language(language))?;
        locale
            .currencies
            .insert(currency.to_ascii_lowercase(), forms);
        Ok(())
    }

    /// Make `alias` resolve to the language registered as `language`
    pub fn add_alias(&mut self, alias: &str, language: &str) {
        self.aliases
            .insert(alias.to_ascii_lowercase(), language.to_ascii_lowercase());
    }

    /// Whether `language` (or an alias of it) is registered
    pub fn contains(&self, language: &str) -> bool {
        self.locales.contains_key(&self.resolve(language))
    }

    /// Tables for `language`
    pub fn locale(&self, language: &str) -> Result<&NumberLocale> {
        self.locales.get(&self.resolve(language)).ok_or_else(|| {
            log::warn!("no number localization for language '{language}'");
            FlexiaError::missing_language(language)
        })
    }

    /// Tables for `language` together with the forms of `currency`
    pub fn currency(&self, language: &str, currency: &str) -> Result<(&NumberLocale, &CurrencyForms)> {
        let locale = self.locale(language)?;
        let forms = locale
            .currency(&currency.to_ascii_lowercase())
            .ok_or_else(|| {
                log::warn!("no number localization for '{language}/{currency}'");
                FlexiaError::missing_currency(language, currency)
            })?;
        Ok((locale, forms))
    }

    /// Registered language codes, sorted
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Currency codes registered for `language`, sorted
    pub fn currencies(&self, language: &str) -> Result<Vec<&str>> {
        Ok(self
            .locale(language)?
            .currencies
            .keys()
            .map(String::as_str)
            .collect())
    }

    fn resolve(&self, language: &str) -> String {
        let code = language.to_ascii_lowercase();
        self.aliases.get(&code).cloned().unwrap_or(code)
    }
}
