//! Monetary amounts in words
//!
//! Amounts are split into three-digit groups and each group is spelled with
//! the locale's hundreds/teens/tens tables, the unit word taking the gender
//! of the noun that follows (`одна тысяча`, `один миллион`). Nouns agree
//! with their number through [`Plurality`].
//!
//! Callers either hold a [`PriceFormatter`] with its own registry and
//! default language, or use the free functions, which read the built-in
//! registry and the calling thread's default language.

mod amount;
pub(crate) mod morphology;
mod spell;

pub use amount::{Amount, ToAmount};
pub use morphology::{inflect, Plurality};

use crate::error::{FlexiaError, Result};
use crate::locale::{Gender, LocaleRegistry, WordForms};
use spell::Units;
use std::cell::RefCell;
use std::sync::Arc;

/// Language used when nothing else was chosen
pub const BUILTIN_DEFAULT_LANGUAGE: &str = "ru";

/// Currency of [`render_price_long`] when the caller has no preference
pub const DEFAULT_CURRENCY: &str = "uah";

/// Major unit label of [`render_price_short`] when the caller has no preference
pub const DEFAULT_SHORT_LABEL: &str = "грн.";

/// Minor unit label used by the short form
pub const SHORT_MINOR_LABEL: &str = "коп.";

thread_local! {
    static DEFAULT_LANGUAGE: RefCell<String> = RefCell::new(BUILTIN_DEFAULT_LANGUAGE.to_string());
}

/// Set the language used by this thread's renderer calls that pass `None`
///
/// The setting is per thread. Code that renders on several threads, or
/// wants a fixed language regardless of caller state, should pass the
/// language explicitly or hold a [`PriceFormatter`].
pub fn set_default_language(code: &str) {
    log::debug!("default language set to '{code}'");
    DEFAULT_LANGUAGE.with(|language| *language.borrow_mut() = code.to_string());
}

/// This thread's default language
pub fn default_language() -> String {
    DEFAULT_LANGUAGE.with(|language| language.borrow().clone())
}

/// Amount with its currency spelled out in full
///
/// # Example
///
/// ```rust
/// use flexia_core::render_price_long;
///
/// let words = render_price_long("133", true, "uah", Some("ua")).unwrap();
/// assert_eq!(words, "сто тридцять три гривні 00 копійок");
/// ```
pub fn render_price_long(
    amount: impl ToAmount,
    keep_fraction: bool,
    currency: &str,
    language: Option<&str>,
) -> Result<String> {
    let language = resolve_language(language);
    render_long_with(
        &LocaleRegistry::builtin(),
        amount,
        keep_fraction,
        currency,
        &language,
    )
}

/// Amount spelled out with abbreviated unit labels
///
/// ```rust
/// use flexia_core::render_price_short;
///
/// let words = render_price_short("301,21", true, "руб.", Some("ru")).unwrap();
/// assert_eq!(words, "триста один руб. 21 коп.");
/// ```
pub fn render_price_short(
    amount: impl ToAmount,
    keep_fraction: bool,
    currency_label: &str,
    language: Option<&str>,
) -> Result<String> {
    let language = resolve_language(language);
    render_short_with(
        &LocaleRegistry::builtin(),
        amount,
        keep_fraction,
        currency_label,
        &language,
    )
}

fn resolve_language(language: Option<&str>) -> String {
    language.map_or_else(default_language, str::to_string)
}

fn render_long_with(
    registry: &LocaleRegistry,
    amount: impl ToAmount,
    keep_fraction: bool,
    currency: &str,
    language: &str,
) -> Result<String> {
    let (locale, forms) = registry.currency(language, currency)?;
    let amount = amount.to_amount()?;
    log::debug!("rendering {amount} {currency} in '{}'", locale.code);

    let units = Units {
        minor: &forms.minor,
        major: &forms.major,
        segments: &locale.segments,
    };
    spell::spell(&amount, locale, &units, keep_fraction)
}

fn render_short_with(
    registry: &LocaleRegistry,
    amount: impl ToAmount,
    keep_fraction: bool,
    currency_label: &str,
    language: &str,
) -> Result<String> {
    let locale = registry.locale(language)?;
    let amount = amount.to_amount()?;
    log::debug!("rendering {amount} {currency_label} in '{}'", locale.code);

    let minor = WordForms::invariant(SHORT_MINOR_LABEL, Gender::Feminine);
    let major = WordForms::invariant(currency_label, Gender::Masculine);
    let units = Units {
        minor: &minor,
        major: &major,
        segments: &locale.segments,
    };
    spell::spell(&amount, locale, &units, keep_fraction)
}

/// Renders amounts against one registry with its own default language
#[derive(Debug, Clone)]
pub struct PriceFormatter {
    registry: Arc<LocaleRegistry>,
    language: String,
}

impl PriceFormatter {
    /// Built-in registry, Russian by default
    pub fn new() -> Self {
        Self {
            registry: LocaleRegistry::builtin(),
            language: BUILTIN_DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Create a builder
    pub fn builder() -> PriceFormatterBuilder {
        PriceFormatterBuilder::default()
    }

    /// Language used when a call passes `None`
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The registry this formatter reads
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// See [`render_price_long`]
    pub fn render_long(
        &self,
        amount: impl ToAmount,
        keep_fraction: bool,
        currency: &str,
        language: Option<&str>,
    ) -> Result<String> {
        render_long_with(
            &self.registry,
            amount,
            keep_fraction,
            currency,
            language.unwrap_or(&self.language),
        )
    }

    /// See [`render_price_short`]
    pub fn render_short(
        &self,
        amount: impl ToAmount,
        keep_fraction: bool,
        currency_label: &str,
        language: Option<&str>,
    ) -> Result<String> {
        render_short_with(
            &self.registry,
            amount,
            keep_fraction,
            currency_label,
            language.unwrap_or(&self.language),
        )
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`PriceFormatter`]
#[derive(Debug, Default)]
pub struct PriceFormatterBuilder {
    registry: Option<Arc<LocaleRegistry>>,
    language: Option<String>,
}

impl PriceFormatterBuilder {
    /// Set the default language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Use a custom registry instead of the built-in one
    pub fn registry(mut self, registry: impl Into<Arc<LocaleRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    /// Build the formatter
    ///
    /// Fails with [`FlexiaError::Configuration`] when the default language
    /// is not in the registry.
    pub fn build(self) -> Result<PriceFormatter> {
        let registry = self.registry.unwrap_or_else(LocaleRegistry::builtin);
        let language = self
            .language
            .unwrap_or_else(|| BUILTIN_DEFAULT_LANGUAGE.to_string());

        if !registry.contains(&language) {
            return Err(FlexiaError::missing_language(&language));
        }

        Ok(PriceFormatter { registry, language })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::CurrencyForms;

    #[test]
    fn test_long_ukrainian() {
        assert_eq!(
            render_price_long("133", true, "uah", Some("ua")).unwrap(),
            "сто тридцять три гривні 00 копійок"
        );
        assert_eq!(
            render_price_long("133", false, "uah", Some("ua")).unwrap(),
            "сто тридцять три гривні"
        );
        assert_eq!(
            render_price_long("1000000,12", true, "uah", Some("ua")).unwrap(),
            "один мильйон гривень 12 копійок"
        );
    }

    #[test]
    fn test_long_russian() {
        assert_eq!(
            render_price_long("123000,55", true, "uah", Some("ru")).unwrap(),
            "сто двадцать три тысячи гривен 55 копеек"
        );
        assert_eq!(
            render_price_long("2001", true, "rur", Some("ru")).unwrap(),
            "две тысячи один рубль 00 копеек"
        );
    }

    #[test]
    fn test_short_uses_default_language() {
        assert_eq!(default_language(), BUILTIN_DEFAULT_LANGUAGE);
        assert_eq!(
            render_price_short("301,21", true, "руб.", None).unwrap(),
            "триста один руб. 21 коп."
        );
        assert_eq!(
            render_price_short("515,21", false, "руб.", None).unwrap(),
            "пятьсот пятнадцать руб."
        );
    }

    #[test]
    fn test_default_language_is_per_thread() {
        set_default_language("ua");
        assert_eq!(default_language(), "ua");
        assert_eq!(
            render_price_long("2", false, DEFAULT_CURRENCY, None).unwrap(),
            "дві гривні"
        );

        let other = std::thread::spawn(default_language).join().unwrap();
        assert_eq!(other, BUILTIN_DEFAULT_LANGUAGE);

        set_default_language(BUILTIN_DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(
            render_price_long("0", true, "uah", Some("ru")).unwrap(),
            "ноль гривен 00 копеек"
        );
        assert_eq!(
            render_price_long("0,01", true, "uah", Some("ua")).unwrap(),
            "нуль гривень 01 копійка"
        );
    }

    #[test]
    fn test_missing_locale_is_configuration_error() {
        let err = render_price_long("1", true, "usd", Some("ru")).unwrap_err();
        assert_eq!(
            err,
            FlexiaError::Configuration {
                language: "ru".to_string(),
                currency: Some("usd".to_string()),
            }
        );
        assert!(matches!(
            render_price_short("1", true, "$", Some("en")),
            Err(FlexiaError::Configuration { .. })
        ));
    }

    #[test]
    fn test_invalid_amount() {
        assert!(matches!(
            render_price_long("12abc", true, "uah", Some("ru")),
            Err(FlexiaError::InvalidArgument { .. })
        ));
        assert!(matches!(
            render_price_long("1000000000000000", true, "uah", Some("ru")),
            Err(FlexiaError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_amount_at_group_limit() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.locale("ru").unwrap().max_groups(), 5);

        assert_eq!(
            render_price_long("999000000000000", false, "uah", Some("ru")).unwrap(),
            "девятьсот девяносто девять триллионов гривен"
        );
        let err = render_price_long("1000000000000000", false, "uah", Some("ru")).unwrap_err();
        assert!(err.to_string().contains("names at most 5"));
    }

    #[test]
    fn test_numeric_amounts() {
        assert_eq!(
            render_price_long(42u32, true, "uah", Some("ru")).unwrap(),
            "сорок две гривни 00 копеек"
        );
        assert_eq!(
            render_price_long(1.5f64, true, "rur", Some("ru")).unwrap(),
            "один рубль 50 копеек"
        );
    }

    #[test]
    fn test_formatter_builder() {
        let formatter = PriceFormatter::builder().language("ua").build().unwrap();
        assert_eq!(formatter.language(), "ua");
        assert_eq!(
            formatter.render_short("5", false, "грн.", None).unwrap(),
            "п'ять грн."
        );
        assert_eq!(
            formatter.render_long("5", false, "uah", Some("ru")).unwrap(),
            "пять гривен"
        );
    }

    #[test]
    fn test_formatter_rejects_unknown_language() {
        assert!(matches!(
            PriceFormatter::builder().language("xx").build(),
            Err(FlexiaError::Configuration { .. })
        ));
    }

    #[test]
    fn test_formatter_with_custom_registry() {
        let mut registry = LocaleRegistry::with_builtin();
        registry
            .register_currency(
                "ru",
                "usd",
                CurrencyForms::new(
                    WordForms::new("цент", "цента", "центов", Gender::Masculine),
                    WordForms::new("доллар", "доллара", "долларов", Gender::Masculine),
                ),
            )
            .unwrap();

        let formatter = PriceFormatter::builder()
            .registry(registry)
            .language("ru")
            .build()
            .unwrap();
        assert_eq!(
            formatter.render_long("21,03", true, "usd", None).unwrap(),
            "двадцать один доллар 03 цента"
        );
    }
}
