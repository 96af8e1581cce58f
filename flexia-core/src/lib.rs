//! Text inflection helpers for Cyrillic and English content
//!
//! This crate bundles the small string transformations a content site
//! needs around Russian and Ukrainian text:
//!
//! - **Transliteration** between Cyrillic and a Latin scheme, in both directions
//! - **Slugs** built on the Latin transliteration (`slug`, `underscore`, `camelize`)
//! - **English inflection**: rule-based `pluralize` and `singularize`
//! - **Amounts in words**: prices spelled out in Russian or Ukrainian with
//!   correct grammatical agreement
//!
//! # Example
//!
//! ```rust
//! use flexia_core::{pluralize, render_price_long, slug, transliterate, Direction};
//!
//! assert_eq!(transliterate("Щука", Direction::ToLatin), "Schuka");
//! assert_eq!(slug("Привет люди!"), "privet-l-udi");
//! assert_eq!(pluralize("child"), "children");
//!
//! let price = render_price_long("123000,55", true, "uah", Some("ru")).unwrap();
//! assert_eq!(price, "сто двадцать три тысячи гривен 55 копеек");
//! ```

pub mod english;
pub mod error;
pub mod locale;
pub mod numeral;
pub mod slug;
pub mod transliteration;

pub use english::{pluralize, singularize, EnglishInflector, Resolution};
pub use error::{FlexiaError, Result};
pub use locale::{CurrencyForms, Gender, GenderedUnits, LocaleRegistry, NumberLocale, WordForms};
pub use numeral::{
    default_language, inflect, render_price_long, render_price_short, set_default_language,
    Amount, Plurality, PriceFormatter, PriceFormatterBuilder, ToAmount, BUILTIN_DEFAULT_LANGUAGE,
    DEFAULT_CURRENCY, DEFAULT_SHORT_LABEL, SHORT_MINOR_LABEL,
};
pub use slug::{camelize, slug, slugify, underscore, DEFAULT_SEPARATOR, EMPTY_SLUG};
pub use transliteration::{transliterate, Direction};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        let _direction: Direction = Direction::default();
        let _formatter: PriceFormatter = PriceFormatter::default();
        let _registry = LocaleRegistry::builtin();
        assert_eq!(Plurality::of(21), Plurality::One);
        assert_eq!(inflect(3, "a", "b", "c"), "b");
    }
}
