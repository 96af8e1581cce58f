//! Typed locale records
//!
//! A [`NumberLocale`] carries everything needed to spell a number in one
//! language. Currencies hang off the locale because their word forms are
//! language-specific too.

use crate::numeral::morphology::Plurality;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grammatical gender of a counted noun
///
/// Selects between `один`/`одна`, `два`/`две` and so on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

/// The three agreement forms of a counted noun plus its gender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordForms {
    /// Form after 1, 21, 31... (`тысяча`)
    pub one: String,
    /// Form after 2-4, 22-24... (`тысячи`)
    pub few: String,
    /// Form after 0, 5-20, 25-30... (`тысяч`)
    pub many: String,
    pub gender: Gender,
}

impl WordForms {
    pub fn new(
        one: impl Into<String>,
        few: impl Into<String>,
        many: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            one: one.into(),
            few: few.into(),
            many: many.into(),
            gender,
        }
    }

    /// Same label for every form, as used for abbreviations like `коп.`
    pub fn invariant(label: impl Into<String>, gender: Gender) -> Self {
        let label = label.into();
        Self::new(label.clone(), label.clone(), label, gender)
    }

    /// Form agreeing with `n`
    pub fn select(&self, n: u64) -> &str {
        match Plurality::of(n) {
            Plurality::One => &self.one,
            Plurality::Few => &self.few,
            Plurality::Many => &self.many,
        }
    }
}

/// Minor and major unit of a currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyForms {
    /// Fractional unit (`копейка`)
    pub minor: WordForms,
    /// Whole unit (`гривна`, `рубль`)
    pub major: WordForms,
}

impl CurrencyForms {
    pub fn new(minor: WordForms, major: WordForms) -> Self {
        Self { minor, major }
    }
}

/// Unit words for both genders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderedUnits {
    pub masculine: [String; 10],
    pub feminine: [String; 10],
}

impl GenderedUnits {
    /// Word for `digit` in the given gender; empty for zero, `None` past 9
    pub fn get(&self, gender: Gender, digit: usize) -> Option<&str> {
        let table = match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
        };
        table.get(digit).map(String::as_str)
    }
}

/// Everything needed to spell amounts in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    /// Language code (`ru`, `ua`)
    pub code: String,
    /// Word for a zero integer part
    pub zero: String,
    /// `hundreds[d]` spells `d * 100`
    pub hundreds: [String; 10],
    /// `teens[n - 9]` spells `n` for 10..=20; index 0 is unused
    pub teens: [String; 12],
    /// `tens[d]` spells `d * 10`
    pub tens: [String; 10],
    pub units: GenderedUnits,
    /// Thousand, million, ... least significant first
    pub segments: Vec<WordForms>,
    /// Currencies by lower-case code
    #[serde(default)]
    pub currencies: BTreeMap<String, CurrencyForms>,
}

impl NumberLocale {
    /// Forms of `currency`, if the locale knows it
    pub fn currency(&self, currency: &str) -> Option<&CurrencyForms> {
        self.currencies.get(currency)
    }

    /// Largest number of three-digit groups an amount may have
    pub fn max_groups(&self) -> usize {
        self.segments.len() + 1
    }
}

pub(crate) fn words<const N: usize>(list: [&str; N]) -> [String; N] {
    list.map(str::to_string)
}
