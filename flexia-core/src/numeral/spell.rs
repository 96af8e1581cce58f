//! Spelling an amount with a locale's tables

use super::amount::Amount;
use crate::error::{FlexiaError, Result};
use crate::locale::{Gender, NumberLocale, WordForms};
use regex::Regex;
use std::sync::OnceLock;

static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

/// Unit names in rendering order: `[minor, major, thousand, million, ...]`
pub(crate) struct Units<'a> {
    pub minor: &'a WordForms,
    pub major: &'a WordForms,
    pub segments: &'a [WordForms],
}

impl<'a> Units<'a> {
    /// Descriptor for a group `offset` positions from the decimal point,
    /// counting the major unit as 1
    fn at(&self, offset: usize) -> Option<&'a WordForms> {
        match offset {
            0 => Some(self.minor),
            1 => Some(self.major),
            n => self.segments.get(n - 2),
        }
    }
}

/// Spell `amount` in words
pub(crate) fn spell(
    amount: &Amount,
    locale: &NumberLocale,
    units: &Units<'_>,
    keep_fraction: bool,
) -> Result<String> {
    let mut words: Vec<&str> = Vec::new();

    if amount.is_whole_zero() {
        words.push(&locale.zero);
        words.push(units.major.select(0));
    } else {
        let groups = amount.groups();
        if groups.len() > locale.max_groups() {
            return Err(FlexiaError::invalid(format!(
                "amount {} has {} digit groups; locale '{}' names at most {}",
                amount.integer_digits(),
                groups.len(),
                locale.code,
                locale.max_groups()
            )));
        }

        let mut offset = groups.len();
        for group in groups {
            // Only the major unit is named for an all-zero group
            if group == 0 && offset > 1 {
                offset -= 1;
                continue;
            }

            let forms = units.at(offset).ok_or_else(|| {
                FlexiaError::invalid(format!("no unit name for digit group {offset}"))
            })?;
            spell_group(group, forms.gender, locale, &mut words);
            words.push(forms.select(group));
            offset -= 1;
        }
    }

    let fraction = amount.fraction_digits();
    if keep_fraction {
        words.push(fraction);
        words.push(units.minor.select(amount.fraction_value()));
    }

    let joined = words
        .into_iter()
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let whitespace = WHITESPACE_RUN
        .get_or_init(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"));
    Ok(whitespace.replace_all(&joined, " ").into_owned())
}

/// Words for a group value of 0-999, without the unit name
fn spell_group<'a>(
    group: u64,
    gender: Gender,
    locale: &'a NumberLocale,
    words: &mut Vec<&'a str>,
) {
    let hundreds = (group / 100) as usize;
    let last_two = (group % 100) as usize;
    let tens = last_two / 10;
    let units = last_two % 10;

    if hundreds > 0 {
        words.push(&locale.hundreds[hundreds]);
    }

    if last_two > 20 {
        words.push(&locale.tens[tens]);
        words.extend(locale.units.get(gender, units));
    } else if last_two > 9 {
        // teens[1] is ten, teens[11] is twenty
        words.push(&locale.teens[last_two - 9]);
    } else if last_two > 0 {
        words.extend(locale.units.get(gender, units));
    }
}
