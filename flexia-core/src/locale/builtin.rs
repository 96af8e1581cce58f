//! Built-in Russian and Ukrainian tables

use super::types::{words, CurrencyForms, Gender, GenderedUnits, NumberLocale, WordForms};
use std::collections::BTreeMap;

pub(crate) fn russian() -> NumberLocale {
    let mut currencies = BTreeMap::new();
    currencies.insert(
        "uah".to_string(),
        CurrencyForms::new(
            WordForms::new("копейка", "копейки", "копеек", Gender::Feminine),
            WordForms::new("гривна", "гривни", "гривен", Gender::Feminine),
        ),
    );
    currencies.insert(
        "rur".to_string(),
        CurrencyForms::new(
            WordForms::new("копейка", "копейки", "копеек", Gender::Feminine),
            WordForms::new("рубль", "рубля", "рублей", Gender::Masculine),
        ),
    );

    NumberLocale {
        code: "ru".to_string(),
        zero: "ноль".to_string(),
        hundreds: words([
            "",
            "сто",
            "двести",
            "триста",
            "четыреста",
            "пятьсот",
            "шестьсот",
            "семьсот",
            "восемьсот",
            "девятьсот",
        ]),
        teens: words([
            "",
            "десять",
            "одиннадцать",
            "двенадцать",
            "тринадцать",
            "четырнадцать",
            "пятнадцать",
            "шестнадцать",
            "семнадцать",
            "восемнадцать",
            "девятнадцать",
            "двадцать",
        ]),
        tens: words([
            "",
            "десять",
            "двадцать",
            "тридцать",
            "сорок",
            "пятьдесят",
            "шестьдесят",
            "семьдесят",
            "восемьдесят",
            "девяносто",
        ]),
        units: GenderedUnits {
            masculine: words([
                "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
            ]),
            feminine: words([
                "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
            ]),
        },
        segments: vec![
            WordForms::new("тысяча", "тысячи", "тысяч", Gender::Feminine),
            WordForms::new("миллион", "миллиона", "миллионов", Gender::Masculine),
            WordForms::new("миллиард", "миллиарда", "миллиардов", Gender::Masculine),
            WordForms::new("триллион", "триллиона", "триллионов", Gender::Masculine),
        ],
        currencies,
    }
}

pub(crate) fn ukrainian() -> NumberLocale {
    let mut currencies = BTreeMap::new();
    currencies.insert(
        "uah".to_string(),
        CurrencyForms::new(
            WordForms::new("копійка", "копійки", "копійок", Gender::Feminine),
            WordForms::new("гривна", "гривні", "гривень", Gender::Feminine),
        ),
    );
    currencies.insert(
        "rur".to_string(),
        CurrencyForms::new(
            WordForms::new("копійка", "копійки", "копійок", Gender::Feminine),
            WordForms::new("рубль", "рубля", "рублів", Gender::Masculine),
        ),
    );

    NumberLocale {
        code: "ua".to_string(),
        zero: "нуль".to_string(),
        hundreds: words([
            "",
            "сто",
            "двісті",
            "триста",
            "чотириста",
            "п'ятсот",
            "шістсот",
            "сімсот",
            "вісімсот",
            "дев'ятьсот",
        ]),
        teens: words([
            "",
            "десять",
            "одинадцять",
            "дванадцять",
            "тринадцять",
            "чотирнадцять",
            "п'ятнадцять",
            "шістнадцять",
            "сімнадцять",
            "вісімнадцять",
            "дев'ятнадцять",
            "двадцять",
        ]),
        tens: words([
            "",
            "десять",
            "двадцять",
            "тридцять",
            "сорок",
            "п'ятьдесят",
            "шістдесят",
            "сімдесят",
            "вісімдесят",
            "дев'яносто",
        ]),
        units: GenderedUnits {
            masculine: words([
                "", "один", "два", "три", "чотири", "п'ять", "шість", "сім", "вісім", "дев'ять",
            ]),
            feminine: words([
                "", "одна", "дві", "три", "чотири", "п'ять", "шість", "сім", "вісім", "дев'ять",
            ]),
        },
        segments: vec![
            WordForms::new("тисяча", "тисячі", "тисяч", Gender::Feminine),
            WordForms::new("мильйон", "мильйона", "мильйонів", Gender::Masculine),
            WordForms::new("мильйард", "мильйарда", "мильйардів", Gender::Masculine),
            WordForms::new("триліон", "триліона", "триліонів", Gender::Masculine),
        ],
        currencies,
    }
}
