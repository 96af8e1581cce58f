//! Cyrillic/Latin transliteration
//!
//! Transliteration is a literal substitution pass over an ordered table
//! followed by a fixed sequence of orthographic cleanup passes. The same
//! cleanup runs in both directions.

mod cleanup;
mod table;

use serde::{Deserialize, Serialize};

pub(crate) use table::TRANSLIT_TABLE;

/// Target script of a transliteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Cyrillic to Latin
    #[default]
    #[serde(alias = "latin", alias = "en")]
    ToLatin,
    /// Latin to Cyrillic
    #[serde(alias = "cyrillic", alias = "ru")]
    ToCyrillic,
}

/// Transliterate `text` in the given direction
///
/// # Example
///
/// ```rust
/// use flexia_core::{transliterate, Direction};
///
/// assert_eq!(transliterate("Привет люди!", Direction::ToLatin), "Privet l'udi!");
/// assert_eq!(transliterate("Хороший", Direction::ToLatin), "Horoshij");
/// ```
pub fn transliterate(text: &str, direction: Direction) -> String {
    let substituted = TRANSLIT_TABLE
        .iter()
        .fold(text.to_string(), |current, (cyrillic, latin)| {
            let (from, to) = match direction {
                Direction::ToLatin => (cyrillic, latin),
                Direction::ToCyrillic => (latin, cyrillic),
            };
            if current.contains(from) {
                current.replace(from, to)
            } else {
                current
            }
        });

    cleanup::cleanup(substituted)
}
