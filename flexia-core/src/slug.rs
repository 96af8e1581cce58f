//! URL slugs and identifier case conversion
//!
//! Slugs are built on top of Latin transliteration, so Cyrillic input
//! produces readable ASCII slugs instead of being dropped.

use crate::transliteration::{transliterate, Direction};
use regex::Regex;
use std::sync::OnceLock;

/// Separator used by [`slug`]
pub const DEFAULT_SEPARATOR: char = '-';

/// Returned when a slug would otherwise be empty
pub const EMPTY_SLUG: &str = "n-a";

static NON_WORD_RUN: OnceLock<Regex> = OnceLock::new();
static NON_ASCII_RUN: OnceLock<Regex> = OnceLock::new();

fn non_word_run() -> &'static Regex {
    NON_WORD_RUN.get_or_init(|| Regex::new(r"[^\p{L}\d\s]+").expect("valid slug pattern"))
}

fn non_ascii_run() -> &'static Regex {
    NON_ASCII_RUN.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid slug pattern"))
}

/// Build a URL-safe slug from `text`, joining words with `separator`
///
/// Returns [`EMPTY_SLUG`] when nothing usable is left.
///
/// # Example
///
/// ```rust
/// use flexia_core::slugify;
///
/// assert_eq!(slugify("Hello world!", '-'), "hello-world");
/// assert_eq!(slugify("Привет хабр!", '-'), "privet-habr");
/// assert_eq!(slugify("", '-'), "n-a");
/// ```
pub fn slugify(text: &str, separator: char) -> String {
    let mut buf = [0u8; 4];
    let sep: &str = separator.encode_utf8(&mut buf);

    let latin = transliterate(text, Direction::ToLatin);
    let words = non_word_run().replace_all(&latin, sep);
    let trimmed = words.trim_matches(separator).to_ascii_lowercase();
    let ascii = non_ascii_run().replace_all(&trimmed, sep);
    let slug = collapse_separator(&ascii, separator);

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// [`slugify`] with the default `-` separator
pub fn slug(text: &str) -> String {
    slugify(text, DEFAULT_SEPARATOR)
}

/// Convert `text` into a snake_case identifier
///
/// Lower-to-upper case transitions count as word breaks, so
/// `HelloWorld` becomes `hello_world`. A run of capitals is one word.
///
/// ```rust
/// use flexia_core::underscore;
///
/// assert_eq!(underscore("ThisISText"), "this_istext");
/// ```
pub fn underscore(text: &str) -> String {
    slugify(&split_case_transitions(text), '_')
}

/// Convert `text` into a PascalCase identifier
///
/// `_`, `/` and `-` act as word breaks alongside whitespace.
///
/// ```rust
/// use flexia_core::camelize;
///
/// assert_eq!(camelize("hello_ big   world"), "HelloBigWorld");
/// ```
pub fn camelize(text: &str) -> String {
    text.replace(&['_', '/', '-'][..], " ")
        .split_whitespace()
        .map(upper_first)
        .collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_case_transitions(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev_lower = false;
    for ch in text.chars() {
        if prev_lower && ch.is_uppercase() {
            out.push('_');
        }
        prev_lower = ch.is_lowercase();
        out.push(ch);
    }
    out
}

fn collapse_separator(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_sep = false;
    for ch in text.chars() {
        let is_sep = ch == separator;
        if !(is_sep && last_was_sep) {
            out.push(ch);
        }
        last_was_sep = is_sep;
    }
    out
}
