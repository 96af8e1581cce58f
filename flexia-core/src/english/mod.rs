//! English pluralization and singularization
//!
//! Every word goes through three tiers, in this order:
//!
//! 1. irregular words, matched as a whole-word suffix (`woman` is not
//!    `wo` + `man`, but `sales man` is `sales ` + `man`);
//! 2. uninflected words, matched against the whole word;
//! 3. ordered suffix rules, first match wins.
//!
//! A word that reaches the end of the rule list unmatched is returned
//! unchanged. The plural table ends with a catch-all rule appending `s`,
//! so that only happens when singularizing.

mod rules;
mod words;

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A compiled suffix rule
#[derive(Debug)]
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

/// How a word was resolved, in tier order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Replaced through the irregular word table
    Irregular,
    /// Listed as having one form for both numbers
    Uninflected,
    /// Rewritten by the suffix rule at this index
    Rule(usize),
    /// Nothing matched
    Unchanged,
}

/// One direction of inflection: irregular table, uninflected set, rules
#[derive(Debug)]
struct RuleSet {
    irregular: HashMap<&'static str, &'static str>,
    irregular_suffix: Regex,
    uninflected: Regex,
    rules: Vec<Rule>,
}

impl RuleSet {
    fn compile(
        irregular: &'static [(&'static str, &'static str)],
        uninflected: &[&str],
        rules: &'static [(&'static str, &'static str)],
    ) -> Self {
        let keys: Vec<&str> = irregular.iter().map(|(from, _)| *from).collect();
        let irregular_suffix = Regex::new(&format!(r"(?i)^(.*)\b({})$", keys.join("|")))
            .expect("built-in irregular table must compile");
        let uninflected = Regex::new(&format!("(?i)^(?:{})$", uninflected.join("|")))
            .expect("built-in uninflected table must compile");
        let rules = rules
            .iter()
            .map(|(pattern, replacement)| Rule {
                pattern: Regex::new(pattern).expect("built-in suffix rule must compile"),
                replacement: *replacement,
            })
            .collect();

        Self {
            irregular: irregular.iter().copied().collect(),
            irregular_suffix,
            uninflected,
            rules,
        }
    }

    fn apply(&self, word: &str) -> (String, Resolution) {
        if let Some(inflected) = self.irregular_form(word) {
            return (inflected, Resolution::Irregular);
        }

        if self.uninflected.is_match(word) {
            return (word.to_string(), Resolution::Uninflected);
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.pattern.is_match(word) {
                let inflected = rule.pattern.replace(word, rule.replacement);
                return (inflected.into_owned(), Resolution::Rule(index));
            }
        }

        (word.to_string(), Resolution::Unchanged)
    }

    /// The matched suffix keeps its first character as typed; the rest of
    /// the replacement comes from the table in lower case.
    fn irregular_form(&self, word: &str) -> Option<String> {
        let captures = self.irregular_suffix.captures(word)?;
        let prefix = captures.get(1).map_or("", |m| m.as_str());
        let suffix = captures.get(2)?.as_str();

        let replacement = self.irregular.get(suffix.to_lowercase().as_str())?;
        let first = suffix.chars().next()?;
        let rest: String = replacement.chars().skip(1).collect();

        Some(format!("{prefix}{first}{rest}"))
    }
}

/// English inflection engine holding both compiled directions
#[derive(Debug)]
pub struct EnglishInflector {
    plural: RuleSet,
    singular: RuleSet,
}

static SHARED: OnceLock<EnglishInflector> = OnceLock::new();

impl EnglishInflector {
    /// Compile the built-in tables
    pub fn new() -> Self {
        Self {
            plural: RuleSet::compile(
                words::IRREGULAR_PLURALS,
                &words::uninflected_plural(),
                rules::PLURAL_RULES,
            ),
            singular: RuleSet::compile(
                words::IRREGULAR_SINGULARS,
                &words::uninflected_singular(),
                rules::SINGULAR_RULES,
            ),
        }
    }

    /// Process-wide instance, compiled on first use
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::new)
    }

    /// Plural form of `word`
    pub fn pluralize(&self, word: &str) -> String {
        self.pluralize_explained(word).0
    }

    /// Singular form of `word`, or `word` itself when no rule applies
    pub fn singularize(&self, word: &str) -> String {
        self.singularize_explained(word).0
    }

    /// Plural form of `word` together with the tier that produced it
    pub fn pluralize_explained(&self, word: &str) -> (String, Resolution) {
        let (plural, resolution) = self.plural.apply(word);
        log::debug!("pluralize {word:?} -> {plural:?} via {resolution:?}");
        (plural, resolution)
    }

    /// Singular form of `word` together with the tier that produced it
    pub fn singularize_explained(&self, word: &str) -> (String, Resolution) {
        let (singular, resolution) = self.singular.apply(word);
        log::debug!("singularize {word:?} -> {singular:?} via {resolution:?}");
        (singular, resolution)
    }
}

impl Default for EnglishInflector {
    fn default() -> Self {
        Self::new()
    }
}

/// Plural form of an English `word`
///
/// ```rust
/// use flexia_core::pluralize;
///
/// assert_eq!(pluralize("winner"), "winners");
/// assert_eq!(pluralize("man"), "men");
/// assert_eq!(pluralize("people"), "people");
/// ```
pub fn pluralize(word: &str) -> String {
    EnglishInflector::shared().pluralize(word)
}

/// Singular form of an English `word`
///
/// ```rust
/// use flexia_core::singularize;
///
/// assert_eq!(singularize("winners"), "winner");
/// assert_eq!(singularize("people"), "person");
/// ```
pub fn singularize(word: &str) -> String {
    EnglishInflector::shared().singularize(word)
}
