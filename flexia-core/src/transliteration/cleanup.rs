//! Orthographic cleanup applied after substitution
//!
//! Each pass is a single regex rewrite over the whole string. Passes run
//! once, in table order; a later pass may see text produced by an earlier
//! one but no pass is repeated.

use regex::Regex;
use std::sync::OnceLock;

const CONSONANTS: &str = "qwrtpsdfghklzxcvbnmQWRTPSDFGHKLZXCVBNM";

/// A compiled cleanup pass
#[derive(Debug)]
pub(crate) struct CleanupPass {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl CleanupPass {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("built-in cleanup pattern must compile"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        let rewritten = self.pattern.replace_all(text, self.replacement);
        if rewritten != text {
            log::trace!("cleanup pass '{}' rewrote {:?}", self.name, text);
        }
        rewritten.into_owned()
    }
}

static PASSES: OnceLock<Vec<CleanupPass>> = OnceLock::new();

fn passes() -> &'static [CleanupPass] {
    PASSES.get_or_init(|| {
        vec![
            // "Mnje" -> "Mne"
            CleanupPass::new(
                "consonant-je",
                &format!("([{CONSONANTS}]+)[jJ]e"),
                "${1}e",
            ),
            // "ljudi" -> "l'udi"
            CleanupPass::new("consonant-j", &format!("([{CONSONANTS}]+)[jJ]"), "${1}'"),
            CleanupPass::new("vowel-kh", "([ eyuioaEYUIOA-]+)[Kk]h", "${1}h"),
            CleanupPass::new("leading-kh", "^kh", "h"),
            CleanupPass::new("leading-Kh", "^Kh", "H"),
        ]
    })
}

/// Run every cleanup pass over `text`
pub(crate) fn cleanup(text: String) -> String {
    passes()
        .iter()
        .fold(text, |current, pass| pass.apply(&current))
}
