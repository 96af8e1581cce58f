//! Error types
//!
//! Transliteration and English inflection never fail; only the numeric
//! renderer and the locale registry produce errors.

use thiserror::Error;

/// Errors returned by `flexia-core`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlexiaError {
    /// No locale (or no currency within a locale) is registered for the request
    #[error("no number localization registered for '{}'", locale_key(.language, .currency.as_deref()))]
    Configuration {
        /// The requested language code
        language: String,
        /// The requested currency code, when the lookup involved one
        currency: Option<String>,
    },

    /// Malformed input, such as a non-numeric amount
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },
}

impl FlexiaError {
    pub(crate) fn missing_language(language: &str) -> Self {
        FlexiaError::Configuration {
            language: language.to_string(),
            currency: None,
        }
    }

    pub(crate) fn missing_currency(language: &str, currency: &str) -> Self {
        FlexiaError::Configuration {
            language: language.to_string(),
            currency: Some(currency.to_string()),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        FlexiaError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

fn locale_key(language: &str, currency: Option<&str>) -> String {
    match currency {
        Some(currency) => format!("{language}/{currency}"),
        None => language.to_string(),
    }
}

/// Result type for fallible `flexia-core` operations
pub type Result<T> = std::result::Result<T, FlexiaError>;
