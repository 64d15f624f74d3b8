//! Supported locale allow-list.
//!
//! # Responsibilities
//! - Hold the closed set of locale codes the site serves
//! - Designate exactly one default locale
//! - Resolve user input (path segments, switcher targets) to a canonical code
//!
//! # Design Decisions
//! - Built once from configuration, then shared read-only via `Arc`
//! - Codes are stored lowercase; lookups are case-insensitive
//! - Construction fails rather than silently repairing a bad allow-list

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::LocalizationConfig;

/// Two letters plus optional `-`/`_` subtags (`en`, `pt-BR`, `zh_Hant_TW`).
static LOCALE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]{2}(?:[-_][a-z0-9]{2,4})*$").unwrap());

/// True if `segment` has the shape of a language tag.
pub fn is_locale_tag(segment: &str) -> bool {
    LOCALE_TAG.is_match(segment)
}

/// Errors raised while building the allow-list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("at least one supported locale is required")]
    Empty,

    #[error("locale codes must not be blank")]
    Blank,

    #[error("locale '{0}' is not a language tag usable as a path segment")]
    InvalidCode(String),

    #[error("locale '{0}' is listed more than once")]
    Duplicate(String),

    #[error("default locale '{0}' is not in the supported list")]
    UnknownDefault(String),
}

/// The immutable set of locales the site recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales {
    codes: Vec<String>,
    default_index: usize,
}

impl SupportedLocales {
    /// Build the allow-list from a list of codes and a default.
    pub fn new<I, S>(codes: I, default_locale: &str) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for code in codes {
            let code = code.as_ref().trim().to_ascii_lowercase();
            if code.is_empty() {
                return Err(LocaleError::Blank);
            }
            if !is_locale_tag(&code) {
                return Err(LocaleError::InvalidCode(code));
            }
            if normalized.contains(&code) {
                return Err(LocaleError::Duplicate(code));
            }
            normalized.push(code);
        }

        if normalized.is_empty() {
            return Err(LocaleError::Empty);
        }

        let default_index = normalized
            .iter()
            .position(|c| c.eq_ignore_ascii_case(default_locale.trim()))
            .ok_or_else(|| LocaleError::UnknownDefault(default_locale.to_string()))?;

        Ok(Self {
            codes: normalized,
            default_index,
        })
    }

    /// Build the allow-list from the `[localization]` config section.
    pub fn from_config(config: &LocalizationConfig) -> Result<Self, LocaleError> {
        Self::new(&config.supported_locales, &config.default_locale)
    }

    /// Canonical code for `candidate`, or `None` if it is not supported.
    pub fn resolve(&self, candidate: &str) -> Option<&str> {
        self.codes
            .iter()
            .find(|c| c.eq_ignore_ascii_case(candidate))
            .map(String::as_str)
    }

    /// Canonical code for `candidate`, falling back to the default.
    pub fn resolve_or_default(&self, candidate: &str) -> &str {
        self.resolve(candidate).unwrap_or_else(|| self.default_locale())
    }

    pub fn default_locale(&self) -> &str {
        &self.codes[self.default_index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for SupportedLocales {
    /// `en`, `de`, `tr` with `en` as the default.
    fn default() -> Self {
        Self {
            codes: vec!["en".to_string(), "de".to_string(), "tr".to_string()],
            default_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let locales = SupportedLocales::default();
        assert_eq!(locales.resolve("DE"), Some("de"));
        assert_eq!(locales.resolve("Tr"), Some("tr"));
        assert_eq!(locales.resolve("fr"), None);
        assert_eq!(locales.resolve(""), None);
    }

    #[test]
    fn test_resolve_or_default() {
        let locales = SupportedLocales::new(["en", "de", "tr"], "de").unwrap();
        assert_eq!(locales.default_locale(), "de");
        assert_eq!(locales.resolve_or_default("fr"), "de");
        assert_eq!(locales.resolve_or_default("EN"), "en");
    }

    #[test]
    fn test_codes_are_normalized() {
        let locales = SupportedLocales::new([" EN ", "De"], "en").unwrap();
        assert_eq!(locales.iter().collect::<Vec<_>>(), vec!["en", "de"]);
        assert_eq!(locales.len(), 2);
    }

    #[test]
    fn test_invalid_allow_lists() {
        let empty: [&str; 0] = [];
        assert_eq!(SupportedLocales::new(empty, "en"), Err(LocaleError::Empty));
        assert_eq!(
            SupportedLocales::new(["en", " "], "en"),
            Err(LocaleError::Blank)
        );
        assert_eq!(
            SupportedLocales::new(["en", "EN"], "en"),
            Err(LocaleError::Duplicate("en".to_string()))
        );
        assert_eq!(
            SupportedLocales::new(["en", "de"], "fr"),
            Err(LocaleError::UnknownDefault("fr".to_string()))
        );
    }

    #[test]
    fn test_codes_must_be_single_segments() {
        for bad in ["en/us", "en?x", "en#top", "e n", "english"] {
            assert_eq!(
                SupportedLocales::new([bad, "de"], "de"),
                Err(LocaleError::InvalidCode(bad.to_string())),
                "{bad}"
            );
        }
        assert!(SupportedLocales::new(["pt-BR", "zh_hant"], "pt-br").is_ok());
    }
}
