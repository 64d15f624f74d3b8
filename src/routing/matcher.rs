//! Path segment matching logic.
//!
//! # Responsibilities
//! - Match a supported locale in the first path segment (case-insensitive)
//! - Recognize locale-shaped segments that are not supported (`fr`, `pt-BR`)
//!
//! # Design Decisions
//! - Matchers operate on a parsed `RequestPath`, never on raw strings
//! - Empty path = no match (the root has no locale)
//! - Locale shape is a fixed pattern: two letters plus optional subtags

use std::sync::Arc;

use crate::locale::{is_locale_tag, SupportedLocales};
use crate::routing::path::RequestPath;

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &RequestPath) -> bool;
}

/// Matches when the first segment is a supported locale.
#[derive(Debug, Clone)]
pub struct LocalePrefixMatcher {
    locales: Arc<SupportedLocales>,
}

impl LocalePrefixMatcher {
    pub fn new(locales: Arc<SupportedLocales>) -> Self {
        Self { locales }
    }

    /// Canonical code of the leading locale segment, if any.
    pub fn locale<'a>(&'a self, path: &RequestPath) -> Option<&'a str> {
        path.first_segment().and_then(|s| self.locales.resolve(s))
    }
}

impl Matcher for LocalePrefixMatcher {
    fn matches(&self, path: &RequestPath) -> bool {
        self.locale(path).is_some()
    }
}

/// Matches when the first segment looks like a BCP 47 language tag.
///
/// Says nothing about whether the locale is supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleTagMatcher;

impl LocaleTagMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for LocaleTagMatcher {
    fn matches(&self, path: &RequestPath) -> bool {
        path.first_segment()
            .map(is_locale_tag)
            .unwrap_or(false)
    }
}
