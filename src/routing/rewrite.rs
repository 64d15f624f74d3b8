//! Culture switching for existing URLs.
//!
//! Used by the language switcher: takes the path the user is on and the
//! locale they picked, and produces the equivalent path under that locale.

use std::sync::Arc;

use axum::http::Uri;

use crate::locale::SupportedLocales;
use crate::routing::matcher::{LocalePrefixMatcher, Matcher};
use crate::routing::path::{LocalizedPath, RequestPath};

/// Rewrites a path under a different locale.
///
/// Unsupported or empty targets fall back to the default locale. A path
/// left without a route after stripping the old locale gets the home route.
#[derive(Debug, Clone)]
pub struct CultureRewriter {
    locales: Arc<SupportedLocales>,
    prefix: LocalePrefixMatcher,
    home_route: String,
}

impl CultureRewriter {
    pub fn new(locales: Arc<SupportedLocales>, home_route: impl Into<String>) -> Self {
        Self {
            prefix: LocalePrefixMatcher::new(locales.clone()),
            locales,
            home_route: home_route.into(),
        }
    }

    pub fn localize(&self, path: &str, query: Option<&str>, target: &str) -> LocalizedPath {
        let locale = self.locales.resolve_or_default(target.trim());
        let parsed = RequestPath::parse(path, query);

        let rest = if self.prefix.matches(&parsed) {
            parsed.rest()
        } else {
            parsed.segments()
        };

        LocalizedPath::new(locale, rest, parsed.query(), &self.home_route)
    }

    /// Rewrite `path` (plus `query`) to `target`.
    pub fn rewrite(&self, path: &str, query: Option<&str>, target: &str) -> String {
        self.localize(path, query, target).to_string()
    }

    /// Rewrite a raw `path[?query]` string to `target`. Relative paths are accepted.
    pub fn rewrite_raw(&self, path_and_query: &str, target: &str) -> String {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path_and_query, None),
        };
        self.rewrite(path, query, target)
    }

    /// Rewrite a request URI to `target`.
    pub fn rewrite_uri(&self, uri: &Uri, target: &str) -> String {
        self.rewrite(uri.path(), uri.query(), target)
    }
}
