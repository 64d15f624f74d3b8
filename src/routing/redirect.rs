//! Locale gate: pass localized requests, redirect everything else.
//!
//! # Responsibilities
//! - Decide whether a request already carries a supported locale
//! - Build the redirect target for requests that do not
//!
//! # Design Decisions
//! - Pure decision; the HTTP response is built by the middleware
//! - No error conditions: anything unrecognized redirects
//! - The original path is kept verbatim under the default locale, so
//!   `/fr/about` becomes `/en/fr/about` unless prefix stripping is enabled

use std::sync::Arc;

use crate::locale::SupportedLocales;
use crate::routing::matcher::{LocalePrefixMatcher, LocaleTagMatcher, Matcher};
use crate::routing::path::RequestPath;

/// Outcome of running a path through the locale gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// First segment is a supported locale; serve the request as-is.
    Pass { locale: String },
    /// No supported locale; send the client to `location`.
    Redirect { location: String },
}

/// Redirects locale-less requests to the default locale.
#[derive(Debug, Clone)]
pub struct LocaleRedirector {
    locales: Arc<SupportedLocales>,
    prefix: LocalePrefixMatcher,
    unknown_tag: Option<LocaleTagMatcher>,
}

impl LocaleRedirector {
    pub fn new(locales: Arc<SupportedLocales>) -> Self {
        Self {
            prefix: LocalePrefixMatcher::new(locales.clone()),
            locales,
            unknown_tag: None,
        }
    }

    /// Replace unsupported locale-shaped prefixes instead of nesting them.
    pub fn with_unknown_prefix_stripping(mut self, enabled: bool) -> Self {
        self.unknown_tag = enabled.then(LocaleTagMatcher::new);
        self
    }

    /// Decide what to do with a request for `path` (and optional `query`).
    pub fn evaluate(&self, path: &str, query: Option<&str>) -> GateDecision {
        let parsed = RequestPath::parse(path, query);

        if let Some(locale) = self.prefix.locale(&parsed) {
            return GateDecision::Pass {
                locale: locale.to_string(),
            };
        }

        let default = self.locales.default_locale();
        let mut location = match &self.unknown_tag {
            Some(tag) if tag.matches(&parsed) => {
                format!("/{}/{}", default, parsed.rest().join("/"))
            }
            _ if path.starts_with('/') => format!("/{default}{path}"),
            _ => format!("/{default}/{path}"),
        };

        if let Some(query) = parsed.query() {
            location.push('?');
            location.push_str(query);
        }

        GateDecision::Redirect { location }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirector() -> LocaleRedirector {
        LocaleRedirector::new(Arc::new(SupportedLocales::default()))
    }

    fn redirect(location: &str) -> GateDecision {
        GateDecision::Redirect {
            location: location.to_string(),
        }
    }

    #[test]
    fn test_supported_prefix_passes() {
        let r = redirector();
        assert_eq!(
            r.evaluate("/de/contact", None),
            GateDecision::Pass { locale: "de".into() }
        );
        assert_eq!(
            r.evaluate("/EN/about", Some("x=1")),
            GateDecision::Pass { locale: "en".into() }
        );
        assert_eq!(
            r.evaluate("/tr", None),
            GateDecision::Pass { locale: "tr".into() }
        );
    }

    #[test]
    fn test_missing_prefix_redirects_to_default() {
        let r = redirector();
        assert_eq!(r.evaluate("/about", None), redirect("/en/about"));
        assert_eq!(r.evaluate("/Home/Index", None), redirect("/en/Home/Index"));
        assert_eq!(r.evaluate("/about", Some("x=1")), redirect("/en/about?x=1"));
    }

    #[test]
    fn test_root_and_empty_paths() {
        let r = redirector();
        assert_eq!(r.evaluate("/", None), redirect("/en/"));
        assert_eq!(r.evaluate("", None), redirect("/en/"));
    }

    #[test]
    fn test_unsupported_locale_is_nested_by_default() {
        assert_eq!(redirector().evaluate("/fr/about", None), redirect("/en/fr/about"));
    }

    #[test]
    fn test_unsupported_locale_is_replaced_when_stripping() {
        let r = redirector().with_unknown_prefix_stripping(true);
        assert_eq!(r.evaluate("/fr/about", None), redirect("/en/about"));
        assert_eq!(r.evaluate("/pt-BR/contact", Some("a=b")), redirect("/en/contact?a=b"));
        assert_eq!(r.evaluate("/fr", None), redirect("/en/"));
        // Not locale-shaped: kept as a route.
        assert_eq!(r.evaluate("/about", None), redirect("/en/about"));
    }

    #[test]
    fn test_any_default_is_prepended() {
        for default in ["en", "de", "tr"] {
            let locales = SupportedLocales::new(["en", "de", "tr"], default).unwrap();
            let r = LocaleRedirector::new(Arc::new(locales));
            for path in ["/", "/about", "/fr/about", "/x/y/z"] {
                assert_eq!(
                    r.evaluate(path, None),
                    GateDecision::Redirect {
                        location: format!("/{default}{path}")
                    }
                );
            }
        }
    }
}
