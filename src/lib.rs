//! Localized web front-end.
//!
//! Serves a handful of pages under a URL culture segment (`/en/home`,
//! `/de/about`) and redirects requests without a supported locale prefix to
//! the default locale.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod observability;
pub mod pages;
pub mod routing;

rust_i18n::i18n!("locales", fallback = "en");

pub use config::SiteConfig;
pub use error::SiteError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use locale::SupportedLocales;
pub use routing::{CultureRewriter, LocaleRedirector};

/// Configured locales that have no compiled-in translation catalog.
pub fn missing_catalogs<S: AsRef<str>>(locales: &[S]) -> Vec<String> {
    let available = rust_i18n::available_locales!();
    locales
        .iter()
        .map(AsRef::as_ref)
        .filter(|code| !available.iter().any(|a| a.eq_ignore_ascii_case(code)))
        .map(str::to_string)
        .collect()
}
