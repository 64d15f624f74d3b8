//! Site pages and their translated strings.
//!
//! # Responsibilities
//! - Enumerate the pages the site serves
//! - Map URL slugs to pages (direct table lookup)
//! - Look up page strings by key and locale in the compiled catalog
//!
//! # Design Decisions
//! - Translation storage belongs to `rust-i18n` (`locales/*.toml`); pages
//!   only supply the key and the locale
//! - Slug matching is case-insensitive; emitted slugs are lowercase
//! - The home page slug follows the configured home route

pub mod handlers;
pub mod templates;

use rust_i18n::t;

/// A page the site can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
    Privacy,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Contact, Page::Privacy];

    /// Stable name for logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Privacy => "privacy",
        }
    }

    /// Title and body text in `locale`.
    pub fn content(self, locale: &str) -> PageContent {
        let (title, message) = match self {
            Page::Home => (
                t!("Welcome", locale = locale),
                t!("HomeDescription", locale = locale),
            ),
            Page::About => (
                t!("About", locale = locale),
                t!("AboutDescription", locale = locale),
            ),
            Page::Contact => (
                t!("Contact", locale = locale),
                t!("ContactDescription", locale = locale),
            ),
            Page::Privacy => (
                t!("Privacy", locale = locale),
                t!("PrivacyDescription", locale = locale),
            ),
        };

        PageContent {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    /// Navigation label in `locale`.
    pub fn nav_label(self, locale: &str) -> String {
        match self {
            Page::Home => t!("Home", locale = locale),
            Page::About => t!("About", locale = locale),
            Page::Contact => t!("Contact", locale = locale),
            Page::Privacy => t!("Privacy", locale = locale),
        }
        .to_string()
    }
}

/// Translated strings for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub message: String,
}

/// Slug → page lookup table.
#[derive(Debug, Clone)]
pub struct PageTable {
    entries: Vec<(String, Page)>,
}

impl PageTable {
    /// Build the table; `home_route` becomes the home page slug.
    pub fn new(home_route: &str) -> Self {
        let entries = Page::ALL
            .iter()
            .map(|&page| {
                let slug = match page {
                    Page::Home => home_route.trim().to_ascii_lowercase(),
                    other => other.name().to_string(),
                };
                (slug, page)
            })
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, slug: &str) -> Option<Page> {
        self.entries
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(slug))
            .map(|(_, page)| *page)
    }

    pub fn slug(&self, page: Page) -> &str {
        self.entries
            .iter()
            .find(|(_, p)| *p == page)
            .map(|(s, _)| s.as_str())
            .unwrap_or_else(|| page.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Page)> {
        self.entries.iter().map(|(s, p)| (s.as_str(), *p))
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new("home")
    }
}

/// Site-wide strings in `locale`.
pub fn site_name(locale: &str) -> String {
    t!("SiteName", locale = locale).to_string()
}

/// Heading of the language switcher in `locale`.
pub fn languages_label(locale: &str) -> String {
    t!("Languages", locale = locale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = PageTable::default();
        assert_eq!(table.lookup("about"), Some(Page::About));
        assert_eq!(table.lookup("Contact"), Some(Page::Contact));
        assert_eq!(table.lookup("HOME"), Some(Page::Home));
        assert_eq!(table.lookup("blog"), None);
    }

    #[test]
    fn test_custom_home_route() {
        let table = PageTable::new("Start");
        assert_eq!(table.lookup("start"), Some(Page::Home));
        assert_eq!(table.lookup("home"), None);
        assert_eq!(table.slug(Page::Home), "start");
        assert_eq!(table.slug(Page::Privacy), "privacy");
    }

    #[test]
    fn test_content_is_translated() {
        assert_eq!(Page::Home.content("en").title, "Welcome");
        assert_eq!(Page::Home.content("de").title, "Willkommen");
        assert_eq!(Page::Contact.content("tr").title, "İletişim");
        assert!(Page::About.content("de").message.starts_with("Wir bauen"));
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(Page::Privacy.nav_label("fr"), "Privacy");
        assert_eq!(site_name("fr"), "Localized Site");
    }
}
