//! Request path values.
//!
//! `RequestPath` is what arrives on the wire; `LocalizedPath` is what the
//! site serves: the same path with a supported locale in front.

use std::fmt;

/// Non-empty path segments plus an optional query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    segments: Vec<String>,
    query: Option<String>,
}

impl RequestPath {
    /// Split `path` into its non-empty segments.
    ///
    /// Repeated and trailing slashes are ignored. An empty query is
    /// treated as absent.
    pub fn parse(path: &str, query: Option<&str>) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Segments after the first one.
    pub fn rest(&self) -> &[String] {
        self.segments.get(1..).unwrap_or(&[])
    }
}

/// A path whose leading segment is a supported locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedPath {
    locale: String,
    route: String,
    query: Option<String>,
}

impl LocalizedPath {
    /// Build a localized path, substituting `home_route` when `rest` is empty.
    ///
    /// The caller is responsible for `locale` being a supported code.
    pub fn new(locale: &str, rest: &[String], query: Option<&str>, home_route: &str) -> Self {
        let route = if rest.is_empty() {
            home_route.to_string()
        } else {
            rest.join("/")
        };
        Self {
            locale: locale.to_string(),
            route,
            query: query.map(str::to_string),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn route(&self) -> &str {
        &self.route
    }
}

impl fmt::Display for LocalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.locale, self.route)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_empty_segments() {
        let path = RequestPath::parse("//en/about/", None);
        assert_eq!(path.segments(), &["en".to_string(), "about".to_string()]);
        assert_eq!(path.first_segment(), Some("en"));
        assert_eq!(path.rest(), &["about".to_string()]);
    }

    #[test]
    fn test_parse_root() {
        let path = RequestPath::parse("/", Some(""));
        assert!(path.segments().is_empty());
        assert_eq!(path.first_segment(), None);
        assert!(path.rest().is_empty());
        assert_eq!(path.query(), None);
    }

    #[test]
    fn test_localized_path_display() {
        let rest = vec!["about".to_string(), "team".to_string()];
        let path = LocalizedPath::new("de", &rest, Some("x=1"), "home");
        assert_eq!(path.to_string(), "/de/about/team?x=1");
        assert_eq!(path.route(), "about/team");

        let home = LocalizedPath::new("tr", &[], None, "home");
        assert_eq!(home.to_string(), "/tr/home");
        assert_eq!(home.locale(), "tr");
    }
}
