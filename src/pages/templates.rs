//! HTML shell for site pages.

use crate::pages::PageContent;

/// A navigation or language-switcher link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
    pub current: bool,
}

/// Everything a page render needs.
#[derive(Debug, Clone)]
pub struct PageView {
    pub locale: String,
    pub site_name: String,
    pub content: PageContent,
    pub nav: Vec<Link>,
    pub languages_label: String,
    pub languages: Vec<Link>,
}

/// Render a page as a complete HTML document.
pub fn render_page(view: &PageView) -> String {
    let nav = render_links(&view.nav);
    let languages = render_links(&view.languages);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - {site}</title>
</head>
<body>
<header>
    <strong>{site}</strong>
    <nav>{nav}</nav>
</header>
<main>
    <h1>{title}</h1>
    <p>{message}</p>
</main>
<footer>
    <span>{languages_label}:</span>
    <nav class="languages">{languages}</nav>
</footer>
</body>
</html>"#,
        lang = html_escape(&view.locale),
        site = html_escape(&view.site_name),
        title = html_escape(&view.content.title),
        message = html_escape(&view.content.message),
        languages_label = html_escape(&view.languages_label),
    )
}

fn render_links(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| {
            let current = if link.current {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                html_escape(&link.href),
                current,
                html_escape(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
