//! Page handlers.
//!
//! All handlers run behind the locale gate and the localization stage, so
//! the `RequestCulture` extension is always present and supported.

use axum::{
    extract::{Path, State},
    http::Uri,
    response::Response,
    Extension,
};

use crate::http::middleware::RequestCulture;
use crate::http::response::{found, page as html_page};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::pages::templates::{render_page, Link, PageView};
use crate::pages::{languages_label, site_name, Page};

/// `/{locale}/{page}`
pub async fn page(
    State(state): State<AppState>,
    Extension(culture): Extension<RequestCulture>,
    Path((_, slug)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    let Some(page) = state.pages.lookup(&slug) else {
        tracing::debug!(slug = %slug, "Unknown page, redirecting home");
        return redirect_home(&state, &culture);
    };

    let locale = culture.locale();
    tracing::debug!(locale = %locale, page = page.name(), "Serving page");
    metrics::record_page_view(locale, page.name());

    html_page(render_page(&build_view(&state, locale, page, &uri)))
}

/// `/{locale}` and `/{locale}/`
pub async fn locale_home(
    State(state): State<AppState>,
    Extension(culture): Extension<RequestCulture>,
) -> Response {
    redirect_home(&state, &culture)
}

/// Any other path under a supported locale.
pub async fn fallback(
    State(state): State<AppState>,
    Extension(culture): Extension<RequestCulture>,
    uri: Uri,
) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched, redirecting home");
    redirect_home(&state, &culture)
}

fn redirect_home(state: &AppState, culture: &RequestCulture) -> Response {
    metrics::record_redirect("unknown_route");
    found(&format!(
        "/{}/{}",
        culture.locale(),
        state.pages.slug(Page::Home)
    ))
}

fn build_view(state: &AppState, locale: &str, current: Page, uri: &Uri) -> PageView {
    let nav = state
        .pages
        .iter()
        .map(|(slug, page)| Link {
            label: page.nav_label(locale),
            href: format!("/{locale}/{slug}"),
            current: page == current,
        })
        .collect();

    let languages = state
        .locales
        .iter()
        .map(|code| Link {
            label: code.to_uppercase(),
            href: state.rewriter.rewrite_uri(uri, code),
            current: code == locale,
        })
        .collect();

    PageView {
        locale: locale.to_string(),
        site_name: site_name(locale),
        content: current.content(locale),
        nav,
        languages_label: languages_label(locale),
        languages,
    }
}
