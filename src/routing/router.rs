//! Route dispatch.
//!
//! # Routes
//! ```text
//! /{locale}/{page}[/]  → page handler (page looked up in PageTable)
//! /{locale}[/]         → 302 /{locale}/{home}
//! anything else        → 302 /{locale}/{home}
//! ```
//!
//! # Design Decisions
//! - The locale segment is already validated by the gate; dispatch only
//!   resolves the page
//! - Unknown pages redirect home instead of surfacing a 404
//! - Routes accept any method; a POST to a page renders the page
//! - A trailing slash is ignored, as everywhere else in path handling

use axum::{routing::any, Router};

use crate::http::server::AppState;
use crate::pages::handlers;

/// Page routes, before pipeline stages and state are attached.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/{locale}", any(handlers::locale_home))
        .route("/{locale}/", any(handlers::locale_home))
        .route("/{locale}/{page}", any(handlers::page))
        .route("/{locale}/{page}/", any(handlers::page))
        .fallback(handlers::fallback)
}
