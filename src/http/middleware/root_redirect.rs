//! Root redirect.
//! Sends `/` straight to the default locale's home page in one hop.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::http::request::RequestIdExt;
use crate::http::response::found;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::RequestPath;

pub async fn root_redirect(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !RequestPath::parse(req.uri().path(), None).segments().is_empty() {
        return next.run(req).await;
    }

    let location = state.rewriter.rewrite(
        req.uri().path(),
        req.uri().query(),
        state.locales.default_locale(),
    );

    tracing::debug!(
        request_id = %req.request_id(),
        location = %location,
        "Redirecting root to default locale"
    );
    metrics::record_redirect("root");

    found(&location)
}
