//! Locale gate middleware.
//! Requests without a supported leading locale are redirected; the rest pass.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::http::request::RequestIdExt;
use crate::http::response::found;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::GateDecision;

pub async fn locale_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let decision = state.redirector.evaluate(req.uri().path(), req.uri().query());

    match decision {
        GateDecision::Pass { .. } => next.run(req).await,
        GateDecision::Redirect { location } => {
            tracing::debug!(
                request_id = %req.request_id(),
                path = %req.uri().path(),
                location = %location,
                "No supported locale in path, redirecting"
            );
            metrics::record_redirect("missing_locale");
            found(&location)
        }
    }
}
