//! Request-processing pipeline.
//!
//! # Stage Order
//! ```text
//! RequestId     → assign x-request-id, echo it on the response
//! Trace         → request span (carries the request id)
//! Timeout       → bound total handling time
//! RootRedirect  → "/" straight to /{default}/{home}
//! LocaleGate    → no supported locale prefix → 302 /{default}{path}
//! Localization  → RequestCulture extension + Content-Language
//!     → route dispatch
//! ```
//!
//! # Design Decisions
//! - The order is data (`STAGES`), not a side effect of registration calls
//! - Localization runs after the gate so it only ever sees supported codes
//! - `STAGES[0]` is the outermost layer

use std::time::Duration;

use axum::{body::Body, http::Request, middleware, Router};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::http::middleware::{locale_gate, localization, root_redirect};
use crate::http::request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
use crate::http::server::AppState;

/// One request-processing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RequestId,
    Trace,
    Timeout,
    RootRedirect,
    LocaleGate,
    Localization,
}

/// Pipeline stages, outermost first.
pub const STAGES: [Stage; 6] = [
    Stage::RequestId,
    Stage::Trace,
    Stage::Timeout,
    Stage::RootRedirect,
    Stage::LocaleGate,
    Stage::Localization,
];

impl Stage {
    /// Wrap `router` in this stage.
    #[allow(deprecated)]
    fn apply(self, router: Router<AppState>, state: &AppState, timeout: Duration) -> Router<AppState> {
        match self {
            Stage::RequestId => router
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId)),
            Stage::Trace => router.layer(TraceLayer::new_for_http().make_span_with(
                |req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        path = %req.uri().path(),
                        request_id = %req.request_id(),
                    )
                },
            )),
            Stage::Timeout => router.layer(TimeoutLayer::new(timeout)),
            Stage::RootRedirect => router.layer(middleware::from_fn_with_state(
                state.clone(),
                root_redirect,
            )),
            Stage::LocaleGate => {
                router.layer(middleware::from_fn_with_state(state.clone(), locale_gate))
            }
            Stage::Localization => {
                router.layer(middleware::from_fn_with_state(state.clone(), localization))
            }
        }
    }
}

/// Wrap `router` in every stage of `STAGES`.
pub fn apply_stages(
    router: Router<AppState>,
    state: &AppState,
    timeout: Duration,
) -> Router<AppState> {
    // Later layers wrap earlier ones, so apply innermost first.
    STAGES
        .iter()
        .rev()
        .fold(router, |router, stage| stage.apply(router, state, timeout))
}
