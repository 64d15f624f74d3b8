//! Request localization.
//!
//! Derives the request culture from the leading path segment and makes it
//! available to handlers as a request extension. Runs after the locale gate,
//! so the segment is always a supported code by the time it gets here.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;
use crate::routing::RequestPath;

/// The locale selected for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCulture(String);

impl RequestCulture {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    pub fn locale(&self) -> &str {
        &self.0
    }
}

pub async fn localization(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = RequestPath::parse(req.uri().path(), None);
    let locale = state
        .locales
        .resolve_or_default(path.first_segment().unwrap_or_default())
        .to_string();

    req.extensions_mut().insert(RequestCulture::new(locale.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&locale) {
        response
            .headers_mut()
            .insert(header::CONTENT_LANGUAGE, value);
    }
    response
}
