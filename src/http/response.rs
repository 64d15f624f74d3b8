//! Response construction.
//!
//! # Responsibilities
//! - Build the 302 redirects issued by the locale gate and dispatch
//! - Wrap rendered pages as HTML responses
//!
//! # Design Decisions
//! - Redirects are always `302 Found`, never 301, so clients do not cache them
//! - A target that cannot be a header value is answered with 400

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// `302 Found` pointing at `location`.
pub fn found(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => {
            tracing::warn!(location = %location, "Redirect target is not a valid header value");
            (StatusCode::BAD_REQUEST, "Invalid request path").into_response()
        }
    }
}

/// HTML page response.
pub fn page(body: String) -> Response {
    Html(body).into_response()
}
