//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use localized_site::{HttpServer, SiteConfig};
use tower::ServiceExt;

/// A fully layered router built from `config`.
pub fn app(config: SiteConfig) -> Router {
    HttpServer::new(config).unwrap().router()
}

/// A router with the default configuration (en, de, tr; default en).
#[allow(dead_code)]
pub fn default_app() -> Router {
    app(SiteConfig::default())
}

/// Send a GET for `uri` through `router` without a socket.
pub async fn get(router: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    send(router, Method::GET, uri).await
}

/// Send a `method` request for `uri` through `router` without a socket.
pub async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Location header of a response, panicking if absent.
#[allow(dead_code)]
pub fn location(headers: &HeaderMap) -> &str {
    headers
        .get("location")
        .expect("response has a Location header")
        .to_str()
        .unwrap()
}
