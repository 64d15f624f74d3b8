//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_redirects_total` (counter): redirects by reason
//!   (`root`, `missing_locale`, `unknown_route`)
//! - `site_page_views_total` (counter): pages served by locale and page

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus exporter on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_redirect(reason: &'static str) {
    metrics::counter!("site_redirects_total", "reason" => reason).increment(1);
}

pub fn record_page_view(locale: &str, page: &'static str) {
    metrics::counter!(
        "site_page_views_total",
        "locale" => locale.to_string(),
        "page" => page
    )
    .increment(1);
}
