//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the server (fails fast on a bad locale allow-list)
//! - Start the metrics exporter when enabled
//! - Bind the listener last, so traffic arrives only when ready

use tokio::net::TcpListener;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Start the site and serve until `shutdown` fires.
pub async fn start(config: SiteConfig, shutdown: &Shutdown) -> Result<(), SiteError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let server = HttpServer::new(config.clone())?;

    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| SiteError::InvalidAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let missing = crate::missing_catalogs(&config.localization.supported_locales);
    if !missing.is_empty() {
        tracing::warn!(
            locales = ?missing,
            "No translations compiled in for some locales; falling back to English"
        );
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
