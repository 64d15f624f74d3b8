//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the shared, immutable application state from config
//! - Create the Axum Router: page routes wrapped in the stage pipeline
//! - Bind server to listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::SiteConfig;
use crate::http::pipeline::apply_stages;
use crate::locale::{LocaleError, SupportedLocales};
use crate::pages::PageTable;
use crate::routing::{router::page_routes, CultureRewriter, LocaleRedirector};

/// Application state injected into handlers and middleware.
#[derive(Debug, Clone)]
pub struct AppState {
    pub locales: Arc<SupportedLocales>,
    pub redirector: Arc<LocaleRedirector>,
    pub rewriter: Arc<CultureRewriter>,
    pub pages: Arc<PageTable>,
}

impl AppState {
    /// Build state from the `[localization]` settings.
    pub fn from_config(config: &SiteConfig) -> Result<Self, LocaleError> {
        let localization = &config.localization;
        let locales = Arc::new(SupportedLocales::from_config(localization)?);
        let home_route = localization.home_route.trim().to_ascii_lowercase();

        Ok(Self {
            redirector: Arc::new(
                LocaleRedirector::new(locales.clone())
                    .with_unknown_prefix_stripping(localization.strip_unknown_locale_prefix),
            ),
            pages: Arc::new(PageTable::new(&home_route)),
            rewriter: Arc::new(CultureRewriter::new(locales.clone(), home_route)),
            locales,
        })
    }
}

/// HTTP server for the localized site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Result<Self, LocaleError> {
        let state = AppState::from_config(&config)?;
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all pipeline stages.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let timeout = Duration::from_secs(config.timeouts.request_secs);
        apply_stages(page_routes(), &state, timeout).with_state(state)
    }

    /// The fully layered router, for driving the site without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            locales = ?self.config.localization.supported_locales,
            default_locale = %self.config.localization.default_locale,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
