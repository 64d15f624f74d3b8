//! Top-level error type for startup and the CLI.

use thiserror::Error;

use crate::config::ConfigError;
use crate::locale::LocaleError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("'{0}' is not a valid socket address")]
    InvalidAddress(String),

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
