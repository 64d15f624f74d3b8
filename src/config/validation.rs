//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the locale allow-list is usable (non-empty, default is a member)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::locale::{LocaleError, SupportedLocales};
use crate::pages::Page;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("localization: {0}")]
    Locale(#[from] LocaleError),

    #[error("localization.home_route must be a single non-empty path segment, got '{0}'")]
    InvalidHomeRoute(String),

    #[error("localization.home_route '{0}' collides with the '{1}' page")]
    HomeRouteCollision(String, &'static str),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if let Err(e) = SupportedLocales::from_config(&config.localization) {
        errors.push(e.into());
    }

    let home = config.localization.home_route.trim();
    if home.is_empty() || home.contains('/') || home.contains('?') {
        errors.push(ValidationError::InvalidHomeRoute(
            config.localization.home_route.clone(),
        ));
    }
    if let Some(page) = Page::ALL
        .iter()
        .find(|p| **p != Page::Home && p.name().eq_ignore_ascii_case(home))
    {
        errors.push(ValidationError::HomeRouteCollision(
            config.localization.home_route.clone(),
            page.name(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&SiteConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.localization.default_locale = "fr".into();
        config.localization.home_route = "a/b".into();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::Locale(LocaleError::UnknownDefault(
            "fr".into()
        ))));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
    }

    #[test]
    fn test_home_route_must_not_shadow_a_page() {
        for slug in ["about", "Contact", " PRIVACY "] {
            let mut config = SiteConfig::default();
            config.localization.home_route = slug.into();
            let errors = validate_config(&config).unwrap_err();
            assert!(
                matches!(errors.as_slice(), [ValidationError::HomeRouteCollision(..)]),
                "{slug}: {errors:?}"
            );
        }

        let mut config = SiteConfig::default();
        config.localization.home_route = "start".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_locale_codes_must_be_path_segments() {
        let mut config = SiteConfig::default();
        config.localization.supported_locales = vec!["en/us".into(), "de".into()];
        config.localization.default_locale = "en/us".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::Locale(LocaleError::InvalidCode(
                "en/us".into()
            ))]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = SiteConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
